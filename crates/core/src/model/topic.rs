use serde::Serialize;
use std::fmt;

use crate::model::ids::TopicId;

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Algebra,
    Geometry,
    Number,
}

impl Category {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Algebra => "Algebra",
            Category::Geometry => "Geometry",
            Category::Number => "Number",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── TOPIC ─────────────────────────────────────────────────────────────────────
//

/// A practice topic. `position` is its index in the unlock order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    id: TopicId,
    title: &'static str,
    category: Category,
    position: usize,
}

impl Topic {
    const fn new(id: &'static str, title: &'static str, category: Category, position: usize) -> Self {
        Self {
            id: TopicId::from_static(id),
            title,
            category,
            position,
        }
    }

    #[must_use]
    pub fn id(&self) -> &TopicId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}

static CATALOG: [Topic; 15] = [
    Topic::new("expand_brackets", "Expanding Brackets", Category::Algebra, 0),
    Topic::new("factorise_linear", "Factorise Linear", Category::Algebra, 1),
    Topic::new("solve_quadratics", "Solve Quadratics", Category::Algebra, 2),
    Topic::new("completing_square", "Completing Square", Category::Algebra, 3),
    Topic::new("equating_coefficients", "Equating Coeffs", Category::Algebra, 4),
    Topic::new("pythagoras", "Pythagoras' Theorem", Category::Geometry, 5),
    Topic::new("trigonometry", "Basic Trigonometry", Category::Geometry, 6),
    Topic::new("exact_trig", "Exact Trig Values", Category::Geometry, 7),
    Topic::new("3d_pythagoras", "3D Pythagoras", Category::Geometry, 8),
    Topic::new("perp_gradients", "Perpendicular Grads", Category::Geometry, 9),
    Topic::new("percentages", "Percentages", Category::Number, 10),
    Topic::new("negative_indices", "Negative Indices", Category::Number, 11),
    Topic::new("profit", "Profit Calculations", Category::Number, 12),
    Topic::new("speed_dist_time", "Speed Dist Time", Category::Number, 13),
    Topic::new("averages_mean", "Mean Average", Category::Number, 14),
];

/// All topics in unlock order.
#[must_use]
pub fn catalog() -> &'static [Topic] {
    &CATALOG
}

#[must_use]
pub fn find_topic(id: &TopicId) -> Option<&'static Topic> {
    CATALOG.iter().find(|topic| topic.id == *id)
}

//
// ─── EXPLAINER ─────────────────────────────────────────────────────────────────
//

/// Short primer shown before a round starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Explainer {
    pub title: &'static str,
    pub content: &'static str,
}

const GENERIC_EXPLAINER: Explainer = Explainer {
    title: "Instructions",
    content: "Solve the questions given.\nBe precise.",
};

/// Explainer for a topic, or the generic instructions when none is written.
#[must_use]
pub fn explainer_for(id: &TopicId) -> Explainer {
    match id.as_str() {
        "expand_brackets" => Explainer {
            title: "The Claw",
            content: "Multiply the outside term by EVERYTHING inside.\n2(x+3) -> 2x + 6",
        },
        "factorise_linear" => Explainer {
            title: "Reverse Expand",
            content: "Find the biggest number that divides both terms.\nDivide terms by it, put it outside.",
        },
        "solve_quadratics" => Explainer {
            title: "Find the Roots",
            content: "Make it equal zero.\nFactorise into (brackets).\nOne bracket must be zero.",
        },
        "trigonometry" => Explainer {
            title: "SOH CAH TOA",
            content: "Label sides: Hypotenuse, Adjacent, Opposite.\nPick the right formula.",
        },
        _ => GENERIC_EXPLAINER,
    }
}
