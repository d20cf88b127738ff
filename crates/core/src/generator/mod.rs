//! Procedural question generation.
//!
//! Every topic maps to a [`Formula`] that draws random parameters, formats a
//! prompt and computes the canonical answer directly from the same parameters.
//! Generation never fails: unknown topic ids yield a placeholder question.

mod algebra;
mod format;
mod geometry;
mod number;

use crate::dice::Dice;
use crate::model::{Question, QuestionId, TopicId};

/// Prompt, answer and hint before a question id is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Draft {
    pub(crate) prompt: String,
    pub(crate) answer: String,
    pub(crate) steps: String,
}

impl Draft {
    pub(crate) fn new(
        prompt: impl Into<String>,
        answer: impl Into<String>,
        steps: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
            steps: steps.into(),
        }
    }

    fn placeholder() -> Self {
        Self::new("Topic logic generated.", "0", "N/A")
    }

    fn into_question(self, id: QuestionId) -> Question {
        Question::new(id, self.prompt, self.answer, self.steps)
    }
}

/// The question recipe behind each catalog topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    ExpandBrackets,
    FactoriseLinear,
    SolveQuadratics,
    CompletingSquare,
    EquatingCoefficients,
    Pythagoras,
    Trigonometry,
    ExactTrig,
    Pythagoras3d,
    PerpendicularGradients,
    Percentages,
    NegativeIndices,
    Profit,
    SpeedDistanceTime,
    MeanAverage,
}

impl Formula {
    pub const ALL: [Formula; 15] = [
        Formula::ExpandBrackets,
        Formula::FactoriseLinear,
        Formula::SolveQuadratics,
        Formula::CompletingSquare,
        Formula::EquatingCoefficients,
        Formula::Pythagoras,
        Formula::Trigonometry,
        Formula::ExactTrig,
        Formula::Pythagoras3d,
        Formula::PerpendicularGradients,
        Formula::Percentages,
        Formula::NegativeIndices,
        Formula::Profit,
        Formula::SpeedDistanceTime,
        Formula::MeanAverage,
    ];

    #[must_use]
    pub fn topic_id(self) -> &'static str {
        match self {
            Formula::ExpandBrackets => "expand_brackets",
            Formula::FactoriseLinear => "factorise_linear",
            Formula::SolveQuadratics => "solve_quadratics",
            Formula::CompletingSquare => "completing_square",
            Formula::EquatingCoefficients => "equating_coefficients",
            Formula::Pythagoras => "pythagoras",
            Formula::Trigonometry => "trigonometry",
            Formula::ExactTrig => "exact_trig",
            Formula::Pythagoras3d => "3d_pythagoras",
            Formula::PerpendicularGradients => "perp_gradients",
            Formula::Percentages => "percentages",
            Formula::NegativeIndices => "negative_indices",
            Formula::Profit => "profit",
            Formula::SpeedDistanceTime => "speed_dist_time",
            Formula::MeanAverage => "averages_mean",
        }
    }

    #[must_use]
    pub fn for_topic(id: &TopicId) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|formula| formula.topic_id() == id.as_str())
    }

    fn draw(self, dice: &mut Dice) -> Draft {
        match self {
            Formula::ExpandBrackets => algebra::expand_brackets(dice),
            Formula::FactoriseLinear => algebra::factorise_linear(dice),
            Formula::SolveQuadratics => algebra::solve_quadratics(dice),
            Formula::CompletingSquare => algebra::completing_square(dice),
            Formula::EquatingCoefficients => algebra::equating_coefficients(dice),
            Formula::Pythagoras => geometry::pythagoras(dice),
            Formula::Trigonometry => geometry::trigonometry(dice),
            Formula::ExactTrig => geometry::exact_trig(dice),
            Formula::Pythagoras3d => geometry::pythagoras_3d(dice),
            Formula::PerpendicularGradients => geometry::perpendicular_gradients(dice),
            Formula::Percentages => number::percentages(dice),
            Formula::NegativeIndices => number::negative_indices(dice),
            Formula::Profit => number::profit(dice),
            Formula::SpeedDistanceTime => number::speed_distance_time(dice),
            Formula::MeanAverage => number::mean_average(dice),
        }
    }
}

/// Generate question `id` for `topic`.
#[must_use]
pub fn generate(topic: &TopicId, id: QuestionId, dice: &mut Dice) -> Question {
    let draft = match Formula::for_topic(topic) {
        Some(formula) => formula.draw(dice),
        None => Draft::placeholder(),
    };
    draft.into_question(id)
}

/// Generate question `id`, re-rolling up to `attempts` times while its answer
/// repeats the answer of `previous`.
#[must_use]
pub fn generate_distinct(
    topic: &TopicId,
    id: QuestionId,
    previous: Option<&Question>,
    dice: &mut Dice,
    attempts: u32,
) -> Question {
    let mut question = generate(topic, id, dice);
    let Some(previous) = previous else {
        return question;
    };

    let mut tries = 0;
    while tries < attempts && question.answer() == previous.answer() {
        question = generate(topic, id, dice);
        tries += 1;
    }
    question
}
