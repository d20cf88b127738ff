use helix_core::model::QuestionId;

/// Bookwork-check sub-state of a practice round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BookworkCheck {
    #[default]
    Inactive,
    /// Waiting for the learner to re-type their answer to `target`.
    AwaitingInput { target: QuestionId },
    /// The re-typed answer did not match; shown until acknowledged.
    Failed {
        target: QuestionId,
        expected: String,
        submitted: String,
    },
}

impl BookworkCheck {
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, BookworkCheck::Inactive)
    }

    #[must_use]
    pub fn target(&self) -> Option<QuestionId> {
        match self {
            BookworkCheck::Inactive => None,
            BookworkCheck::AwaitingInput { target } | BookworkCheck::Failed { target, .. } => {
                Some(*target)
            }
        }
    }
}
