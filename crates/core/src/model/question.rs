use serde::Serialize;

use crate::answer::check_answer;
use crate::model::ids::QuestionId;

/// A generated question with its canonical answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    answer: String,
    steps: String,
}

impl Question {
    #[must_use]
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        answer: impl Into<String>,
        steps: impl Into<String>,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            answer: answer.into(),
            steps: steps.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Worked hint shown after a wrong answer.
    #[must_use]
    pub fn steps(&self) -> &str {
        &self.steps
    }

    #[must_use]
    pub fn accepts(&self, submitted: &str) -> bool {
        check_answer(submitted, &self.answer)
    }
}
