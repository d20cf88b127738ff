use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::debug;

use helix_core::model::{Question, QuestionId, RoundSettings, RoundSummary, RoundTally, TopicId};
use helix_core::{Dice, generate, generate_distinct, matches_verbatim};

use super::bookwork::BookworkCheck;
use super::progress::RoundProgress;
use crate::error::SessionError;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Feedback state of the current question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    Idle,
    Correct,
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct { xp_awarded: u32 },
    /// Wrong answer; `steps` is the worked hint for the question.
    Wrong { steps: String },
}

/// What happened after a correct answer was confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStep {
    NextQuestion(QuestionId),
    BookworkCheck { target: QuestionId },
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookworkOutcome {
    Passed(RoundStep),
    Failed {
        target: QuestionId,
        expected: String,
        submitted: String,
    },
}

//
// ─── ROUND ─────────────────────────────────────────────────────────────────────
//

/// One round of questions for a single topic.
///
/// Answers are stored verbatim per question id so bookwork checks can compare
/// against exactly what the learner typed.
#[derive(Debug, Clone)]
pub struct PracticeRound {
    topic: TopicId,
    settings: RoundSettings,
    position: u32,
    question: Question,
    feedback: Feedback,
    history: BTreeMap<QuestionId, String>,
    bookwork: BookworkCheck,
    started_at: DateTime<Utc>,
    completed: bool,
    tally: RoundTally,
}

impl PracticeRound {
    #[must_use]
    pub fn start(
        topic: TopicId,
        settings: RoundSettings,
        dice: &mut Dice,
        started_at: DateTime<Utc>,
    ) -> Self {
        let question = generate(&topic, QuestionId::FIRST, dice);
        Self {
            topic,
            settings,
            position: 1,
            question,
            feedback: Feedback::Idle,
            history: BTreeMap::new(),
            bookwork: BookworkCheck::Inactive,
            started_at,
            completed: false,
            tally: RoundTally::default(),
        }
    }

    #[must_use]
    pub fn topic(&self) -> &TopicId {
        &self.topic
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    #[must_use]
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    #[must_use]
    pub fn bookwork(&self) -> &BookworkCheck {
        &self.bookwork
    }

    /// Round counter, starting at 1.
    #[must_use]
    pub fn position(&self) -> u32 {
        self.position
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn tally(&self) -> RoundTally {
        self.tally
    }

    #[must_use]
    pub fn history(&self) -> &BTreeMap<QuestionId, String> {
        &self.history
    }

    #[must_use]
    pub fn progress(&self) -> RoundProgress {
        RoundProgress {
            current: self.position,
            total: self.settings.questions_per_round(),
            is_complete: self.completed,
        }
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.completed {
            return Err(SessionError::Completed);
        }
        Ok(())
    }

    /// Check `raw` against the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyAnswered` if the question was already answered correctly,
    /// `SessionError::BookworkOpen` while a bookwork check is shown, and
    /// `SessionError::Completed` once the round is over.
    pub fn submit_answer(&mut self, raw: &str) -> Result<AnswerOutcome, SessionError> {
        self.ensure_open()?;
        if self.bookwork.is_active() {
            return Err(SessionError::BookworkOpen);
        }
        if self.feedback == Feedback::Correct {
            return Err(SessionError::AlreadyAnswered);
        }

        let id = self.question.id();
        if self.question.accepts(raw) {
            let xp = self.settings.xp_per_correct();
            self.feedback = Feedback::Correct;
            self.tally.xp_earned = self.tally.xp_earned.saturating_add(xp);
            self.history.insert(id, raw.to_string());
            debug!(question = %id, xp, "correct answer");
            Ok(AnswerOutcome::Correct { xp_awarded: xp })
        } else {
            self.feedback = Feedback::Wrong;
            self.tally.wrong_attempts = self.tally.wrong_attempts.saturating_add(1);
            debug!(question = %id, "wrong answer");
            Ok(AnswerOutcome::Wrong {
                steps: self.question.steps().to_string(),
            })
        }
    }

    /// Clear wrong-answer feedback so the learner can try again.
    pub fn retry(&mut self) {
        if self.feedback == Feedback::Wrong {
            self.feedback = Feedback::Idle;
        }
    }

    /// Move on after a correct answer: either open a bookwork check on an
    /// earlier question or advance the round.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAnswered` unless the current question was answered correctly.
    pub fn continue_after_correct(&mut self, dice: &mut Dice) -> Result<RoundStep, SessionError> {
        self.ensure_open()?;
        if self.bookwork.is_active() {
            return Err(SessionError::BookworkOpen);
        }
        if self.feedback != Feedback::Correct {
            return Err(SessionError::NotAnswered);
        }

        let current = self.question.id();
        let earlier: Vec<QuestionId> = self
            .history
            .keys()
            .copied()
            .filter(|id| *id != current)
            .collect();
        if !earlier.is_empty() && dice.chance(self.settings.bookwork_chance()) {
            if let Some(target) = dice.pick(&earlier).copied() {
                debug!(target = %target, "bookwork check opened");
                self.bookwork = BookworkCheck::AwaitingInput { target };
                return Ok(RoundStep::BookworkCheck { target });
            }
        }

        Ok(self.advance(dice))
    }

    fn advance(&mut self, dice: &mut Dice) -> RoundStep {
        self.tally.questions = self.tally.questions.saturating_add(1);
        if self.position >= self.settings.questions_per_round() {
            self.completed = true;
            return RoundStep::Completed;
        }

        self.position += 1;
        let next_id = self.question.id().next();
        self.question = generate_distinct(
            &self.topic,
            next_id,
            Some(&self.question),
            dice,
            self.settings.duplicate_attempts(),
        );
        self.feedback = Feedback::Idle;
        RoundStep::NextQuestion(next_id)
    }

    /// Compare a re-typed answer with what was recorded for the bookwork target.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoBookwork` unless a check is waiting for input.
    pub fn submit_bookwork(
        &mut self,
        raw: &str,
        dice: &mut Dice,
    ) -> Result<BookworkOutcome, SessionError> {
        self.ensure_open()?;
        let BookworkCheck::AwaitingInput { target } = self.bookwork else {
            return Err(SessionError::NoBookwork);
        };

        let expected = self.history.get(&target).cloned().unwrap_or_default();
        if matches_verbatim(raw, &expected) {
            debug!(target = %target, "bookwork check passed");
            self.bookwork = BookworkCheck::Inactive;
            self.tally.bookwork_passed = self.tally.bookwork_passed.saturating_add(1);
            return Ok(BookworkOutcome::Passed(self.advance(dice)));
        }

        debug!(target = %target, "bookwork check failed");
        self.tally.bookwork_failed = self.tally.bookwork_failed.saturating_add(1);
        self.bookwork = BookworkCheck::Failed {
            target,
            expected: expected.clone(),
            submitted: raw.to_string(),
        };
        Ok(BookworkOutcome::Failed {
            target,
            expected,
            submitted: raw.to_string(),
        })
    }

    /// Close a failed bookwork check; the current question must be answered again.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::BookworkNotFailed` if no failed check is shown.
    pub fn acknowledge_bookwork_failure(&mut self) -> Result<(), SessionError> {
        if !matches!(self.bookwork, BookworkCheck::Failed { .. }) {
            return Err(SessionError::BookworkNotFailed);
        }
        self.bookwork = BookworkCheck::Inactive;
        self.feedback = Feedback::Idle;
        Ok(())
    }

    /// Summary stamped at `completed_at`, clamped to the start time since the
    /// system clock may step backwards mid-round.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Summary` if no question was answered.
    pub fn summary(&self, completed_at: DateTime<Utc>) -> Result<RoundSummary, SessionError> {
        Ok(RoundSummary::new(
            self.topic.clone(),
            self.started_at,
            completed_at.max(self.started_at),
            self.tally,
        )?)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
