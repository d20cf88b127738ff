use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::model::TopicId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("round summary has no questions")]
    Empty,
}

/// Tally of a finished practice round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    topic: TopicId,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    questions: u32,
    xp_earned: u32,
    wrong_attempts: u32,
    bookwork_passed: u32,
    bookwork_failed: u32,
}

/// Counters collected while a round is played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundTally {
    pub questions: u32,
    pub xp_earned: u32,
    pub wrong_attempts: u32,
    pub bookwork_passed: u32,
    pub bookwork_failed: u32,
}

impl RoundSummary {
    /// # Errors
    ///
    /// Returns `RoundSummaryError::InvalidTimeRange` if `completed_at` is before `started_at`.
    /// Returns `RoundSummaryError::Empty` if no question was answered.
    pub fn new(
        topic: TopicId,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        tally: RoundTally,
    ) -> Result<Self, RoundSummaryError> {
        if completed_at < started_at {
            return Err(RoundSummaryError::InvalidTimeRange);
        }
        if tally.questions == 0 {
            return Err(RoundSummaryError::Empty);
        }

        Ok(Self {
            topic,
            started_at,
            completed_at,
            questions: tally.questions,
            xp_earned: tally.xp_earned,
            wrong_attempts: tally.wrong_attempts,
            bookwork_passed: tally.bookwork_passed,
            bookwork_failed: tally.bookwork_failed,
        })
    }

    #[must_use]
    pub fn topic(&self) -> &TopicId {
        &self.topic
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.completed_at - self.started_at
    }

    #[must_use]
    pub fn questions(&self) -> u32 {
        self.questions
    }

    #[must_use]
    pub fn xp_earned(&self) -> u32 {
        self.xp_earned
    }

    #[must_use]
    pub fn wrong_attempts(&self) -> u32 {
        self.wrong_attempts
    }

    #[must_use]
    pub fn bookwork_passed(&self) -> u32 {
        self.bookwork_passed
    }

    #[must_use]
    pub fn bookwork_failed(&self) -> u32 {
        self.bookwork_failed
    }

    /// True when every question was answered first time and no bookwork check failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.wrong_attempts == 0 && self.bookwork_failed == 0
    }
}
