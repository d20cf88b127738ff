//! Shared error types for the services crate.

use thiserror::Error;

use helix_core::model::{RoundSummaryError, TopicId};

use crate::sessions::Screen;

/// Errors emitted by session services.
///
/// Wrong answers and failed bookwork checks are outcomes, not errors; these
/// variants flag actions that do not apply to the current state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("unknown topic: {0}")]
    UnknownTopic(TopicId),
    #[error("topic {0} is locked")]
    Locked(TopicId),
    #[error("no topic selected")]
    NoActiveTopic,
    #[error("action not available on the {0} screen")]
    WrongScreen(Screen),
    #[error("current question already answered")]
    AlreadyAnswered,
    #[error("current question has not been answered correctly")]
    NotAnswered,
    #[error("a bookwork check is open")]
    BookworkOpen,
    #[error("no bookwork check is waiting for input")]
    NoBookwork,
    #[error("bookwork check has not failed")]
    BookworkNotFailed,
    #[error("round already completed")]
    Completed,
    #[error(transparent)]
    Summary(#[from] RoundSummaryError),
}
