mod bookwork;
mod progress;
mod round;
mod service;
mod view;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use bookwork::BookworkCheck;
pub use progress::RoundProgress;
pub use round::{AnswerOutcome, BookworkOutcome, Feedback, PracticeRound, RoundStep};
pub use service::{Screen, SessionService};
pub use view::{TopicTile, menu_tiles};
