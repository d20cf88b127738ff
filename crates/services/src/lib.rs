#![forbid(unsafe_code)]

pub mod error;
pub mod progression;
pub mod sessions;

pub use helix_core::{Clock, Dice};
pub use sessions as session;

pub use error::SessionError;
pub use progression::Progression;

pub use sessions::{
    AnswerOutcome, BookworkCheck, BookworkOutcome, Feedback, PracticeRound, RoundProgress,
    RoundStep, Screen, SessionService, TopicTile,
};
