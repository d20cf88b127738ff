#![forbid(unsafe_code)]

pub mod answer;
pub mod dice;
pub mod generator;
pub mod model;
pub mod time;

pub use answer::{check_answer, matches_verbatim, normalize};
pub use dice::Dice;
pub use generator::{Formula, generate, generate_distinct};
pub use time::Clock;
