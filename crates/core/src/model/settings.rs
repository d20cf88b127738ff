use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundSettingsError {
    #[error("questions per round must be > 0")]
    InvalidQuestionsPerRound,

    #[error("bookwork chance must be in [0, 1]")]
    InvalidBookworkChance,
}

/// Tunables for a practice round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSettings {
    questions_per_round: u32,
    xp_per_correct: u32,
    bookwork_chance: f64,
    duplicate_attempts: u32,
}

impl RoundSettings {
    pub const DEFAULT_QUESTIONS_PER_ROUND: u32 = 5;
    pub const DEFAULT_XP_PER_CORRECT: u32 = 100;
    pub const DEFAULT_BOOKWORK_CHANCE: f64 = 0.3;
    pub const DEFAULT_DUPLICATE_ATTEMPTS: u32 = 5;

    /// # Errors
    ///
    /// Returns `RoundSettingsError` if the round is empty or the chance is not a probability.
    pub fn new(
        questions_per_round: u32,
        xp_per_correct: u32,
        bookwork_chance: f64,
        duplicate_attempts: u32,
    ) -> Result<Self, RoundSettingsError> {
        if questions_per_round == 0 {
            return Err(RoundSettingsError::InvalidQuestionsPerRound);
        }
        if !bookwork_chance.is_finite() || !(0.0..=1.0).contains(&bookwork_chance) {
            return Err(RoundSettingsError::InvalidBookworkChance);
        }

        Ok(Self {
            questions_per_round,
            xp_per_correct,
            bookwork_chance,
            duplicate_attempts,
        })
    }

    #[must_use]
    pub fn questions_per_round(&self) -> u32 {
        self.questions_per_round
    }

    #[must_use]
    pub fn xp_per_correct(&self) -> u32 {
        self.xp_per_correct
    }

    /// Probability of a bookwork check after each correct answer.
    #[must_use]
    pub fn bookwork_chance(&self) -> f64 {
        self.bookwork_chance
    }

    /// How many times the generator re-rolls to avoid repeating the previous answer.
    #[must_use]
    pub fn duplicate_attempts(&self) -> u32 {
        self.duplicate_attempts
    }
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            questions_per_round: Self::DEFAULT_QUESTIONS_PER_ROUND,
            xp_per_correct: Self::DEFAULT_XP_PER_CORRECT,
            bookwork_chance: Self::DEFAULT_BOOKWORK_CHANCE,
            duplicate_attempts: Self::DEFAULT_DUPLICATE_ATTEMPTS,
        }
    }
}
