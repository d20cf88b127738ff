use tracing::info;

/// Sequential topic unlocking.
///
/// Topics are unlocked up to and including the watermark index. Finishing a
/// round of the watermark topic unlocks the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progression {
    unlocked: usize,
    total: usize,
}

impl Progression {
    /// Only the first topic unlocked.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self::with_unlocked(total, 0)
    }

    /// Start with the watermark at `unlocked`, clamped to the last topic.
    #[must_use]
    pub fn with_unlocked(total: usize, unlocked: usize) -> Self {
        Self {
            unlocked: unlocked.min(total.saturating_sub(1)),
            total,
        }
    }

    /// Index of the highest unlocked topic.
    #[must_use]
    pub fn unlocked(&self) -> usize {
        self.unlocked
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn is_unlocked(&self, position: usize) -> bool {
        position < self.total && position <= self.unlocked
    }

    #[must_use]
    pub fn all_unlocked(&self) -> bool {
        self.unlocked + 1 >= self.total
    }

    /// Record a completed round for the topic at `position`.
    ///
    /// Returns true when this unlocked a new topic.
    pub fn complete(&mut self, position: usize) -> bool {
        if position != self.unlocked || self.all_unlocked() {
            return false;
        }
        self.unlocked += 1;
        info!(unlocked = self.unlocked, "topic unlocked");
        true
    }
}
