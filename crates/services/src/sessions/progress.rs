/// Aggregated view of round progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundProgress {
    /// 1-based position of the current question.
    pub current: u32,
    pub total: u32,
    pub is_complete: bool,
}

impl RoundProgress {
    /// Questions reached so far, including the current one.
    #[must_use]
    pub fn reached(&self) -> u32 {
        self.current.min(self.total)
    }
}
