use std::sync::Arc;
use std::time::Duration;

use helix_core::model::RoundSettings;
use services::{Clock, Dice, SessionService};

/// Launch options the UI needs from the composition root.
pub trait UiApp: Send + Sync {
    fn round_settings(&self) -> RoundSettings;

    /// Fixed seed for reproducible rounds; `None` draws from OS entropy.
    fn seed(&self) -> Option<u64>;

    /// Catalog index of the highest topic unlocked at launch.
    fn unlocked(&self) -> usize;

    /// Pause between a correct answer and the next step.
    fn advance_delay(&self) -> Duration;

    fn clock(&self) -> Clock {
        Clock::system()
    }
}

#[derive(Clone)]
pub struct AppContext {
    round_settings: RoundSettings,
    seed: Option<u64>,
    unlocked: usize,
    advance_delay: Duration,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            round_settings: app.round_settings(),
            seed: app.seed(),
            unlocked: app.unlocked(),
            advance_delay: app.advance_delay(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        self.advance_delay
    }

    #[must_use]
    pub fn round_settings(&self) -> &RoundSettings {
        &self.round_settings
    }

    /// Fresh learner session on the menu screen.
    #[must_use]
    pub fn new_session(&self) -> SessionService {
        let dice = self.seed.map_or_else(Dice::from_entropy, Dice::seeded);
        SessionService::new(self.round_settings.clone(), self.clock, dice)
            .with_unlocked(self.unlocked)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
