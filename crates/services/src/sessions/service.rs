use std::fmt;
use tracing::{debug, info};

use helix_core::model::{
    Explainer, RoundSettings, RoundSummary, Topic, TopicId, catalog, explainer_for, find_topic,
};
use helix_core::{Clock, Dice};

use super::round::{AnswerOutcome, BookworkOutcome, PracticeRound, RoundStep};
use crate::error::SessionError;
use crate::progression::Progression;

/// Which top-level view is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Menu,
    Explainer,
    Practice,
    Complete,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Screen::Menu => "menu",
            Screen::Explainer => "explainer",
            Screen::Practice => "practice",
            Screen::Complete => "complete",
        };
        f.write_str(label)
    }
}

/// Owns the whole learner session: screen, unlocked topics, total XP and the
/// round in progress.
///
/// XP and progression live only as long as the service.
#[derive(Debug, Clone)]
pub struct SessionService {
    settings: RoundSettings,
    clock: Clock,
    dice: Dice,
    screen: Screen,
    progression: Progression,
    xp: u64,
    active_topic: Option<TopicId>,
    round: Option<PracticeRound>,
    last_summary: Option<RoundSummary>,
    newly_unlocked: Option<TopicId>,
}

impl SessionService {
    #[must_use]
    pub fn new(settings: RoundSettings, clock: Clock, dice: Dice) -> Self {
        Self {
            settings,
            clock,
            dice,
            screen: Screen::Menu,
            progression: Progression::new(catalog().len()),
            xp: 0,
            active_topic: None,
            round: None,
            last_summary: None,
            newly_unlocked: None,
        }
    }

    /// Start with every topic up to `position` unlocked.
    #[must_use]
    pub fn with_unlocked(mut self, position: usize) -> Self {
        self.progression = Progression::with_unlocked(catalog().len(), position);
        self
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn xp(&self) -> u64 {
        self.xp
    }

    #[must_use]
    pub fn settings(&self) -> &RoundSettings {
        &self.settings
    }

    #[must_use]
    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    #[must_use]
    pub fn active_topic(&self) -> Option<&'static Topic> {
        self.active_topic.as_ref().and_then(find_topic)
    }

    #[must_use]
    pub fn explainer(&self) -> Option<Explainer> {
        self.active_topic.as_ref().map(explainer_for)
    }

    #[must_use]
    pub fn round(&self) -> Option<&PracticeRound> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn last_summary(&self) -> Option<&RoundSummary> {
        self.last_summary.as_ref()
    }

    /// Topic unlocked by the most recently finished round, if any.
    #[must_use]
    pub fn newly_unlocked(&self) -> Option<&'static Topic> {
        self.newly_unlocked.as_ref().and_then(find_topic)
    }

    fn expect_screen(&self, expected: Screen) -> Result<(), SessionError> {
        if self.screen != expected {
            return Err(SessionError::WrongScreen(self.screen));
        }
        Ok(())
    }

    /// Select a topic from the menu and show its explainer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownTopic` for ids outside the catalog and
    /// `SessionError::Locked` for topics past the unlock watermark.
    pub fn open_topic(&mut self, id: &TopicId) -> Result<(), SessionError> {
        self.expect_screen(Screen::Menu)?;
        let topic = find_topic(id).ok_or_else(|| SessionError::UnknownTopic(id.clone()))?;
        if !self.progression.is_unlocked(topic.position()) {
            return Err(SessionError::Locked(id.clone()));
        }

        debug!(topic = %id, "topic opened");
        self.active_topic = Some(topic.id().clone());
        self.screen = Screen::Explainer;
        Ok(())
    }

    /// Begin a fresh round for the active topic, from the explainer or as a replay.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongScreen` outside the explainer and completion
    /// screens, and `SessionError::NoActiveTopic` if no topic was opened.
    pub fn start_practice(&mut self) -> Result<(), SessionError> {
        match self.screen {
            Screen::Explainer | Screen::Complete => {}
            other => return Err(SessionError::WrongScreen(other)),
        }
        let topic = self.active_topic.clone().ok_or(SessionError::NoActiveTopic)?;

        info!(
            topic = %topic,
            questions = self.settings.questions_per_round(),
            "round started"
        );
        self.round = Some(PracticeRound::start(
            topic,
            self.settings.clone(),
            &mut self.dice,
            self.clock.now(),
        ));
        self.last_summary = None;
        self.newly_unlocked = None;
        self.screen = Screen::Practice;
        Ok(())
    }

    fn practice_parts(&mut self) -> Result<(&mut PracticeRound, &mut Dice), SessionError> {
        self.expect_screen(Screen::Practice)?;
        let round = self.round.as_mut().ok_or(SessionError::NoActiveTopic)?;
        Ok((round, &mut self.dice))
    }

    /// # Errors
    ///
    /// See [`PracticeRound::submit_answer`].
    pub fn submit_answer(&mut self, raw: &str) -> Result<AnswerOutcome, SessionError> {
        let (round, _) = self.practice_parts()?;
        let outcome = round.submit_answer(raw)?;
        if let AnswerOutcome::Correct { xp_awarded } = outcome {
            self.xp = self.xp.saturating_add(u64::from(xp_awarded));
        }
        Ok(outcome)
    }

    /// # Errors
    ///
    /// Returns `SessionError::WrongScreen` outside the practice screen.
    pub fn retry(&mut self) -> Result<(), SessionError> {
        let (round, _) = self.practice_parts()?;
        round.retry();
        Ok(())
    }

    /// # Errors
    ///
    /// See [`PracticeRound::continue_after_correct`].
    pub fn continue_after_correct(&mut self) -> Result<RoundStep, SessionError> {
        let (round, dice) = self.practice_parts()?;
        let step = round.continue_after_correct(dice)?;
        if step == RoundStep::Completed {
            self.finish_round()?;
        }
        Ok(step)
    }

    /// # Errors
    ///
    /// See [`PracticeRound::submit_bookwork`].
    pub fn submit_bookwork(&mut self, raw: &str) -> Result<BookworkOutcome, SessionError> {
        let (round, dice) = self.practice_parts()?;
        let outcome = round.submit_bookwork(raw, dice)?;
        if outcome == BookworkOutcome::Passed(RoundStep::Completed) {
            self.finish_round()?;
        }
        Ok(outcome)
    }

    /// # Errors
    ///
    /// See [`PracticeRound::acknowledge_bookwork_failure`].
    pub fn acknowledge_bookwork_failure(&mut self) -> Result<(), SessionError> {
        let (round, _) = self.practice_parts()?;
        round.acknowledge_bookwork_failure()
    }

    /// Drop any round in progress and return to the topic menu.
    pub fn exit_to_menu(&mut self) {
        if self.round.as_ref().is_some_and(|round| !round.is_complete()) {
            debug!("round abandoned");
        }
        self.round = None;
        self.active_topic = None;
        self.screen = Screen::Menu;
    }

    fn finish_round(&mut self) -> Result<(), SessionError> {
        let round = self.round.as_ref().ok_or(SessionError::NoActiveTopic)?;
        let summary = round.summary(self.clock.now())?;

        self.newly_unlocked = None;
        if let Some(topic) = find_topic(summary.topic()) {
            if self.progression.complete(topic.position()) {
                self.newly_unlocked = catalog()
                    .get(self.progression.unlocked())
                    .map(|next| next.id().clone());
            }
        }

        info!(
            topic = %summary.topic(),
            xp = summary.xp_earned(),
            wrong = summary.wrong_attempts(),
            total_xp = self.xp,
            "round complete"
        );
        self.last_summary = Some(summary);
        self.screen = Screen::Complete;
        Ok(())
    }
}
