use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use helix_core::model::{RoundSettings, TopicId};
use helix_core::time::fixed_clock;
use services::{Clock, SessionService};

use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::Shell;
use crate::views::shell::ScreenSwitch;

pub const TEST_SEED: u64 = 7;

#[derive(Clone)]
struct TestApp {
    settings: RoundSettings,
}

impl UiApp for TestApp {
    fn round_settings(&self) -> RoundSettings {
        self.settings.clone()
    }

    fn seed(&self) -> Option<u64> {
        Some(TEST_SEED)
    }

    fn unlocked(&self) -> usize {
        0
    }

    fn advance_delay(&self) -> Duration {
        Duration::ZERO
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }
}

/// Test context with `questions` per round and the given bookwork chance.
pub fn test_context(questions: u32, bookwork_chance: f64) -> AppContext {
    let settings = RoundSettings::new(questions, 100, bookwork_chance, 5).expect("settings");
    let app: Arc<dyn UiApp> = Arc::new(TestApp { settings });
    build_app_context(&app)
}

/// Session already on the practice screen for `topic`.
pub fn practicing(ctx: &AppContext, topic: &'static str) -> SessionService {
    let mut session = ctx.new_session().with_unlocked(14);
    session
        .open_topic(&TopicId::from_static(topic))
        .expect("open topic");
    session.start_practice().expect("start practice");
    session
}

/// Answer the current question correctly and move on.
pub fn answer_and_continue(session: &mut SessionService) {
    let answer = session
        .round()
        .expect("round")
        .question()
        .answer()
        .to_string();
    session.submit_answer(&answer).expect("submit");
    session.continue_after_correct().expect("continue");
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    ctx: AppContext,
    session: Option<SessionService>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    use_context_provider(|| props.ctx.clone());
    match props.session.clone() {
        Some(session) => rsx! { SessionRoot { session } },
        None => rsx! { Shell {} },
    }
}

#[derive(Props, Clone)]
struct SessionRootProps {
    session: SessionService,
}

impl PartialEq for SessionRootProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn SessionRoot(props: SessionRootProps) -> Element {
    use_context_provider(|| Signal::new(props.session.clone()));
    rsx! { ScreenSwitch {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Render the full shell, starting on the menu.
pub fn setup_shell_harness(ctx: AppContext) -> ViewHarness {
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { ctx, session: None });
    ViewHarness { dom }
}

/// Render whatever screen `session` is on.
pub fn setup_view_harness(ctx: AppContext, session: SessionService) -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            ctx,
            session: Some(session),
        },
    );
    ViewHarness { dom }
}
