use dioxus::prelude::*;

use services::{Screen, SessionService};

use crate::context::AppContext;
use crate::views::{CompleteView, ExplainerView, MenuView, PracticeView};

/// Owns the session signal for everything below it.
#[component]
pub fn Shell() -> Element {
    let ctx = use_context::<AppContext>();
    use_context_provider(|| Signal::new(ctx.new_session()));
    rsx! { ScreenSwitch {} }
}

#[component]
pub(crate) fn ScreenSwitch() -> Element {
    let screen = use_session().read().screen();

    match screen {
        Screen::Menu => rsx! { MenuView {} },
        Screen::Explainer => rsx! { ExplainerView {} },
        Screen::Practice => rsx! { PracticeView {} },
        Screen::Complete => rsx! { CompleteView {} },
    }
}

/// Session signal shared by every screen under [`Shell`].
pub(crate) fn use_session() -> Signal<SessionService> {
    use_context::<Signal<SessionService>>()
}
