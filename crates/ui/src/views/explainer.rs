use dioxus::prelude::*;
use tracing::warn;

use crate::views::shell::use_session;

#[component]
pub fn ExplainerView() -> Element {
    let mut session = use_session();
    let Some(explainer) = session.read().explainer() else {
        return rsx! {
            div { class: "page",
                p { "No topic selected." }
            }
        };
    };

    rsx! {
        div { class: "page explainer",
            div { class: "card",
                h2 { "{explainer.title}" }
                div { class: "explainer-content",
                    for (idx, line) in explainer.content.lines().enumerate() {
                        p { key: "{idx}", "{line}" }
                    }
                }
                button {
                    id: "explainer-start",
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        if let Err(err) = session.write().start_practice() {
                            warn!(error = %err, "round not started");
                        }
                    },
                    "Start Round"
                }
                button {
                    class: "btn btn-link",
                    r#type: "button",
                    onclick: move |_| session.write().exit_to_menu(),
                    "Back to menu"
                }
            }
        }
    }
}
