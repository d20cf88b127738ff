use dioxus::prelude::*;
use tracing::warn;

use crate::views::shell::use_session;
use crate::vm::map_complete;

#[component]
pub fn CompleteView() -> Element {
    let mut session = use_session();
    let vm = map_complete(&session.read());

    rsx! {
        div { class: "page complete",
            div { class: "card",
                h2 { "Round Complete!" }
                p { class: "tagline", "Knowledge secured." }

                div { class: "total-xp",
                    div { class: "total-xp-label", "Total XP" }
                    div { class: "total-xp-value", "{vm.total_xp}" }
                }

                dl { class: "summary",
                    dt { "XP this round" }
                    dd { "{vm.round_xp}" }

                    dt { "Questions" }
                    dd { "{vm.questions}" }

                    dt { "Wrong attempts" }
                    dd { "{vm.wrong_attempts}" }

                    dt { "Bookwork passed" }
                    dd { "{vm.bookwork_passed}" }

                    dt { "Bookwork failed" }
                    dd { "{vm.bookwork_failed}" }

                    dt { "Time" }
                    dd { "{vm.elapsed_label}" }
                }

                if vm.clean {
                    p { class: "clean-round", "Clean round: no mistakes." }
                }

                if let Some(title) = vm.unlocked_title {
                    p { class: "unlocked", "Unlocked: {title}" }
                }

                div { class: "complete-actions",
                    button {
                        id: "complete-replay",
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            if let Err(err) = session.write().start_practice() {
                                warn!(error = %err, "replay not started");
                            }
                        },
                        "Replay"
                    }
                    button {
                        id: "complete-menu",
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| session.write().exit_to_menu(),
                        "Menu"
                    }
                }
            }
        }
    }
}
