use dioxus::prelude::*;
use tracing::warn;

use crate::views::shell::use_session;
use crate::vm::BookworkVm;

/// Modal asking the learner to re-type an earlier answer.
#[component]
pub fn BookworkOverlay(state: BookworkVm) -> Element {
    let mut session = use_session();
    let mut draft = use_signal(String::new);

    let verify = use_callback(move |()| {
        let raw = draft.read().clone();
        let outcome = session.write().submit_bookwork(&raw);
        match outcome {
            Ok(_) => draft.set(String::new()),
            Err(err) => warn!(error = %err, "bookwork answer rejected"),
        }
    });

    let body = match state {
        BookworkVm::Hidden => return rsx! {},
        BookworkVm::Input { target } => rsx! {
            div { class: "bookwork bookwork--input",
                h2 { "Bookwork Check" }
                p {
                    "Enter your exact answer for "
                    strong { "Question {target}" }
                    "."
                }
                form {
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        verify.call(());
                    },
                    input {
                        id: "bookwork-answer",
                        r#type: "text",
                        autofocus: true,
                        autocomplete: "off",
                        placeholder: "...",
                        value: "{draft}",
                        oninput: move |evt| draft.set(evt.value()),
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Verify" }
                }
            }
        },
        BookworkVm::Failed {
            target,
            expected,
            submitted,
        } => rsx! {
            div { class: "bookwork bookwork--failed",
                h2 { "Check Failed" }
                p { "That doesn't match your previous answer." }
                dl { class: "bookwork-compare",
                    dt { "Q{target} Answer:" }
                    dd { "{expected}" }
                    dt { "You Wrote:" }
                    dd { "{submitted}" }
                }
                button {
                    id: "bookwork-restart",
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: move |_| {
                        if let Err(err) = session.write().acknowledge_bookwork_failure() {
                            warn!(error = %err, "bookwork acknowledgement rejected");
                        }
                    },
                    "Restart Question"
                }
            }
        },
    };

    rsx! {
        div { class: "overlay",
            div { class: "card overlay-card", {body} }
        }
    }
}
