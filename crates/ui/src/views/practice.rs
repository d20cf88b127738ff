use dioxus::prelude::*;
use tracing::{debug, warn};

use services::{AnswerOutcome, Feedback};

use crate::context::AppContext;
use crate::views::BookworkOverlay;
use crate::views::shell::use_session;
use crate::vm::{BookworkVm, map_practice};

#[component]
pub fn PracticeView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_session();
    let mut draft = use_signal(String::new);
    let delay = ctx.advance_delay();

    let submit = use_callback(move |()| {
        let raw = draft.read().clone();
        let outcome = session.write().submit_answer(&raw);
        match outcome {
            Ok(AnswerOutcome::Correct { .. }) => {
                spawn(async move {
                    tokio::time::sleep(delay).await;
                    let step = session.write().continue_after_correct();
                    match step {
                        Ok(_) => draft.set(String::new()),
                        // Left the round before the delay ran out.
                        Err(err) => debug!(error = %err, "advance skipped"),
                    }
                });
            }
            Ok(AnswerOutcome::Wrong { .. }) => {}
            Err(err) => warn!(error = %err, "answer rejected"),
        }
    });

    let Some(vm) = map_practice(&session.read()) else {
        return rsx! {
            div { class: "page",
                p { "No round in progress." }
            }
        };
    };

    let pips: Vec<(usize, &'static str)> = vm
        .pips
        .iter()
        .enumerate()
        .map(|(idx, reached)| (idx, if *reached { "pip pip--reached" } else { "pip" }))
        .collect();
    let input_disabled = !vm.accepts_input();
    let show_check = vm.feedback == Feedback::Idle;
    let show_correct = vm.feedback == Feedback::Correct;
    let overlay = (vm.bookwork != BookworkVm::Hidden).then(|| vm.bookwork.clone());

    rsx! {
        div { class: "page practice",
            div { class: "hud",
                button {
                    id: "practice-exit",
                    class: "hud-exit",
                    r#type: "button",
                    onclick: move |_| session.write().exit_to_menu(),
                    "EXIT"
                }
                div { class: "hud-pips",
                    for (idx, class) in pips {
                        span { key: "{idx}", class }
                    }
                }
                div { class: "hud-xp", "XP: {vm.xp}" }
            }

            div { class: "card question-card",
                div { class: "question-meta",
                    span { "{vm.counter_label}" }
                    span { "{vm.topic_id}" }
                }
                h1 { class: "question-prompt", "{vm.prompt}" }

                form {
                    class: "answer-form",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        submit.call(());
                    },
                    input {
                        id: "practice-answer",
                        r#type: "text",
                        autofocus: true,
                        autocomplete: "off",
                        placeholder: "Answer...",
                        disabled: input_disabled,
                        value: "{draft}",
                        oninput: move |evt| draft.set(evt.value()),
                    }
                    if show_correct {
                        span { class: "feedback-correct", "✓ Correct" }
                    }
                    if show_check {
                        button { class: "btn btn-primary", r#type: "submit", "Check" }
                    }
                }

                if let Some(steps) = vm.steps.clone() {
                    div { class: "wrong-panel",
                        p { class: "wrong-title", "Keep trying!" }
                        p { class: "wrong-steps", "{steps}" }
                        button {
                            id: "practice-retry",
                            class: "btn btn-link",
                            r#type: "button",
                            onclick: move |_| {
                                draft.set(String::new());
                                if let Err(err) = session.write().retry() {
                                    warn!(error = %err, "retry rejected");
                                }
                            },
                            "Clear & Retry"
                        }
                    }
                }
            }

            if let Some(state) = overlay {
                BookworkOverlay { state }
            }
        }
    }
}
