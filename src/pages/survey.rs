//! Survey page - one question per step, submit on the last.
//!
//! The draft lives in a `SurveyForm` signal owned by this page, so leaving
//! the route discards it. The write runs on the backend's blocking pool;
//! the form stays in its submitting phase (controls disabled) until the
//! outcome comes back.

use dioxus::prelude::*;
use finsurvey_core::{SurveyError, SurveyForm};

use crate::app::Route;
use crate::components::{Notice, ProgressBar, QuestionStep};
use crate::context::{use_backend, use_identity};

#[component]
pub fn Survey() -> Element {
    let navigator = use_navigator();
    let backend = use_backend();
    let identity = use_identity();

    let mut form = use_signal(SurveyForm::new);
    let mut rejection: Signal<Option<String>> = use_signal(|| None);

    let on_select = move |(question_id, option, checked): (&'static str, &'static str, bool)| {
        rejection.set(None);
        form.write().select_answer(question_id, option, checked);
    };

    let on_submit = move |_| {
        let Some(who) = identity() else {
            navigator.replace(Route::Login {});
            return;
        };

        let pending = match form.write().begin_submission(&who) {
            Ok(pending) => pending,
            Err(SurveyError::Incomplete { question }) => {
                let prompt = finsurvey_core::questions::find(question)
                    .map(|q| q.prompt)
                    .unwrap_or(question);
                rejection.set(Some(format!("Please answer: {}", prompt)));
                return;
            }
            Err(e) => {
                tracing::debug!(error = %e, "Submit ignored");
                return;
            }
        };

        let backend = backend.clone();
        spawn(async move {
            let outcome = backend.write_survey(pending).await;
            if form.write().complete_submission(outcome).is_ok() {
                navigator.push(Route::ThankYou {});
            }
        });
    };

    let view = form.read();
    let question = view.current_question();
    let submitting = view.is_submitting();

    rsx! {
        main { class: "page-padded",
            div { class: "card survey-card",
                div { class: "survey-header",
                    h2 { class: "card-heading", "Personal Finance Survey" }
                    ProgressBar { fraction: view.progress() }
                    p { class: "hint", "{view.step_label()}" }
                }

                if let Some(notice) = view.notice() {
                    Notice { message: notice.to_string() }
                }
                if let Some(msg) = rejection() {
                    Notice { message: msg }
                }

                QuestionStep {
                    question_id: question.id,
                    selected: question
                        .options
                        .iter()
                        .filter(|o| view.is_selected(question.id, o))
                        .copied()
                        .collect::<Vec<_>>(),
                    disabled: submitting,
                    on_select: on_select,
                }

                div { class: "survey-nav",
                    button {
                        class: "btn-secondary",
                        disabled: !view.can_retreat(),
                        onclick: move |_| {
                            form.write().retreat();
                        },
                        "Previous"
                    }

                    if view.is_last_step() {
                        button {
                            class: "btn-primary",
                            disabled: !view.can_submit(),
                            onclick: on_submit,
                            if submitting { "Submitting..." } else { "Submit" }
                        }
                    } else {
                        button {
                            class: "btn-primary",
                            disabled: !view.can_advance(),
                            onclick: move |_| {
                                form.write().advance();
                            },
                            "Next"
                        }
                    }
                }
            }
        }
    }
}
