//! Thank-you page - confirmation plus the waitlist form.

use dioxus::prelude::*;
use finsurvey_core::{WaitlistError, WaitlistForm};

use crate::app::Route;
use crate::components::Notice;
use crate::context::{use_backend, use_identity};

#[component]
pub fn ThankYou() -> Element {
    let navigator = use_navigator();
    let backend = use_backend();
    let mut identity = use_identity();

    let mut form = use_signal(|| WaitlistForm::new(identity.read().as_ref()));
    let mut rejection: Signal<Option<String>> = use_signal(|| None);

    let join_backend = backend.clone();
    let on_join = move |_| {
        let who = identity();
        let pending = match form.write().begin_join(who.as_ref()) {
            Ok(pending) => pending,
            Err(e @ (WaitlistError::EmptyEmail | WaitlistError::InvalidEmail(_))) => {
                rejection.set(Some(e.to_string()));
                return;
            }
            Err(e) => {
                tracing::debug!(error = %e, "Join ignored");
                return;
            }
        };
        rejection.set(None);

        let backend = join_backend.clone();
        spawn(async move {
            let outcome = backend.write_waitlist(pending).await;
            // Failure reopens the form with its notice and the typed email.
            if let Err(e) = form.write().complete_join(outcome) {
                tracing::debug!(error = %e, "Waitlist form reopened");
            }
        });
    };

    let on_sign_out = move |_| {
        backend.auth().sign_out();
        identity.set(None);
        navigator.replace(Route::Landing {});
    };

    let view = form.read();
    let joining = view.is_joining();

    rsx! {
        main { class: "page-centered",
            div { class: "card thanks-card",
                h2 { class: "card-heading", "Thank You!" }
                p { class: "muted",
                    "We've received your responses and are analyzing your financial profile. We'll be in touch soon with personalized recommendations."
                }

                if let Some(confirmation) = view.confirmation() {
                    Notice { message: confirmation.to_string(), success: true }
                } else {
                    h3 { class: "card-title", "Join our waitlist" }
                    p { class: "hint", "Be the first to know when we launch new features and get exclusive financial tips." }

                    if let Some(notice) = view.notice() {
                        Notice { message: notice.to_string() }
                    }
                    if let Some(msg) = rejection() {
                        Notice { message: msg }
                    }

                    div { class: "form-group",
                        label { class: "form-label", r#for: "waitlist-email", "Email address" }
                        input {
                            id: "waitlist-email",
                            class: "form-input",
                            r#type: "email",
                            value: "{view.email()}",
                            disabled: joining,
                            oninput: move |e| {
                                rejection.set(None);
                                form.write().set_email(e.value());
                            },
                            placeholder: "Your email address",
                        }
                    }

                    button {
                        class: "btn-primary btn-block",
                        disabled: !view.can_join(),
                        onclick: on_join,
                        if joining { "Joining..." } else { "Join" }
                    }
                }

                Link { to: Route::Landing {}, class: "btn-link", "Return to Home" }
                button { class: "btn-link", onclick: on_sign_out, "Sign out" }
            }
        }
    }
}
