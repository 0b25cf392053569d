//! Login page - sign in or create an account, then on to the survey.
//!
//! Respondents who already have a session skip straight to `/survey`.

use dioxus::prelude::*;
use finsurvey_core::auth::MIN_PASSWORD_LEN;

use crate::app::Route;
use crate::context::{use_backend, use_identity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    SignIn,
    SignUp,
}

impl Mode {
    fn title(&self) -> &'static str {
        match self {
            Mode::SignIn => "Sign in to your account",
            Mode::SignUp => "Create your account",
        }
    }

    fn action(&self) -> &'static str {
        match self {
            Mode::SignIn => "Sign in",
            Mode::SignUp => "Sign up",
        }
    }

    fn switch_prompt(&self) -> &'static str {
        match self {
            Mode::SignIn => "Need an account? Sign up",
            Mode::SignUp => "Already have an account? Sign in",
        }
    }

    fn other(&self) -> Mode {
        match self {
            Mode::SignIn => Mode::SignUp,
            Mode::SignUp => Mode::SignIn,
        }
    }
}

#[component]
pub fn Login() -> Element {
    let navigator = use_navigator();
    let backend = use_backend();
    let mut identity = use_identity();

    let mut mode = use_signal(|| Mode::SignIn);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error: Signal<Option<String>> = use_signal(|| None);
    let mut pending = use_signal(|| false);

    use_effect(move || {
        if identity.read().is_some() {
            navigator.replace(Route::Survey {});
        }
    });

    let on_submit = move |_| {
        if pending() {
            return;
        }
        pending.set(true);
        error.set(None);

        let backend = backend.clone();
        let (address, secret) = (email.read().clone(), password.read().clone());
        let chosen = mode();
        spawn(async move {
            let result = match chosen {
                Mode::SignIn => backend.sign_in(address, secret).await,
                Mode::SignUp => backend.sign_up(address, secret).await,
            };
            pending.set(false);

            match result {
                Ok(who) => {
                    password.set(String::new());
                    identity.set(Some(who));
                    navigator.push(Route::Survey {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Authentication failed");
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let can_submit =
        !pending() && !email.read().trim().is_empty() && !password.read().is_empty();

    rsx! {
        main { class: "page-centered",
            div { class: "card auth-card",
                h2 { class: "card-heading", "{mode().title()}" }

                if let Some(err) = error() {
                    div { class: "notice notice-error", "{err}" }
                }

                div { class: "form-group",
                    label { class: "form-label", r#for: "email", "Email address" }
                    input {
                        id: "email",
                        class: "form-input",
                        r#type: "email",
                        value: "{email}",
                        disabled: pending(),
                        oninput: move |e| email.set(e.value()),
                        placeholder: "you@example.com",
                        autofocus: true,
                    }
                }

                div { class: "form-group",
                    label { class: "form-label", r#for: "password", "Password" }
                    input {
                        id: "password",
                        class: "form-input",
                        r#type: "password",
                        value: "{password}",
                        disabled: pending(),
                        oninput: move |e| password.set(e.value()),
                    }
                    if mode() == Mode::SignUp {
                        p { class: "hint", "At least {MIN_PASSWORD_LEN} characters" }
                    }
                }

                button {
                    class: "btn-primary btn-block",
                    disabled: !can_submit,
                    onclick: on_submit,
                    if pending() { "Please wait..." } else { "{mode().action()}" }
                }

                button {
                    class: "btn-link",
                    disabled: pending(),
                    onclick: move |_| {
                        error.set(None);
                        mode.set(mode().other());
                    },
                    "{mode().switch_prompt()}"
                }

                Link { to: Route::Landing {}, class: "btn-link", "Back to home" }
            }
        }
    }
}
