//! One survey question rendered as a radio or checkbox group.

use dioxus::prelude::*;
use finsurvey_core::questions;

/// Props for QuestionStep component
#[derive(Props, Clone, PartialEq)]
pub struct QuestionStepProps {
    /// Catalog id of the question to render
    pub question_id: &'static str,
    /// Options currently chosen
    pub selected: Vec<&'static str>,
    /// Lock the inputs while a write is in flight
    #[props(default = false)]
    pub disabled: bool,
    /// Called with `(question_id, option, checked)` on every change
    pub on_select: EventHandler<(&'static str, &'static str, bool)>,
}

/// Question prompt plus its options.
///
/// Radio options always report `checked = true`; checkbox options report the
/// state they are switching to.
#[component]
pub fn QuestionStep(props: QuestionStepProps) -> Element {
    let Some(question) = questions::find(props.question_id) else {
        tracing::warn!(question_id = props.question_id, "Unknown question");
        return rsx! {};
    };

    let multi = question.is_multi_choice();
    let input_type = question.cardinality.input_type();
    let on_select = props.on_select;
    let options: Vec<(&'static str, bool)> = question
        .options
        .iter()
        .map(|o| (*o, props.selected.contains(o)))
        .collect();

    rsx! {
        div { class: "question",
            h3 { class: "question-prompt", "{question.prompt}" }

            div { class: "option-list",
                for (option, checked) in options {
                    label {
                        key: "{option}",
                        class: if checked { "option option--checked" } else { "option" },
                        input {
                            r#type: "{input_type}",
                            name: "{question.id}",
                            value: "{option}",
                            checked: checked,
                            disabled: props.disabled,
                            onchange: move |_| {
                                on_select.call((question.id, option, if multi { !checked } else { true }));
                            },
                        }
                        span { class: "option-label", "{option}" }
                    }
                }
            }
        }
    }
}
