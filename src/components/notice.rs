//! Inline notification banner for failed writes and rejected input.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NoticeProps {
    pub message: String,
    /// Green confirmation styling instead of the error styling
    #[props(default = false)]
    pub success: bool,
}

#[component]
pub fn Notice(props: NoticeProps) -> Element {
    let class = if props.success {
        "notice notice-success"
    } else {
        "notice notice-error"
    };

    rsx! {
        div { class: "{class}", role: "alert",
            span { "{props.message}" }
        }
    }
}
