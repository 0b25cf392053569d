//! Horizontal progress bar.

use dioxus::prelude::*;

/// Width of the filled part, as a CSS percentage clamped to `0..=100`
pub fn percent(fraction: f32) -> u32 {
    (fraction.clamp(0.0, 1.0) * 100.0).round() as u32
}

#[component]
pub fn ProgressBar(fraction: f32) -> Element {
    let width = percent(fraction);

    rsx! {
        div { class: "progress-track",
            div { class: "progress-fill", style: "width: {width}%;" }
        }
    }
}
