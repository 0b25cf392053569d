//! Landing page - marketing copy and the way into the survey.

use chrono::Datelike;
use dioxus::prelude::*;

use crate::app::Route;

/// Selling points shown under the hero
const FEATURES: [(&str, &str); 3] = [
    (
        "Save More",
        "Discover personalized strategies to increase your savings rate.",
    ),
    (
        "Optimize Spending",
        "Learn where your money goes and how to prioritize your expenses.",
    ),
    (
        "Reach Goals Faster",
        "Create a personalized roadmap to achieve your financial goals.",
    ),
];

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();
    let year = chrono::Local::now().year();

    let start = move |_| {
        navigator.push(Route::Login {});
    };

    rsx! {
        main { class: "landing",
            header { class: "hero",
                h1 { class: "hero-title",
                    "Find out how much you could save, instantly!"
                }
                p { class: "hero-tagline",
                    "Take our quick survey and discover personalized strategies to optimize your finances and reach your goals faster."
                }
                button {
                    class: "btn-primary btn-large",
                    onclick: start,
                    "Start Now"
                }
            }

            section { class: "feature-grid",
                for (title, blurb) in FEATURES {
                    div { class: "card feature-card",
                        h3 { class: "card-title", "{title}" }
                        p { class: "muted", "{blurb}" }
                    }
                }
            }

            footer { class: "footer",
                "© {year} Personal Finance Optimizer. All rights reserved."
            }
        }
    }
}
