use dioxus::prelude::*;
use finsurvey_core::{Page, SessionGate};

use crate::context::{get_backend, use_identity};
use crate::pages::{Landing, Login, Survey, ThankYou};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with "Start Now" button
/// - `/login` - Sign in or create an account
/// - `/survey` - Seven-step survey (requires a session)
/// - `/thank-you` - Confirmation and waitlist form (requires a session)
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[layout(RequireSession)]
        #[route("/survey")]
        Survey {},
        #[route("/thank-you")]
        ThankYou {},
}

impl From<&Route> for Page {
    fn from(route: &Route) -> Self {
        match route {
            Route::Landing {} => Page::Landing,
            Route::Login {} => Page::Login,
            Route::Survey {} => Page::Survey,
            Route::ThankYou {} => Page::ThankYou,
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Landing => Route::Landing {},
            Page::Login => Route::Login {},
            Page::Survey => Route::Survey {},
            Page::ThankYou => Route::ThankYou {},
        }
    }
}

/// Root application component.
///
/// Provides global styles, backend and identity context, and routing.
#[component]
pub fn App() -> Element {
    let backend = use_hook(get_backend);
    let identity = use_signal(|| backend.current_identity());

    // Provide context to all child components
    use_context_provider(|| backend.clone());
    use_context_provider(|| identity);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Layout for gated routes.
///
/// Renders the child route only with a signed-in respondent; otherwise
/// redirects to the login page.
#[component]
fn RequireSession() -> Element {
    let navigator = use_navigator();
    let identity = use_identity();
    let route = use_route::<Route>();

    let requested = Page::from(&route);
    let target = identity.read().resolve(requested);

    use_effect(use_reactive!(|(requested, target)| {
        if target != requested {
            tracing::debug!(path = requested.path(), "No session, redirecting to {}", target.path());
            navigator.replace(Route::from(target));
        }
    }));

    if target != requested {
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}
