//! Backend and session context for the Personal Finance Survey.
//!
//! The backend is opened once in `main` and handed to every page through
//! `use_context`, together with a reactive mirror of the signed-in
//! identity so route guards re-run on sign-in and sign-out.
//!
//! ## Usage
//!
//! ```ignore
//! let backend = use_backend();
//! let identity = use_identity();
//!
//! if let Some(who) = identity() {
//!     form.write().begin_submission(&who)?;
//! }
//! ```

use dioxus::prelude::*;
use finsurvey_core::{Backend, Identity};

/// Get the backend opened at startup.
pub fn get_backend() -> Backend {
    crate::get_backend()
}

/// Hook to access the backend from context.
pub fn use_backend() -> Backend {
    use_context::<Backend>()
}

/// Hook to access the current respondent.
///
/// Pages that sign in or out must update this signal alongside the backend
/// session.
pub fn use_identity() -> Signal<Option<Identity>> {
    use_context::<Signal<Option<Identity>>>()
}
