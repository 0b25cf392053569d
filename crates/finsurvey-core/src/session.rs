//! Session gate - who is signed in right now.
//!
//! The forms and route guards only ever read the current identity. Sign-in
//! and sign-out go through [`LocalAuth`](crate::auth::LocalAuth), which owns
//! a [`Session`] and updates it.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::routing::Page;
use crate::types::Identity;

/// Read-only view of the current respondent
pub trait SessionGate {
    fn current_identity(&self) -> Option<Identity>;

    fn is_signed_in(&self) -> bool {
        self.current_identity().is_some()
    }

    /// Page to actually show when `requested` is asked for.
    ///
    /// Gated pages redirect to the login page without a session.
    fn resolve(&self, requested: Page) -> Page {
        if requested.requires_session() && !self.is_signed_in() {
            Page::Login
        } else {
            requested
        }
    }
}

/// Shared, clonable session handle
#[derive(Clone, Default)]
pub struct Session {
    current: Arc<RwLock<Option<Identity>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session already holding `identity`
    pub fn signed_in(identity: Identity) -> Self {
        Self {
            current: Arc::new(RwLock::new(Some(identity))),
        }
    }

    pub(crate) fn set(&self, identity: Option<Identity>) {
        *self.current.write() = identity;
    }
}

impl SessionGate for Session {
    fn current_identity(&self) -> Option<Identity> {
        self.current.read().clone()
    }
}

impl SessionGate for Option<Identity> {
    fn current_identity(&self) -> Option<Identity> {
        self.clone()
    }
}
