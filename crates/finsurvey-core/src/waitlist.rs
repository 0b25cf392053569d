//! Waitlist Panel - single email field on the thank-you page.
//!
//! Same begin/write/complete split as the survey engine so the write can
//! run off the UI thread while the join control stays disabled.

use tracing::{debug, error, info};

use crate::error::{WaitlistError, WriteError};
use crate::storage::RecordWriter;
use crate::types::{is_plausible_email, Collection, DocId, Identity, WaitlistEntry};

/// Shown when the waitlist write fails
pub const JOIN_FAILED_NOTICE: &str =
    "There was an error joining the waitlist. Please try again.";

/// Replaces the form once the entry is stored
pub const JOINED_NOTICE: &str =
    "You've successfully joined our waitlist! We'll keep you updated on our progress.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitlistPhase {
    /// Form visible and editable
    Open,
    /// A write is in flight
    Joining,
    /// Entry stored; the form is replaced by a confirmation
    Joined(DocId),
}

/// An entry waiting to be written
#[derive(Debug, Clone)]
pub struct PendingJoin {
    pub entry: WaitlistEntry,
}

impl PendingJoin {
    pub fn write(&self, writer: &dyn RecordWriter) -> Result<DocId, WriteError> {
        let doc = self.entry.to_document().map_err(|e| WriteError::Rejected {
            collection: Collection::Waitlist,
            reason: e.to_string(),
        })?;
        writer.write_record(Collection::Waitlist, doc)
    }
}

#[derive(Debug, Clone)]
pub struct WaitlistForm {
    email: String,
    phase: WaitlistPhase,
    notice: Option<String>,
}

impl WaitlistForm {
    /// A fresh form, pre-filled with the respondent's email when known
    pub fn new(identity: Option<&Identity>) -> Self {
        Self {
            email: identity.map(|i| i.email.clone()).unwrap_or_default(),
            phase: WaitlistPhase::Open,
            notice: None,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phase(&self) -> WaitlistPhase {
        self.phase
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_joining(&self) -> bool {
        self.phase == WaitlistPhase::Joining
    }

    pub fn is_joined(&self) -> bool {
        matches!(self.phase, WaitlistPhase::Joined(_))
    }

    /// Confirmation to show in place of the form, once joined
    pub fn confirmation(&self) -> Option<&'static str> {
        self.is_joined().then_some(JOINED_NOTICE)
    }

    /// Whether the join control is live
    pub fn can_join(&self) -> bool {
        self.phase == WaitlistPhase::Open && !self.email.trim().is_empty()
    }

    /// Replace the email field. Ignored once a write has started.
    pub fn set_email(&mut self, email: impl Into<String>) {
        if self.phase == WaitlistPhase::Open {
            self.email = email.into();
        }
    }

    pub fn begin_join(&mut self, identity: Option<&Identity>) -> Result<PendingJoin, WaitlistError> {
        match self.phase {
            WaitlistPhase::Joining => return Err(WaitlistError::AlreadyJoining),
            WaitlistPhase::Joined(_) => return Err(WaitlistError::AlreadyJoined),
            WaitlistPhase::Open => {}
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(WaitlistError::EmptyEmail);
        }
        if !is_plausible_email(email) {
            return Err(WaitlistError::InvalidEmail(email.to_string()));
        }

        let entry = WaitlistEntry::new(email, identity.map(|i| i.id));
        self.phase = WaitlistPhase::Joining;
        self.notice = None;
        debug!("Waitlist join started");
        Ok(PendingJoin { entry })
    }

    /// Apply the outcome of the write started by [`Self::begin_join`].
    ///
    /// On failure the form reopens with the typed email still in place.
    pub fn complete_join(&mut self, outcome: Result<DocId, WriteError>) -> Result<DocId, WaitlistError> {
        match outcome {
            Ok(id) => {
                self.phase = WaitlistPhase::Joined(id);
                self.notice = None;
                info!(%id, "Joined waitlist");
                Ok(id)
            }
            Err(e) => {
                self.phase = WaitlistPhase::Open;
                self.notice = Some(JOIN_FAILED_NOTICE.to_string());
                error!(error = %e, "Error adding to waitlist");
                Err(e.into())
            }
        }
    }

    pub fn join(
        &mut self,
        identity: Option<&Identity>,
        writer: &dyn RecordWriter,
    ) -> Result<DocId, WaitlistError> {
        let pending = self.begin_join(identity)?;
        let outcome = pending.write(writer);
        self.complete_join(outcome)
    }
}
