//! Backend - the capabilities the pages are wired to.
//!
//! Bundles the record writer and the auth provider (with its session) behind
//! one clonable handle. The desktop app puts a `Backend` in context; tests
//! build one over a [`MemoryStore`] to swap in failures or a fake identity.
//!
//! # Example
//!
//! ```ignore
//! use finsurvey_core::{AppConfig, Backend, SurveyForm};
//!
//! let backend = Backend::open(&AppConfig::default())?;
//! backend.auth().sign_in("ada@example.com", "hunter22")?;
//!
//! let mut form = SurveyForm::new();
//! // ... answer every question ...
//! let identity = backend.current_identity().unwrap();
//! let pending = form.begin_submission(&identity)?;
//! let outcome = backend.write_survey(pending).await;
//! form.complete_submission(outcome)?;
//! ```

use std::sync::Arc;

use tracing::info;

use crate::auth::LocalAuth;
use crate::config::AppConfig;
use crate::error::{AuthError, FinsurveyError, WriteError};
use crate::memory::MemoryStore;
use crate::session::{Session, SessionGate};
use crate::storage::{AccountStore, RecordWriter, Storage};
use crate::survey::PendingSubmission;
use crate::types::{DocId, Identity};
use crate::waitlist::PendingJoin;

#[derive(Clone)]
pub struct Backend {
    records: Arc<dyn RecordWriter>,
    auth: LocalAuth,
}

impl Backend {
    /// Open the backend described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `FinsurveyError::Io` if the data directory cannot be created.
    /// Returns `FinsurveyError::Database` if storage initialization fails.
    pub fn open(config: &AppConfig) -> Result<Self, FinsurveyError> {
        if config.ephemeral {
            info!("Using in-memory backend");
            return Ok(Self::in_memory());
        }

        std::fs::create_dir_all(&config.data_dir)?;
        let storage = Arc::new(Storage::new(config.db_path())?);
        info!(data_dir = ?config.data_dir, "Opened backend");
        Ok(Self::from_parts(storage.clone(), storage))
    }

    /// A backend that forgets everything on exit
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::from_parts(store.clone(), store)
    }

    pub fn from_parts(records: Arc<dyn RecordWriter>, accounts: Arc<dyn AccountStore>) -> Self {
        Self {
            records,
            auth: LocalAuth::new(accounts, Session::new()),
        }
    }

    pub fn auth(&self) -> &LocalAuth {
        &self.auth
    }

    pub fn session(&self) -> &Session {
        self.auth.session()
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.session().current_identity()
    }

    pub fn records(&self) -> Arc<dyn RecordWriter> {
        self.records.clone()
    }

    /// Verify credentials on the blocking pool and sign the account in
    pub async fn sign_in(&self, email: String, password: String) -> Result<Identity, AuthError> {
        let auth = self.auth.clone();
        tokio::task::spawn_blocking(move || auth.sign_in(&email, &password))
            .await
            .map_err(|e| AuthError::Store(FinsurveyError::Storage(e.to_string())))?
    }

    /// Register and sign in on the blocking pool
    pub async fn sign_up(&self, email: String, password: String) -> Result<Identity, AuthError> {
        let auth = self.auth.clone();
        tokio::task::spawn_blocking(move || auth.sign_up(&email, &password))
            .await
            .map_err(|e| AuthError::Store(FinsurveyError::Storage(e.to_string())))?
    }

    /// Write a frozen survey on the blocking pool
    pub async fn write_survey(&self, pending: PendingSubmission) -> Result<DocId, WriteError> {
        let records = self.records.clone();
        tokio::task::spawn_blocking(move || pending.write(records.as_ref()))
            .await
            .map_err(|e| WriteError::Unavailable(e.to_string()))?
    }

    /// Write a waitlist entry on the blocking pool
    pub async fn write_waitlist(&self, pending: PendingJoin) -> Result<DocId, WriteError> {
        let records = self.records.clone();
        tokio::task::spawn_blocking(move || pending.write(records.as_ref()))
            .await
            .map_err(|e| WriteError::Unavailable(e.to_string()))?
    }
}
