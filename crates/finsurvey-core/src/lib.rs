//! Personal Finance Survey Core Library
//!
//! Survey state machine, waitlist capture and session gate for the
//! Personal Finance Survey app.
//!
//! ## Overview
//!
//! A respondent signs in, answers seven questions one step at a time, and
//! the completed survey is written as a single document. The thank-you page
//! then offers a one-field waitlist form. Everything the pages need from the
//! outside world goes through two capabilities:
//!
//! - [`RecordWriter`]: append a document to `surveys` or `waitlist`
//! - [`SessionGate`]: who is signed in right now, if anyone
//!
//! [`Storage`] (redb) and [`MemoryStore`] implement the first;
//! [`Session`] (fed by [`LocalAuth`]) implements the second.
//!
//! ## Quick Start
//!
//! ```ignore
//! use finsurvey_core::{Backend, SurveyForm};
//!
//! let backend = Backend::in_memory();
//! let identity = backend.auth().sign_up("ada@example.com", "hunter22")?;
//!
//! let mut form = SurveyForm::new();
//! form.select_answer("ageBracket", "26-35", true);
//! form.advance();
//! // ... remaining questions ...
//! form.submit(&identity, backend.records().as_ref())?;
//! ```

pub mod auth;
pub mod backend;
pub mod config;
pub mod error;
pub mod memory;
pub mod questions;
pub mod routing;
pub mod session;
pub mod stats;
pub mod storage;
pub mod survey;
pub mod types;
pub mod waitlist;

// Re-exports
pub use auth::LocalAuth;
pub use backend::Backend;
pub use config::AppConfig;
pub use error::{AuthError, FinsurveyError, FinsurveyResult, SurveyError, WaitlistError, WriteError};
pub use memory::MemoryStore;
pub use questions::{Cardinality, QuestionSpec, QUESTIONS};
pub use routing::Page;
pub use session::{Session, SessionGate};
pub use storage::{RecordWriter, Storage};
pub use survey::{PendingSubmission, SurveyForm, SurveyPhase};
pub use types::*;
pub use waitlist::{PendingJoin, WaitlistForm, WaitlistPhase, JOINED_NOTICE};
