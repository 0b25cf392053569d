//! Error types for the Personal Finance Survey

use thiserror::Error;

use crate::types::Collection;

/// Main error type for storage and account operations
#[derive(Error, Debug)]
pub enum FinsurveyError {
    /// Error during storage operations (redb)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Account already registered under this email
    #[error("Account already exists: {0}")]
    AccountExists(String),
}

/// Result type alias using FinsurveyError
pub type FinsurveyResult<T> = Result<T, FinsurveyError>;

/// Failure of a single durable-storage write.
///
/// No partial document is left behind when this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// The backing store could not be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store refused the write
    #[error("Write to {collection} rejected: {reason}")]
    Rejected {
        collection: Collection,
        reason: String,
    },
}

impl From<FinsurveyError> for WriteError {
    fn from(err: FinsurveyError) -> Self {
        WriteError::Unavailable(err.to_string())
    }
}

/// Reasons the survey engine refuses to start a submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurveyError {
    /// Submission is only possible from the final step
    #[error("Not on the final question (step {step} of {total})")]
    NotOnFinalStep { step: usize, total: usize },

    /// A question has no answer yet
    #[error("Question not answered: {question}")]
    Incomplete { question: &'static str },

    /// A write for this survey is already in flight
    #[error("Submission already in progress")]
    AlreadySubmitting,

    /// The survey was already stored
    #[error("Survey already submitted")]
    AlreadySubmitted,

    /// The durable-storage write failed
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Reasons the waitlist panel refuses to join
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WaitlistError {
    /// Empty email field
    #[error("Email is required")]
    EmptyEmail,

    /// Email field does not look like an address
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// A write for this form is already in flight
    #[error("Join already in progress")]
    AlreadyJoining,

    /// The panel already recorded an entry
    #[error("Already joined the waitlist")]
    AlreadyJoined,

    /// The durable-storage write failed
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Errors from the local authentication provider
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown email or wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Email does not look like an address
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Password shorter than the minimum length
    #[error("Password must be at least {min} characters")]
    WeakPassword { min: usize },

    /// Email already registered
    #[error("An account already exists for {0}")]
    EmailInUse(String),

    /// Underlying storage failure
    #[error(transparent)]
    Store(#[from] FinsurveyError),
}
