//! Core types for the Personal Finance Survey

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// A stored document: field name to JSON value.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Field the store stamps on every document at write time.
pub const CREATED_AT_FIELD: &str = "createdAt";

/// Loose address check: something on both sides of a single `@`, no spaces.
pub fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Unique identifier for a respondent account
///
/// Uses ULID so account ids sort by registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RespondentId(pub Ulid);

impl RespondentId {
    /// Create a new RespondentId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Parse from string representation
    pub fn from_string(s: &str) -> Result<Self, ulid::DecodeError> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

impl Default for RespondentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RespondentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier the store assigns to a written document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(pub Ulid);

impl DocId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    pub fn from_string(s: &str) -> Result<Self, ulid::DecodeError> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

impl Default for DocId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The signed-in respondent as seen through the session gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: RespondentId,
    pub email: String,
}

impl Identity {
    pub fn new(id: RespondentId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

/// Append-only collections the app writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Surveys,
    Waitlist,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Surveys => "surveys",
            Collection::Waitlist => "waitlist",
        }
    }

    pub fn all() -> &'static [Collection] {
        &[Collection::Surveys, Collection::Waitlist]
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer to one question.
///
/// Serialized untagged so a stored document reads as plain
/// `"ageBracket": "26-35"` or `"interests": ["Budgeting tips"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    Multi(Vec<String>),
}

impl Answer {
    /// Whether this answer counts towards step completion
    pub fn is_present(&self) -> bool {
        match self {
            Answer::Single(value) => !value.is_empty(),
            Answer::Multi(values) => !values.is_empty(),
        }
    }

    /// Whether `option` is the selected value (or one of them)
    pub fn contains(&self, option: &str) -> bool {
        match self {
            Answer::Single(value) => value == option,
            Answer::Multi(values) => values.iter().any(|v| v == option),
        }
    }

    /// Selected values in display order
    pub fn values(&self) -> Vec<&str> {
        match self {
            Answer::Single(value) => vec![value.as_str()],
            Answer::Multi(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// A completed survey as written to the `surveys` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    pub user_id: RespondentId,
    pub email: String,
    /// One entry per question id
    #[serde(flatten)]
    pub answers: BTreeMap<String, Answer>,
    /// Assigned by the store; absent until written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl SurveyResponse {
    /// Convert to the document handed to the record writer
    pub fn to_document(&self) -> Result<Document, serde_json::Error> {
        match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(serde::ser::Error::custom(format!(
                "survey response serialized to non-object: {other}"
            ))),
        }
    }

    pub fn from_document(doc: Document) -> Result<Self, serde_json::Error> {
        serde_json::from_value(serde_json::Value::Object(doc))
    }
}

/// An email captured on the thank-you page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub email: String,
    pub user_id: Option<RespondentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl WaitlistEntry {
    pub fn new(email: impl Into<String>, user_id: Option<RespondentId>) -> Self {
        Self {
            email: email.into(),
            user_id,
            created_at: None,
        }
    }

    pub fn to_document(&self) -> Result<Document, serde_json::Error> {
        match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(serde::ser::Error::custom(format!(
                "waitlist entry serialized to non-object: {other}"
            ))),
        }
    }

    pub fn from_document(doc: Document) -> Result<Self, serde_json::Error> {
        serde_json::from_value(serde_json::Value::Object(doc))
    }
}
