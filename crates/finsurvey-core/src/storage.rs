//! Persistent storage using redb.
//!
//! This module provides ACID-compliant storage for:
//! - Survey responses (`surveys` collection)
//! - Waitlist entries (`waitlist` collection)
//! - Respondent accounts for the local auth provider
//!
//! Both collections are append-only. The store assigns the document id and
//! the `createdAt` timestamp at write time, so callers never supply either.

use crate::error::{FinsurveyError, WriteError};
use crate::types::{Collection, DocId, Document, CREATED_AT_FIELD};
use chrono::{SecondsFormat, Utc};
use parking_lot::{Mutex, RwLock};
use redb::{Database, ReadableTable, ReadableTableMetadata, TableDefinition};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};
use ulid::Generator;

mod accounts;

use accounts::ACCOUNTS_TABLE;

pub use accounts::{Account, AccountStore};

// Table definitions
const SURVEYS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("surveys");
const WAITLIST_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("waitlist");

fn table_for(collection: Collection) -> TableDefinition<'static, &'static str, &'static [u8]> {
    match collection {
        Collection::Surveys => SURVEYS_TABLE,
        Collection::Waitlist => WAITLIST_TABLE,
    }
}

/// Current time in the format stored under `createdAt`
pub fn server_timestamp() -> serde_json::Value {
    serde_json::Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Capability to append one document to a collection.
///
/// Implementations stamp `createdAt` and return the id they assigned. On
/// error nothing has been written.
pub trait RecordWriter: Send + Sync {
    fn write_record(&self, collection: Collection, fields: Document) -> Result<DocId, WriteError>;
}

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
    /// Monotonic within a process so keys sort in append order
    ids: Arc<Mutex<Generator>>,
}

impl Storage {
    /// Get a reference to the shared database handle
    pub fn db_handle(&self) -> Arc<RwLock<Database>> {
        self.db.clone()
    }

    /// Create a new storage instance at the given path.
    ///
    /// This will:
    /// - Create the database directory if it doesn't exist
    /// - Initialize the database file
    /// - Create all required tables
    pub fn new(path: impl AsRef<Path>) -> Result<Self, FinsurveyError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SURVEYS_TABLE)?;
            let _ = write_txn.open_table(WAITLIST_TABLE)?;
            let _ = write_txn.open_table(ACCOUNTS_TABLE)?;
        }
        write_txn.commit()?;

        debug!(?path, "Opened storage");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
            ids: Arc::new(Mutex::new(Generator::new())),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Collection Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Append a document, stamping `createdAt`.
    pub fn append(
        &self,
        collection: Collection,
        mut fields: Document,
    ) -> Result<DocId, FinsurveyError> {
        fields.insert(CREATED_AT_FIELD.to_string(), server_timestamp());
        let data = serde_json::to_vec(&fields)
            .map_err(|e| FinsurveyError::Serialization(e.to_string()))?;

        let db = self.db.read();
        let write_txn = db.begin_write()?;
        // Drawn inside the write transaction: ids are handed out in commit order.
        let id = self
            .ids
            .lock()
            .generate()
            .map(DocId)
            .map_err(|e| FinsurveyError::Storage(e.to_string()))?;
        {
            let mut table = write_txn.open_table(table_for(collection))?;
            let key = id.to_string();
            table.insert(key.as_str(), data.as_slice())?;
        }
        write_txn.commit()?;

        debug!(%collection, %id, "Appended document");
        Ok(id)
    }

    /// Load a single document by id.
    ///
    /// Returns `None` if no document with the given id exists.
    pub fn load(
        &self,
        collection: Collection,
        id: &DocId,
    ) -> Result<Option<Document>, FinsurveyError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(table_for(collection))?;
        let key = id.to_string();

        match table.get(key.as_str())? {
            Some(v) => {
                let doc: Document = serde_json::from_slice(v.value())
                    .map_err(|e| FinsurveyError::Serialization(e.to_string()))?;
                Ok(Some(doc))
            }
            None => Ok(None),
        }
    }

    /// Load every document in a collection, oldest first.
    ///
    /// Keys are monotonic ULIDs, so key order is append order even for
    /// documents written within the same millisecond.
    pub fn list(&self, collection: Collection) -> Result<Vec<(DocId, Document)>, FinsurveyError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(table_for(collection))?;

        let mut docs = Vec::new();
        for entry in table.iter()? {
            let (key, value) = entry?;
            let id = DocId::from_string(key.value())
                .map_err(|e| FinsurveyError::Serialization(e.to_string()))?;
            let doc: Document = serde_json::from_slice(value.value())
                .map_err(|e| FinsurveyError::Serialization(e.to_string()))?;
            docs.push((id, doc));
        }
        Ok(docs)
    }

    /// Number of documents in a collection
    pub fn count(&self, collection: Collection) -> Result<u64, FinsurveyError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(table_for(collection))?;
        Ok(table.len()?)
    }
}

impl RecordWriter for Storage {
    fn write_record(&self, collection: Collection, fields: Document) -> Result<DocId, WriteError> {
        self.append(collection, fields).map_err(|e| {
            warn!(%collection, error = %e, "Write failed");
            WriteError::from(e)
        })
    }
}
