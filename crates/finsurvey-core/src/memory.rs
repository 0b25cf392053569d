//! In-process store used for `--ephemeral` runs and tests.
//!
//! Implements the same [`RecordWriter`] and [`AccountStore`] capabilities as
//! the redb-backed [`Storage`](crate::storage::Storage), plus a switch to make
//! every write fail so error paths can be exercised without a broken disk.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::error::{FinsurveyError, WriteError};
use crate::storage::{server_timestamp, Account, AccountStore, RecordWriter};
use crate::types::{Collection, DocId, Document, CREATED_AT_FIELD};

#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<(Collection, DocId, Document)>>,
    accounts: Mutex<HashMap<String, Account>>,
    failing: AtomicBool,
    attempts: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of `write_record` calls, successful or not
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Documents written to `collection`, oldest first
    pub fn records(&self, collection: Collection) -> Vec<(DocId, Document)> {
        self.records
            .lock()
            .iter()
            .filter(|(c, _, _)| *c == collection)
            .map(|(_, id, doc)| (*id, doc.clone()))
            .collect()
    }

    pub fn count(&self, collection: Collection) -> usize {
        self.records
            .lock()
            .iter()
            .filter(|(c, _, _)| *c == collection)
            .count()
    }
}

impl RecordWriter for MemoryStore {
    fn write_record(&self, collection: Collection, mut fields: Document) -> Result<DocId, WriteError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(WriteError::Unavailable("simulated network error".to_string()));
        }

        let id = DocId::new();
        fields.insert(CREATED_AT_FIELD.to_string(), server_timestamp());
        self.records.lock().push((collection, id, fields));
        Ok(id)
    }
}

impl AccountStore for MemoryStore {
    fn insert_account(&self, account: &Account) -> Result<(), FinsurveyError> {
        let mut accounts = self.accounts.lock();
        if accounts.contains_key(&account.email) {
            return Err(FinsurveyError::AccountExists(account.email.clone()));
        }
        accounts.insert(account.email.clone(), account.clone());
        Ok(())
    }

    fn find_account(&self, email: &str) -> Result<Option<Account>, FinsurveyError> {
        Ok(self.accounts.lock().get(email).cloned())
    }
}
