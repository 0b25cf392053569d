//! Account Storage - credentials for the local auth provider
//!
//! Stores accounts in redb with the normalised email as the key.

use crate::error::FinsurveyError;
use crate::types::{Identity, RespondentId};
use redb::{ReadableTable, TableDefinition};
use serde::{Deserialize, Serialize};

use super::Storage;

/// Table for storing accounts (key: normalised email, value: postcard Account)
pub(crate) const ACCOUNTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("accounts");

/// A registered respondent and their salted password hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: RespondentId,
    pub email: String,
    /// Hex-encoded random salt
    pub salt: String,
    /// Hex-encoded SHA-256 of salt || password
    pub password_hash: String,
}

impl Account {
    pub fn identity(&self) -> Identity {
        Identity::new(self.id, self.email.clone())
    }
}

/// Where the local auth provider keeps accounts
pub trait AccountStore: Send + Sync {
    /// Insert a new account.
    ///
    /// Fails with `FinsurveyError::AccountExists` if the email is taken.
    fn insert_account(&self, account: &Account) -> Result<(), FinsurveyError>;

    /// Look up an account by normalised email
    fn find_account(&self, email: &str) -> Result<Option<Account>, FinsurveyError>;
}

impl AccountStore for Storage {
    fn insert_account(&self, account: &Account) -> Result<(), FinsurveyError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let write_txn = db_guard.begin_write()?;
        {
            let mut table = write_txn.open_table(ACCOUNTS_TABLE)?;
            if table.get(account.email.as_str())?.is_some() {
                return Err(FinsurveyError::AccountExists(account.email.clone()));
            }
            let serialized = postcard::to_allocvec(account)
                .map_err(|e| FinsurveyError::Serialization(e.to_string()))?;
            table.insert(account.email.as_str(), serialized.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn find_account(&self, email: &str) -> Result<Option<Account>, FinsurveyError> {
        let db = self.db_handle();
        let db_guard = db.read();
        let read_txn = db_guard.begin_read()?;
        let table = read_txn.open_table(ACCOUNTS_TABLE)?;

        if let Some(data) = table.get(email)? {
            let account: Account = postcard::from_bytes(data.value())
                .map_err(|e| FinsurveyError::Serialization(e.to_string()))?;
            Ok(Some(account))
        } else {
            Ok(None)
        }
    }
}

impl Storage {
    /// Number of registered accounts
    pub fn count_accounts(&self) -> Result<u64, FinsurveyError> {
        use redb::ReadableTableMetadata;

        let db = self.db_handle();
        let db_guard = db.read();
        let read_txn = db_guard.begin_read()?;
        let table = read_txn.open_table(ACCOUNTS_TABLE)?;
        Ok(table.len()?)
    }
}
