//! Local email/password auth provider.
//!
//! Accounts live in an [`AccountStore`]; passwords are kept as a salted
//! SHA-256 digest. Successful sign-up or sign-in updates the shared
//! [`Session`], which is all the rest of the app looks at.
//!
//! ```ignore
//! let auth = LocalAuth::new(Arc::new(storage), Session::new());
//! let identity = auth.sign_up("ada@example.com", "hunter22")?;
//! assert!(auth.session().is_signed_in());
//! ```

use std::sync::Arc;

use rand::RngCore;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::error::{AuthError, FinsurveyError};
use crate::session::Session;
use crate::storage::{Account, AccountStore};
use crate::types::{is_plausible_email, Identity, RespondentId};

/// Shortest password accepted at sign-up
pub const MIN_PASSWORD_LEN: usize = 6;

const SALT_LEN: usize = 16;

/// Trim and lowercase an email, rejecting anything that isn't address-shaped
pub fn normalize_email(email: &str) -> Result<String, AuthError> {
    let normalized = email.trim().to_lowercase();
    if !is_plausible_email(&normalized) {
        return Err(AuthError::InvalidEmail(email.trim().to_string()));
    }
    Ok(normalized)
}

fn hash_password(salt: &[u8], password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[derive(Clone)]
pub struct LocalAuth {
    accounts: Arc<dyn AccountStore>,
    session: Session,
}

impl LocalAuth {
    pub fn new(accounts: Arc<dyn AccountStore>, session: Session) -> Self {
        Self { accounts, session }
    }

    /// The session this provider signs respondents into
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Register a new account and sign it in.
    pub fn sign_up(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let account = self.register(email, password)?;
        let identity = account.identity();
        self.session.set(Some(identity.clone()));
        info!(id = %identity.id, "Signed up");
        Ok(identity)
    }

    /// Register a new account without touching the session.
    ///
    /// Used by the operator CLI.
    pub fn register(&self, email: &str, password: &str) -> Result<Account, AuthError> {
        let email = normalize_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword {
                min: MIN_PASSWORD_LEN,
            });
        }

        let mut salt = [0u8; SALT_LEN];
        rand::rng().fill_bytes(&mut salt);

        let account = Account {
            id: RespondentId::new(),
            password_hash: hash_password(&salt, password),
            salt: hex::encode(salt),
            email,
        };

        match self.accounts.insert_account(&account) {
            Ok(()) => Ok(account),
            Err(FinsurveyError::AccountExists(email)) => Err(AuthError::EmailInUse(email)),
            Err(e) => Err(e.into()),
        }
    }

    /// Verify credentials and sign the account in.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let email = normalize_email(email)?;
        let Some(account) = self.accounts.find_account(&email)? else {
            warn!("Sign-in for unknown account");
            return Err(AuthError::InvalidCredentials);
        };

        let salt = hex::decode(&account.salt)
            .map_err(|e| FinsurveyError::Serialization(e.to_string()))?;
        if hash_password(&salt, password) != account.password_hash {
            warn!(id = %account.id, "Sign-in with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let identity = account.identity();
        self.session.set(Some(identity.clone()));
        info!(id = %identity.id, "Signed in");
        Ok(identity)
    }

    pub fn sign_out(&self) {
        self.session.set(None);
        info!("Signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::session::SessionGate;

    fn auth() -> LocalAuth {
        LocalAuth::new(Arc::new(MemoryStore::new()), Session::new())
    }

    #[test]
    fn test_sign_up_signs_in() {
        let auth = auth();
        let identity = auth.sign_up("Ada@Example.com ", "hunter22").unwrap();
        assert_eq!(identity.email, "ada@example.com");
        assert_eq!(auth.session().current_identity(), Some(identity));
    }

    #[test]
    fn test_sign_in_after_sign_out() {
        let auth = auth();
        let identity = auth.sign_up("ada@example.com", "hunter22").unwrap();
        auth.sign_out();
        assert!(!auth.session().is_signed_in());

        let again = auth.sign_in("ADA@example.com", "hunter22").unwrap();
        assert_eq!(again.id, identity.id);
        assert!(auth.session().is_signed_in());
    }

    #[test]
    fn test_wrong_password_and_unknown_email_look_the_same() {
        let auth = auth();
        auth.register("ada@example.com", "hunter22").unwrap();

        let wrong = auth.sign_in("ada@example.com", "hunter23").unwrap_err();
        let unknown = auth.sign_in("bob@example.com", "hunter22").unwrap_err();
        assert_eq!(wrong.to_string(), unknown.to_string());
        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert!(!auth.session().is_signed_in());
    }

    #[test]
    fn test_duplicate_sign_up_rejected() {
        let auth = auth();
        auth.sign_up("ada@example.com", "hunter22").unwrap();
        let err = auth.sign_up("ada@example.com", "other-pass").unwrap_err();
        assert!(matches!(err, AuthError::EmailInUse(_)));
    }

    #[test]
    fn test_weak_password_rejected() {
        let err = auth().sign_up("ada@example.com", "12345").unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword { min: 6 }));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let err = auth().sign_up("not-an-email", "hunter22").unwrap_err();
        assert!(matches!(err, AuthError::InvalidEmail(_)));
    }

    #[test]
    fn test_register_leaves_session_alone() {
        let auth = auth();
        auth.register("ada@example.com", "hunter22").unwrap();
        assert!(!auth.session().is_signed_in());
    }

    #[test]
    fn test_salts_differ_between_accounts() {
        let auth = auth();
        let a = auth.register("a@example.com", "same-pass").unwrap();
        let b = auth.register("b@example.com", "same-pass").unwrap();
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.password_hash, b.password_hash);
    }
}
