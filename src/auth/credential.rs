use entity::user::{ActiveModel as UserActive, Model as UserModel};
use sea_orm::{ActiveValue, Set};
use thiserror::Error;
use tracing::warn;

use crate::utils::password;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("password is not a readable attribute")]
    WriteOnly,
    #[error("password hashing failed: {0}")]
    Hash(String),
}

impl From<argon2::password_hash::Error> for CredentialError {
    fn from(e: argon2::password_hash::Error) -> Self {
        CredentialError::Hash(e.to_string())
    }
}

/// Write-only password handling for anything that carries a `password_hash`.
pub trait Credential {
    /// Hashes `password` and overwrites the stored hash.
    fn set_password(&mut self, password: &str) -> Result<(), CredentialError>;

    /// The plaintext is never kept, so reading it always fails.
    fn password(&self) -> Result<String, CredentialError> {
        Err(CredentialError::WriteOnly)
    }

    fn stored_hash(&self) -> Option<&str>;

    fn verify_password(&self, password: &str) -> bool {
        let Some(hash) = self.stored_hash() else {
            return false;
        };
        password::verify(password, hash).unwrap_or_else(|e| {
            warn!("stored password hash is unreadable: {e}");
            false
        })
    }
}

impl Credential for UserModel {
    fn set_password(&mut self, password: &str) -> Result<(), CredentialError> {
        self.password_hash = Some(password::hash(password)?);
        Ok(())
    }

    fn stored_hash(&self) -> Option<&str> {
        self.password_hash.as_deref()
    }
}

impl Credential for UserActive {
    fn set_password(&mut self, password: &str) -> Result<(), CredentialError> {
        self.password_hash = Set(Some(password::hash(password)?));
        Ok(())
    }

    fn stored_hash(&self) -> Option<&str> {
        match &self.password_hash {
            ActiveValue::Set(Some(hash)) | ActiveValue::Unchanged(Some(hash)) => Some(hash),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_user() -> UserModel {
        UserModel {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: None,
            bad_logins: 0,
            last_attempt: None,
            last_login_ip: None,
        }
    }

    #[test]
    fn set_then_verify() {
        let mut user = blank_user();
        user.set_password("s3cret").unwrap();
        assert!(user.verify_password("s3cret"));
        assert!(!user.verify_password("s3cret!"));
        assert!(!user.verify_password("S3CRET"));
    }

    #[test]
    fn hash_is_stored_not_plaintext() {
        let mut user = blank_user();
        user.set_password("s3cret").unwrap();
        let stored = user.password_hash.clone().unwrap();
        assert_ne!(stored, "s3cret");
        assert!(stored.starts_with("$argon2"));
    }

    #[test]
    fn setting_again_overwrites() {
        let mut user = blank_user();
        user.set_password("first").unwrap();
        user.set_password("second").unwrap();
        assert!(!user.verify_password("first"));
        assert!(user.verify_password("second"));
    }

    #[test]
    fn password_is_never_readable() {
        let mut user = blank_user();
        assert!(matches!(user.password(), Err(CredentialError::WriteOnly)));
        user.set_password("s3cret").unwrap();
        let err = user.password().unwrap_err();
        assert_eq!(err.to_string(), "password is not a readable attribute");
    }

    #[test]
    fn no_hash_never_verifies() {
        let user = blank_user();
        assert!(!user.verify_password(""));
        assert!(!user.verify_password("anything"));
    }

    #[test]
    fn garbage_hash_does_not_verify() {
        let mut user = blank_user();
        user.password_hash = Some("plaintext-by-mistake".to_string());
        assert!(!user.verify_password("plaintext-by-mistake"));
    }

    #[test]
    fn active_model_hashes_on_set() {
        let mut am = UserActive {
            name: Set("Ada".to_string()),
            email: Set("ada@example.com".to_string()),
            ..Default::default()
        };
        assert!(!am.verify_password("pw"));
        am.set_password("pw").unwrap();
        assert!(am.verify_password("pw"));
        assert!(matches!(am.password(), Err(CredentialError::WriteOnly)));
    }
}
