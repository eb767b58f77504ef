//! Password Hash Value Object
//!
//! Domain wrapper around the platform's hashed-password type. Delegates
//! all cryptographic work to `platform::password`; this type only pins
//! down how hashes enter and leave the domain.
//!
//! The plaintext never appears here, and the `Debug`/`Display` output is
//! redacted so a hash cannot end up in a log line or API response by
//! accident.

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{ClearTextPassword, HashedPassword, PasswordHasher};
use std::fmt;

/// Hashed account password for database storage
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(HashedPassword);

impl PasswordHash {
    /// Wrap a freshly computed hash
    pub fn from_hashed(hashed: HashedPassword) -> Self {
        Self(hashed)
    }

    /// Create from a stored hash string (from the database)
    pub fn from_stored(stored: impl Into<String>) -> AppResult<Self> {
        let hashed = HashedPassword::from_stored(stored)
            .map_err(|_| AppError::internal("Invalid password hash in database"))?;

        Ok(Self(hashed))
    }

    /// Get the hash string for database storage
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Verify a candidate password against this hash
    ///
    /// The salt lives inside the stored hash; the hasher only supplies the
    /// primitive. Comparison is constant-time.
    pub fn verify(&self, hasher: &PasswordHasher, candidate: &ClearTextPassword) -> bool {
        hasher.verify(candidate, &self.0)
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHash")
            .field("hash", &"[HASH]")
            .finish()
    }
}

impl fmt::Display for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HASHED_PASSWORD]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = hasher();
        let raw = ClearTextPassword::new("TestPassword123!".to_string());
        let hash = PasswordHash::from_hashed(hasher.hash(&raw).unwrap());

        assert!(hash.verify(&hasher, &raw));

        let wrong = ClearTextPassword::new("WrongPassword123!".to_string());
        assert!(!hash.verify(&hasher, &wrong));
    }

    #[test]
    fn test_stored_roundtrip() {
        let hasher = hasher();
        let raw = ClearTextPassword::new("TestPassword123!".to_string());
        let hash = PasswordHash::from_hashed(hasher.hash(&raw).unwrap());

        let restored = PasswordHash::from_stored(hash.as_str().to_string()).unwrap();
        assert!(restored.verify(&hasher, &raw));
    }

    #[test]
    fn test_invalid_stored_hash() {
        assert!(PasswordHash::from_stored("not_a_valid_hash").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let hasher = hasher();
        let raw = ClearTextPassword::new("SecretPassword123!".to_string());
        let hash = PasswordHash::from_hashed(hasher.hash(&raw).unwrap());

        let debug = format!("{:?}", hash);
        assert!(debug.contains("HASH"));
        assert!(!debug.contains("$2"));

        assert_eq!(hash.to_string(), "[HASHED_PASSWORD]");
    }
}
