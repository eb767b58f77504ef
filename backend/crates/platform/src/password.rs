//! Password Hashing and Verification
//!
//! bcrypt-based password handling with:
//! - A fresh random salt per hash (embedded in the output string)
//! - A tunable cost factor, injected at construction
//! - Zeroization of sensitive data
//! - Constant-time comparison from the underlying primitive
//!
//! Password *policy* (minimum length) is deliberately not enforced here;
//! that rule belongs to the application layer. The minimum is exported as
//! [`MIN_PASSWORD_LENGTH`] so callers share a single source of truth.

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length in characters, enforced by callers
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Default bcrypt cost factor (2^12 rounds)
pub const DEFAULT_COST: u32 = 12;

// ============================================================================
// Error Types
// ============================================================================

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// This type ensures that password data is securely erased from memory
/// when the value is dropped, preventing memory inspection attacks.
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap a raw password from user input
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    /// Number of Unicode code points (not bytes)
    ///
    /// Length policy counts characters, so multi-byte passwords are not
    /// penalized.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Get the password bytes for hashing
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in bcrypt modular-crypt format
///
/// The stored string carries the algorithm version, cost factor, and salt,
/// so verification needs nothing beyond the string itself.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from a stored hash string (e.g. from the database)
    pub fn from_stored(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        // bcrypt strings always start with a `$2` version prefix
        if !hash.starts_with("$2") {
            return Err(PasswordHashError::InvalidHashFormat);
        }

        Ok(Self { hash })
    }

    /// Get the hash string for storage
    pub fn as_str(&self) -> &str {
        &self.hash
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Password Hasher
// ============================================================================

/// Salted password hasher with an explicit cost factor
///
/// Construct one per application from configuration; the cost factor is
/// never read from global state.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a password with a fresh random salt
    ///
    /// Two calls on the same plaintext produce different outputs, because
    /// the salt is regenerated every time.
    pub fn hash(&self, password: &ClearTextPassword) -> Result<HashedPassword, PasswordHashError> {
        let hash = bcrypt::hash(password.as_str(), self.cost)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword { hash })
    }

    /// Verify a password against a stored hash
    ///
    /// Recomputes with the salt embedded in the hash string; the underlying
    /// primitive compares in constant time. Malformed hashes verify as
    /// `false` rather than erroring.
    pub fn verify(&self, password: &ClearTextPassword, hashed: &HashedPassword) -> bool {
        bcrypt::verify(password.as_str(), hashed.as_str()).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Low cost keeps the test suite fast; the cost factor only changes
    // work, not the contract under test.
    fn test_hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = test_hasher();
        let password = ClearTextPassword::new("TestPassword123!".to_string());
        let hashed = hasher.hash(&password).unwrap();

        // Correct password should verify
        assert!(hasher.verify(&password, &hashed));

        // Wrong password should not verify
        let wrong = ClearTextPassword::new("WrongPassword123!".to_string());
        assert!(!hasher.verify(&wrong, &hashed));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = test_hasher();
        let password = ClearTextPassword::new("TestPassword123!".to_string());

        let first = hasher.hash(&password).unwrap();
        let second = hasher.hash(&password).unwrap();

        // Fresh salt every call: identical plaintext, different hashes
        assert_ne!(first.as_str(), second.as_str());

        // Both still verify
        assert!(hasher.verify(&password, &first));
        assert!(hasher.verify(&password, &second));
    }

    #[test]
    fn test_cost_factor_embedded() {
        let hasher = PasswordHasher::new(DEFAULT_COST);
        let password = ClearTextPassword::new("TestPassword123!".to_string());
        let hashed = hasher.hash(&password).unwrap();

        assert!(hashed.as_str().contains("$12$"));
    }

    #[test]
    fn test_stored_roundtrip() {
        let hasher = test_hasher();
        let password = ClearTextPassword::new("TestPassword123!".to_string());
        let hashed = hasher.hash(&password).unwrap();

        let stored = hashed.as_str().to_string();
        let restored = HashedPassword::from_stored(stored).unwrap();

        assert!(hasher.verify(&password, &restored));
    }

    #[test]
    fn test_invalid_stored_hash() {
        let result = HashedPassword::from_stored("not_a_valid_hash");
        assert!(matches!(result, Err(PasswordHashError::InvalidHashFormat)));
    }

    #[test]
    fn test_malformed_hash_verifies_false() {
        let hasher = test_hasher();
        let password = ClearTextPassword::new("TestPassword123!".to_string());
        // Right prefix, garbage body
        let mangled = HashedPassword::from_stored("$2b$04$garbage").unwrap();
        assert!(!hasher.verify(&password, &mangled));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let hasher = test_hasher();
        let hashed = hasher.hash(&password).unwrap();
        let debug_output = format!("{:?}", hashed);
        assert!(debug_output.contains("HASH"));
        assert!(!debug_output.contains("$2"));
    }

    #[test]
    fn test_char_count_is_unicode_aware() {
        let password = ClearTextPassword::new("パスワード!".to_string());
        assert_eq!(password.char_count(), 6);
    }
}
