//! Account Entity
//!
//! A persisted user identity: id, display name, unique email, and the
//! password hash. The id is assigned at creation and never changes; the
//! other fields mutate in place through the setters, which maintain
//! `updated_at`.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{account_id::AccountId, email::Email, password_hash::PasswordHash};

/// Account entity
#[derive(Debug, Clone)]
pub struct Account {
    /// Internal UUID identifier, immutable
    pub account_id: AccountId,
    /// Display name
    pub name: String,
    /// Email, unique across all accounts, stored case-sensitively
    pub email: Email,
    /// Hashed password - never serialized into any response
    pub password_hash: PasswordHash,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account
    pub fn new(name: String, email: Email, password_hash: PasswordHash) -> Self {
        let now = Utc::now();

        Self {
            account_id: AccountId::new(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the display name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update the email
    pub fn set_email(&mut self, email: Email) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    /// Replace the password hash
    pub fn set_password(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}
