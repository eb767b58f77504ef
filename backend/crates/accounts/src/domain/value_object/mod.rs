//! Value Object Module

pub mod account_id;
pub mod email;
pub mod password_hash;

pub use account_id::AccountId;
pub use email::Email;
pub use password_hash::PasswordHash;
