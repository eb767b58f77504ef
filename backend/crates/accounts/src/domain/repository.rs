//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::account::Account;
use crate::domain::value_object::{account_id::AccountId, email::Email};
use crate::error::AccountResult;

/// Account repository trait
///
/// The store is expected to either succeed or raise; `create` and `save`
/// return the persisted record so callers never respond from stale state.
#[trait_variant::make(AccountRepository: Send)]
pub trait LocalAccountRepository {
    /// Find account by email (exact, case-sensitive match)
    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Account>>;

    /// Find account by ID
    async fn find_by_id(&self, account_id: &AccountId) -> AccountResult<Option<Account>>;

    /// Persist a new account
    ///
    /// A unique-index violation on email surfaces as `DuplicateAccount`;
    /// an insert that yields no row surfaces as `InvalidAccountData`.
    async fn create(&self, account: &Account) -> AccountResult<Account>;

    /// Persist changes to an existing account
    ///
    /// Returns `AccountNotFound` if the row has vanished.
    async fn save(&self, account: &Account) -> AccountResult<Account>;
}
