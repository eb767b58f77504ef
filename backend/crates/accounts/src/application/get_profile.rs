//! Get Profile Use Case
//!
//! Returns the profile for an already-verified session. The caller's
//! identity comes from the session gate; no re-authentication happens
//! here.

use std::sync::Arc;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::account_id::AccountId;
use crate::error::{AccountError, AccountResult};

/// Get profile use case
pub struct GetProfileUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
}

impl<R> GetProfileUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, account_id: &AccountId) -> AccountResult<Account> {
        self.repo
            .find_by_id(account_id)
            .await?
            .ok_or(AccountError::AccountNotFound)
    }
}
