//! Update Profile Use Case
//!
//! Partial update of name, email, and password. A field absent from the
//! patch (or supplied empty) keeps its current value.

use std::sync::Arc;

use platform::password::{ClearTextPassword, MIN_PASSWORD_LENGTH, PasswordHasher};

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_id::AccountId, email::Email, password_hash::PasswordHash,
};
use crate::error::{AccountError, AccountResult};

/// Partial profile update
///
/// `None` (or an empty string) means "keep the current value".
#[derive(Debug, Default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Update profile use case
pub struct UpdateProfileUseCase<R>
where
    R: AccountRepository,
{
    repo: Arc<R>,
    hasher: Arc<PasswordHasher>,
}

impl<R> UpdateProfileUseCase<R>
where
    R: AccountRepository,
{
    pub fn new(repo: Arc<R>, hasher: Arc<PasswordHasher>) -> Self {
        Self { repo, hasher }
    }

    pub async fn execute(
        &self,
        account_id: &AccountId,
        patch: ProfilePatch,
    ) -> AccountResult<Account> {
        let mut account = self
            .repo
            .find_by_id(account_id)
            .await?
            .ok_or(AccountError::AccountNotFound)?;

        if let Some(name) = patch.name.filter(|n| !n.is_empty()) {
            account.set_name(name);
        }

        if let Some(email) = patch.email.filter(|e| !e.is_empty()) {
            // No duplicate pre-check here; the store's unique index is
            // the backstop and surfaces as DuplicateAccount on save.
            let email = Email::new(email).map_err(|_| AccountError::InvalidAccountData)?;
            account.set_email(email);
        }

        if let Some(password) = patch.password.filter(|p| !p.is_empty()) {
            let password = ClearTextPassword::new(password);
            if password.char_count() < MIN_PASSWORD_LENGTH {
                // Fail before touching the stored hash
                return Err(AccountError::WeakPassword);
            }

            let password_hash = self
                .hasher
                .hash(&password)
                .map_err(|e| AccountError::Internal(e.to_string()))?;
            account.set_password(PasswordHash::from_hashed(password_hash));
        }

        // Every successful branch persists and responds, password or not.
        let account = self.repo.save(&account).await?;

        tracing::info!(
            account_id = %account.account_id,
            "Account profile updated"
        );

        Ok(account)
    }
}
