//! Register Use Case
//!
//! Creates a new account and opens its first session.

use std::sync::Arc;

use platform::password::{ClearTextPassword, MIN_PASSWORD_LENGTH, PasswordHasher};

use crate::application::session::SessionTokenIssuer;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{email::Email, password_hash::PasswordHash};
use crate::error::{AccountError, AccountResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    /// The persisted account
    pub account: Account,
    /// Session token for the cookie
    pub session_token: String,
}

/// Register use case
pub struct RegisterUseCase<R, T>
where
    R: AccountRepository,
    T: SessionTokenIssuer,
{
    repo: Arc<R>,
    hasher: Arc<PasswordHasher>,
    tokens: Arc<T>,
}

impl<R, T> RegisterUseCase<R, T>
where
    R: AccountRepository,
    T: SessionTokenIssuer,
{
    pub fn new(repo: Arc<R>, hasher: Arc<PasswordHasher>, tokens: Arc<T>) -> Self {
        Self {
            repo,
            hasher,
            tokens,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AccountResult<RegisterOutput> {
        let email = Email::new(input.email).map_err(|_| AccountError::InvalidAccountData)?;

        // Duplicate check comes first: an already-taken email fails
        // regardless of what the password looks like. The store's unique
        // index backstops the race between this check and the insert.
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AccountError::DuplicateAccount);
        }

        // Length policy is owned here, not by the hasher
        let password = ClearTextPassword::new(input.password);
        if password.char_count() < MIN_PASSWORD_LENGTH {
            return Err(AccountError::WeakPassword);
        }

        let password_hash = self
            .hasher
            .hash(&password)
            .map_err(|e| AccountError::Internal(e.to_string()))?;

        let account = Account::new(input.name, email, PasswordHash::from_hashed(password_hash));
        let account = self.repo.create(&account).await?;

        let session_token = self.tokens.issue(&account.account_id)?;

        tracing::info!(
            account_id = %account.account_id,
            "Account registered"
        );

        Ok(RegisterOutput {
            account,
            session_token,
        })
    }
}
