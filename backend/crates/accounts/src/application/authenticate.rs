//! Authenticate Use Case
//!
//! Verifies credentials and opens a session.

use std::sync::Arc;

use platform::password::{ClearTextPassword, PasswordHasher};

use crate::application::session::SessionTokenIssuer;
use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AccountError, AccountResult};

/// Authenticate input
pub struct AuthenticateInput {
    pub email: String,
    pub password: String,
}

/// Authenticate output
#[derive(Debug)]
pub struct AuthenticateOutput {
    /// The authenticated account
    pub account: Account,
    /// Session token for the cookie
    pub session_token: String,
}

/// Authenticate use case
pub struct AuthenticateUseCase<R, T>
where
    R: AccountRepository,
    T: SessionTokenIssuer,
{
    repo: Arc<R>,
    hasher: Arc<PasswordHasher>,
    tokens: Arc<T>,
}

impl<R, T> AuthenticateUseCase<R, T>
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

    pub async fn execute(&self, input: AuthenticateInput) -> AccountResult<AuthenticateOutput> {
        // Every failure before the password check maps to the same
        // InvalidCredentials as a failed verify, so the response never
        // reveals whether the email is registered.
        let email = Email::new(input.email).map_err(|_| AccountError::InvalidCredentials)?;

        let account = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let candidate = ClearTextPassword::new(input.password);
        if !account.password_hash.verify(&self.hasher, &candidate) {
            return Err(AccountError::InvalidCredentials);
        }

        let session_token = self.tokens.issue(&account.account_id)?;

        tracing::info!(
            account_id = %account.account_id,
            "Account authenticated"
        );

        Ok(AuthenticateOutput {
            account,
            session_token,
        })
    }
}
