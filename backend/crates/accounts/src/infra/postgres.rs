//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_id::AccountId, email::Email, password_hash::PasswordHash,
};
use crate::error::{AccountError, AccountResult};

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// PostgreSQL unique_violation
///
/// The schema's unique index on email is the backstop for concurrent
/// registrations racing past the application's duplicate check.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505")
    )
}

impl AccountRepository for PgAccountRepository {
    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                name,
                email,
                password_hash,
                created_at,
                updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AccountResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                account_id,
                name,
                email,
                password_hash,
                created_at,
                updated_at
            FROM accounts
            WHERE account_id = $1
            "#,
        )
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn create(&self, account: &Account) -> AccountResult<Account> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO accounts (
                account_id,
                name,
                email,
                password_hash,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING
                account_id,
                name,
                email,
                password_hash,
                created_at,
                updated_at
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(&account.name)
        .bind(account.email.as_str())
        .bind(account.password_hash.as_str())
        .bind(account.created_at)
        .bind(account.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AccountError::DuplicateAccount
            } else {
                AccountError::Database(e)
            }
        })?;

        // The store is expected to either succeed or raise; a silent
        // non-insert is invalid data.
        row.ok_or(AccountError::InvalidAccountData)?.into_account()
    }

    async fn save(&self, account: &Account) -> AccountResult<Account> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            UPDATE accounts SET
                name = $2,
                email = $3,
                password_hash = $4,
                updated_at = $5
            WHERE account_id = $1
            RETURNING
                account_id,
                name,
                email,
                password_hash,
                created_at,
                updated_at
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(&account.name)
        .bind(account.email.as_str())
        .bind(account.password_hash.as_str())
        .bind(account.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AccountError::DuplicateAccount
            } else {
                AccountError::Database(e)
            }
        })?;

        row.ok_or(AccountError::AccountNotFound)?.into_account()
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AccountResult<Account> {
        let password_hash = PasswordHash::from_stored(self.password_hash)
            .map_err(|e| AccountError::Internal(format!("Invalid password_hash: {}", e)))?;

        Ok(Account {
            account_id: AccountId::from_uuid(self.account_id),
            name: self.name,
            email: Email::from_db(self.email),
            password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
