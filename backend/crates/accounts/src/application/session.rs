//! Session Tokens
//!
//! Stateless sessions: a signed, expiring token bound to an account id,
//! transported in a cookie. There is no server-side session state and no
//! revocation list - validity is determined solely by signature and
//! expiry at verification time.
//!
//! [`SessionTokenIssuer`] is the seam; token backends are interchangeable
//! behind it. The default backend is an HS256 JWT.

use std::time::Duration;

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::AccountConfig;
use crate::domain::value_object::account_id::AccountId;
use crate::error::{AccountError, AccountResult};

/// Claims embedded in every session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject - the account's id
    pub sub: String,
    /// Issued-at time (UTC Unix timestamp)
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp)
    pub exp: i64,
}

/// Session token seam
///
/// `issue` mints a token for an account; `verify` returns the account id
/// a valid token is bound to. The cookie side effects (set on issue,
/// overwrite on clear) live in the presentation layer, built from the
/// cookie config.
pub trait SessionTokenIssuer: Send + Sync {
    /// Mint a signed, expiring token bound to the account id
    fn issue(&self, account_id: &AccountId) -> AccountResult<String>;

    /// Verify signature + expiry and resolve the subject
    ///
    /// Fails with `InvalidSession` on signature mismatch or expiry.
    fn verify(&self, token: &str) -> AccountResult<AccountId>;
}

/// HS256 JWT session issuer
#[derive(Clone)]
pub struct JwtSessionIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtSessionIssuer {
    /// Build from the application config (secret + TTL)
    pub fn new(config: &AccountConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(&config.session_secret),
            decoding_key: DecodingKey::from_secret(&config.session_secret),
            ttl: config.session_ttl,
        }
    }
}

impl SessionTokenIssuer for JwtSessionIssuer {
    fn issue(&self, account_id: &AccountId) -> AccountResult<String> {
        let now = chrono::Utc::now().timestamp();

        let claims = SessionClaims {
            sub: account_id.to_string(),
            iat: now,
            exp: now + self.ttl.as_secs() as i64,
        };

        // Header::default() is HS256
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AccountError::Internal(format!("Failed to sign session token: {e}")))
    }

    fn verify(&self, token: &str) -> AccountResult<AccountId> {
        // Validation::default() checks HS256 signature and exp
        let data = decode::<SessionClaims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| AccountError::InvalidSession)?;

        let uuid = Uuid::parse_str(&data.claims.sub).map_err(|_| AccountError::InvalidSession)?;

        Ok(AccountId::from_uuid(uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> JwtSessionIssuer {
        JwtSessionIssuer::new(&AccountConfig::with_random_secret())
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let issuer = issuer();
        let account_id = AccountId::new();

        let token = issuer.issue(&account_id).unwrap();
        let verified = issuer.verify(&token).unwrap();

        assert_eq!(verified, account_id);
    }

    #[test]
    fn test_claims_carry_issue_and_expiry() {
        let config = AccountConfig::with_random_secret();
        let issuer = JwtSessionIssuer::new(&config);
        let token = issuer.issue(&AccountId::new()).unwrap();

        // Decode without verifying to inspect the claims
        let mut validation = Validation::default();
        validation.insecure_disable_signature_validation();
        let data = decode::<SessionClaims>(
            &token,
            &DecodingKey::from_secret(&[0u8; 1]),
            &validation,
        )
        .unwrap();

        assert_eq!(
            data.claims.exp - data.claims.iat,
            config.session_ttl_secs()
        );
    }

    #[test]
    fn test_tampered_token_fails() {
        let a = issuer();
        let b = issuer();

        // Signed by a different secret
        let token = a.issue(&AccountId::new()).unwrap();
        assert!(matches!(
            b.verify(&token),
            Err(AccountError::InvalidSession)
        ));

        // Garbage is not a token at all
        assert!(matches!(
            a.verify("not.a.token"),
            Err(AccountError::InvalidSession)
        ));
    }

    #[test]
    fn test_expired_token_fails() {
        let config = AccountConfig::with_random_secret();
        let issuer = JwtSessionIssuer::new(&config);

        // Manually craft an already-expired token.
        // Use a margin well beyond the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = SessionClaims {
            sub: AccountId::new().to_string(),
            iat: now - 600,
            exp: now - 300,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(&config.session_secret),
        )
        .unwrap();

        assert!(matches!(
            issuer.verify(&token),
            Err(AccountError::InvalidSession)
        ));
    }

    #[test]
    fn test_bad_subject_fails() {
        let config = AccountConfig::with_random_secret();
        let issuer = JwtSessionIssuer::new(&config);

        let now = chrono::Utc::now().timestamp();
        let claims = SessionClaims {
            sub: "not-a-uuid".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(&config.session_secret),
        )
        .unwrap();

        assert!(matches!(
            issuer.verify(&token),
            Err(AccountError::InvalidSession)
        ));
    }
}
