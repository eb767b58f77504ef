//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::account::Account;

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// ============================================================================
// Authenticate
// ============================================================================

/// Authenticate request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticateRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Profile
// ============================================================================

/// Partial profile update request
///
/// Omitted fields keep their current values.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Profile response
///
/// The only shape an account ever takes in a response body. The password
/// hash has no field here, so it cannot leak.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&Account> for ProfileResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.account_id.to_string(),
            name: account.name.clone(),
            email: account.email.as_str().to_string(),
        }
    }
}

// ============================================================================
// Messages
// ============================================================================

/// Confirmation message response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{email::Email, password_hash::PasswordHash};
    use platform::password::{ClearTextPassword, PasswordHasher};

    #[test]
    fn test_profile_response_has_no_password_field() {
        let hasher = PasswordHasher::new(4);
        let raw = ClearTextPassword::new("longenough1".to_string());
        let account = Account::new(
            "Ann".to_string(),
            Email::new("a@x.com").unwrap(),
            PasswordHash::from_hashed(hasher.hash(&raw).unwrap()),
        );

        let value = serde_json::to_value(ProfileResponse::from(&account)).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["email", "id", "name"]);

        assert_eq!(object["name"], "Ann");
        assert_eq!(object["email"], "a@x.com");
    }

    #[test]
    fn test_update_request_fields_are_optional() {
        let req: UpdateProfileRequest = serde_json::from_str(r#"{"name": "X"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("X"));
        assert!(req.email.is_none());
        assert!(req.password.is_none());
    }
}
