//! Application Configuration
//!
//! Configuration for the accounts application layer. Secrets and work
//! factors are injected here once, at construction - components never
//! read the environment themselves.

use std::time::Duration;

use platform::cookie::CookieConfig;
use platform::password::DEFAULT_COST;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Accounts application configuration
#[derive(Debug, Clone)]
pub struct AccountConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for token signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session TTL (30 days)
    pub session_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy - None by default, the API is consumed cross-site
    pub cookie_same_site: SameSite,
    /// bcrypt cost factor for password hashing
    pub hash_cost: u32,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "jwt".to_string(),
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(30 * 24 * 3600), // 30 days
            cookie_secure: true,
            cookie_same_site: SameSite::None,
            hash_cost: DEFAULT_COST,
        }
    }
}

impl AccountConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Get session TTL in whole seconds
    pub fn session_ttl_secs(&self) -> i64 {
        self.session_ttl.as_secs() as i64
    }

    /// Cookie settings for the session cookie
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.session_ttl_secs()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AccountConfig::default();
        assert_eq!(config.session_cookie_name, "jwt");
        assert_eq!(config.session_ttl_secs(), 30 * 24 * 3600);
        assert_eq!(config.hash_cost, DEFAULT_COST);
        assert!(config.cookie_secure);
    }

    #[test]
    fn test_random_secret_differs() {
        let a = AccountConfig::with_random_secret();
        let b = AccountConfig::with_random_secret();
        assert_ne!(a.session_secret, b.session_secret);
    }

    #[test]
    fn test_session_cookie_settings() {
        let config = AccountConfig::default();
        let cookie = config.session_cookie().build_set_cookie("token");

        assert!(cookie.starts_with("jwt=token"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=None"));
        assert!(cookie.contains(&format!("Max-Age={}", 30 * 24 * 3600)));
    }
}
