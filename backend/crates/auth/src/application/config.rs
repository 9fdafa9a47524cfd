//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Token cookie name
    pub cookie_name: String,
    /// Secret key for HMAC token signing (32 bytes). Loaded once at
    /// startup; never logged.
    pub token_secret: [u8; 32],
    /// Token lifetime (12 hours)
    pub token_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: "auth_token".to_string(),
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(12 * 3600), // 12 hours
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
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

    /// Get token TTL in milliseconds
    pub fn token_ttl_ms(&self) -> i64 {
        self.token_ttl.as_millis() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Cookie configuration for the token cookie
    pub fn cookie_config(&self) -> CookieConfig {
        CookieConfig {
            name: self.cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: Some(self.token_ttl.as_secs() as i64),
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("cookie_name", &self.cookie_name)
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("cookie_secure", &self.cookie_secure)
            .field("cookie_same_site", &self.cookie_same_site)
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secret_differs() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_ne!(a.token_secret, b.token_secret);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = AuthConfig::with_random_secret();
        let debug = format!("{:?}", config);
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_cookie_config_tracks_ttl() {
        let config = AuthConfig::default();
        let cookie = config.cookie_config();
        assert_eq!(cookie.max_age_secs, Some(12 * 3600));
        assert!(cookie.http_only);
    }
}
