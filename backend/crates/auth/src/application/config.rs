//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

use platform::cookie::CookieConfig;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session TTL. `None` (the default) means sessions never expire and
    /// live until logout or process restart; `Some(ttl)` enables sliding
    /// expiration where each authorized request re-arms the deadline.
    pub session_ttl: Option<Duration>,
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
            session_cookie_name: "blog_session".to_string(),
            session_secret: [0u8; 32],
            session_ttl: None,
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
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

    /// Session TTL as chrono duration, if configured
    pub fn session_ttl_chrono(&self) -> Option<chrono::Duration> {
        self.session_ttl
            .and_then(|ttl| chrono::Duration::from_std(ttl).ok())
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }

    /// Cookie configuration for the session cookie
    ///
    /// Without a TTL the cookie carries no Max-Age and is browser-session
    /// scoped, matching the in-memory lifetime of the server-side session.
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: self.session_ttl.map(|ttl| ttl.as_secs() as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();
        assert_eq!(config.session_cookie_name, "blog_session");
        assert_eq!(config.session_ttl, None);
        assert!(config.cookie_secure);
        assert_eq!(config.cookie_same_site, SameSite::Lax);
        assert!(config.password_pepper.is_none());
    }

    #[test]
    fn test_with_random_secret() {
        let config1 = AuthConfig::with_random_secret();
        let config2 = AuthConfig::with_random_secret();
        assert_ne!(config1.session_secret, config2.session_secret);
        assert!(config1.session_secret.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_development_config() {
        let config = AuthConfig::development();
        assert!(!config.cookie_secure);
        assert!(config.session_secret.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_session_cookie_without_ttl_has_no_max_age() {
        let cookie = AuthConfig::default().session_cookie();
        assert_eq!(cookie.max_age_secs, None);

        let with_ttl = AuthConfig {
            session_ttl: Some(Duration::from_secs(3600)),
            ..AuthConfig::default()
        };
        assert_eq!(with_ttl.session_cookie().max_age_secs, Some(3600));
    }
}
