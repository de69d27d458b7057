//! Application Configuration
//!
//! Configuration for the Auth application layer. Loaded once at startup
//! into an immutable value and passed by reference into the token service
//! and use cases - there is no ambient/global lookup.

use std::time::Duration;

/// Length of the token signing secret in bytes (HMAC-SHA256 key)
pub const TOKEN_SECRET_LEN: usize = 32;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret key for HMAC-SHA256 token signing (32 bytes)
    pub token_secret: [u8; TOKEN_SECRET_LEN],
    /// Access token lifetime (24 hours)
    pub token_ttl: Duration,
    /// Issuer claim stamped into and required of every token
    pub issuer: String,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; TOKEN_SECRET_LEN],
            token_ttl: Duration::from_secs(24 * 3600), // 24 hours
            issuer: "campus-map-api".to_string(),
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        let bytes = platform::crypto::random_bytes(TOKEN_SECRET_LEN);
        let mut secret = [0u8; TOKEN_SECRET_LEN];
        secret.copy_from_slice(&bytes);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Create config from an externally supplied secret
    ///
    /// Fails when the secret is shorter than the HMAC-SHA256 security
    /// parameter; startup is expected to abort on that error.
    pub fn from_secret(secret: &[u8]) -> Result<Self, String> {
        if secret.len() < TOKEN_SECRET_LEN {
            return Err(format!(
                "token secret must be at least {} bytes, got {}",
                TOKEN_SECRET_LEN,
                secret.len()
            ));
        }
        let mut key = [0u8; TOKEN_SECRET_LEN];
        key.copy_from_slice(&secret[..TOKEN_SECRET_LEN]);
        Ok(Self {
            token_secret: key,
            ..Default::default()
        })
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
