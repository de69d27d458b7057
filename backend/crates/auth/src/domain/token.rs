//! Access Token Service
//!
//! Stateless, signed, time-limited bearer tokens. A token is a claim set
//! serialized as JSON, base64url-encoded and HMAC-SHA256 signed with the
//! process-wide secret:
//!
//! ```text
//! base64url(claims JSON) . base64url(HMAC-SHA256(encoded claims))
//! ```
//!
//! Nothing is persisted server-side; a token is valid exactly while its
//! signature verifies and its expiry lies in the future. There is no
//! revocation - logout is a client-side discard.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::sync::Arc;
use uuid::Uuid;

use platform::crypto::{constant_time_eq, from_base64url, to_base64url};

use crate::application::config::AuthConfig;
use crate::domain::value_object::user_id::UserId;

/// Claims carried by an access token
///
/// The subject is the user's UUID: the one identifier that is immutable
/// and never reused, even if the user's email changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject: user UUID
    pub sub: Uuid,
    /// Issuer
    pub iss: String,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

impl AccessClaims {
    /// The subject as a typed user id
    pub fn subject(&self) -> UserId {
        UserId::from_uuid(self.sub)
    }
}

/// Why a token failed validation
///
/// Callers only branch on "invalid"; the variant exists so the gate can
/// log the specific cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token is structurally malformed")]
    Malformed,

    #[error("token signature verification failed")]
    BadSignature,

    #[error("token issuer mismatch")]
    WrongIssuer,

    #[error("token has expired")]
    Expired,
}

/// Issues and validates signed access tokens
///
/// Pure computation over the immutable config; safe to construct per call
/// site or share.
#[derive(Clone)]
pub struct TokenService {
    config: Arc<AuthConfig>,
}

impl TokenService {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Issue a token for the given user, expiring after the configured TTL
    pub fn issue(&self, user_id: &UserId) -> String {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token with an explicit clock (tests, replays)
    pub fn issue_at(&self, user_id: &UserId, now: DateTime<Utc>) -> String {
        let claims = AccessClaims {
            sub: *user_id.as_uuid(),
            iss: self.config.issuer.clone(),
            iat: now.timestamp(),
            exp: now.timestamp() + self.config.token_ttl.as_secs() as i64,
        };

        let payload = to_base64url(
            &serde_json::to_vec(&claims).expect("access claims serialize to JSON"),
        );
        let signature = self.sign(payload.as_bytes());

        format!("{}.{}", payload, to_base64url(&signature))
    }

    /// Validate a token and return its claims
    pub fn validate(&self, token: &str) -> Result<AccessClaims, TokenError> {
        self.validate_at(token, Utc::now())
    }

    /// Validate with an explicit clock
    ///
    /// Order matters: structure, then signature, then claims. The payload
    /// is not parsed before its signature has been verified.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<AccessClaims, TokenError> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 2 {
            return Err(TokenError::Malformed);
        }

        let payload = parts[0];
        let signature = from_base64url(parts[1]).map_err(|_| TokenError::Malformed)?;

        let expected = self.sign(payload.as_bytes());
        if !constant_time_eq(&expected, &signature) {
            return Err(TokenError::BadSignature);
        }

        let claims_json = from_base64url(payload).map_err(|_| TokenError::Malformed)?;
        let claims: AccessClaims =
            serde_json::from_slice(&claims_json).map_err(|_| TokenError::Malformed)?;

        if claims.iss != self.config.issuer {
            return Err(TokenError::WrongIssuer);
        }

        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    fn sign(&self, data: &[u8]) -> Vec<u8> {
        let mut mac = Hmac::<Sha256>::new_from_slice(&self.config.token_secret)
            .expect("HMAC can take key of any size");
        mac.update(data);
        mac.finalize().into_bytes().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn service() -> TokenService {
        TokenService::new(Arc::new(AuthConfig::with_random_secret()))
    }

    #[test]
    fn test_issue_validate_roundtrip() {
        let service = service();
        let user_id = UserId::new();

        let token = service.issue(&user_id);
        let claims = service.validate(&token).unwrap();

        assert_eq!(claims.subject(), user_id);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = service();
        let user_id = UserId::new();

        let issued = Utc::now() - Duration::hours(25);
        let token = service.issue_at(&user_id, issued);

        assert_eq!(service.validate(&token), Err(TokenError::Expired));

        // Still valid just before the 24h boundary
        let almost = issued + Duration::hours(23);
        assert!(service.validate_at(&token, almost).is_ok());
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let service = service();
        let user_id = UserId::new();

        let issued = Utc::now();
        let token = service.issue_at(&user_id, issued);

        let at_expiry = issued + Duration::hours(24);
        assert_eq!(
            service.validate_at(&token, at_expiry),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let service = service();
        let token = service.issue(&UserId::new());

        let (payload, signature) = token.split_once('.').unwrap();
        let mut bytes = payload.as_bytes().to_vec();
        // Flip one character of the encoded claims
        bytes[0] = if bytes[0] == b'A' { b'B' } else { b'A' };
        let tampered = format!("{}.{}", String::from_utf8(bytes).unwrap(), signature);

        assert_eq!(service.validate(&tampered), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let service = service();
        let token = service.issue(&UserId::new());

        let (payload, signature) = token.split_once('.').unwrap();
        let mut bytes = signature.as_bytes().to_vec();
        bytes[0] = if bytes[0] == b'A' { b'B' } else { b'A' };
        let tampered = format!("{}.{}", payload, String::from_utf8(bytes).unwrap());

        let result = service.validate(&tampered);
        assert!(matches!(
            result,
            Err(TokenError::BadSignature) | Err(TokenError::Malformed)
        ));
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let token = service().issue(&UserId::new());
        let other = service();

        assert_eq!(other.validate(&token), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let config = AuthConfig::with_random_secret();
        let mut other_config = config.clone();
        other_config.issuer = "someone-else".to_string();

        // Signed with the same secret but the wrong issuer claim
        let foreign = TokenService::new(Arc::new(other_config));
        let token = foreign.issue(&UserId::new());

        let service = TokenService::new(Arc::new(config));
        assert_eq!(service.validate(&token), Err(TokenError::WrongIssuer));
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        let service = service();

        assert_eq!(service.validate(""), Err(TokenError::Malformed));
        assert_eq!(service.validate("no-dot"), Err(TokenError::Malformed));
        assert_eq!(service.validate("a.b.c"), Err(TokenError::Malformed));
        assert_eq!(
            service.validate("!!bad-base64!!.also-bad"),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_signed_garbage_payload_rejected() {
        let service = service();

        // Correctly signed, but the payload is not a claim set
        let payload = to_base64url(b"{\"not\":\"claims\"}");
        let signature = to_base64url(&service.sign(payload.as_bytes()));
        let token = format!("{}.{}", payload, signature);

        assert_eq!(service.validate(&token), Err(TokenError::Malformed));
    }
}
