//! Token Service
//!
//! Issues and verifies signed, time-limited bearer tokens. A token binds a
//! subject id and an expiry under an HMAC-SHA256 signature:
//!
//! ```text
//! {subject_uuid}.{expires_at_ms}.{base64url(hmac_sha256(secret, payload))}
//! ```
//!
//! Issue and verify are pure functions of their inputs plus the signing
//! secret, so the service is safe to share across request handlers without
//! synchronization. There is no server-side revocation: a token stays valid
//! until its expiry, and logout only discards the client-held copy.

use std::fmt;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::value_object::user_id::UserId;

type HmacSha256 = Hmac<Sha256>;

/// Typed verification failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Wrong shape, undecodable signature, or unparsable subject/expiry
    #[error("Token is malformed")]
    Malformed,

    /// Signature is valid but the expiry has elapsed
    #[error("Token has expired")]
    Expired,

    /// Signature does not match the payload
    #[error("Token signature mismatch")]
    BadSignature,
}

/// Token issue/verify service
#[derive(Clone)]
pub struct TokenService {
    secret: [u8; 32],
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: [u8; 32], ttl: Duration) -> Self {
        Self { secret, ttl }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.token_secret, config.token_ttl)
    }

    /// Issue a signed token for the subject, expiring after the
    /// configured TTL.
    pub fn issue(&self, subject: &UserId) -> String {
        let expires_at_ms = Utc::now().timestamp_millis() + self.ttl.as_millis() as i64;
        self.issue_with_expiry(subject, expires_at_ms)
    }

    /// Issue a token with an explicit expiry. Exposed to the crate so
    /// tests can mint already-expired tokens.
    pub(crate) fn issue_with_expiry(&self, subject: &UserId, expires_at_ms: i64) -> String {
        let payload = format!("{}.{}", subject.as_uuid(), expires_at_ms);
        let signature = self.sign(payload.as_bytes());
        format!("{}.{}", payload, URL_SAFE_NO_PAD.encode(signature))
    }

    /// Verify a presented token and resolve its subject.
    ///
    /// The signature is checked before the expiry so that a tampered
    /// expiry field reads as a forgery, not as an expired token.
    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(TokenError::Malformed);
        }
        let (subject_str, expiry_str, signature_b64) = (parts[0], parts[1], parts[2]);

        let payload = format!("{}.{}", subject_str, expiry_str);

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| TokenError::Malformed)?;

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::BadSignature)?;

        let expires_at_ms: i64 = expiry_str.parse().map_err(|_| TokenError::Malformed)?;
        if Utc::now().timestamp_millis() > expires_at_ms {
            return Err(TokenError::Expired);
        }

        let subject: Uuid = subject_str.parse().map_err(|_| TokenError::Malformed)?;
        Ok(UserId::from_uuid(subject))
    }

    fn sign(&self, payload: &[u8]) -> [u8; 32] {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload);
        mac.finalize().into_bytes().into()
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}
