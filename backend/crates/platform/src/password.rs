//! Password Hashing and Verification
//!
//! Argon2id hashing with:
//! - Random 128-bit salt per hash
//! - Zeroization of plaintext material
//! - Constant-time comparison on verify
//! - Optional pepper (application-wide secret) support
//!
//! This module is deliberately policy-free: it accepts any plaintext and
//! never rejects input for length or content. Input policy (minimum length,
//! required fields) is enforced by the calling domain, not here. Hashing
//! itself does not fail under normal operation; a [`PasswordHashError`] is a
//! configuration-level fault.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Error Types
// ============================================================================

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// This type ensures that password data is securely erased from memory
/// when the value is dropped, preventing memory inspection attacks.
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
/// - Unicode is normalized with NFKC so the same visible password always
///   hashes to the same byte sequence
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap a plaintext password, normalizing it with Unicode NFKC.
    ///
    /// No policy is applied here; callers validate length and content
    /// before constructing this type.
    pub fn new(raw: String) -> Self {
        let normalized: String = raw.nfkc().collect();
        Self(normalized)
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id
    ///
    /// ## Arguments
    /// * `pepper` - Optional application-wide secret for additional security
    ///
    /// ## Returns
    /// PHC-formatted hash string wrapped in `HashedPassword`
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = match pepper {
            Some(p) => {
                let mut combined = self.as_bytes().to_vec();
                combined.extend_from_slice(p);
                combined
            }
            None => self.as_bytes().to_vec(),
        };

        // Random salt, 128 bits
        let salt = SaltString::generate(OsRng);

        // OWASP recommended Argon2id parameters:
        // m=19456 (19 MiB), t=2, p=1
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// This type stores the Argon2id hash in PHC format, which includes:
/// - Algorithm identifier
/// - Version
/// - Parameters (memory, iterations, parallelism)
/// - Salt
/// - Hash
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        // Validate it's a valid PHC string
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// Uses constant-time comparison to prevent timing attacks.
    /// A malformed stored hash verifies false rather than erroring.
    ///
    /// ## Arguments
    /// * `password` - The clear text password to verify
    /// * `pepper` - Optional pepper (must match the one used during hashing)
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let password_bytes = match pepper {
            Some(p) => {
                let mut combined = password.as_bytes().to_vec();
                combined.extend_from_slice(p);
                combined
            }
            None => password.as_bytes().to_vec(),
        };

        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        let argon2 = Argon2::default();

        // Argon2 uses constant-time comparison internally
        argon2
            .verify_password(&password_bytes, &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("TestPassword123!".to_string());
        let hashed = password.hash(None).unwrap();

        // Correct password should verify
        assert!(hashed.verify(&password, None));

        // Wrong password should not verify
        let wrong_password = ClearTextPassword::new("WrongPassword123!".to_string());
        assert!(!hashed.verify(&wrong_password, None));
    }

    #[test]
    fn test_no_policy_applied() {
        // Short and even empty plaintexts hash fine; policy is the caller's job
        let short = ClearTextPassword::new("a".to_string());
        let hashed = short.hash(None).unwrap();
        assert!(hashed.verify(&short, None));

        let empty = ClearTextPassword::new(String::new());
        assert!(empty.hash(None).is_ok());
    }

    #[test]
    fn test_hash_with_pepper() {
        let password = ClearTextPassword::new("TestPassword123!".to_string());
        let pepper = b"my_secret_pepper";
        let hashed = password.hash(Some(pepper)).unwrap();

        // Correct password with correct pepper
        assert!(hashed.verify(&password, Some(pepper)));

        // Correct password without pepper should fail
        assert!(!hashed.verify(&password, None));

        // Correct password with wrong pepper should fail
        assert!(!hashed.verify(&password, Some(b"wrong_pepper")));
    }

    #[test]
    fn test_unicode_normalization() {
        // Composed and decomposed forms of the same text verify against
        // the same hash after NFKC normalization
        let composed = ClearTextPassword::new("pa\u{00e9}ssword".to_string());
        let decomposed = ClearTextPassword::new("pae\u{0301}ssword".to_string());

        let hashed = composed.hash(None).unwrap();
        assert!(hashed.verify(&decomposed, None));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = ClearTextPassword::new("TestPassword123!".to_string());
        let hashed = password.hash(None).unwrap();

        let phc_string = hashed.as_phc_string().to_string();
        let restored = HashedPassword::from_phc_string(phc_string).unwrap();

        assert!(restored.verify(&password, None));
    }

    #[test]
    fn test_invalid_phc_string() {
        let result = HashedPassword::from_phc_string("not_a_valid_hash");
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_stored_hash_verifies_false() {
        let hashed = HashedPassword {
            hash: "garbage".to_string(),
        };
        let password = ClearTextPassword::new("whatever".to_string());
        assert!(!hashed.verify(&password, None));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }

    #[test]
    fn test_salts_differ() {
        let password = ClearTextPassword::new("TestPassword123!".to_string());
        let a = password.hash(None).unwrap();
        let b = password.hash(None).unwrap();
        assert_ne!(a.as_phc_string(), b.as_phc_string());
    }
}
