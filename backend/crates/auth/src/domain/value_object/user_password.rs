//! User Password Value Object
//!
//! Domain value object for user passwords. The length policy lives here,
//! not in `platform::password`, which only does the cryptographic work.
//!
//! ## Usage
//! ```rust
//! use auth::models::{RawPassword, UserPassword};
//!
//! // Create from user input (policy check happens here)
//! let raw = RawPassword::new("secret1".to_string())?;
//!
//! // Hash for storage
//! let hashed = UserPassword::from_raw(&raw, None)?;
//!
//! // Verify later
//! assert!(hashed.verify(&raw, None));
//! # Ok::<(), kernel::error::app_error::AppError>(())
//! ```

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{ClearTextPassword, HashedPassword, PasswordHashError};
use std::fmt;

/// Minimum password length in characters (signup policy)
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum password length in characters
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Wrapper around `ClearTextPassword` that applies the signup policy.
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password with policy validation
    ///
    /// ## Validation Rules
    /// - At least [`MIN_PASSWORD_LENGTH`] characters
    /// - At most [`MAX_PASSWORD_LENGTH`] characters
    pub fn new(raw: String) -> AppResult<Self> {
        let char_count = raw.chars().count();

        if char_count < MIN_PASSWORD_LENGTH {
            return Err(AppError::bad_request(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            ))
            .with_action("Please choose a longer password"));
        }

        if char_count > MAX_PASSWORD_LENGTH {
            return Err(AppError::bad_request(format!(
                "Password must be at most {} characters",
                MAX_PASSWORD_LENGTH
            ))
            .with_action("Please choose a shorter password"));
        }

        Ok(Self(ClearTextPassword::new(raw)))
    }

    /// Access the inner ClearTextPassword
    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password for database storage
///
/// Stores password in Argon2id PHC string format.
/// Safe to store in database; never serialized into API responses.
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Create from raw password by hashing
    ///
    /// ## Arguments
    /// * `raw` - The validated raw password
    /// * `pepper` - Optional application-wide secret
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AppResult<Self> {
        let hashed = raw.inner().hash(pepper).map_err(|e| match e {
            PasswordHashError::HashingFailed(msg) => {
                AppError::internal(format!("Password hashing failed: {}", msg))
            }
            _ => AppError::internal("Unexpected error during password hashing"),
        })?;

        Ok(Self(hashed))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AppResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string)
            .map_err(|_| AppError::internal("Invalid password hash in database"))?;

        Ok(Self(hashed))
    }

    /// Get PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    ///
    /// Uses constant-time comparison to prevent timing attacks.
    ///
    /// ## Arguments
    /// * `raw` - The raw password to verify
    /// * `pepper` - Must match the pepper used during hashing
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

impl fmt::Display for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HASHED_PASSWORD]")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_password_policy() {
        // Minimum length is 6
        assert!(RawPassword::new("secret".to_string()).is_ok());
        assert!(RawPassword::new("secre".to_string()).is_err());
        assert!(RawPassword::new("".to_string()).is_err());

        // Maximum length
        assert!(RawPassword::new("a".repeat(MAX_PASSWORD_LENGTH)).is_ok());
        assert!(RawPassword::new("a".repeat(MAX_PASSWORD_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, None).unwrap();

        // Correct password should verify
        assert!(hashed.verify(&raw, None));

        // Wrong password should not verify
        let wrong = RawPassword::new("secret2".to_string()).unwrap();
        assert!(!hashed.verify(&wrong, None));
    }

    #[test]
    fn test_hash_with_pepper() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let pepper = b"app_secret_pepper";
        let hashed = UserPassword::from_raw(&raw, Some(pepper)).unwrap();

        // With correct pepper
        assert!(hashed.verify(&raw, Some(pepper)));

        // Without pepper
        assert!(!hashed.verify(&raw, None));

        // With wrong pepper
        assert!(!hashed.verify(&raw, Some(b"wrong")));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, None).unwrap();

        let phc = hashed.as_phc_string().to_string();
        let restored = UserPassword::from_phc_string(phc).unwrap();

        assert!(restored.verify(&raw, None));
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("supersecret".to_string()).unwrap();
        let debug = format!("{:?}", raw);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("supersecret"));

        let hashed = UserPassword::from_raw(&raw, None).unwrap();
        let debug = format!("{:?}", hashed);
        assert!(debug.contains("HASH"));
    }

    #[test]
    fn test_unicode_password() {
        let raw = RawPassword::new("パスワード安全".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, None).unwrap();
        assert!(hashed.verify(&raw, None));
    }
}
