//! Full Name Value Object
//!
//! Display name supplied at signup and updatable through the profile.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum full name length in characters
const FULL_NAME_MAX_LENGTH: usize = 100;

/// Validated display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullName(String);

impl FullName {
    /// Create a new full name with validation
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into().trim().to_string();

        if name.is_empty() {
            return Err(AppError::bad_request("Full name cannot be empty"));
        }

        if name.chars().count() > FULL_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Full name must be at most {} characters",
                FULL_NAME_MAX_LENGTH
            )));
        }

        if name.chars().any(|c| c.is_control()) {
            return Err(AppError::bad_request(
                "Full name contains invalid characters",
            ));
        }

        Ok(Self(name))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FullName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_valid() {
        assert!(FullName::new("Ada Lovelace").is_ok());
        assert!(FullName::new("山田 太郎").is_ok());
    }

    #[test]
    fn test_full_name_trimmed() {
        let name = FullName::new("  Ada Lovelace  ").unwrap();
        assert_eq!(name.as_str(), "Ada Lovelace");
    }

    #[test]
    fn test_full_name_invalid() {
        assert!(FullName::new("").is_err());
        assert!(FullName::new("   ").is_err());
        assert!(FullName::new("a\u{0007}b").is_err());
        assert!(FullName::new("x".repeat(FULL_NAME_MAX_LENGTH + 1)).is_err());
    }
}
