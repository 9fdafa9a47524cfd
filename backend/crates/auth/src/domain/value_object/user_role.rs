use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role assigned at signup. Immutable for the lifetime of the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum UserRole {
    #[default]
    User = 0,
    Admin = 1,
}

impl UserRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Restore from a database id. The column is constrained, so an
    /// unknown id is data corruption, not bad input.
    #[inline]
    pub fn from_id(id: i16) -> Self {
        match id {
            0 => UserRole::User,
            1 => UserRole::Admin,
            _ => {
                tracing::error!("Invalid UserRole id: {}", id);
                unreachable!("Invalid UserRole id: {}", id)
            }
        }
    }

    /// Parse a role code from client input
    #[inline]
    pub fn parse(code: &str) -> AppResult<Self> {
        match code {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            _ => Err(AppError::bad_request(format!("Invalid role: {}", code))),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_from_id() {
        assert_eq!(UserRole::from_id(0), UserRole::User);
        assert_eq!(UserRole::from_id(1), UserRole::Admin);
    }

    #[test]
    fn test_user_role_parse() {
        assert_eq!(UserRole::parse("user").unwrap(), UserRole::User);
        assert_eq!(UserRole::parse("admin").unwrap(), UserRole::Admin);
        assert!(UserRole::parse("root").is_err());
    }

    #[test]
    fn test_user_role_display() {
        assert_eq!(UserRole::User.to_string(), "user");
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }

    #[test]
    fn test_user_role_checks() {
        assert!(!UserRole::User.is_admin());
        assert!(UserRole::Admin.is_admin());
    }

    #[test]
    fn test_default_is_user() {
        assert_eq!(UserRole::default(), UserRole::User);
    }
}
