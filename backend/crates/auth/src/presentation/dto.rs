//! API DTOs (Data Transfer Objects)
//!
//! Client-facing request/response shapes. Responses are sanitized by
//! construction: there is no password field to leak.

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
///
/// Fields default to empty so missing keys surface as a validation error
/// from the use case, not a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: Option<String>,
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// ============================================================================
// Profile
// ============================================================================

/// Update profile request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Successful signup/login response: identity plus the bearer token
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub id: String,
    pub email: String,
    pub role: String,
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub token: String,
}

impl AuthResponse {
    pub fn new(user: &User, token: String) -> Self {
        Self {
            id: user.public_id.to_string(),
            email: user.email.to_string(),
            role: user.role.code().to_string(),
            full_name: user.full_name.to_string(),
            avatar_url: user.avatar_url.clone(),
            token,
        }
    }
}

/// Sanitized user record (profile update, who-am-i)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub role: String,
    pub full_name: String,
    pub avatar_url: Option<String>,
    pub last_login_at_ms: Option<i64>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.public_id.to_string(),
            email: user.email.to_string(),
            role: user.role.code().to_string(),
            full_name: user.full_name.to_string(),
            avatar_url: user.avatar_url.clone(),
            last_login_at_ms: user.last_login_at.map(|t| t.timestamp_millis()),
        }
    }
}

/// Sign out response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignOutResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        Email, FullName, RawPassword, UserPassword, UserRole,
    };

    #[test]
    fn test_responses_never_carry_password_material() {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        let user = User::new(
            Email::new("a@x.com").unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
            UserRole::User,
            FullName::new("Ada").unwrap(),
        );

        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["email"], "a@x.com");

        let json = serde_json::to_value(AuthResponse::new(&user, "tok".into())).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["token"], "tok");
    }

    #[test]
    fn test_signup_request_missing_fields_deserialize() {
        // Missing keys become empty values, validated downstream
        let req: SignUpRequest = serde_json::from_str("{}").unwrap();
        assert!(req.full_name.is_empty());
        assert!(req.email.is_empty());
        assert!(req.password.is_empty());
        assert!(req.role.is_none());
    }
}
