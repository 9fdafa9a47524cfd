//! User Entity
//!
//! Identity record: immutable ids, unique email, salted password hash,
//! role set at signup, and the updatable profile attributes.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, full_name::FullName, public_id::PublicId, user_id::UserId,
    user_password::UserPassword, user_role::UserRole,
};

/// User entity
///
/// The password hash travels with the entity but never reaches a
/// client-facing DTO; sanitization happens at the presentation layer
/// by construction (the DTOs have no field for it).
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier, immutable
    pub user_id: UserId,
    /// Public-facing nanoid identifier (URL-safe), immutable
    pub public_id: PublicId,
    /// Email (unique, lowercased)
    pub email: Email,
    /// Argon2id password hash
    pub password_hash: UserPassword,
    /// Role (User, Admin); set at signup, immutable thereafter
    pub role: UserRole,
    /// Display name
    pub full_name: FullName,
    /// Avatar reference (opaque URL), updatable
    pub avatar_url: Option<String>,
    /// Last successful login time
    pub last_login_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(
        email: Email,
        password_hash: UserPassword,
        role: UserRole,
        full_name: FullName,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            public_id: PublicId::new(),
            email,
            password_hash,
            role,
            full_name,
            avatar_url: None,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record successful login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }

    /// Update the avatar reference
    pub fn set_avatar(&mut self, avatar_url: String) {
        self.avatar_url = Some(avatar_url);
        self.updated_at = Utc::now();
    }

    /// Update the display name
    pub fn set_full_name(&mut self, full_name: FullName) {
        self.full_name = full_name;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;

    fn sample_user() -> User {
        let raw = RawPassword::new("secret1".to_string()).unwrap();
        User::new(
            Email::new("a@x.com").unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
            UserRole::default(),
            FullName::new("Ada Lovelace").unwrap(),
        )
    }

    #[test]
    fn test_new_user_defaults() {
        let user = sample_user();
        assert_eq!(user.role, UserRole::User);
        assert!(user.avatar_url.is_none());
        assert!(user.last_login_at.is_none());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_record_login_sets_timestamp() {
        let mut user = sample_user();
        user.record_login();
        assert!(user.last_login_at.is_some());
        assert!(user.updated_at >= user.created_at);
    }

    #[test]
    fn test_set_avatar() {
        let mut user = sample_user();
        user.set_avatar("https://cdn.example.com/a.png".to_string());
        assert_eq!(
            user.avatar_url.as_deref(),
            Some("https://cdn.example.com/a.png")
        );
    }
}
