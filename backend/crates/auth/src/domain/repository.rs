//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::AuthResult;

/// User repository trait
///
/// Email uniqueness is the store's responsibility: `create` must fail
/// atomically with `AuthError::EmailTaken` when the email is already
/// registered, even under concurrent signups. Callers may pre-check with
/// `exists_by_email` for a friendlier error, but the constraint is the
/// authority.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by email (normalized form)
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Check if email is registered
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    /// Update user
    async fn update(&self, user: &User) -> AuthResult<()>;
}
