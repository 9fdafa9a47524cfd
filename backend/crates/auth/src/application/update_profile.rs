//! Update Profile Use Case
//!
//! Updates profile attributes for the guard-resolved subject. The subject
//! id always comes from the auth guard, never from the request body.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{full_name::FullName, user_id::UserId};
use crate::error::{AuthError, AuthResult};

/// Update profile input
pub struct UpdateProfileInput {
    /// New avatar reference. Required.
    pub avatar_url: String,
    /// Optional display-name change
    pub full_name: Option<String>,
}

/// Update profile use case
pub struct UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, subject: &UserId, input: UpdateProfileInput) -> AuthResult<User> {
        let avatar_url = input.avatar_url.trim();
        if avatar_url.is_empty() {
            return Err(AuthError::Validation("Avatar is required".to_string()));
        }

        let mut user = self
            .repo
            .find_by_id(subject)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if let Some(name) = input.full_name {
            user.set_full_name(FullName::new(name)?);
        }

        user.set_avatar(avatar_url.to_string());

        self.repo.update(&user).await?;

        tracing::info!(public_id = %user.public_id, "Profile updated");

        Ok(user)
    }
}
