//! Sign Up Use Case
//!
//! Creates a new user account and issues its first token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    full_name::FullName,
    user_password::{RawPassword, UserPassword},
    user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
    /// Optional role code; defaults to "user"
    pub role: Option<String>,
}

/// Sign up output
pub struct SignUpOutput {
    pub user: User,
    pub token: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<R> SignUpUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, tokens: Arc<TokenService>, config: Arc<AuthConfig>) -> Self {
        Self {
            repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        // All of full name, email and password must be present
        if input.full_name.trim().is_empty()
            || input.email.trim().is_empty()
            || input.password.is_empty()
        {
            return Err(AuthError::Validation("All fields are required".to_string()));
        }

        let full_name = FullName::new(input.full_name)?;
        let email = Email::new(input.email)?;

        let role = match input.role.as_deref() {
            None | Some("") => UserRole::default(),
            Some(code) => UserRole::parse(code)?,
        };

        // Length policy lives here, not in the hasher
        let raw_password = RawPassword::new(input.password)?;

        // Friendly pre-check; the store's unique constraint is the authority
        // under concurrent signups and also surfaces EmailTaken.
        if self.repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(email, password_hash, role, full_name);

        self.repo.create(&user).await?;

        let token = self.tokens.issue(&user.user_id);

        tracing::info!(
            public_id = %user.public_id,
            role = %user.role,
            "User signed up"
        );

        Ok(SignUpOutput { user, token })
    }
}
