//! Sign In Use Case
//!
//! Authenticates a user and issues a fresh token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    pub user: User,
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: Arc<TokenService>,
    config: Arc<AuthConfig>,
}

impl<R> SignInUseCase<R>
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

    /// Authenticate with email + password.
    ///
    /// Every failure on this path collapses to `InvalidCredentials`: an
    /// unparsable email, an unknown email and a wrong password must be
    /// indistinguishable in the response.
    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !user
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(AuthError::InvalidCredentials);
        }

        let mut user = user;
        user.record_login();
        self.repo.update(&user).await?;

        let token = self.tokens.issue(&user.user_id);

        tracing::info!(public_id = %user.public_id, "User signed in");

        Ok(SignInOutput { user, token })
    }
}
