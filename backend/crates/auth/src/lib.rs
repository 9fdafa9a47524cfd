//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - User signup/login with email + password
//! - Signed, time-limited bearer tokens (HMAC-SHA256)
//! - Cookie or `Authentication-Token` header transport
//! - Per-request auth guard resolving the token subject to a user
//! - Profile updates and who-am-i for the resolved subject
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, random salt, optional pepper
//! - Login failures are indistinguishable for unknown email and wrong
//!   password (no account enumeration)
//! - Tokens are stateless; logout discards the client-held credential

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::{TokenError, TokenService};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
