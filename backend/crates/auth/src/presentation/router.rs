//! Auth Router

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthGuardState, require_auth};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let repo = Arc::new(repo);
    let tokens = Arc::new(TokenService::from_config(&config));
    let config = Arc::new(config);

    let state = AuthAppState {
        repo: repo.clone(),
        tokens: tokens.clone(),
        config: config.clone(),
    };

    let guard = AuthGuardState {
        repo,
        tokens,
        config,
    };

    // Gated endpoints short-circuit at the guard before any handler runs
    let gated = Router::new()
        .route("/profile", put(handlers::update_profile::<R>))
        .route("/whoami", get(handlers::who_am_i))
        .route_layer(middleware::from_fn(
            move |req: Request<Body>, next: Next| {
                let guard = guard.clone();
                async move { require_auth(guard, req, next).await }
            },
        ));

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/login", post(handlers::sign_in::<R>))
        .route("/logout", post(handlers::sign_out::<R>))
        .merge(gated)
        .with_state(state)
}
