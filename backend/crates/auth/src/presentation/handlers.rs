//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::{
    SignInInput, SignInUseCase, SignUpInput, SignUpUseCase, UpdateProfileInput,
    UpdateProfileUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    AuthResponse, SignInRequest, SignOutResponse, SignUpRequest, UpdateProfileRequest,
    UserResponse,
};
use crate::presentation::middleware::CurrentUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let input = SignUpInput {
        full_name: req.full_name,
        email: req.email,
        password: req.password,
        role: req.role,
    };

    let output = use_case.execute(input).await?;

    let cookie = state.config.cookie_config().build_set_cookie(&output.token);
    let body = AuthResponse::new(&output.user, output.token);

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(body),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/login
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    let cookie = state.config.cookie_config().build_set_cookie(&output.token);
    let body = AuthResponse::new(&output.user, output.token);

    Ok((StatusCode::OK, [(header::SET_COOKIE, cookie)], Json(body)))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /api/auth/logout
///
/// Stateless: tokens carry no server-side session, so signing out only
/// instructs the client to discard its credential by expiring the cookie.
pub async fn sign_out<R>(State(state): State<AuthAppState<R>>) -> impl IntoResponse
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let cookie = state.config.cookie_config().build_delete_cookie();

    tracing::info!("User signed out");

    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(SignOutResponse {
            message: "Logged out successfully".to_string(),
        }),
    )
}

// ============================================================================
// Profile (gated)
// ============================================================================

/// PUT /api/auth/profile
///
/// The subject is the guard-resolved identity, never a client-supplied id.
pub async fn update_profile<R>(
    State(state): State<AuthAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Json(req): Json<UpdateProfileRequest>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateProfileUseCase::new(state.repo.clone());

    let input = UpdateProfileInput {
        avatar_url: req.avatar_url.unwrap_or_default(),
        full_name: req.full_name,
    };

    let user = use_case.execute(&current.user.user_id, input).await?;

    Ok(Json(UserResponse::from(&user)))
}

// ============================================================================
// Who Am I (gated)
// ============================================================================

/// GET /api/auth/whoami
pub async fn who_am_i(Extension(current): Extension<CurrentUser>) -> Json<UserResponse> {
    Json(UserResponse::from(&current.user))
}
