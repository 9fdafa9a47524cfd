//! Auth Guard Middleware
//!
//! Per-request authorization: extract a token, verify it, resolve the
//! subject to a user, and attach the identity to the request. There is no
//! cross-request state; every gated endpoint passes through here before
//! any controller logic runs.

use axum::body::Body;
use axum::http::{HeaderMap, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthError;

/// Header accepted as an alternative to the token cookie
pub const AUTH_TOKEN_HEADER: &str = "Authentication-Token";

/// Guard state
#[derive(Clone)]
pub struct AuthGuardState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<AuthConfig>,
}

/// Identity attached to the request by the guard
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
}

/// Extract the presented token: cookie first, then the
/// `Authentication-Token` header.
pub fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    platform::cookie::extract_cookie(headers, cookie_name).or_else(|| {
        headers
            .get(AUTH_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    })
}

/// Middleware that requires a valid token and a live subject
///
/// State machine per request:
/// no token → 401; invalid/expired/forged token → 401 (never 500);
/// valid token but subject gone → 404; otherwise the sanitized identity
/// is attached as [`CurrentUser`] and the request continues.
pub async fn require_auth<R>(
    state: AuthGuardState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = extract_token(req.headers(), &state.config.cookie_name)
        .ok_or_else(|| AuthError::Unauthorized.into_response())?;

    let subject = state.tokens.verify(&token).map_err(|e| {
        tracing::debug!(error = %e, "Token verification failed");
        AuthError::from(e).into_response()
    })?;

    let user = state
        .repo
        .find_by_id(&subject)
        .await
        .map_err(|e| e.into_response())?
        .ok_or_else(|| AuthError::UserNotFound.into_response())?;

    req.extensions_mut().insert(CurrentUser { user });

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_token_prefers_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_static("auth_token=from-cookie"),
        );
        headers.insert(
            "Authentication-Token",
            HeaderValue::from_static("from-header"),
        );

        assert_eq!(
            extract_token(&headers, "auth_token"),
            Some("from-cookie".to_string())
        );
    }

    #[test]
    fn test_extract_token_falls_back_to_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Authentication-Token",
            HeaderValue::from_static("from-header"),
        );

        assert_eq!(
            extract_token(&headers, "auth_token"),
            Some("from-header".to_string())
        );
    }

    #[test]
    fn test_extract_token_none() {
        let headers = HeaderMap::new();
        assert_eq!(extract_token(&headers, "auth_token"), None);
    }
}
