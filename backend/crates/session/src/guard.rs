//! Route Guard
//!
//! Consulted before each navigation. If the destination requires login and
//! the session store says logged out, the navigation is redirected to the
//! login view. Advisory UX only; the server-side auth guard is the real
//! authorization boundary.

use crate::routes::{ROUTES, RouteSpec, ViewId};
use crate::store::SessionStore;

/// Navigation decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Render the resolved view
    Proceed(ViewId),
    /// Destination is gated and the session is logged out
    RedirectToLogin,
    /// No route matches the path
    NotFound,
}

/// Route guard over a static route table
#[derive(Debug, Clone, Copy)]
pub struct RouteGuard {
    routes: &'static [RouteSpec],
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self { routes: ROUTES }
    }
}

impl RouteGuard {
    pub fn new(routes: &'static [RouteSpec]) -> Self {
        Self { routes }
    }

    /// Decide what to do with a navigation request
    pub fn resolve(&self, path: &str, session: &SessionStore) -> Navigation {
        let Some(route) = self.routes.iter().find(|r| r.path == path) else {
            return Navigation::NotFound;
        };

        if route.requires_auth && !session.is_logged_in() {
            tracing::debug!(path, "Gated navigation while logged out, redirecting");
            return Navigation::RedirectToLogin;
        }

        Navigation::Proceed(route.view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SessionIdentity;

    fn logged_in_store() -> SessionStore {
        let mut store = SessionStore::new();
        store.set_login(SessionIdentity {
            token: "tok-1".to_string(),
            email: "a@x.com".to_string(),
            role: "user".to_string(),
            id: "abc123".to_string(),
        });
        store
    }

    #[test]
    fn test_open_route_always_proceeds() {
        let guard = RouteGuard::default();
        let logged_out = SessionStore::new();

        assert_eq!(
            guard.resolve("/", &logged_out),
            Navigation::Proceed(ViewId::Home)
        );
        assert_eq!(
            guard.resolve("/login", &logged_out),
            Navigation::Proceed(ViewId::Login)
        );
    }

    #[test]
    fn test_gated_route_redirects_when_logged_out() {
        let guard = RouteGuard::default();
        let logged_out = SessionStore::new();

        assert_eq!(
            guard.resolve("/profile", &logged_out),
            Navigation::RedirectToLogin
        );
    }

    #[test]
    fn test_gated_route_proceeds_when_logged_in() {
        let guard = RouteGuard::default();
        let store = logged_in_store();

        assert_eq!(
            guard.resolve("/profile", &store),
            Navigation::Proceed(ViewId::Profile)
        );
    }

    #[test]
    fn test_unknown_route_is_not_found() {
        let guard = RouteGuard::default();
        assert_eq!(
            guard.resolve("/nope", &SessionStore::new()),
            Navigation::NotFound
        );
    }

    #[test]
    fn test_logout_gates_again() {
        let guard = RouteGuard::default();
        let mut store = logged_in_store();

        assert_eq!(
            guard.resolve("/profile", &store),
            Navigation::Proceed(ViewId::Profile)
        );

        store.clear();
        assert_eq!(
            guard.resolve("/profile", &store),
            Navigation::RedirectToLogin
        );
    }
}
