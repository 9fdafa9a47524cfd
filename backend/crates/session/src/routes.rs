//! Route Table
//!
//! Static table mapping path patterns to view identifiers plus the
//! `requires_auth` metadata flag consulted by the route guard. No view
//! component references live here, only identifiers.

/// View identifiers known to the client application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Home,
    Login,
    Signup,
    Profile,
}

/// One route table entry
#[derive(Debug, Clone, Copy)]
pub struct RouteSpec {
    pub path: &'static str,
    pub view: ViewId,
    pub requires_auth: bool,
}

/// The application route table
pub const ROUTES: &[RouteSpec] = &[
    RouteSpec {
        path: "/",
        view: ViewId::Home,
        requires_auth: false,
    },
    RouteSpec {
        path: "/login",
        view: ViewId::Login,
        requires_auth: false,
    },
    RouteSpec {
        path: "/signup",
        view: ViewId::Signup,
        requires_auth: false,
    },
    RouteSpec {
        path: "/profile",
        view: ViewId::Profile,
        requires_auth: true,
    },
];

/// Look up a route by exact path
pub fn find_route(path: &str) -> Option<&'static RouteSpec> {
    ROUTES.iter().find(|r| r.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_route() {
        assert_eq!(find_route("/").unwrap().view, ViewId::Home);
        assert_eq!(find_route("/profile").unwrap().view, ViewId::Profile);
        assert!(find_route("/missing").is_none());
    }

    #[test]
    fn test_gated_flags() {
        assert!(!find_route("/login").unwrap().requires_auth);
        assert!(!find_route("/signup").unwrap().requires_auth);
        assert!(find_route("/profile").unwrap().requires_auth);
    }
}
