//! Client Session Module
//!
//! Client-side view of the auth state for applications consuming the auth
//! API:
//! - `store` holds a single owned [`SessionStore`] instance with explicit
//!   mutation entry points, injected into the views that need it
//! - `routes` is a static table mapping path patterns to view identifiers
//!   plus a `requires_auth` flag
//! - `guard` consults the store before navigation and redirects to the
//!   login view when a gated destination is requested while logged out
//!
//! The store is advisory: `logged_in` mirrors what the server last
//! confirmed, and the server-side auth guard remains the authority on
//! every request.

pub mod guard;
pub mod routes;
pub mod store;

pub use guard::{Navigation, RouteGuard};
pub use routes::{ROUTES, RouteSpec, ViewId, find_route};
pub use store::{PersistedSession, SessionIdentity, SessionStore};
