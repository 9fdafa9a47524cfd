//! Session Store
//!
//! Process-wide cache of the current login state. Fields are private;
//! mutation happens only through the explicit entry points (`set_login`,
//! `set_token`, `clear`), so the `logged_in`/token invariant cannot be
//! broken from outside.
//!
//! Initialization policy: `logged_in` is always derived from the presence
//! of a persisted token, never hardcoded.

use serde::{Deserialize, Serialize};

/// Snapshot of a session as persisted by the host application between runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub token: String,
    pub email: String,
    pub role: String,
    pub id: String,
}

/// Identity fields confirmed by a successful signup/login response
#[derive(Debug, Clone)]
pub struct SessionIdentity {
    pub token: String,
    pub email: String,
    pub role: String,
    pub id: String,
}

/// Client-side session state
///
/// Single-writer by design: navigation and fetch callbacks mutate it
/// sequentially, so there is no internal locking.
#[derive(Debug, Default)]
pub struct SessionStore {
    logged_in: bool,
    token: Option<String>,
    email: Option<String>,
    role: Option<String>,
    id: Option<String>,
}

impl SessionStore {
    /// Create a logged-out store
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize from a previously persisted session at application start.
    ///
    /// `logged_in` derives from token presence; an absent snapshot means
    /// logged out.
    pub fn from_persisted(persisted: Option<PersistedSession>) -> Self {
        match persisted {
            Some(p) if !p.token.is_empty() => {
                tracing::debug!("Session restored from persisted token");
                Self {
                    logged_in: true,
                    token: Some(p.token),
                    email: Some(p.email),
                    role: Some(p.role),
                    id: Some(p.id),
                }
            }
            _ => Self::new(),
        }
    }

    /// Record a successful signup/login response
    pub fn set_login(&mut self, identity: SessionIdentity) {
        self.logged_in = true;
        self.token = Some(identity.token);
        self.email = Some(identity.email);
        self.role = Some(identity.role);
        self.id = Some(identity.id);
    }

    /// Replace the cached token (e.g. after a refresh response)
    pub fn set_token(&mut self, token: String) {
        self.logged_in = !token.is_empty();
        self.token = if token.is_empty() { None } else { Some(token) };
    }

    /// Drop all session state (logout)
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Snapshot for persistence, or `None` when logged out
    pub fn to_persisted(&self) -> Option<PersistedSession> {
        Some(PersistedSession {
            token: self.token.clone()?,
            email: self.email.clone().unwrap_or_default(),
            role: self.role.clone().unwrap_or_default(),
            id: self.id.clone().unwrap_or_default(),
        })
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> SessionIdentity {
        SessionIdentity {
            token: "tok-1".to_string(),
            email: "a@x.com".to_string(),
            role: "user".to_string(),
            id: "abc123".to_string(),
        }
    }

    #[test]
    fn test_new_store_is_logged_out() {
        let store = SessionStore::new();
        assert!(!store.is_logged_in());
        assert!(store.token().is_none());
        assert!(store.to_persisted().is_none());
    }

    #[test]
    fn test_logged_in_derives_from_persisted_token() {
        let store = SessionStore::from_persisted(Some(PersistedSession {
            token: "tok-1".to_string(),
            email: "a@x.com".to_string(),
            role: "user".to_string(),
            id: "abc123".to_string(),
        }));
        assert!(store.is_logged_in());
        assert_eq!(store.token(), Some("tok-1"));
        assert_eq!(store.email(), Some("a@x.com"));

        // No snapshot, or an empty token, means logged out
        assert!(!SessionStore::from_persisted(None).is_logged_in());
        let empty = SessionStore::from_persisted(Some(PersistedSession {
            token: String::new(),
            email: String::new(),
            role: String::new(),
            id: String::new(),
        }));
        assert!(!empty.is_logged_in());
    }

    #[test]
    fn test_set_login() {
        let mut store = SessionStore::new();
        store.set_login(identity());

        assert!(store.is_logged_in());
        assert_eq!(store.token(), Some("tok-1"));
        assert_eq!(store.role(), Some("user"));
        assert_eq!(store.id(), Some("abc123"));
    }

    #[test]
    fn test_clear_drops_token_and_flag_together() {
        let mut store = SessionStore::new();
        store.set_login(identity());

        store.clear();
        assert!(!store.is_logged_in());
        assert!(store.token().is_none());
        assert!(store.email().is_none());
    }

    #[test]
    fn test_set_token_tracks_flag() {
        let mut store = SessionStore::new();
        store.set_token("tok-2".to_string());
        assert!(store.is_logged_in());

        store.set_token(String::new());
        assert!(!store.is_logged_in());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_persist_roundtrip() {
        let mut store = SessionStore::new();
        store.set_login(identity());

        let snapshot = store.to_persisted().unwrap();
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: PersistedSession = serde_json::from_str(&json).unwrap();

        let store = SessionStore::from_persisted(Some(restored));
        assert!(store.is_logged_in());
        assert_eq!(store.token(), Some("tok-1"));
    }
}
