//! # Session persistence on an abstract key-value store
//!
//! The login page and the gallery page never talk to each other directly; they
//! only share two string entries in durable storage, `userId` and `token`.
//! [`SessionStore`] owns that contract. All reads and writes go through the
//! [`KeyValueStore`] trait, so the same logic works against `localStorage` in
//! the browser ([`crate::LocalStore`]), a directory on disk
//! ([`crate::FileStore`]), or memory ([`crate::MemoryStore`]).
//!
//! A session is *active* when either key holds a non-empty value. There is no
//! expiry: the session lasts until [`SessionStore::clear`] removes both keys.

use crate::models::Session;

/// Key holding the authenticated user's id.
pub const USER_ID_KEY: &str = "userId";
/// Key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Synchronous string key-value storage.
///
/// Implementations swallow backend failures: a failed read is `None`, a failed
/// write leaves the store unchanged.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The persisted login session backed by a [`KeyValueStore`].
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// True iff at least one of the two keys holds a non-empty value.
    pub fn is_active(&self) -> bool {
        self.user_id().is_some() || self.token().is_some()
    }

    pub fn user_id(&self) -> Option<String> {
        self.non_empty(USER_ID_KEY)
    }

    pub fn token(&self) -> Option<String> {
        self.non_empty(TOKEN_KEY)
    }

    /// The full session, when both halves are present.
    pub fn load(&self) -> Option<Session> {
        Some(Session {
            user_id: self.user_id()?,
            token: self.token()?,
        })
    }

    /// Persist `session` unless a session is already active.
    ///
    /// Returns whether anything was written.
    pub fn save_if_absent(&self, session: &Session) -> bool {
        if self.is_active() {
            tracing::debug!("Session already active, keeping stored identity");
            return false;
        }
        self.store.set(USER_ID_KEY, &session.user_id);
        self.store.set(TOKEN_KEY, &session.token);
        true
    }

    /// Remove both keys (logout).
    pub fn clear(&self) {
        self.store.remove(USER_ID_KEY);
        self.store.remove(TOKEN_KEY);
    }

    fn non_empty(&self, key: &str) -> Option<String> {
        self.store.get(key).filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn session(user_id: &str, token: &str) -> Session {
        Session {
            user_id: user_id.to_string(),
            token: token.to_string(),
        }
    }

    #[test]
    fn test_inactive_when_empty() {
        let sessions = SessionStore::new(MemoryStore::new());
        assert!(!sessions.is_active());
        assert!(sessions.load().is_none());
    }

    #[test]
    fn test_either_key_activates() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "t1");
        assert!(SessionStore::new(store.clone()).is_active());

        store.remove(TOKEN_KEY);
        store.set(USER_ID_KEY, "u1");
        assert!(SessionStore::new(store).is_active());
    }

    #[test]
    fn test_empty_values_do_not_activate() {
        let store = MemoryStore::new();
        store.set(USER_ID_KEY, "");
        store.set(TOKEN_KEY, "");
        assert!(!SessionStore::new(store).is_active());
    }

    #[test]
    fn test_save_then_clear() {
        let sessions = SessionStore::new(MemoryStore::new());
        assert!(sessions.save_if_absent(&session("u1", "t1")));
        assert!(sessions.is_active());
        assert_eq!(sessions.load(), Some(session("u1", "t1")));

        sessions.clear();
        assert!(!sessions.is_active());
        assert!(sessions.token().is_none());
    }

    #[test]
    fn test_save_does_not_clobber_active_session() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.save_if_absent(&session("u1", "t1"));
        assert!(!sessions.save_if_absent(&session("u2", "t2")));
        assert_eq!(sessions.user_id().as_deref(), Some("u1"));
        assert_eq!(sessions.token().as_deref(), Some("t1"));
    }
}
