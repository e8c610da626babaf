//! The session store: holds at most one authenticated identity.

use tokio::sync::watch;

use reelhub_entity::user::Identity;

/// Process-scoped holder of the signed-in identity.
///
/// `None` means anonymous. The store is the sole source of truth for
/// "is a user logged in"; the route guard and every authenticated API call
/// read from it. Cheap to clone; all clones share the same state.
#[derive(Debug, Clone)]
pub struct SessionStore {
    identity: watch::Sender<Option<Identity>>,
}

impl SessionStore {
    /// Create an empty (anonymous) store.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { identity: tx }
    }

    /// Replace the current identity unconditionally.
    ///
    /// The identity is swapped wholesale, never edited in place, so
    /// subscribers observe exactly one change per call.
    pub fn set_identity(&self, identity: Identity) {
        tracing::debug!(email = %identity.email, "session identity set");
        self.identity.send_replace(Some(identity));
    }

    /// Reset the store to anonymous. Idempotent.
    pub fn clear_identity(&self) {
        tracing::debug!("session identity cleared");
        self.identity.send_replace(None);
    }

    /// Return the current identity, or `None` when anonymous.
    pub fn current_identity(&self) -> Option<Identity> {
        self.identity.borrow().clone()
    }

    /// Check whether an identity is present.
    pub fn is_authenticated(&self) -> bool {
        self.identity.borrow().is_some()
    }

    /// Subscribe to identity changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.identity.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(email: &str) -> Identity {
        Identity {
            id: "u1".into(),
            email: email.to_string(),
            token: "tok".to_string(),
        }
    }

    #[test]
    fn test_set_then_current_returns_identity() {
        let store = SessionStore::new();
        assert!(store.current_identity().is_none());

        store.set_identity(identity("a@b.com"));
        assert_eq!(store.current_identity().unwrap().email, "a@b.com");
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = SessionStore::new();
        store.set_identity(identity("a@b.com"));

        store.clear_identity();
        assert!(store.current_identity().is_none());

        // Clearing an already-anonymous store stays anonymous.
        store.clear_identity();
        assert!(store.current_identity().is_none());
    }

    #[test]
    fn test_replacement_is_wholesale() {
        let store = SessionStore::new();
        store.set_identity(identity("first@b.com"));
        store.set_identity(identity("second@b.com"));
        assert_eq!(store.current_identity().unwrap().email, "second@b.com");
    }

    #[tokio::test]
    async fn test_subscribers_observe_every_update() {
        let store = SessionStore::new();
        let mut rx = store.subscribe();

        store.set_identity(identity("a@b.com"));
        rx.changed().await.expect("change");
        assert!(rx.borrow().is_some());

        store.clear_identity();
        rx.changed().await.expect("change");
        assert!(rx.borrow().is_none());
    }
}
