//! Session management.
//!
//! ARCHITECTURE
//! ============
//! Sessions are held in an explicit in-memory store owned by `AppState` —
//! there is no persistence layer in this service, so a restart logs everyone
//! out. The HttpOnly session cookie is the only client-side artifact: written
//! on login/signup, deleted on logout, read on every authenticated request.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use rand::Rng;
use tokio::sync::RwLock;

use crate::services::auth::User;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// In-memory token -> user map with explicit lifecycle calls.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, User>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for the given user, returning the token.
    pub async fn create(&self, user: User) -> String {
        let token = generate_token();
        self.inner.write().await.insert(token.clone(), user);
        token
    }

    /// Validate a session token and return the associated user.
    pub async fn validate(&self, token: &str) -> Option<User> {
        self.inner.read().await.get(token).cloned()
    }

    /// Delete a session by token.
    pub async fn remove(&self, token: &str) {
        self.inner.write().await.remove(token);
    }

    /// Drop every session. Teardown hook, mainly for tests.
    pub async fn clear(&self) {
        self.inner.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
