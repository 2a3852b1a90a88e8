//! Session token storage.

use std::collections::HashSet;
use std::sync::Mutex;

use uuid::Uuid;

/// Issue, validate, and revoke session tokens.
///
/// The trait is the seam for swapping in signed cookies or a persistent
/// store without touching call sites.
pub trait SessionStore: Send + Sync {
    /// Create a new session and return its token.
    fn issue(&self) -> String;
    /// Whether the token belongs to a live session.
    fn validate(&self, token: &str) -> bool;
    /// End the session for this token, if any.
    fn revoke(&self, token: &str);
}

/// Process-lifetime session set. Tokens vanish on restart and are not
/// shared across processes; a known limitation of the single-user setup.
#[derive(Default)]
pub struct MemorySessionStore {
    tokens: Mutex<HashSet<String>>,
}

impl SessionStore for MemorySessionStore {
    fn issue(&self) -> String {
        let token = Uuid::new_v4().to_string();
        self.tokens.lock().unwrap().insert(token.clone());
        token
    }

    fn validate(&self, token: &str) -> bool {
        self.tokens.lock().unwrap().contains(token)
    }

    fn revoke(&self, token: &str) {
        self.tokens.lock().unwrap().remove(token);
    }
}
