//! In-memory bearer-token session store.
//!
//! Login issues a random token; only its SHA-256 hash is kept server-side.
//! Sessions expire after 24 hours and are cleaned up lazily on issue.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use uuid::Uuid;

/// Session lifetime: 24 hours.
const SESSION_TTL_SECS: u64 = 60 * 60 * 24;

struct SessionEntry {
    user_id: Uuid,
    expires_at: Instant,
}

pub struct SessionStore {
    sessions: HashMap<[u8; 32], SessionEntry>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
            ttl: Duration::from_secs(SESSION_TTL_SECS),
        }
    }

    /// Issue a new session token for the given user.
    pub fn issue(&mut self, user_id: Uuid) -> String {
        self.cleanup();
        let token = generate_token();
        self.sessions.insert(
            hash_token(&token),
            SessionEntry {
                user_id,
                expires_at: Instant::now() + self.ttl,
            },
        );
        token
    }

    /// Resolve a token to its user id. Expired sessions are dropped.
    pub fn resolve(&mut self, token: &str) -> Option<Uuid> {
        let hash = hash_token(token);
        let entry = self.sessions.get(&hash)?;
        if Instant::now() > entry.expires_at {
            self.sessions.remove(&hash);
            return None;
        }
        Some(entry.user_id)
    }

    /// Revoke a token (logout). Returns `true` if a session was removed.
    pub fn revoke(&mut self, token: &str) -> bool {
        self.sessions.remove(&hash_token(token)).is_some()
    }

    fn cleanup(&mut self) {
        let now = Instant::now();
        self.sessions.retain(|_, entry| now < entry.expires_at);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash a bearer token string using SHA-256.
pub fn hash_token(token: &str) -> [u8; 32] {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.finalize().into()
}

/// Generate a random bearer token (URL-safe base64, 32 bytes of entropy).
pub fn generate_token() -> String {
    use base64::Engine;
    let bytes: [u8; 32] = rand::random();
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}
