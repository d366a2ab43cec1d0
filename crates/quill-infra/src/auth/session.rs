//! In-memory session store.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

use quill_core::ports::SessionStore;

/// Session store configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub ttl_hours: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { ttl_hours: 24 }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            ttl_hours: std::env::var("SESSION_TTL_HOURS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(24),
        }
    }
}

struct SessionEntry {
    user_id: i64,
    expires_at: DateTime<Utc>,
}

/// Server-side session store keyed by random tokens.
///
/// Sessions live in process memory; a restart logs everyone out. Expired
/// entries are pruned lazily whenever a new session is opened.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, SessionEntry>>,
    ttl: TimeDelta,
}

impl InMemorySessionStore {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl: TimeDelta::hours(config.ttl_hours),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl SessionStore for InMemorySessionStore {
    fn open(&self, user_id: i64) -> String {
        let token = Uuid::new_v4().to_string();
        let now = Utc::now();

        let mut sessions = self.sessions.write().expect("session lock poisoned");
        sessions.retain(|_, entry| entry.expires_at > now);
        sessions.insert(
            token.clone(),
            SessionEntry {
                user_id,
                expires_at: now + self.ttl,
            },
        );

        tracing::debug!(user_id, "Session opened");
        token
    }

    fn resolve(&self, token: &str) -> Option<i64> {
        let sessions = self.sessions.read().expect("session lock poisoned");
        sessions
            .get(token)
            .filter(|entry| entry.expires_at > Utc::now())
            .map(|entry| entry.user_id)
    }

    fn revoke(&self, token: &str) {
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        if sessions.remove(token).is_some() {
            tracing::debug!("Session revoked");
        }
    }

    fn ttl_seconds(&self) -> i64 {
        self.ttl.num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_then_resolve() {
        let store = InMemorySessionStore::default();

        let token = store.open(42);
        assert_eq!(store.resolve(&token), Some(42));
    }

    #[test]
    fn unknown_token_is_anonymous() {
        let store = InMemorySessionStore::default();

        assert_eq!(store.resolve("no-such-token"), None);
    }

    #[test]
    fn revoke_ends_the_session() {
        let store = InMemorySessionStore::default();

        let token = store.open(42);
        store.revoke(&token);
        assert_eq!(store.resolve(&token), None);

        // Revoking again is a no-op.
        store.revoke(&token);
    }

    #[test]
    fn expired_token_is_anonymous() {
        let store = InMemorySessionStore::new(SessionConfig { ttl_hours: 0 });

        let token = store.open(42);
        assert_eq!(store.resolve(&token), None);
    }

    #[test]
    fn tokens_are_unique_per_login() {
        let store = InMemorySessionStore::default();

        assert_ne!(store.open(1), store.open(1));
    }

    #[test]
    fn ttl_seconds_reflects_config() {
        let store = InMemorySessionStore::new(SessionConfig { ttl_hours: 24 });

        assert_eq!(store.ttl_seconds(), 86400);
    }
}
