//! Cookie-backed session store.
//!
//! Sessions are created lazily on first request, keyed by a v4 UUID
//! carried in a cookie, and expire after 30 minutes of inactivity.
//! Each request is handled by one execution context, so a session is
//! only ever touched by one request at a time; the map lock guards
//! cross-session access.

use std::collections::HashMap;

use binder::SessionStore;
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

/// Cookie carrying the session id.
pub const SESSION_COOKIE: &str = "utm_binder_session";

/// Inactivity timeout before a session is discarded.
pub const SESSION_TIMEOUT_MINUTES: i64 = 30;

/// One visitor's session: string values plus the activity timestamp
/// the expiry check runs against.
#[derive(Debug, Clone)]
pub struct SessionData {
    values: HashMap<String, String>,
    last_active_at: DateTime<Utc>,
}

impl SessionData {
    fn new() -> Self {
        Self {
            values: HashMap::new(),
            last_active_at: Utc::now(),
        }
    }

    fn is_timed_out(&self) -> bool {
        Utc::now() - self.last_active_at > Duration::minutes(SESSION_TIMEOUT_MINUTES)
    }

    fn touch(&mut self) {
        self.last_active_at = Utc::now();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SessionStore for SessionData {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn insert(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}

/// All live sessions for this process.
#[derive(Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<Uuid, SessionData>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the effective session id for a request: the presented
    /// id when it names a live session, otherwise a fresh one. Every
    /// expired session is swept here, not just the presented one, so
    /// sessions of visitors who never return are still reclaimed.
    pub fn resolve(&self, presented: Option<Uuid>) -> Uuid {
        let mut sessions = self.sessions.write();
        sessions.retain(|_, session| !session.is_timed_out());

        if let Some(id) = presented {
            if let Some(session) = sessions.get_mut(&id) {
                session.touch();
                return id;
            }
        }

        let id = Uuid::new_v4();
        sessions.insert(id, SessionData::new());
        id
    }

    /// Runs a closure against one session's store. The session is
    /// recreated if the host evicted it between resolve and use.
    pub fn with_session<R>(&self, id: Uuid, f: impl FnOnce(&mut SessionData) -> R) -> R {
        let mut sessions = self.sessions.write();
        let session = sessions.entry(id).or_insert_with(SessionData::new);
        f(session)
    }

    /// Read-only copy of a session for value resolution during
    /// rendering.
    pub fn snapshot(&self, id: Uuid) -> SessionData {
        self.sessions
            .read()
            .get(&id)
            .cloned()
            .unwrap_or_else(SessionData::new)
    }
}
