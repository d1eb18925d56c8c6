//! Store seams the host provides.
//!
//! The binder never owns persistence. It reads and writes through two
//! narrow key/value traits: a per-session store handed in explicitly on
//! each call, and a process-wide options store held behind an `Arc`.
//! Both model the host's atomic single-key semantics, so neither trait
//! has an error path; a real backend keeps its failures inside its own
//! implementation.

use std::collections::HashMap;

/// Per-session string store. Created lazily by the host on first
/// access and torn down by the host's session lifecycle.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn insert(&mut self, key: &str, value: String);
}

/// Plain map sessions, used by in-process hosts and tests.
impl SessionStore for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn insert(&mut self, key: &str, value: String) {
        HashMap::insert(self, key.to_string(), value);
    }
}

/// Process-wide persistent options store, shared across sessions.
/// Written only on explicit settings saves, read-mostly otherwise.
pub trait OptionsStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}
