//! In-memory stand-in for the host's persistent options table.

use std::collections::HashMap;

use binder::OptionsStore;
use parking_lot::RwLock;

/// Process-wide key/value options with atomic single-key access.
#[derive(Default)]
pub struct MemoryOptions {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OptionsStore for MemoryOptions {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.write().insert(key.to_string(), value.to_string());
    }
}
