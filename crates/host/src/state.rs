//! Application state shared across handlers.

use std::sync::Arc;

use binder::{Hooks, UtmBinder};
use binder_core::Result;

use crate::forms::FormRepository;
use crate::options::MemoryOptions;
use crate::session::SessionManager;

#[derive(Clone)]
pub struct AppState {
    pub hooks: Arc<Hooks>,
    pub binder: Arc<UtmBinder>,
    pub sessions: Arc<SessionManager>,
    pub forms: Arc<FormRepository>,
}

impl AppState {
    /// Wires the binder against fresh in-memory stores. This is the
    /// one place the binder is constructed and its hooks registered;
    /// the hook table is frozen behind an `Arc` immediately after.
    pub fn new(forms_version: &str) -> Result<Self> {
        let options = Arc::new(MemoryOptions::new());
        let mut hooks = Hooks::new();
        let binder = binder::init(forms_version, options, &mut hooks)?;

        Ok(Self {
            hooks: Arc::new(hooks),
            binder,
            sessions: Arc::new(SessionManager::new()),
            forms: Arc::new(FormRepository::seeded()),
        })
    }
}
