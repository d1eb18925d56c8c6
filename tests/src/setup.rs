//! Test environment construction.

use axum_test::TestServer;
use binder_core::Form;
use host::AppState;

/// A wired service instance backed entirely by in-memory stores.
pub struct TestContext {
    pub state: AppState,
}

impl TestContext {
    /// Builds the application exactly as `main` does: one binder
    /// constructed through the bootstrap path, hooks frozen, seeded
    /// form repository.
    pub fn new() -> Self {
        let state =
            AppState::new(binder::MIN_FORMS_VERSION).expect("binder bootstrap should succeed");
        Self { state }
    }

    pub fn with_form(self, form: Form) -> Self {
        self.state.forms.insert(form);
        self
    }

    /// A test server that keeps cookies across requests, so one server
    /// behaves like one browser session.
    pub fn server(&self) -> TestServer {
        let mut server = TestServer::new(host::router(self.state.clone()))
            .expect("failed to create test server");
        server.save_cookies();
        server
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
