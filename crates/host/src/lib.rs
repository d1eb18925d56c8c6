//! Reference HTTP form host for the UTM session binder.
//!
//! Supplies everything the binder consumes from its host environment:
//! a cookie-backed session store, a persistent options store, a form
//! repository, and the lifecycle dispatch that invokes the binder's
//! hooks at render, submission, admin, and settings time.

pub mod forms;
pub mod middleware;
pub mod options;
pub mod response;
pub mod routes;
pub mod session;
pub mod state;

pub use routes::router;
pub use state::AppState;
