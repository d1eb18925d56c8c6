//! HTTP routes for the form service.

pub mod admin;
pub mod forms;
pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::middleware::session::bind_session;
use crate::state::AppState;

/// Creates the service router. The session middleware wraps every
/// route, so UTM capture runs once per request regardless of endpoint.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/forms/:id", get(forms::render_handler))
        .route("/forms/:id/submissions", post(forms::submission_handler))
        .route("/admin/forms/:id", get(admin::preview_handler))
        .route(
            "/admin/forms/:id/settings",
            get(admin::settings_handler).post(admin::save_settings_handler),
        )
        .route("/health", get(health::health_handler))
        .layer(middleware::from_fn_with_state(state.clone(), bind_session))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
