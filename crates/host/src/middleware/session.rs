//! Per-request session binding.
//!
//! Resolves (or lazily creates) the visitor's session from the cookie,
//! runs the request-init hooks against it with the parsed query pairs
//! (UTM capture happens here), and stashes the session id in request
//! extensions for the handlers.

use axum::{
    extract::{Request, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use tracing::debug;
use uuid::Uuid;

use crate::session::SESSION_COOKIE;
use crate::state::AppState;

/// Session id for the current request, set by [`bind_session`].
#[derive(Debug, Clone, Copy)]
pub struct SessionId(pub Uuid);

pub async fn bind_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let presented = cookie_session_id(request.headers());
    let id = state.sessions.resolve(presented);

    let query = parse_query(request.uri().query().unwrap_or(""));
    state
        .sessions
        .with_session(id, |session| state.hooks.run_request_init(&query, session));

    request.extensions_mut().insert(SessionId(id));
    let mut response = next.run(request).await;

    if presented != Some(id) {
        debug!(session_id = %id, "started session");
        let cookie = format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax");
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(SET_COOKIE, value);
        }
    }
    response
}

fn cookie_session_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| value.trim().parse().ok())
}

fn parse_query(raw: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect()
}
