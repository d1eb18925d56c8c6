//! Public form endpoints: render and submission.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use tracing::info;

use crate::middleware::session::SessionId;
use crate::response::{ApiError, RenderResponse, RenderedField, SubmissionResponse};
use crate::state::AppState;

/// GET /forms/{id} - Render a form for display.
///
/// Runs the pre-render filters (UTM field injection for opted-in
/// forms), then resolves each prepopulatable field's value through the
/// field-value hooks against the visitor's session.
pub async fn render_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Extension(SessionId(session_id)): Extension<SessionId>,
) -> Result<Json<RenderResponse>, ApiError> {
    let form = state.forms.get(id).ok_or_else(|| ApiError::not_found("form"))?;
    let form = state.hooks.filter_pre_render(form);

    let session = state.sessions.snapshot(session_id);
    let fields = form
        .fields
        .iter()
        .map(|field| {
            let value = if field.allow_prepopulate && !field.input_name.is_empty() {
                state
                    .hooks
                    .filter_field_value(&field.input_name, None, &session)
            } else {
                None
            };
            RenderedField::from_field(field, value)
        })
        .collect();

    Ok(Json(RenderResponse {
        form_id: form.id,
        title: form.title,
        fields,
    }))
}

/// POST /forms/{id}/submissions - Accept a submission.
///
/// The submitted map is keyed by field label. Hidden UTM fields the
/// client left out are filled from the session, the same way a browser
/// would have posted their prepopulated values.
pub async fn submission_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Extension(SessionId(session_id)): Extension<SessionId>,
    Json(submitted): Json<BTreeMap<String, String>>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let form = state.forms.get(id).ok_or_else(|| ApiError::not_found("form"))?;
    let form = state.hooks.filter_pre_submission(form);

    let session = state.sessions.snapshot(session_id);
    let mut values = BTreeMap::new();
    for field in &form.fields {
        let submitted_value = submitted.get(&field.label).cloned();
        let value = if field.allow_prepopulate && !field.input_name.is_empty() {
            state
                .hooks
                .filter_field_value(&field.input_name, submitted_value, &session)
        } else {
            submitted_value
        };
        if let Some(value) = value {
            values.insert(field.label.clone(), value);
        }
    }

    info!(form_id = form.id, fields = values.len(), "accepted submission");
    Ok(Json(SubmissionResponse {
        form_id: form.id,
        values,
    }))
}
