//! Admin endpoints: form preview and settings.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};
use binder_core::FormSettings;
use tracing::info;

use crate::response::{
    ApiError, RenderResponse, RenderedField, SaveSettingsResponse, SettingsResponse,
};
use crate::state::AppState;

/// GET /admin/forms/{id} - Admin preview.
///
/// Same injection pass as the public render so an admin sees the form
/// exactly as it will be processed, but values stay blank.
pub async fn preview_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<RenderResponse>, ApiError> {
    let form = state.forms.get(id).ok_or_else(|| ApiError::not_found("form"))?;
    let form = state.hooks.filter_admin_pre_render(form);

    let fields = form
        .fields
        .iter()
        .map(|field| RenderedField::from_field(field, None))
        .collect();

    Ok(Json(RenderResponse {
        form_id: form.id,
        title: form.title,
        fields,
    }))
}

/// GET /admin/forms/{id}/settings - Settings controls for a form.
pub async fn settings_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<SettingsResponse>, ApiError> {
    if state.forms.get(id).is_none() {
        return Err(ApiError::not_found("form"));
    }

    let fields = state.hooks.filter_settings_fields(Vec::new());
    Ok(Json(SettingsResponse {
        form_id: id,
        fields,
    }))
}

/// POST /admin/forms/{id}/settings - Save a form's settings.
pub async fn save_settings_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(values): Json<BTreeMap<String, String>>,
) -> Result<Json<SaveSettingsResponse>, ApiError> {
    if state.forms.get(id).is_none() {
        return Err(ApiError::not_found("form"));
    }

    let mut settings = FormSettings::new(id);
    settings.values = values;
    state.hooks.filter_pre_settings_save(settings);

    let tracking_enabled = state.binder.is_tracking_enabled(id);
    info!(form_id = id, tracking_enabled, "saved form settings");

    Ok(Json(SaveSettingsResponse {
        form_id: id,
        tracking_enabled,
    }))
}
