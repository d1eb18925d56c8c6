//! Wire payloads for the form service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use binder::SettingsField;
use binder_core::{FieldType, FormField};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One field as rendered to a client, with its resolved value.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedField {
    pub id: u32,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub input_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl RenderedField {
    pub fn from_field(field: &FormField, value: Option<String>) -> Self {
        Self {
            id: field.id,
            field_type: field.field_type,
            label: field.label.clone(),
            input_name: field.input_name.clone(),
            value,
        }
    }
}

/// GET /forms/{id} and GET /admin/forms/{id}.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResponse {
    pub form_id: u64,
    pub title: String,
    pub fields: Vec<RenderedField>,
}

/// POST /forms/{id}/submissions.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub form_id: u64,
    /// Final submitted values keyed by field label, session-stored UTM
    /// values filled in for hidden fields the client left blank.
    pub values: BTreeMap<String, String>,
}

/// GET /admin/forms/{id}/settings.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub form_id: u64,
    pub fields: Vec<SettingsField>,
}

/// POST /admin/forms/{id}/settings.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSettingsResponse {
    pub form_id: u64,
    pub tracking_enabled: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error replies from the form service. The binder itself contributes
/// none of these; they cover host concerns like unknown form ids.
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("{} not found", what.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}
