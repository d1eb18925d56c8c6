//! Per-form tracking toggle: settings-UI descriptor and option key.

use serde::{Deserialize, Serialize};

/// Namespace prefix for everything this component writes outside the
/// session: field input names, hook keys, option keys.
pub const NAMESPACE: &str = "utm_binder";

/// Name of the toggle control in the form settings UI and of its key
/// in the settings-save payload.
pub const TOGGLE_NAME: &str = "utm_binder_params_enabled";

/// Control types the host settings UI understands. Only `Toggle` is
/// used here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsFieldType {
    Toggle,
    Text,
}

/// One control in the host's form-options settings group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: SettingsFieldType,
    pub label: String,
    pub description: String,
    pub default_value: bool,
    pub tooltip: String,
}

/// The tracking toggle appended to every form's settings page.
pub fn utm_settings_field() -> SettingsField {
    SettingsField {
        name: TOGGLE_NAME.to_string(),
        field_type: SettingsFieldType::Toggle,
        label: "UTM Parameters".to_string(),
        description: "Enable UTM parameter tracking for this form".to_string(),
        default_value: false,
        tooltip: "When enabled, UTM parameters will be captured and stored with this form's \
                  submissions."
            .to_string(),
    }
}

/// Option key under which a form's toggle is persisted.
pub fn tracking_option_key(form_id: u64) -> String {
    format!("{NAMESPACE}_tracking_enabled_form_{form_id}")
}
