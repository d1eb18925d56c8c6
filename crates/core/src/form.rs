//! Form and field descriptors exchanged with the host form builder.
//!
//! These mirror the form builder's wire shape (camelCase field
//! attributes). The binder only ever appends hidden fields; everything
//! else on a form passes through untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::params::UtmParam;

/// Field input type. The binder only creates `Hidden` fields; the other
/// variants exist so host-authored forms round-trip cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Hidden,
    Text,
    Email,
    Textarea,
    Select,
    Checkbox,
}

/// A single field descriptor owned by the host form builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    /// Unique within the owning form.
    pub id: u32,
    pub form_id: u64,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    /// Name used for parameter-based prepopulation and duplicate
    /// detection. Empty for ordinary host-authored fields.
    #[serde(default)]
    pub input_name: String,
    #[serde(default)]
    pub allow_prepopulate: bool,
}

impl FormField {
    /// The hidden-field descriptor the binder injects for one UTM
    /// parameter: bare parameter name as label, prepopulation allowed.
    pub fn hidden(id: u32, form_id: u64, param: UtmParam, input_name: impl Into<String>) -> Self {
        Self {
            id,
            form_id,
            field_type: FieldType::Hidden,
            label: param.as_str().to_string(),
            input_name: input_name.into(),
            allow_prepopulate: true,
        }
    }
}

/// A form descriptor: an id and an ordered field list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    #[serde(default, deserialize_with = "coerce_form_id")]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub fields: Vec<FormField>,
}

impl Form {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            fields: Vec::new(),
        }
    }

    /// Highest field id currently on the form, 0 when there are no
    /// fields. New fields are numbered from here.
    pub fn max_field_id(&self) -> u32 {
        self.fields.iter().map(|f| f.id).max().unwrap_or(0)
    }
}

/// Settings-save payload: the form id plus the raw submitted option
/// values. Values stay as strings end to end so a toggle is enabled
/// only by the exact string `"1"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSettings {
    #[serde(default, deserialize_with = "coerce_form_id")]
    pub id: u64,
    #[serde(flatten)]
    pub values: BTreeMap<String, String>,
}

impl FormSettings {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Hosts hand us ids as numbers, numeric strings, or nothing at all.
/// Anything non-numeric coerces to 0.
fn coerce_form_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64().unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}
