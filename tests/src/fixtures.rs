//! Form and payload fixtures.

use std::collections::BTreeMap;

use binder_core::{FieldType, Form, FormField};

/// A form with two ordinary fields at ids 3 and 5, matching a form
/// whose earlier fields were deleted in the builder.
pub fn gappy_form(id: u64) -> Form {
    let mut form = Form::new(id, "Quote Request");
    form.fields.push(FormField {
        id: 3,
        form_id: id,
        field_type: FieldType::Text,
        label: "Company".to_string(),
        input_name: String::new(),
        allow_prepopulate: false,
    });
    form.fields.push(FormField {
        id: 5,
        form_id: id,
        field_type: FieldType::Textarea,
        label: "Details".to_string(),
        input_name: String::new(),
        allow_prepopulate: false,
    });
    form
}

/// A form with no fields at all.
pub fn empty_form(id: u64) -> Form {
    Form::new(id, "Bare")
}

/// Settings payload that switches tracking on.
pub fn enable_tracking() -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();
    values.insert(binder::TOGGLE_NAME.to_string(), "1".to_string());
    values
}

/// Settings payload with the toggle off.
pub fn disable_tracking() -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();
    values.insert(binder::TOGGLE_NAME.to_string(), "0".to_string());
    values
}
