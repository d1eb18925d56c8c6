//! In-memory form repository.
//!
//! Stores the forms as authored; UTM hidden fields are injected per
//! pass by the pre-render/pre-submission filters and never written
//! back, matching the host form builder's filter semantics.

use std::collections::HashMap;

use binder_core::{FieldType, Form, FormField};
use parking_lot::RwLock;

#[derive(Default)]
pub struct FormRepository {
    forms: RwLock<HashMap<u64, Form>>,
}

impl FormRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository preloaded with a small contact form, for the demo
    /// server and tests.
    pub fn seeded() -> Self {
        let repo = Self::new();
        repo.insert(contact_form(1));
        repo
    }

    pub fn insert(&self, form: Form) {
        self.forms.write().insert(form.id, form);
    }

    pub fn get(&self, id: u64) -> Option<Form> {
        self.forms.read().get(&id).cloned()
    }
}

/// A plain two-field contact form with no UTM fields of its own.
pub fn contact_form(id: u64) -> Form {
    let mut form = Form::new(id, "Contact");
    form.fields.push(FormField {
        id: 1,
        form_id: id,
        field_type: FieldType::Text,
        label: "Name".to_string(),
        input_name: String::new(),
        allow_prepopulate: false,
    });
    form.fields.push(FormField {
        id: 2,
        form_id: id,
        field_type: FieldType::Email,
        label: "Email".to_string(),
        input_name: String::new(),
        allow_prepopulate: false,
    });
    form
}
