//! The UTM session binder component.
//!
//! Purely reactive: each entry point is called by the host at a fixed
//! lifecycle moment (see [`crate::hooks`]) and does a bounded,
//! synchronous read or write against the stores it is handed. The
//! component holds no mutable state of its own.

use std::sync::Arc;

use tracing::debug;

use binder_core::{sanitize_text_field, Form, FormField, FormSettings, UtmParam};

use crate::settings::{tracking_option_key, NAMESPACE, TOGGLE_NAME};
use crate::stores::{OptionsStore, SessionStore};

/// Input name (and hook key) for one parameter's hidden field: the
/// bare parameter name under the component namespace. Field names,
/// duplicate detection, and field-value hook keys all share this one
/// derivation.
pub fn derived_field_name(param: UtmParam) -> String {
    format!("{NAMESPACE}_{param}")
}

/// Session-to-form binder for the five recognized UTM parameters.
///
/// Constructed exactly once, by the bootstrap wiring, so its hook
/// registrations cannot be duplicated. Deliberately not `Clone`.
pub struct UtmBinder {
    options: Arc<dyn OptionsStore>,
}

impl std::fmt::Debug for UtmBinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UtmBinder").finish_non_exhaustive()
    }
}

impl UtmBinder {
    pub(crate) fn new(options: Arc<dyn OptionsStore>) -> Self {
        Self { options }
    }

    /// Reads recognized UTM keys out of the request's query pairs and
    /// overwrites the same-named session entries, last occurrence
    /// winning. Unrecognized keys are ignored; an empty or irrelevant
    /// query is a no-op.
    pub fn capture(&self, query: &[(String, String)], session: &mut dyn SessionStore) {
        for (key, value) in query {
            if let Ok(param) = key.parse::<UtmParam>() {
                let clean = sanitize_text_field(value);
                debug!(param = %param, "captured UTM parameter");
                session.insert(param.as_str(), clean);
            }
        }
    }

    /// Whether UTM tracking was enabled for this form. Forms never
    /// configured (including the coerced id 0) read as disabled.
    pub fn is_tracking_enabled(&self, form_id: u64) -> bool {
        self.options
            .get(&tracking_option_key(form_id))
            .map(|v| v == "1")
            .unwrap_or(false)
    }

    /// Appends one hidden field per UTM parameter to a tracking-enabled
    /// form, skipping parameters whose field already exists. Safe to
    /// run on every render, submission, and admin pass; a disabled form
    /// is returned untouched.
    ///
    /// The candidate id is advanced once per parameter even when the
    /// field already exists and nothing is appended. Existing hosts
    /// have field ids minted under that numbering, so it is kept.
    pub fn add_utm_fields(&self, mut form: Form) -> Form {
        if !self.is_tracking_enabled(form.id) {
            return form;
        }

        let mut max_id = form.max_field_id();
        let mut added = 0usize;
        for param in UtmParam::ALL {
            max_id += 1;

            let name = derived_field_name(param);
            if form.fields.iter().any(|f| f.input_name == name) {
                continue;
            }

            form.fields.push(FormField::hidden(max_id, form.id, param, name));
            added += 1;
        }

        if added > 0 {
            debug!(form_id = form.id, added, "injected UTM hidden fields");
        }
        form
    }

    /// Persists the form's tracking toggle from a settings-save
    /// payload. Only the exact string `"1"` enables; anything else,
    /// including an absent toggle, disables. The payload passes
    /// through unchanged for the host's filter chain.
    pub fn handle_settings_save(&self, settings: FormSettings) -> FormSettings {
        let enabled = settings.value(TOGGLE_NAME) == Some("1");
        self.options.set(
            &tracking_option_key(settings.id),
            if enabled { "1" } else { "0" },
        );
        debug!(form_id = settings.id, enabled, "saved UTM tracking toggle");
        settings
    }

    /// Value for one parameter's hidden field: the session-stored value
    /// when present, otherwise the host-supplied default. The parameter
    /// is bound at hook registration time, never re-derived from a
    /// dispatch name.
    pub fn prepopulate(
        &self,
        param: UtmParam,
        current: Option<String>,
        session: &dyn SessionStore,
    ) -> Option<String> {
        session.get(param.as_str()).or(current)
    }
}
