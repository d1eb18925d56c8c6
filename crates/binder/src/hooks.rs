//! Lifecycle hook registry.
//!
//! The host owns one `Hooks` value and invokes it at fixed points in
//! its request/form lifecycle. Callbacks are plain closures bound at
//! registration time; per-parameter field-value callbacks are keyed by
//! the derived field name, so nothing ever has to recover "which
//! parameter is this" from a dispatch string.

use std::collections::HashMap;

use binder_core::{Form, FormSettings};

use crate::settings::SettingsField;
use crate::stores::SessionStore;

type RequestInitHook = Box<dyn Fn(&[(String, String)], &mut dyn SessionStore) + Send + Sync>;
type FormFilter = Box<dyn Fn(Form) -> Form + Send + Sync>;
type SettingsFieldsFilter = Box<dyn Fn(Vec<SettingsField>) -> Vec<SettingsField> + Send + Sync>;
type SettingsSaveFilter = Box<dyn Fn(FormSettings) -> FormSettings + Send + Sync>;
type FieldValueFilter = Box<dyn Fn(Option<String>, &dyn SessionStore) -> Option<String> + Send + Sync>;

/// Callback tables for every lifecycle point the binder participates
/// in. Filters run in registration order, each feeding the next.
#[derive(Default)]
pub struct Hooks {
    request_init: Vec<RequestInitHook>,
    pre_render: Vec<FormFilter>,
    pre_submission: Vec<FormFilter>,
    admin_pre_render: Vec<FormFilter>,
    settings_fields: Vec<SettingsFieldsFilter>,
    pre_settings_save: Vec<SettingsSaveFilter>,
    field_value: HashMap<String, FieldValueFilter>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_request_init<F>(&mut self, f: F)
    where
        F: Fn(&[(String, String)], &mut dyn SessionStore) + Send + Sync + 'static,
    {
        self.request_init.push(Box::new(f));
    }

    pub fn on_pre_render<F>(&mut self, f: F)
    where
        F: Fn(Form) -> Form + Send + Sync + 'static,
    {
        self.pre_render.push(Box::new(f));
    }

    pub fn on_pre_submission<F>(&mut self, f: F)
    where
        F: Fn(Form) -> Form + Send + Sync + 'static,
    {
        self.pre_submission.push(Box::new(f));
    }

    pub fn on_admin_pre_render<F>(&mut self, f: F)
    where
        F: Fn(Form) -> Form + Send + Sync + 'static,
    {
        self.admin_pre_render.push(Box::new(f));
    }

    pub fn on_settings_fields<F>(&mut self, f: F)
    where
        F: Fn(Vec<SettingsField>) -> Vec<SettingsField> + Send + Sync + 'static,
    {
        self.settings_fields.push(Box::new(f));
    }

    pub fn on_pre_settings_save<F>(&mut self, f: F)
    where
        F: Fn(FormSettings) -> FormSettings + Send + Sync + 'static,
    {
        self.pre_settings_save.push(Box::new(f));
    }

    /// Registers the value supplier for one named field. A second
    /// registration under the same name replaces the first.
    pub fn on_field_value<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(Option<String>, &dyn SessionStore) -> Option<String> + Send + Sync + 'static,
    {
        self.field_value.insert(name.into(), Box::new(f));
    }

    pub fn run_request_init(&self, query: &[(String, String)], session: &mut dyn SessionStore) {
        for hook in &self.request_init {
            hook(query, session);
        }
    }

    pub fn filter_pre_render(&self, form: Form) -> Form {
        Self::run_form_filters(&self.pre_render, form)
    }

    pub fn filter_pre_submission(&self, form: Form) -> Form {
        Self::run_form_filters(&self.pre_submission, form)
    }

    pub fn filter_admin_pre_render(&self, form: Form) -> Form {
        Self::run_form_filters(&self.admin_pre_render, form)
    }

    pub fn filter_settings_fields(&self, mut fields: Vec<SettingsField>) -> Vec<SettingsField> {
        for filter in &self.settings_fields {
            fields = filter(fields);
        }
        fields
    }

    pub fn filter_pre_settings_save(&self, mut settings: FormSettings) -> FormSettings {
        for filter in &self.pre_settings_save {
            settings = filter(settings);
        }
        settings
    }

    /// Resolves a field's value through its registered supplier. Fields
    /// with no supplier keep the host default untouched.
    pub fn filter_field_value(
        &self,
        name: &str,
        default: Option<String>,
        session: &dyn SessionStore,
    ) -> Option<String> {
        match self.field_value.get(name) {
            Some(filter) => filter(default, session),
            None => default,
        }
    }

    fn run_form_filters(filters: &[FormFilter], mut form: Form) -> Form {
        for filter in filters {
            form = filter(form);
        }
        form
    }
}
