//! UTM session binder: remembers attribution parameters for the
//! current session and binds them into opted-in form submissions.

pub mod binder;
pub mod bootstrap;
pub mod hooks;
pub mod settings;
pub mod stores;

pub use binder::{derived_field_name, UtmBinder};
pub use bootstrap::{init, MIN_FORMS_VERSION};
pub use hooks::Hooks;
pub use settings::{
    tracking_option_key, utm_settings_field, SettingsField, SettingsFieldType, NAMESPACE,
    TOGGLE_NAME,
};
pub use stores::{OptionsStore, SessionStore};
