//! Core types and sanitization for the UTM session binder.

pub mod error;
pub mod form;
pub mod params;
pub mod sanitize;

pub use error::{Error, Result};
pub use form::{FieldType, Form, FormField, FormSettings};
pub use params::UtmParam;
pub use sanitize::sanitize_text_field;
