//! Error type for the UTM session binder.
//!
//! The binder itself has almost no failure surface: malformed query
//! parameters are ignored, non-numeric form ids coerce to 0, and host
//! store failures stay inside the host's store implementations. What
//! remains is parse errors on parameter keys and the bootstrap version
//! gate.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A key that is not one of the five recognized UTM parameters.
    #[error("unrecognized UTM parameter: {0}")]
    UnknownParam(String),

    /// The host form builder is older than the binder supports.
    #[error("form builder version {found} is below the required {required}")]
    IncompatibleVersion {
        found: String,
        required: &'static str,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
