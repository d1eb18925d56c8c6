//! Startup wiring: version gate and one-time hook registration.
//!
//! This is the only construction path for [`UtmBinder`]. Registering
//! through here exactly once keeps capture and field injection from
//! running twice per request.

use std::sync::Arc;

use tracing::{info, warn};

use binder_core::{Error, Result, UtmParam};

use crate::binder::{derived_field_name, UtmBinder};
use crate::hooks::Hooks;
use crate::settings::utm_settings_field;
use crate::stores::OptionsStore;

/// Oldest form-builder version whose field API the binder relies on.
pub const MIN_FORMS_VERSION: &str = "2.4.7";

/// Constructs the binder and registers all of its lifecycle hooks.
///
/// When the host form builder is older than [`MIN_FORMS_VERSION`] the
/// binder is not constructed and nothing is registered; the returned
/// error carries the versions for the host's compatibility notice.
pub fn init(
    forms_version: &str,
    options: Arc<dyn OptionsStore>,
    hooks: &mut Hooks,
) -> Result<Arc<UtmBinder>> {
    if version_below(forms_version, MIN_FORMS_VERSION) {
        warn!(
            found = forms_version,
            required = MIN_FORMS_VERSION,
            "form builder is outdated; UTM parameter tracking stays inactive"
        );
        return Err(Error::IncompatibleVersion {
            found: forms_version.to_string(),
            required: MIN_FORMS_VERSION,
        });
    }

    let binder = Arc::new(UtmBinder::new(options));

    let b = binder.clone();
    hooks.on_request_init(move |query, session| b.capture(query, session));

    let b = binder.clone();
    hooks.on_pre_render(move |form| b.add_utm_fields(form));
    let b = binder.clone();
    hooks.on_pre_submission(move |form| b.add_utm_fields(form));
    let b = binder.clone();
    hooks.on_admin_pre_render(move |form| b.add_utm_fields(form));

    hooks.on_settings_fields(|mut fields| {
        fields.push(utm_settings_field());
        fields
    });

    let b = binder.clone();
    hooks.on_pre_settings_save(move |settings| b.handle_settings_save(settings));

    // One field-value supplier per parameter, the parameter bound here
    // rather than recovered from the hook name at dispatch time.
    for param in UtmParam::ALL {
        let b = binder.clone();
        hooks.on_field_value(derived_field_name(param), move |current, session| {
            b.prepopulate(param, current, session)
        });
    }

    info!(forms_version, "UTM session binder active");
    Ok(binder)
}

/// Dotted-numeric version compare; missing segments count as 0, so
/// `2.4` is below `2.4.7` and `2.4.7.0` is not.
fn version_below(found: &str, required: &str) -> bool {
    let segments = |v: &str| -> Vec<u64> {
        v.split('.')
            .map(|s| s.trim().parse().unwrap_or(0))
            .collect()
    };
    let found = segments(found);
    let required = segments(required);

    for i in 0..found.len().max(required.len()) {
        let f = found.get(i).copied().unwrap_or(0);
        let r = required.get(i).copied().unwrap_or(0);
        if f != r {
            return f < r;
        }
    }
    false
}
