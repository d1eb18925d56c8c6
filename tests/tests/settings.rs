//! Settings surface: toggle listing, save semantics, and the persisted
//! option format.

use binder::{Hooks, SettingsFieldType};
use binder_core::FormSettings;
use host::response::{SaveSettingsResponse, SettingsResponse};
use integration_tests::{fixtures, mocks::RecordingOptions, setup::TestContext};

#[tokio::test]
async fn settings_page_lists_the_tracking_toggle() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let body: SettingsResponse = server.get("/admin/forms/1/settings").await.json();
    assert_eq!(body.form_id, 1);

    let toggle = body
        .fields
        .iter()
        .find(|f| f.name == binder::TOGGLE_NAME)
        .expect("toggle control missing from settings");
    assert_eq!(toggle.field_type, SettingsFieldType::Toggle);
    assert!(!toggle.default_value);
}

#[tokio::test]
async fn saving_the_toggle_flips_tracking() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let body: SaveSettingsResponse = server
        .post("/admin/forms/1/settings")
        .json(&fixtures::enable_tracking())
        .await
        .json();
    assert!(body.tracking_enabled);
    assert!(ctx.state.binder.is_tracking_enabled(1));

    let body: SaveSettingsResponse = server
        .post("/admin/forms/1/settings")
        .json(&fixtures::disable_tracking())
        .await
        .json();
    assert!(!body.tracking_enabled);
    assert!(!ctx.state.binder.is_tracking_enabled(1));
}

#[tokio::test]
async fn non_canonical_toggle_values_disable() {
    let ctx = TestContext::new();
    let server = ctx.server();

    for value in ["true", "yes", "on", ""] {
        let mut payload = std::collections::BTreeMap::new();
        payload.insert(binder::TOGGLE_NAME.to_string(), value.to_string());

        let body: SaveSettingsResponse = server
            .post("/admin/forms/1/settings")
            .json(&payload)
            .await
            .json();
        assert!(!body.tracking_enabled, "value {value:?} must not enable");
    }

    // Toggle absent from the payload entirely.
    let body: SaveSettingsResponse = server
        .post("/admin/forms/1/settings")
        .json(&std::collections::BTreeMap::<String, String>::new())
        .await
        .json();
    assert!(!body.tracking_enabled);
}

#[tokio::test]
async fn settings_for_unknown_form_is_404() {
    let ctx = TestContext::new();
    let server = ctx.server();

    server.get("/admin/forms/99/settings").await.assert_status_not_found();
    server
        .post("/admin/forms/99/settings")
        .json(&fixtures::enable_tracking())
        .await
        .assert_status_not_found();
}

#[test]
fn toggle_persists_under_the_namespaced_form_key() {
    let options = RecordingOptions::new();
    let mut hooks = Hooks::new();
    let binder = binder::init(binder::MIN_FORMS_VERSION, options.clone(), &mut hooks).unwrap();

    binder.handle_settings_save(FormSettings::new(7).with_value(binder::TOGGLE_NAME, "1"));
    binder.handle_settings_save(FormSettings::new(7).with_value(binder::TOGGLE_NAME, "0"));

    assert_eq!(
        options.writes(),
        vec![
            (
                "utm_binder_tracking_enabled_form_7".to_string(),
                "1".to_string()
            ),
            (
                "utm_binder_tracking_enabled_form_7".to_string(),
                "0".to_string()
            ),
        ]
    );
}
