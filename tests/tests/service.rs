//! Service-level behavior: health, unknown forms, session cookies, and
//! the bootstrap version gate.

use binder_core::Error;
use host::response::RenderResponse;
use host::AppState;
use integration_tests::{fixtures, setup::TestContext};

#[tokio::test]
async fn health_reports_ok() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn unknown_form_is_404_everywhere() {
    let ctx = TestContext::new();
    let server = ctx.server();

    server.get("/forms/99").await.assert_status_not_found();
    server.get("/admin/forms/99").await.assert_status_not_found();
    server
        .post("/forms/99/submissions")
        .json(&std::collections::BTreeMap::<String, String>::new())
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn sessions_are_per_client() {
    let ctx = TestContext::new();
    ctx.state.forms.insert(fixtures::empty_form(9));

    let first = ctx.server();
    first
        .post("/admin/forms/9/settings")
        .json(&fixtures::enable_tracking())
        .await
        .assert_status_ok();
    first
        .get("/forms/9")
        .add_query_param("utm_source", "google")
        .await
        .assert_status_ok();

    // A different client against the same service sees no remembered
    // attribution.
    let second = ctx.server();
    let body: RenderResponse = second.get("/forms/9").await.json();
    assert!(body.fields.iter().all(|f| f.value.is_none()));
}

#[test]
fn outdated_form_builder_refuses_to_activate() {
    let err = AppState::new("2.3.1").err().expect("must not activate");
    assert!(matches!(err, Error::IncompatibleVersion { .. }));

    AppState::new("2.4.7").expect("minimum version must activate");
    AppState::new("3.0.0").expect("newer versions must activate");
}
