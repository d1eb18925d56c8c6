//! End-to-end flows through the HTTP surface: capture on request
//! init, field injection at render/submission/admin time, and
//! session-backed prepopulation, all against one cookie-carrying
//! client per scenario.

use binder_core::FieldType;
use host::response::{RenderResponse, SubmissionResponse};
use integration_tests::{fixtures, setup::TestContext};

#[tokio::test]
async fn visit_with_utm_query_prepopulates_an_enabled_form() {
    let ctx = TestContext::new();
    let server = ctx.server();

    server
        .post("/admin/forms/1/settings")
        .json(&fixtures::enable_tracking())
        .await
        .assert_status_ok();

    // Landing visit carrying attribution parameters.
    let response = server
        .get("/forms/1")
        .add_query_param("utm_source", "google")
        .add_query_param("utm_campaign", "spring")
        .await;
    response.assert_status_ok();

    let body: RenderResponse = response.json();
    assert_eq!(body.fields.len(), 7, "2 authored + 5 injected");

    let hidden: Vec<_> = body
        .fields
        .iter()
        .filter(|f| f.field_type == FieldType::Hidden)
        .collect();
    assert_eq!(hidden.len(), 5);

    let value_of = |label: &str| {
        hidden
            .iter()
            .find(|f| f.label == label)
            .and_then(|f| f.value.clone())
    };
    assert_eq!(value_of("utm_source").as_deref(), Some("google"));
    assert_eq!(value_of("utm_campaign").as_deref(), Some("spring"));
    assert_eq!(value_of("utm_medium"), None);
    assert_eq!(value_of("utm_term"), None);
    assert_eq!(value_of("utm_content"), None);
}

#[tokio::test]
async fn session_values_survive_later_requests_without_query() {
    let ctx = TestContext::new();
    let server = ctx.server();

    server
        .post("/admin/forms/1/settings")
        .json(&fixtures::enable_tracking())
        .await
        .assert_status_ok();

    server
        .get("/forms/1")
        .add_query_param("utm_source", "google")
        .await
        .assert_status_ok();

    // Same browser, no query this time.
    let response = server.get("/forms/1").await;
    let body: RenderResponse = response.json();
    let source = body
        .fields
        .iter()
        .find(|f| f.label == "utm_source")
        .unwrap();
    assert_eq!(source.value.as_deref(), Some("google"));
}

#[tokio::test]
async fn later_capture_overwrites_the_remembered_value() {
    let ctx = TestContext::new();
    let server = ctx.server();

    server
        .post("/admin/forms/1/settings")
        .json(&fixtures::enable_tracking())
        .await
        .assert_status_ok();

    server
        .get("/forms/1")
        .add_query_param("utm_source", "google")
        .await
        .assert_status_ok();
    let response = server
        .get("/forms/1")
        .add_query_param("utm_source", "newsletter")
        .await;

    let body: RenderResponse = response.json();
    let source = body
        .fields
        .iter()
        .find(|f| f.label == "utm_source")
        .unwrap();
    assert_eq!(source.value.as_deref(), Some("newsletter"));
}

#[tokio::test]
async fn disabled_form_renders_exactly_as_authored() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .get("/forms/1")
        .add_query_param("utm_source", "google")
        .await;
    response.assert_status_ok();

    let body: RenderResponse = response.json();
    assert_eq!(body.fields.len(), 2);
    let ids: Vec<u32> = body.fields.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn submission_carries_session_utm_values() {
    let ctx = TestContext::new();
    let server = ctx.server();

    server
        .post("/admin/forms/1/settings")
        .json(&fixtures::enable_tracking())
        .await
        .assert_status_ok();

    server
        .get("/forms/1")
        .add_query_param("utm_source", "google")
        .add_query_param("utm_medium", "cpc")
        .await
        .assert_status_ok();

    let mut submitted = std::collections::BTreeMap::new();
    submitted.insert("Name".to_string(), "Ada".to_string());
    submitted.insert("Email".to_string(), "ada@example.com".to_string());

    let response = server.post("/forms/1/submissions").json(&submitted).await;
    response.assert_status_ok();

    let body: SubmissionResponse = response.json();
    assert_eq!(body.values.get("Name").map(String::as_str), Some("Ada"));
    assert_eq!(
        body.values.get("utm_source").map(String::as_str),
        Some("google")
    );
    assert_eq!(body.values.get("utm_medium").map(String::as_str), Some("cpc"));
    assert!(!body.values.contains_key("utm_campaign"));
}

#[tokio::test]
async fn render_submit_admin_passes_never_duplicate_fields() {
    let ctx = TestContext::new();
    let server = ctx.server();

    server
        .post("/admin/forms/1/settings")
        .json(&fixtures::enable_tracking())
        .await
        .assert_status_ok();

    for _ in 0..2 {
        let render: RenderResponse = server.get("/forms/1").await.json();
        assert_eq!(render.fields.len(), 7);

        server
            .post("/forms/1/submissions")
            .json(&std::collections::BTreeMap::<String, String>::new())
            .await
            .assert_status_ok();

        let admin: RenderResponse = server.get("/admin/forms/1").await.json();
        assert_eq!(admin.fields.len(), 7);
    }
}

#[tokio::test]
async fn injected_ids_continue_from_the_highest_existing_id() {
    let ctx = TestContext::new().with_form(fixtures::gappy_form(7));
    let server = ctx.server();

    server
        .post("/admin/forms/7/settings")
        .json(&fixtures::enable_tracking())
        .await
        .assert_status_ok();

    let body: RenderResponse = server.get("/forms/7").await.json();
    assert_eq!(body.fields.len(), 7);
    let injected_ids: Vec<u32> = body.fields[2..].iter().map(|f| f.id).collect();
    assert_eq!(injected_ids, vec![6, 7, 8, 9, 10]);
}

#[tokio::test]
async fn empty_form_gets_ids_one_through_five() {
    let ctx = TestContext::new().with_form(fixtures::empty_form(9));
    let server = ctx.server();

    server
        .post("/admin/forms/9/settings")
        .json(&fixtures::enable_tracking())
        .await
        .assert_status_ok();

    let body: RenderResponse = server.get("/forms/9").await.json();
    let ids: Vec<u32> = body.fields.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn captured_values_are_sanitized_before_storage() {
    let ctx = TestContext::new();
    let server = ctx.server();

    server
        .post("/admin/forms/1/settings")
        .json(&fixtures::enable_tracking())
        .await
        .assert_status_ok();

    let response = server
        .get("/forms/1")
        .add_query_param("utm_source", "<script>x</script>google  ads")
        .await;

    let body: RenderResponse = response.json();
    let source = body
        .fields
        .iter()
        .find(|f| f.label == "utm_source")
        .unwrap();
    assert_eq!(source.value.as_deref(), Some("xgoogle ads"));
}
