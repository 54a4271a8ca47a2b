//! Integration tests for client construction, request building, and
//! response normalization against a mock Unsent server.

use serde_json::{json, Value};
use unsent::{ApiResponse, ErrorResponse, HttpError, Unsent};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server.
fn create_test_client(server: &MockServer) -> Unsent {
    Unsent::with_base_url("test_key", server.uri()).unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_base_url_override_sets_api_root() {
    let client = Unsent::with_base_url("un_test", "https://custom.api").unwrap();
    assert_eq!(client.api_root(), "https://custom.api/v1");
}

#[test]
fn test_construction_is_idempotent() {
    let first = Unsent::with_base_url("un_test", "https://custom.api").unwrap();
    let second = Unsent::with_base_url("un_test", "https://custom.api").unwrap();
    assert_eq!(first.api_root(), second.api_root());
    assert_eq!(
        first.http().default_headers(),
        second.http().default_headers()
    );
}

// ============================================================================
// Request Building
// ============================================================================

#[tokio::test]
async fn test_get_without_params_has_no_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/domains"))
        .and(header("authorization", "Bearer test_key"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.domains().list().await.unwrap();
    assert_eq!(response.into_data(), Some(json!([])));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_get_with_pagination_builds_ordered_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/activity"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let params = unsent::PaginationParams::new(2, 25);
    let response = client.activity().get(Some(&params)).await.unwrap();
    assert!(response.is_data());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("page=2&limit=25"));
}

#[tokio::test]
async fn test_empty_filter_sends_no_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let params = unsent::DateRangeParams::default();
    client.stats().get(Some(&params)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_post_serializes_body_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/templates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "tpl_1"})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client
        .templates()
        .create(&json!({"name": "Welcome", "subject": "Hi"}))
        .await
        .unwrap();
    assert_eq!(response.into_data(), Some(json!({"id": "tpl_1"})));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        String::from_utf8(requests[0].body.clone()).unwrap(),
        r#"{"name":"Welcome","subject":"Hi"}"#
    );
}

#[tokio::test]
async fn test_put_sends_empty_object_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v1/domains/dom_1/verify"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.domains().verify("dom_1").await.unwrap();
    assert!(response.is_data());
}

#[tokio::test]
async fn test_patch_sends_payload() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v1/templates/tpl_1"))
        .and(body_json(json!({"subject": "Updated"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "tpl_1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client
        .templates()
        .update("tpl_1", &json!({"subject": "Updated"}))
        .await
        .unwrap();
    assert!(response.is_data());
}

#[tokio::test]
async fn test_delete_without_body_sends_no_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/webhooks/wh_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.webhooks().delete("wh_1").await.unwrap();
    assert_eq!(response.into_data(), Some(json!({"success": true})));

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_delete_with_body_sends_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/custom"))
        .and(body_json(json!({"ids": ["a", "b"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let body = json!({"ids": ["a", "b"]});
    let response: ApiResponse<Value> = client.delete("/custom", Some(&body)).await.unwrap();
    assert!(response.is_data());
}

// ============================================================================
// Response Normalization
// ============================================================================

#[tokio::test]
async fn test_nested_error_is_unwrapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/emails/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"code": "NOT_FOUND", "message": "Email not found"}
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.emails().get("missing").await.unwrap();
    assert_eq!(
        response.into_error(),
        Some(ErrorResponse::new("NOT_FOUND", "Email not found"))
    );
}

#[tokio::test]
async fn test_top_level_error_is_returned_as_is() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/settings"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "code": "FORBIDDEN",
            "message": "Insufficient permissions"
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.settings().get().await.unwrap();
    assert_eq!(
        response.into_error(),
        Some(ErrorResponse::new("FORBIDDEN", "Insufficient permissions"))
    );
}

#[tokio::test]
async fn test_unparseable_error_body_uses_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/health"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>down</html>"))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.system().health().await.unwrap();
    assert_eq!(
        response.into_error(),
        Some(ErrorResponse::new(
            "INTERNAL_SERVER_ERROR",
            "Service Unavailable"
        ))
    );
}

#[tokio::test]
async fn test_unknown_status_uses_numeric_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/health"))
        .respond_with(ResponseTemplate::new(599).set_body_json(json!({"detail": "edge"})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.system().health().await.unwrap();
    assert_eq!(
        response.into_error(),
        Some(ErrorResponse::new("INTERNAL_SERVER_ERROR", "599"))
    );
}

#[tokio::test]
async fn test_invalid_json_on_success_is_reported_as_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/version"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.system().version().await.unwrap();
    let error = response.into_error().unwrap();
    assert_eq!(error.code, "INTERNAL_SERVER_ERROR");
    assert_eq!(error.message, "Invalid JSON response from server");
}

#[tokio::test]
async fn test_success_with_null_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/team"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.teams().get().await.unwrap();
    assert_eq!(response.into_data(), Some(Value::Null));
}

#[tokio::test]
async fn test_response_serializes_to_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "team_1"}])))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.teams().list().await.unwrap();
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"data": [{"id": "team_1"}], "error": null})
    );
}

// ============================================================================
// End-to-end Scenarios
// ============================================================================

#[tokio::test]
async fn test_activity_without_query_hits_bare_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/activity"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    client.activity().get(None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].method.to_string(), "GET");
    assert_eq!(
        requests[0].url.as_str(),
        format!("{}/v1/activity", server.uri())
    );
}

#[tokio::test]
async fn test_create_api_key_sends_exact_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/api-keys"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "un_123"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let payload = unsent::resources::CreateApiKey::new("Test Key");
    let created = client.api_keys().create(&payload).await.unwrap();
    assert_eq!(created.into_data().unwrap()["token"], "un_123");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        String::from_utf8(requests[0].body.clone()).unwrap(),
        r#"{"name":"Test Key"}"#
    );
}

#[tokio::test]
async fn test_delete_suppression_by_email() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/suppressions/email/email_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.suppressions().delete("email_123").await.unwrap();
    assert_eq!(response.into_data().unwrap()["success"], true);
}

#[tokio::test]
async fn test_bad_request_envelope_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/contactBooks"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": "BAD_REQUEST", "message": "Invalid name"}
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let payload = unsent::resources::CreateContactBook::new("");
    let response = client.contact_books().create(&payload).await.unwrap();
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"data": null, "error": {"code": "BAD_REQUEST", "message": "Invalid name"}})
    );
}

// ============================================================================
// Transport Failures
// ============================================================================

#[tokio::test]
async fn test_network_failure_is_propagated() {
    let client = Unsent::with_base_url("test_key", "http://127.0.0.1:1").unwrap();
    let result = client.domains().list().await;
    assert!(matches!(result, Err(HttpError::Network(_))));
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/domains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let domains_a = client.domains();
    let domains_b = client.domains();
    let (first, second) = tokio::join!(domains_a.list(), domains_b.list());
    assert!(first.unwrap().is_data());
    assert!(second.unwrap().is_data());
}
