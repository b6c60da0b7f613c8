//! Integration tests for the API client request/response contract
//!
//! These tests validate the client against a mock HTTP server:
//! - success bodies returned exactly as served
//! - status and details propagation on failing responses
//! - default headers, caller overrides, and cache bypass
//! - session cookie replay after login
//! - independence of concurrent calls

use serde_json::json;
use shopsans_api::{ApiClient, ApiError, ErrorDetails, RequestOptions};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to build a client against a mock server
fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri()).expect("client should build")
}

/// Helper to build an empty customers page body
fn empty_customers_page() -> serde_json::Value {
    json!({
        "data": [],
        "page": 1,
        "pageSize": 10,
        "total": 0
    })
}

#[tokio::test]
async fn test_success_returns_exact_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_customers_page()))
        .mount(&server)
        .await;

    let body: serde_json::Value = client_for(&server)
        .fetch("/customers?page=1&pageSize=10", RequestOptions::default())
        .await
        .unwrap();

    // Deep-equal to the served body, no wrapping added
    assert_eq!(body, empty_customers_page());
}

#[tokio::test]
async fn test_failing_status_is_propagated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(418))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch::<serde_json::Value>("/orders", RequestOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(418));
    assert_eq!(err.to_string(), "API 418");
}

#[tokio::test]
async fn test_json_error_body_becomes_json_details() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/abc"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch::<serde_json::Value>("/orders/abc", RequestOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(
        err.details(),
        Some(&ErrorDetails::Json(json!({"error": "not found"})))
    );
    assert_eq!(err.reason(), "not found");
}

#[tokio::test]
async fn test_text_error_body_becomes_text_details() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analytics/overview"))
        .respond_with(ResponseTemplate::new(500).set_body_raw("internal error", "text/plain"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch::<serde_json::Value>("/analytics/overview", RequestOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(
        err.details(),
        Some(&ErrorDetails::Text("internal error".to_string()))
    );
    assert_eq!(err.reason(), "internal error");
}

#[tokio::test]
async fn test_unparseable_error_body_leaves_details_unset() {
    let server = MockServer::start().await;

    // Declared JSON, but the payload is not
    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(502).set_body_raw("<html>bad gateway</html>", "application/json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch::<serde_json::Value>("/customers", RequestOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(502));
    assert!(err.details().is_none());
    assert_eq!(err.reason(), "API 502");
}

#[tokio::test]
async fn test_non_json_content_type_reads_body_as_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(503).set_body_raw("try later", "application/octet-stream"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch::<serde_json::Value>("/customers", RequestOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert_eq!(err.details(), Some(&ErrorDetails::Text("try later".to_string())));
}

#[tokio::test]
async fn test_malformed_success_body_is_unclassified() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch::<serde_json::Value>("/customers", RequestOptions::default())
        .await
        .unwrap_err();

    // Decode failure on a 200 is not an API error; no status is attached
    assert!(matches!(err, ApiError::Http(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_default_content_type_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let _: serde_json::Value = client_for(&server)
        .fetch("/products", RequestOptions::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_caller_headers_take_precedence() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(header("content-type", "application/vnd.shopsans+json"))
        .and(header("x-request-id", "req-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let mut options = RequestOptions::default();
    options.headers.insert(
        reqwest::header::CONTENT_TYPE,
        reqwest::header::HeaderValue::from_static("application/vnd.shopsans+json"),
    );
    options.headers.insert(
        reqwest::header::HeaderName::from_static("x-request-id"),
        reqwest::header::HeaderValue::from_static("req-7"),
    );

    let _: serde_json::Value = client_for(&server).fetch("/products", options).await.unwrap();
}

#[tokio::test]
async fn test_cache_bypass_header_on_every_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analytics/overview"))
        .and(header("cache-control", "no-store"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let _: serde_json::Value = client
        .fetch("/analytics/overview", RequestOptions::default())
        .await
        .unwrap();
    let _: serde_json::Value = client
        .fetch("/analytics/overview", RequestOptions::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login_cookie_is_replayed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "admin@demo.com", "password": "admin123"})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "sid=abc123; Path=/; HttpOnly")
                .set_body_json(json!({"ok": true})),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(header("cookie", "sid=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_customers_page()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.login("admin@demo.com", "admin123").await.unwrap();

    let page = client.list_customers(None, 1, 10).await.unwrap();
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_customers_page()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(500).set_body_raw("internal error", "text/plain"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (customers, orders) = tokio::join!(
        client.fetch::<serde_json::Value>("/customers", RequestOptions::default()),
        client.fetch::<serde_json::Value>("/orders", RequestOptions::default()),
    );

    // One failure does not affect or cancel the other
    assert!(customers.is_ok());
    assert_eq!(orders.unwrap_err().status(), Some(500));
}

#[tokio::test]
async fn test_typed_customer_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(query_param("page", "2"))
        .and(query_param("pageSize", "25"))
        .and(query_param("q", "ada"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "cus_1",
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "country": "GB",
                "createdAt": "2024-01-15T09:30:00.000Z"
            }],
            "page": 2,
            "pageSize": 25,
            "total": 26,
            "note": "FTS unavailable, substring match"
        })))
        .mount(&server)
        .await;

    let page = client_for(&server)
        .list_customers(Some("ada"), 2, 25)
        .await
        .unwrap();

    assert_eq!(page.total, 26);
    assert_eq!(page.data[0].name, "Ada Lovelace");
    assert_eq!(page.note.as_deref(), Some("FTS unavailable, substring match"));
}

#[tokio::test]
async fn test_typed_order_listing_with_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .and(query_param("status", "paid"))
        .and(query_param("channel", "web"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "ord_1",
                "customerId": "cus_1",
                "orderDate": "2025-05-04T12:00:00.000Z",
                "channel": "web",
                "status": "paid",
                "totalCents": 4999,
                "_count": {"items": 2},
                "customer": {"name": "Ada", "email": "ada@example.com"}
            }],
            "page": 1,
            "pageSize": 10,
            "total": 1
        })))
        .mount(&server)
        .await;

    let page = client_for(&server)
        .list_orders(Some("paid"), Some("web"), 1, 10)
        .await
        .unwrap();

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].total_cents, 4999);
    assert_eq!(page.data[0].count.items, 2);
}

#[tokio::test]
async fn test_analytics_endpoints() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analytics/revenue-by-day"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "range": {"from": "2025-04-01", "to": "2025-04-03"},
            "series": [
                {"day": "2025-04-01", "revenueCents": 120000},
                {"day": "2025-04-02", "revenueCents": 98000},
                {"day": "2025-04-03", "revenueCents": 143500}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/analytics/orders-by-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "breakdown": [
                {"status": "pending", "count": 4},
                {"status": "paid", "count": 11}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let revenue = client.revenue_by_day().await.unwrap();
    assert_eq!(revenue.series.len(), 3);
    assert_eq!(revenue.series[2].revenue_cents, 143500);

    let statuses = client.orders_by_status().await.unwrap();
    assert_eq!(statuses.breakdown[1].status, "paid");
    assert_eq!(statuses.breakdown[1].count, 11);
}
