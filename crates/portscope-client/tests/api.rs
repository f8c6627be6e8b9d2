//! Integration tests against a mock PortScope API server.

use portscope_client::{PortscopeClient, PortscopeError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PortscopeClient {
    PortscopeClient::builder("test-key")
        .base_url(server.uri())
        .build()
}

#[tokio::test]
async fn test_search_decodes_matches_and_total() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/banners/search"))
        .and(query_param("key", "test-key"))
        .and(query_param("query", "apache"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matches": [
                {"ip_str": "1.2.3.4", "port": 80, "hostnames": ["a.example"]},
                {"ip_str": "5.6.7.8", "port": 443}
            ],
            "total": 9155
        })))
        .mount(&server)
        .await;

    let results = client_for(&server)
        .search()
        .query("apache")
        .send()
        .await
        .unwrap();

    assert_eq!(results.total, 9155);
    assert_eq!(results.len(), 2);
    let first = &results.matches[0];
    assert_eq!(
        first.field("ip_str").unwrap().as_text(),
        Some("1.2.3.4")
    );
}

#[tokio::test]
async fn test_search_trims_query_and_sends_explicit_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/banners/search"))
        .and(query_param("query", "nginx"))
        .and(query_param("limit", "5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"matches": [], "total": 0})),
        )
        .mount(&server)
        .await;

    let results = client_for(&server)
        .search()
        .query("  nginx  ")
        .limit(5)
        .send()
        .await
        .unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_count_returns_total_without_matches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/banners/count"))
        .and(query_param("query", "port:22"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 4214379})))
        .mount(&server)
        .await;

    let count = client_for(&server)
        .search()
        .count("port:22")
        .send()
        .await
        .unwrap();

    assert_eq!(count.total, 4_214_379);
}

#[tokio::test]
async fn test_my_ip_decodes_plain_json_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tools/myip"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("203.0.113.7")))
        .mount(&server)
        .await;

    let ip = client_for(&server).tools().my_ip().await.unwrap();
    assert_eq!(ip.as_str(), "203.0.113.7");
}

#[tokio::test]
async fn test_api_error_message_surfaces_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/banners/search"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid API key"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search()
        .query("apache")
        .send()
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid API key");
    assert!(err.is_auth_error());
    assert_eq!(err.status_code(), Some(401));
}

#[tokio::test]
async fn test_error_without_body_gets_canned_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/banners/count"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search()
        .count("apache")
        .send()
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "rate limit reached");
    assert!(err.is_quota_error());
}

#[tokio::test]
async fn test_blank_query_fails_before_any_request() {
    let server = MockServer::start().await;

    let err = client_for(&server)
        .search()
        .query("   ")
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, PortscopeError::InvalidQuery(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_oversized_limit_fails_before_any_request() {
    let server = MockServer::start().await;

    let err = client_for(&server)
        .search()
        .query("apache")
        .limit(1001)
        .send()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PortscopeError::LimitExceeded {
            requested: 1001,
            max: 1000
        }
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}
