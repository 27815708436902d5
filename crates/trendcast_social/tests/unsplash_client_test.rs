//! Image resolution against a mock Unsplash API.

use serde_json::json;
use trendcast_interface::ImageResolver;
use trendcast_social::{FALLBACK_IMAGE_URL, UnsplashClient, UnsplashConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> UnsplashClient {
    UnsplashClient::new("test-key", UnsplashConfig::with_base_url(server.uri()))
}

#[tokio::test]
async fn test_returns_regular_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos/random"))
        .and(query_param("query", "google data center"))
        .and(query_param("client_id", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "abc",
            "urls": { "regular": "https://images.unsplash.com/photo-1", "small": "s" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let url = client_for(&server).resolve_image("google data center").await;
    assert_eq!(url, "https://images.unsplash.com/photo-1");
}

#[tokio::test]
async fn test_missing_regular_url_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "urls": {} })))
        .mount(&server)
        .await;

    let url = client_for(&server).resolve_image("charminar").await;
    assert_eq!(url, FALLBACK_IMAGE_URL);
}

#[tokio::test]
async fn test_http_error_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos/random"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let url = client_for(&server).resolve_image("charminar").await;
    assert_eq!(url, FALLBACK_IMAGE_URL);
}

#[tokio::test]
async fn test_non_json_body_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos/random"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Rate Limit Exceeded"))
        .mount(&server)
        .await;

    let url = client_for(&server).resolve_image("charminar").await;
    assert_eq!(url, FALLBACK_IMAGE_URL);
}

#[tokio::test]
async fn test_inner_lookup_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos/random"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .random_photo_url("charminar")
        .await
        .expect_err("403 should fail");
    assert_eq!(err.kind, trendcast_error::UnsplashErrorKind::Http(403));
}
