//! Google Trends client against a local mock service.

use serde_json::json;
use trendcast_error::TrendsErrorKind;
use trendcast_interface::TrendsSource;
use trendcast_trends::{GoogleTrendsClient, TrendsConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn explore_body() -> String {
    let body = json!({
        "widgets": [
            { "id": "TIMESERIES", "request": {}, "token": "ts-token" },
            {
                "id": "RELATED_QUERIES",
                "request": { "restriction": { "complexKeywordsRestriction": {} } },
                "token": "rq-token"
            }
        ]
    });
    format!(")]}}'\n{}", body)
}

fn related_body(top: &[&str]) -> String {
    let ranked: Vec<_> = top.iter().map(|q| json!({ "query": q, "value": 100 })).collect();
    let body = json!({
        "default": {
            "rankedList": [
                { "rankedKeyword": ranked },
                { "rankedKeyword": [{ "query": "rising query", "value": 5000 }] }
            ]
        }
    });
    format!(")]}}',\n{}", body)
}

async fn client_for(server: &MockServer) -> anyhow::Result<GoogleTrendsClient> {
    Ok(GoogleTrendsClient::new(TrendsConfig::with_base_url(
        server.uri(),
    ))?)
}

#[tokio::test]
async fn test_returns_top_list_in_order() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trends/api/explore"))
        .and(query_param("hl", "en-US"))
        .and(query_param("tz", "360"))
        .respond_with(ResponseTemplate::new(200).set_body_string(explore_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/trends/api/widgetdata/relatedsearches"))
        .and(query_param("token", "rq-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(related_body(&["hyderabad biryani", "biryani recipe"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await?;
    let queries = client.related_top_queries("biryani").await?;

    assert_eq!(queries, ["hyderabad biryani", "biryani recipe"]);
    Ok(())
}

#[tokio::test]
async fn test_empty_top_list_yields_no_queries() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trends/api/explore"))
        .respond_with(ResponseTemplate::new(200).set_body_string(explore_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/trends/api/widgetdata/relatedsearches"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(")]}',\n{\"default\":{\"rankedList\":[]}}"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await?;
    assert!(client.related_top_queries("obscure").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_missing_widget_yields_no_queries() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trends/api/explore"))
        .respond_with(ResponseTemplate::new(200).set_body_string(")]}'\n{\"widgets\":[]}"))
        .mount(&server)
        .await;

    let client = client_for(&server).await?;
    assert!(client.related_top_queries("obscure").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_too_many_requests_is_rate_limited() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trends/api/explore"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = client_for(&server).await?;
    let err = client
        .related_top_queries("biryani")
        .await
        .expect_err("429 should fail");
    assert_eq!(err.kind, TrendsErrorKind::RateLimited);
    Ok(())
}

#[tokio::test]
async fn test_server_error_keeps_status() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trends/api/explore"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let client = client_for(&server).await?;
    let err = client
        .related_top_queries("biryani")
        .await
        .expect_err("503 should fail");
    assert_eq!(
        err.kind,
        TrendsErrorKind::Http {
            status_code: 503,
            message: "unavailable".to_string()
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_garbage_body_is_malformed() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trends/api/explore"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>captcha</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server).await?;
    let err = client
        .related_top_queries("biryani")
        .await
        .expect_err("html should not parse");
    assert!(matches!(err.kind, TrendsErrorKind::MalformedResponse(_)));
    Ok(())
}
