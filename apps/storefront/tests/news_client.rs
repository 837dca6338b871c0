//! News client tests against a mock HTTP server.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use veld_storefront::config::AppConfig;
use veld_storefront::news::{NewsClient, NewsError};
use veld_storefront::state::theme::Theme;

fn config_for(server_url: &str, api_key: Option<&str>) -> AppConfig {
    AppConfig {
        database_path: ":memory:".to_string(),
        news_api_url: format!("{}/v2/top-headlines", server_url),
        news_api_key: api_key.map(String::from),
        news_country: "za".to_string(),
        http_timeout_secs: 5,
        default_theme: Theme::Light,
    }
}

fn article(title: &str, source: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "url": format!("https://news.example/{}", title.replace(' ', "-")),
        "source": { "name": source }
    })
}

#[tokio::test]
async fn fetches_and_maps_headlines() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .and(query_param("country", "za"))
        .and(query_param("apiKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
            "articles": [
                article("Rand strengthens against the dollar", "Business Day"),
                article("Springboks name squad", "Sport24"),
                // Malformed entries are dropped, not rendered half-empty
                { "title": null, "url": null, "source": { "name": "Broken" } },
            ]
        })))
        .mount(&server)
        .await;

    let client = NewsClient::new(&config_for(&server.uri(), Some("test-key"))).unwrap();
    let headlines = client.top_headlines(5).await.unwrap();

    assert_eq!(headlines.len(), 2);
    assert_eq!(headlines[0].title, "Rand strengthens against the dollar");
    assert_eq!(headlines[0].source, "Business Day");
}

#[tokio::test]
async fn missing_api_key_is_explicit() {
    let server = MockServer::start().await;
    let client = NewsClient::new(&config_for(&server.uri(), None)).unwrap();

    let err = client.top_headlines(5).await.unwrap_err();
    assert!(matches!(err, NewsError::MissingApiKey));
}

#[tokio::test]
async fn upstream_error_status_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = NewsClient::new(&config_for(&server.uri(), Some("test-key"))).unwrap();
    let err = client.top_headlines(5).await.unwrap_err();
    assert!(matches!(err, NewsError::BadStatus { status: 429 }));
}

#[tokio::test]
async fn limit_caps_returned_headlines() {
    let server = MockServer::start().await;

    let articles: Vec<_> = (0..10)
        .map(|i| article(&format!("Headline {}", i), "Wire"))
        .collect();

    Mock::given(method("GET"))
        .and(path("/v2/top-headlines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
            "articles": articles
        })))
        .mount(&server)
        .await;

    let client = NewsClient::new(&config_for(&server.uri(), Some("test-key"))).unwrap();
    let headlines = client.top_headlines(3).await.unwrap();
    assert_eq!(headlines.len(), 3);
}
