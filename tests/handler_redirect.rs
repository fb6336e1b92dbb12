mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;
use std::sync::Arc;
use url_shortener::domain::entities::UrlRecord;
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::infrastructure::persistence::MemoryUrlRepository;

#[tokio::test]
async fn test_redirect_success() {
    let repository = Arc::new(MemoryUrlRepository::new());
    common::create_test_record(&repository, "redirect1", "https://example.com/target").await;
    let server = common::create_test_server(repository);

    let response = server.get("/redirect1").await;

    assert_eq!(response.status_code(), StatusCode::PERMANENT_REDIRECT);
    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_unknown_code() {
    let server = common::create_test_server(Arc::new(MemoryUrlRepository::new()));

    let response = server.get("/doesnotexist").await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "No URL with code: doesnotexist");
}

#[tokio::test]
async fn test_redirect_expired_record_still_redirects() {
    let repository = Arc::new(MemoryUrlRepository::new());
    repository
        .insert(UrlRecord::new(
            "old".to_string(),
            "https://example.com/old".to_string(),
            common::BASE_URL,
            Utc::now() - Duration::days(10),
        ))
        .await
        .unwrap();
    let server = common::create_test_server(repository);

    let response = server.get("/old").await;

    assert_eq!(response.status_code(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/old");
}

#[tokio::test]
async fn test_shorten_then_redirect_round_trip() {
    let server = common::create_test_server(Arc::new(MemoryUrlRepository::new()));

    let created = server
        .post("/shorten")
        .json(&json!({ "long_url": "https://example.com/page?q=1#frag" }))
        .await;
    created.assert_status(StatusCode::CREATED);

    let json = created.json::<serde_json::Value>();
    let code = json["newUrl"]
        .as_str()
        .unwrap()
        .strip_prefix(common::BASE_URL)
        .unwrap()
        .to_string();

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(
        response.header("location"),
        "https://example.com/page?q=1#frag"
    );
}

#[tokio::test]
async fn test_url_with_control_characters_redirects() {
    let server = common::create_test_server(Arc::new(MemoryUrlRepository::new()));

    let created = server
        .post("/shorten")
        .json(&json!({ "long_url": "https://example.com/a\nb" }))
        .await;
    created.assert_status(StatusCode::CREATED);

    let json = created.json::<serde_json::Value>();
    let code = json["newUrl"]
        .as_str()
        .unwrap()
        .strip_prefix(common::BASE_URL)
        .unwrap()
        .to_string();

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/ab");
}

#[tokio::test]
async fn test_redirect_with_trailing_slash() {
    let repository = Arc::new(MemoryUrlRepository::new());
    common::create_test_record(&repository, "slashed1", "https://example.com/slash").await;
    let server = common::create_app_server(repository);

    let response = server.get("/slashed1/").await;

    assert_eq!(response.status_code(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/slash");
}
