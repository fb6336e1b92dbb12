//! PostgreSQL repository tests.
//!
//! Need a reachable server in `DATABASE_URL`.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use url_shortener::domain::entities::UrlRecord;
use url_shortener::domain::repositories::{StorageError, UrlRepository};
use url_shortener::infrastructure::persistence::PgUrlRepository;

fn record(code: &str, url: &str) -> UrlRecord {
    UrlRecord::new(
        code.to_string(),
        url.to_string(),
        "http://localhost:5000/",
        Utc::now(),
    )
}

#[sqlx::test]
async fn test_insert_and_find(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    let new_record = record("abc12345", "https://example.com");

    repo.insert(new_record.clone()).await.unwrap();

    let found = repo.find_by_code("abc12345").await.unwrap().unwrap();
    assert_eq!(found.id, new_record.id);
    assert_eq!(found.long_url, "https://example.com");
    assert_eq!(found.short_url, "http://localhost:5000/abc12345");
    assert_eq!(found.expires_at - found.created_at, Duration::days(5));
}

#[sqlx::test]
async fn test_find_by_code_not_found(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let result = repo.find_by_code("notfound").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[sqlx::test]
async fn test_duplicate_code_rejected(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool.clone()));

    repo.insert(record("dup12345", "https://first.com"))
        .await
        .unwrap();
    let result = repo.insert(record("dup12345", "https://second.com")).await;

    assert!(matches!(result, Err(StorageError::DuplicateCode(ref c)) if c == "dup12345"));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE url_code = $1")
        .bind("dup12345")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test]
async fn test_health_check(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    assert!(repo.health_check().await);
}
