//! End-to-end service flows over the in-memory store.

mod common;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tinylink::error::AppError;
use tinylink::infrastructure::store::MemoryStore;
use tokio::time::advance;

#[tokio::test]
async fn test_create_resolve_round_trip() {
    let state = common::create_test_state(Arc::new(MemoryStore::new()));

    let link = state
        .link_service
        .create("1.2.3.4", "https://example.com/some/long/path?q=1")
        .await
        .unwrap();

    let resolved = state.link_service.resolve(&link.code).await.unwrap();

    assert_eq!(resolved, "https://example.com/some/long/path?q=1");
}

#[tokio::test]
async fn test_concurrent_creates_never_share_a_code() {
    let state = common::create_test_state_with_limit(Arc::new(MemoryStore::new()), 1_000);

    let mut tasks = tokio::task::JoinSet::new();

    for i in 0..100 {
        let service = state.link_service.clone();
        tasks.spawn(async move {
            service
                .create(&format!("10.0.0.{i}"), &format!("https://example.com/{i}"))
                .await
                .unwrap()
                .code
        });
    }

    let mut codes = HashSet::new();
    while let Some(code) = tasks.join_next().await {
        codes.insert(code.unwrap());
    }

    assert_eq!(codes.len(), 100, "two creations received the same code");
}

#[tokio::test(start_paused = true)]
async fn test_resolve_after_ttl_expiry_is_not_found() {
    let state = common::create_test_state(Arc::new(MemoryStore::new()));

    let link = state
        .link_service
        .create("1.2.3.4", "https://example.com/a")
        .await
        .unwrap();

    advance(common::MAPPING_TTL + Duration::from_secs(1)).await;

    let result = state.link_service.resolve(&link.code).await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[tokio::test(start_paused = true)]
async fn test_rate_limit_window_resets_for_creation() {
    let state = common::create_test_state_with_limit(Arc::new(MemoryStore::new()), 2);

    for i in 0..2 {
        state
            .link_service
            .create("1.2.3.4", &format!("https://example.com/{i}"))
            .await
            .unwrap();
    }

    let result = state
        .link_service
        .create("1.2.3.4", "https://example.com/3")
        .await;
    assert!(matches!(result, Err(AppError::RateLimited { .. })));

    advance(common::RATE_WINDOW + Duration::from_secs(1)).await;

    // A fresh window: the identity may create again.
    let result = state
        .link_service
        .create("1.2.3.4", "https://example.com/4")
        .await;
    assert!(result.is_ok());
}
