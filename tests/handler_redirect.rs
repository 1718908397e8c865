mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use std::sync::Arc;
use tinylink::api::handlers::redirect_handler;
use tinylink::domain::store::KeyValueStore;
use tinylink::infrastructure::store::MemoryStore;

fn test_server(store: Arc<MemoryStore>) -> TestServer {
    let state = common::create_test_state(store);
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let store = Arc::new(MemoryStore::new());
    common::seed_mapping(&store, "abc1234", "https://example.com/a").await;

    let server = test_server(store);

    let response = server.get("/abc1234").await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "https://example.com/a"
    );
}

#[tokio::test]
async fn test_redirect_unknown_code() {
    let server = test_server(Arc::new(MemoryStore::new()));

    let response = server.get("/missing").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_increments_hit_counter() {
    let store = Arc::new(MemoryStore::new());
    common::seed_mapping(&store, "abc1234", "https://example.com/a").await;

    let server = test_server(store.clone());

    server.get("/abc1234").await.assert_status(StatusCode::TEMPORARY_REDIRECT);
    server.get("/abc1234").await.assert_status(StatusCode::TEMPORARY_REDIRECT);

    assert_eq!(
        store.get("hits:abc1234").await.unwrap().as_deref(),
        Some("2")
    );
}

#[tokio::test]
async fn test_redirect_does_not_create_hits_for_unknown_codes() {
    let store = Arc::new(MemoryStore::new());
    let server = test_server(store.clone());

    server.get("/missing").await.assert_status_not_found();

    assert!(store.get("hits:missing").await.unwrap().is_none());
}
