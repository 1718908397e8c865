mod common;

use axum::http::StatusCode;
use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use tinylink::api::handlers::{redirect_handler, shorten_handler, stats_handler};
use tinylink::infrastructure::store::MemoryStore;

fn test_server(store: Arc<MemoryStore>) -> TestServer {
    let state = common::create_test_state(store);
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .route("/api/stats/{code}", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .layer(common::MockConnectInfoLayer)
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_stats_never_resolved_code_reports_zero_hits() {
    let store = Arc::new(MemoryStore::new());
    common::seed_mapping(&store, "abc1234", "https://example.com/a").await;

    let server = test_server(store);

    let response = server.get("/api/stats/abc1234").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "abc1234");
    assert_eq!(json["longUrl"], "https://example.com/a");
    assert_eq!(json["hits"], 0);
}

#[tokio::test]
async fn test_stats_unknown_code() {
    let server = test_server(Arc::new(MemoryStore::new()));

    let response = server.get("/api/stats/missing").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_create_resolve_stats_scenario() {
    // create -> code C; resolve C -> original URL, hits 0 -> 1;
    // stats C -> { code: C, longUrl, hits: 1 }.
    let server = test_server(Arc::new(MemoryStore::new()));

    let response = server
        .post("/api/shorten")
        .json(&json!({ "longUrl": "https://example.com/a" }))
        .await;
    response.assert_status_ok();
    let code = response.json::<serde_json::Value>()["code"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/{code}")).await;
    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "https://example.com/a"
    );

    let response = server.get(&format!("/api/stats/{code}")).await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], code.as_str());
    assert_eq!(json["longUrl"], "https://example.com/a");
    assert_eq!(json["hits"], 1);
}
