#![allow(dead_code)]

use axum::extract::ConnectInfo;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tinylink::application::services::{CodeAllocator, FixedWindowLimiter, LinkService};
use tinylink::domain::store::KeyValueStore;
use tinylink::infrastructure::store::MemoryStore;
use tinylink::state::AppState;

pub const BASE_URL: &str = "http://localhost:3000";
pub const MAPPING_TTL: Duration = Duration::from_secs(86_400);
pub const RATE_WINDOW: Duration = Duration::from_secs(60);

pub fn create_test_state(store: Arc<MemoryStore>) -> AppState {
    create_test_state_with_limit(store, 10)
}

pub fn create_test_state_with_limit(store: Arc<MemoryStore>, rate_limit_max: i64) -> AppState {
    let store: Arc<dyn KeyValueStore> = store;

    let limiter = FixedWindowLimiter::new(store.clone(), rate_limit_max, RATE_WINDOW);
    let allocator = CodeAllocator::new(store.clone(), 5);

    let link_service = Arc::new(LinkService::new(
        store,
        limiter,
        allocator,
        MAPPING_TTL,
        BASE_URL.to_string(),
        false,
    ));

    AppState::new(link_service, false)
}

/// Seeds a mapping directly, bypassing the creation path.
pub async fn seed_mapping(store: &MemoryStore, code: &str, url: &str) {
    assert!(
        store
            .set_if_absent(&format!("short:{code}"), url, MAPPING_TTL)
            .await
            .unwrap()
    );
}

/// Injects a fixed peer address so handlers using `ConnectInfo` work under
/// the in-process test transport.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
