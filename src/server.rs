//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, service wiring, and Axum server lifecycle.

use crate::application::services::{CodeAllocator, FixedWindowLimiter, LinkService};
use crate::config::Config;
use crate::domain::store::KeyValueStore;
use crate::infrastructure::store::RedisStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis store (validated with a startup PING, bounded timeouts)
/// - Rate limiter, code allocator, and link service
/// - Axum HTTP server with graceful shutdown on ctrl-c
///
/// # Errors
///
/// Returns an error if the store connection fails, the listen address is
/// invalid, or the server runtime errors out.
pub async fn run(config: Config) -> Result<()> {
    let store: Arc<dyn KeyValueStore> = Arc::new(
        RedisStore::connect(
            &config.redis_url,
            Duration::from_millis(config.store_connect_timeout_ms),
            Duration::from_millis(config.store_response_timeout_ms),
        )
        .await?,
    );

    let limiter = FixedWindowLimiter::new(
        store.clone(),
        config.rate_limit_max,
        Duration::from_secs(config.rate_limit_window_seconds),
    );
    let allocator = CodeAllocator::new(store.clone(), config.code_length_bytes);

    let link_service = Arc::new(LinkService::new(
        store,
        limiter,
        allocator,
        Duration::from_secs(config.mapping_ttl_seconds),
        config.base_url.clone(),
        config.rate_limit_fail_open,
    ));

    let state = AppState::new(link_service, config.behind_proxy);

    let app = app_router(state, Duration::from_millis(config.request_deadline_ms));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }

    tracing::info!("Shutdown signal received");
}
