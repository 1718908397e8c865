//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! Either `REDIS_URL` or `REDIS_HOST` (optionally with `REDIS_PORT`,
//! `REDIS_PASSWORD`, `REDIS_DB`).
//!
//! ## Optional Variables
//!
//! - `BASE_URL` - Public base used to compose short links (default: `http://localhost:3000`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `MAPPING_TTL_SECONDS` - Lifetime of a short link (default: 86400)
//! - `RATE_LIMIT_MAX` - Creation requests allowed per window (default: 10)
//! - `RATE_LIMIT_WINDOW_SECONDS` - Window duration (default: 60)
//! - `RATE_LIMIT_FAIL_OPEN` - Limiter policy on store failure (default: `false`, fail-closed)
//! - `BEHIND_PROXY` - Trust forwarded-IP headers for rate limiting (default: `false`)
//! - `CODE_LENGTH_BYTES` - Random bytes per short code (default: 5)
//! - `STORE_CONNECT_TIMEOUT_MS` / `STORE_RESPONSE_TIMEOUT_MS` - Store operation bounds
//! - `REQUEST_DEADLINE_MS` - Overall per-request deadline (default: 5000)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub redis_url: String,
    /// Public base URL used to compose the full short link.
    pub base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// TTL (seconds) for `short:` mapping keys.
    pub mapping_ttl_seconds: u64,
    /// Maximum creation requests per identity per window.
    pub rate_limit_max: i64,
    /// Rate-limit window duration in seconds.
    pub rate_limit_window_seconds: u64,
    /// Named limiter policy for store failures: `true` lets creation
    /// requests through when the limiter cannot be consulted, `false`
    /// (default) rejects them. Never defaulted silently; see `LinkService`.
    pub rate_limit_fail_open: bool,
    /// When true, rate limiting reads client IP from X-Forwarded-For /
    /// X-Real-IP headers. Enable only behind a trusted reverse proxy.
    pub behind_proxy: bool,
    /// Random bytes drawn per short code (5 bytes = 40 bits = 7 characters).
    pub code_length_bytes: usize,
    /// Timeout for establishing the store connection, in milliseconds.
    pub store_connect_timeout_ms: u64,
    /// Timeout for each individual store command, in milliseconds.
    pub store_response_timeout_ms: u64,
    /// Overall deadline for a single HTTP request, in milliseconds.
    pub request_deadline_ms: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if Redis configuration is missing.
    pub fn from_env() -> Result<Self> {
        let redis_url = Self::load_redis_url().context("Failed to load Redis configuration")?;

        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let mapping_ttl_seconds = env::var("MAPPING_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(86_400);

        let rate_limit_max = env::var("RATE_LIMIT_MAX")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let rate_limit_window_seconds = env::var("RATE_LIMIT_WINDOW_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        let rate_limit_fail_open = env::var("RATE_LIMIT_FAIL_OPEN")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let code_length_bytes = env::var("CODE_LENGTH_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let store_connect_timeout_ms = env::var("STORE_CONNECT_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2_000);

        let store_response_timeout_ms = env::var("STORE_RESPONSE_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1_000);

        let request_deadline_ms = env::var("REQUEST_DEADLINE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5_000);

        Ok(Self {
            redis_url,
            base_url,
            listen_addr,
            log_level,
            log_format,
            mapping_ttl_seconds,
            rate_limit_max,
            rate_limit_window_seconds,
            rate_limit_fail_open,
            behind_proxy,
            code_length_bytes,
            store_connect_timeout_ms,
            store_response_timeout_ms,
            request_deadline_ms,
        })
    }

    /// Loads Redis URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `REDIS_URL` environment variable
    /// 2. Constructed from `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`, `REDIS_DB`
    fn load_redis_url() -> Result<String> {
        if let Ok(url) = env::var("REDIS_URL") {
            return Ok(url);
        }

        let host =
            env::var("REDIS_HOST").context("REDIS_HOST must be set when REDIS_URL is not")?;
        let port = env::var("REDIS_PORT").unwrap_or_else(|_| "6379".to_string());
        let password = env::var("REDIS_PASSWORD").ok();
        let db = env::var("REDIS_DB").unwrap_or_else(|_| "0".to_string());

        let url = match password {
            // Empty password means no authentication
            Some(pwd) if !pwd.is_empty() => format!("redis://:{}@{}:{}/{}", pwd, host, port, db),
            _ => format!("redis://{}:{}/{}", host, port, db),
        };

        Ok(url)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is out of its sane range.
    pub fn validate(&self) -> Result<()> {
        if !self.redis_url.starts_with("redis://") && !self.redis_url.starts_with("rediss://") {
            anyhow::bail!(
                "REDIS_URL must start with 'redis://' or 'rediss://', got '{}'",
                self.redis_url
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.mapping_ttl_seconds == 0 {
            anyhow::bail!("MAPPING_TTL_SECONDS must be greater than 0");
        }

        if self.rate_limit_max < 1 {
            anyhow::bail!(
                "RATE_LIMIT_MAX must be at least 1, got {}",
                self.rate_limit_max
            );
        }

        if self.rate_limit_window_seconds == 0 {
            anyhow::bail!("RATE_LIMIT_WINDOW_SECONDS must be greater than 0");
        }

        // 4 bytes = 32 bits, the floor at which collisions stay negligible
        // for the expected mapping cardinality.
        if self.code_length_bytes < 4 || self.code_length_bytes > 16 {
            anyhow::bail!(
                "CODE_LENGTH_BYTES must be between 4 and 16, got {}",
                self.code_length_bytes
            );
        }

        if self.store_connect_timeout_ms == 0 || self.store_response_timeout_ms == 0 {
            anyhow::bail!("Store timeouts must be greater than 0");
        }

        if self.request_deadline_ms == 0 {
            anyhow::bail!("REQUEST_DEADLINE_MS must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Redis: {}", mask_connection_string(&self.redis_url));
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Mapping TTL: {}s", self.mapping_ttl_seconds);
        tracing::info!(
            "  Rate limit: {}/{}s ({})",
            self.rate_limit_max,
            self.rate_limit_window_seconds,
            if self.rate_limit_fail_open {
                "fail-open"
            } else {
                "fail-closed"
            }
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks sensitive information in connection strings for logging.
///
/// Replaces password with `***` in URLs like
/// `redis://:password@host:port/db` → `redis://:***@host:port/db`.
fn mask_connection_string(url: &str) -> String {
    if let Some(start) = url.find("://") {
        let scheme_end = start + 3;
        let rest = &url[scheme_end..];

        if let Some(at_pos) = rest.find('@') {
            let credentials = &rest[..at_pos];
            let host_part = &rest[at_pos..];

            if let Some(colon_pos) = credentials.rfind(':') {
                let username = &credentials[..colon_pos];
                return format!("{}://{}:***{}", &url[..start], username, host_part);
            }
        }
    }

    url.to_string()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// Expects environment variables to be already loaded (e.g., via
/// `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
