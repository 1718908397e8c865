//! Unique short-code allocation.

use crate::domain::store::{KeyValueStore, StoreError, keys};
use crate::utils::code_generator::generate_code;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors from [`CodeAllocator::allocate`].
#[derive(Debug, Error)]
pub enum AllocationError {
    /// Every candidate within the attempt bound was already taken.
    /// Retryable by the caller: a fresh request gets a fresh random draw.
    #[error("no unique code claimed within {attempts} attempts")]
    Exhausted { attempts: usize },

    /// The store failed mid-allocation. Not retried here; genuine
    /// collisions are the only thing the attempt loop retries.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of a single claim attempt.
enum ClaimOutcome {
    Claimed(String),
    Collision,
    StoreFailure(StoreError),
}

/// Claims globally unique short codes via the store's atomic set-if-absent.
///
/// Uniqueness is probabilistic by construction: candidates are drawn from a
/// cryptographically strong RNG with enough entropy that collisions are
/// negligible at the expected mapping cardinality, and the claim itself is
/// atomic at the store, so no concurrent caller can ever observe or
/// overwrite a binding once `allocate` returns. Exhausting the attempt
/// bound is a reportable error, not a crash.
pub struct CodeAllocator {
    store: Arc<dyn KeyValueStore>,
    code_bytes: usize,
    max_attempts: usize,
}

impl CodeAllocator {
    /// Default bound on claim attempts before giving up.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

    /// Creates an allocator drawing codes from `code_bytes` random bytes.
    pub fn new(store: Arc<dyn KeyValueStore>, code_bytes: usize) -> Self {
        Self {
            store,
            code_bytes,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Claims a fresh short code bound to `long_url` for `ttl`.
    ///
    /// # Errors
    ///
    /// - [`AllocationError::Exhausted`] when every candidate within the
    ///   attempt bound collided
    /// - [`AllocationError::Store`] on the first store failure, without
    ///   further attempts
    pub async fn allocate(&self, long_url: &str, ttl: Duration) -> Result<String, AllocationError> {
        for attempt in 1..=self.max_attempts {
            match self.claim(long_url, ttl).await {
                ClaimOutcome::Claimed(code) => {
                    debug!("Claimed short code {} on attempt {}", code, attempt);
                    return Ok(code);
                }
                ClaimOutcome::Collision => {
                    debug!("Short code collision on attempt {}", attempt);
                }
                ClaimOutcome::StoreFailure(e) => return Err(e.into()),
            }
        }

        Err(AllocationError::Exhausted {
            attempts: self.max_attempts,
        })
    }

    /// Generates one candidate and tries to claim it atomically.
    async fn claim(&self, long_url: &str, ttl: Duration) -> ClaimOutcome {
        let candidate = generate_code(self.code_bytes);

        match self
            .store
            .set_if_absent(&keys::mapping(&candidate), long_url, ttl)
            .await
        {
            Ok(true) => ClaimOutcome::Claimed(candidate),
            Ok(false) => ClaimOutcome::Collision,
            Err(e) => ClaimOutcome::StoreFailure(e),
        }
    }
}
