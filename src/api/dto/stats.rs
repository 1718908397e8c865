//! DTOs for the link statistics endpoint.

use serde::Serialize;

/// Statistics for a short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub code: String,
    pub long_url: String,
    pub hits: i64,
}
