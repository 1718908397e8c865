//! Core entities for short links.

/// A live short-code mapping.
///
/// Once claimed, the long URL bound to a code is immutable for the lifetime
/// of the mapping; expiry is handled by the store's TTL, never by an
/// explicit delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub long_url: String,
}

/// Access statistics for a live mapping.
///
/// `hits` is a best-effort counter: it is monotonically non-decreasing while
/// the mapping is live, but a freshly created, never-resolved code
/// legitimately has no counter yet and reports zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkStats {
    pub code: String,
    pub long_url: String,
    pub hits: i64,
}
