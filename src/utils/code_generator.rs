//! Short code generation.

use base64::Engine as _;

/// Generates a cryptographically secure random short code from `n_bytes`
/// random bytes, encoded as URL-safe base64 without padding.
///
/// The default of 5 bytes yields 40 bits of entropy and a 7-character code,
/// comfortably above the ~30-bit floor at which collisions stay negligible
/// for the expected mapping cardinality. Uniqueness is still claimed at the
/// store, not assumed here.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code(n_bytes: usize) -> String {
    let mut buffer = vec![0u8; n_bytes];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
