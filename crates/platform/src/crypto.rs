//! Cryptographic Utilities
//!
//! Randomness for opaque credentials (remember-me tokens, reset codes).

use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Generate an opaque, URL-safe token string from `len` random bytes.
///
/// Each call draws fresh OS randomness, so repeated calls are
/// statistically independent of one another.
pub fn random_token(len: usize) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(random_bytes(len))
}
