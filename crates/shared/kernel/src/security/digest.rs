//! One-way identity digests.
//!
//! The directory identifies callers by the hex-encoded SHA-256 of their
//! email. The digest is derived, never stored: it can always be recomputed
//! from the email on demand, so it is an opaque token rather than a
//! credential.

use sha2::{Digest, Sha256};

/// Returns the lowercase hex-encoded SHA-256 digest of the input.
///
/// Deterministic: the same input always yields the same 64-character string.
#[must_use]
pub fn sha256_hex(input: impl AsRef<[u8]>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_ref());
    hex::encode(hasher.finalize())
}
