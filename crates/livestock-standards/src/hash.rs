#![deny(unsafe_code)]

//! Content fingerprint of the reference data.

use sha2::{Digest, Sha256};

/// SHA-256 hex digest of the reference text with line endings normalized
/// to `\n`, so a checkout with CRLF endings fingerprints the same.
pub fn standards_fingerprint(contents: &str) -> String {
    let mut hasher = Sha256::new();
    for line in contents.lines() {
        hasher.update(line.as_bytes());
        hasher.update(b"\n");
    }
    hex::encode(hasher.finalize())
}
