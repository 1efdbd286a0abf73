//! Checksum calculation for model artifact integrity.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 checksum of artifact content.
///
/// # Arguments
/// * `content` - raw bytes of the artifact file
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let result = hasher.finalize();
    hex::encode(result)
}

/// Check artifact content against an expected hex digest. Case-insensitive;
/// surrounding whitespace in the expected digest is ignored.
pub fn matches(content: &[u8], expected: &str) -> bool {
    calculate_checksum(content).eq_ignore_ascii_case(expected.trim())
}
