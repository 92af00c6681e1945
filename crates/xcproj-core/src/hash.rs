#![deny(unsafe_code)]

use sha2::Digest;

/// Lowercase hex SHA-256 of a descriptor.
pub fn descriptor_digest(descriptor: &str) -> String {
    let digest = sha2::Sha256::digest(descriptor.as_bytes());
    hex::encode(digest)
}
