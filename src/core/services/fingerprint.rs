use sha2::{Digest, Sha256};

use crate::core::models::environment::EnvironmentConfig;

/// Label written before the digest in generated headers.
pub const FINGERPRINT_PREFIX: &str = "sha256:";

/// SHA-256 over the compact JSON form of the record.
///
/// Field order is fixed by the struct definition, so equal records
/// always produce equal fingerprints regardless of the source format.
pub fn fingerprint(config: &EnvironmentConfig) -> String {
    // Serializing plain strings and a bool into JSON cannot fail.
    let canonical = serde_json::to_vec(config).unwrap_or_default();
    let digest = Sha256::digest(&canonical);
    let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    format!("{FINGERPRINT_PREFIX}{hex}")
}

/// Shortened form for tables.
pub fn short(fingerprint: &str) -> &str {
    let end = (FINGERPRINT_PREFIX.len() + 12).min(fingerprint.len());
    &fingerprint[..end]
}
