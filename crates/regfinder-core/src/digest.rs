//! # Content Fingerprints
//!
//! SHA-256 fingerprints over the canonical JSON form of engine values. Every
//! engine type serializes through ordered maps and sets, so the JSON bytes are
//! stable and two structurally identical values always share a fingerprint.
//!
//! Fingerprints let callers log and compare evaluations (for example, "was
//! this result produced from the same facts?") without retaining the values.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::FinderError;

/// A SHA-256 fingerprint of a serialized engine value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Wrap a raw 32-byte digest.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Access the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Return the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}

/// Compute the fingerprint of any serializable value.
///
/// # Errors
///
/// Returns [`FinderError::Fingerprint`] if `value` cannot be serialized to
/// JSON (e.g. a map with non-string keys).
pub fn fingerprint_of<T: Serialize + ?Sized>(value: &T) -> Result<Fingerprint, FinderError> {
    let bytes = serde_json::to_vec(value).map_err(FinderError::Fingerprint)?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(Fingerprint(hasher.finalize().into()))
}
