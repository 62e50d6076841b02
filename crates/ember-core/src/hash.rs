//! Stable string hashing for group keys

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// A stable 64-bit hash of a string identifier.
///
/// Mutator groups are named symbolically in configuration but compared by
/// hash at dispatch time. The value is the first eight bytes of the SHA-256
/// digest, so it is identical across runs and platforms.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HashValue(pub u64);

impl HashValue {
    /// The reserved value for an unnamed group
    pub const UNNAMED: Self = Self(0);

    /// Hash a string identifier. The empty string maps to `UNNAMED`.
    pub fn of(name: &str) -> Self {
        if name.is_empty() {
            return Self::UNNAMED;
        }
        let digest = Sha256::digest(name.as_bytes());
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        Self(u64::from_le_bytes(bytes))
    }

    /// Get the raw u64 value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashValue({:#018x})", self.0)
    }
}

impl fmt::Display for HashValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
