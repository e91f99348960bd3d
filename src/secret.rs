//! Shared-secret handling.

use std::fmt;

use data_encoding::BASE32_NOPAD;
use rand::RngCore;
use serde::Deserialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The process-wide keying secret.
///
/// Every nonce is derived from this value, so the whole scheme reduces
/// to its secrecy: it must be identical on the generating and
/// validating side, supplied from deployment configuration rather than
/// hardcoded, and rotating it invalidates every outstanding nonce.
///
/// The wrapped string is cleared from memory on drop and never printed
/// by `Debug`.
#[derive(Clone, Zeroize, ZeroizeOnDrop, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    /// Wrap an externally supplied secret string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generate a fresh 64-character secret from OS randomness.
    ///
    /// Intended for provisioning tooling and tests; production
    /// deployments load the secret from configuration so both sides
    /// share it.
    pub fn random() -> Self {
        let mut raw = [0u8; 40];
        rand::rngs::OsRng.fill_bytes(&mut raw);
        Self(BASE32_NOPAD.encode(&raw).to_lowercase())
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}
