//! Digest selection for nonce derivation.

use std::fmt;
use std::str::FromStr;

use data_encoding::HEXLOWER;
use serde::Deserialize;
use sha2::{Digest, Sha256, Sha512};
use sha3::{Sha3_256, Sha3_512};

use crate::error::NonceError;

/// Hash algorithm used to derive nonces.
///
/// The digest is always rendered as lowercase hex before the nonce
/// window is cut out of it, so the choice only affects how many
/// characters are available to cut from. Generating and validating
/// sides must agree on the algorithm or every validation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum HashAlgorithm {
    Sha256,
    Sha512,
    Sha3_256,
    Sha3_512,
}

impl HashAlgorithm {
    /// Length of the hex-encoded digest in characters.
    pub fn hex_len(self) -> usize {
        match self {
            Self::Sha256 | Self::Sha3_256 => 64,
            Self::Sha512 | Self::Sha3_512 => 128,
        }
    }

    /// Hash `message` and return the digest as lowercase hex.
    pub(crate) fn digest_hex(self, message: &[u8]) -> String {
        match self {
            Self::Sha256 => HEXLOWER.encode(&Sha256::digest(message)),
            Self::Sha512 => HEXLOWER.encode(&Sha512::digest(message)),
            Self::Sha3_256 => HEXLOWER.encode(&Sha3_256::digest(message)),
            Self::Sha3_512 => HEXLOWER.encode(&Sha3_512::digest(message)),
        }
    }

    fn identifier(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
            Self::Sha3_256 => "sha3-256",
            Self::Sha3_512 => "sha3-512",
        }
    }
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        Self::Sha512
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for HashAlgorithm {
    type Err = NonceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            "sha3-256" => Ok(Self::Sha3_256),
            "sha3-512" => Ok(Self::Sha3_512),
            other => Err(NonceError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl TryFrom<String> for HashAlgorithm {
    type Error = NonceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
