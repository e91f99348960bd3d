//! Error types for nonce operations.

use thiserror::Error;

/// Errors that can occur while deriving or checking nonces.
///
/// Every variant signals a misconfiguration. A nonce that simply does
/// not match never produces an error; [`crate::verify`] reports it as
/// `Ok(false)` with no further detail.
#[derive(Debug, Error)]
pub enum NonceError {
    /// Lifetime (default or override) is zero, which would collapse the
    /// time bucket.
    #[error("Nonce lifetime must be a positive number of seconds")]
    ZeroLifetime,

    /// Hash algorithm identifier is not recognized.
    #[error("Unknown hash algorithm: '{0}'")]
    UnknownAlgorithm(String),

    /// The configured extraction window does not fit inside the digest.
    #[error(
        "Extraction window (offset {offset}, length {length}) does not fit a {digest_len}-char digest"
    )]
    WindowOutOfRange {
        offset: usize,
        length: usize,
        digest_len: usize,
    },

    /// System clock reads before the unix epoch.
    #[error("System clock is before the unix epoch")]
    ClockBeforeEpoch,
}

/// Result type alias for nonce operations.
pub type Result<T> = std::result::Result<T, NonceError>;
