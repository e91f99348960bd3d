//! Nonce derivation.

use std::time::{SystemTime, UNIX_EPOCH};

use log::trace;

use crate::config::{NonceConfig, Overrides};
use crate::error::{NonceError, Result};

/// Derive a nonce for `name`/`action` using the current wall clock.
///
/// The derivation is pure: the same inputs produce the same nonce for
/// as long as the clock stays inside the current time bucket. Nothing
/// is stored anywhere; [`crate::verify`] re-derives and compares.
pub fn generate(
    name: &str,
    action: &str,
    overrides: &Overrides,
    config: &NonceConfig,
) -> Result<String> {
    generate_at(name, action, overrides, config, unix_now()?)
}

/// Derive a nonce at a provided unix time (useful for tests).
pub fn generate_at(
    name: &str,
    action: &str,
    overrides: &Overrides,
    config: &NonceConfig,
    now_secs: u64,
) -> Result<String> {
    let lifetime = overrides.lifetime.unwrap_or(config.default_lifetime);
    if lifetime == 0 {
        return Err(NonceError::ZeroLifetime);
    }
    let actor = overrides.actor.unwrap_or(config.default_actor);
    let bucket = bucket_at(now_secs, lifetime);

    // Field order and the absence of separators are part of the token
    // format; reordering or delimiting would invalidate issued nonces.
    let message = format!(
        "{bucket}{name}{action}{actor}{secret}",
        secret = config.secret.as_str()
    );
    let digest = config.algorithm.digest_hex(message.as_bytes());

    let digest_len = digest.len();
    if config.length == 0 || config.length > config.offset || config.offset > digest_len {
        return Err(NonceError::WindowOutOfRange {
            offset: config.offset,
            length: config.length,
            digest_len,
        });
    }

    trace!("derived nonce for {name}/{action} in bucket {bucket}");

    // The digest is ASCII hex, so byte indexing is character indexing.
    let start = digest_len - config.offset;
    Ok(digest[start..start + config.length].to_string())
}

/// Time bucket for a given instant: ceil(now / (lifetime / 2)).
///
/// Half the lifetime as the bucket width keeps a nonce valid for the
/// remainder of the bucket it was minted in, rather than pinning its
/// expiry to the exact second of issue.
pub(crate) fn bucket_at(now_secs: u64, lifetime_secs: u32) -> u64 {
    (2 * now_secs).div_ceil(u64::from(lifetime_secs))
}

pub(crate) fn unix_now() -> Result<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| NonceError::ClockBeforeEpoch)
        .map(|d| d.as_secs())
}
