//! Nonce validation by recomputation.

use log::debug;
use subtle::ConstantTimeEq;

use crate::config::{NonceConfig, Overrides};
use crate::error::Result;
use crate::token::{generate_at, unix_now};

/// Check a candidate nonce against the one the engine would currently
/// derive for the same inputs.
///
/// Every mismatch cause (wrong value, expired bucket, wrong actor,
/// wrong secret) is reported as `Ok(false)` with no distinguishing
/// detail. `Err` is reserved for misconfiguration that prevents
/// derivation in the first place.
///
/// The comparison is constant-time.
pub fn verify(
    name: &str,
    action: &str,
    candidate: &str,
    overrides: &Overrides,
    config: &NonceConfig,
) -> Result<bool> {
    verify_at(name, action, candidate, overrides, config, unix_now()?)
}

/// Check a candidate nonce at a provided unix time (useful for tests).
pub fn verify_at(
    name: &str,
    action: &str,
    candidate: &str,
    overrides: &Overrides,
    config: &NonceConfig,
    now_secs: u64,
) -> Result<bool> {
    let expected = generate_at(name, action, overrides, config, now_secs)?;
    let matches = bool::from(expected.as_bytes().ct_eq(candidate.as_bytes()));
    if !matches {
        debug!("rejected nonce for {name}/{action}");
    }
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret::Secret;

    const NOW: u64 = 1_700_000_000;

    fn test_config() -> NonceConfig {
        NonceConfig::new(Secret::new("test-secret"))
    }

    #[test]
    fn test_round_trip() {
        let config = test_config();
        let nonce = generate_at("login", "submit", &Overrides::none(), &config, NOW).unwrap();
        assert!(verify_at("login", "submit", &nonce, &Overrides::none(), &config, NOW).unwrap());
    }

    #[test]
    fn test_round_trip_with_overrides() {
        let config = test_config();
        let overrides = Overrides::none().with_actor(42).with_lifetime(600);
        let nonce = generate_at("login", "submit", &overrides, &config, NOW).unwrap();
        assert!(verify_at("login", "submit", &nonce, &overrides, &config, NOW).unwrap());

        // Different overrides on the validating side must not match
        assert!(!verify_at("login", "submit", &nonce, &Overrides::none(), &config, NOW).unwrap());
    }

    #[test]
    fn test_wrong_inputs_rejected() {
        let config = test_config();
        let nonce = generate_at("login", "submit", &Overrides::none(), &config, NOW).unwrap();

        assert!(!verify_at("logout", "submit", &nonce, &Overrides::none(), &config, NOW).unwrap());
        assert!(!verify_at("login", "cancel", &nonce, &Overrides::none(), &config, NOW).unwrap());

        let other_config = NonceConfig::new(Secret::new("other-secret"));
        assert!(
            !verify_at("login", "submit", &nonce, &Overrides::none(), &other_config, NOW).unwrap()
        );
    }

    #[test]
    fn test_wrong_length_candidate_rejected() {
        let config = test_config();
        let nonce = generate_at("login", "submit", &Overrides::none(), &config, NOW).unwrap();
        assert!(
            !verify_at("login", "submit", &nonce[..6], &Overrides::none(), &config, NOW).unwrap()
        );
        assert!(!verify_at("login", "submit", "", &Overrides::none(), &config, NOW).unwrap());
    }

    #[test]
    fn test_valid_until_bucket_boundary() {
        let config = test_config();
        // Mint just after a bucket boundary: buckets for the default
        // 3600-second lifetime are 1800 seconds wide.
        let minted = 1_800_000 * 1000 + 1;
        let nonce = generate_at("login", "submit", &Overrides::none(), &config, minted).unwrap();

        // Valid through the rest of the bucket...
        assert!(
            verify_at("login", "submit", &nonce, &Overrides::none(), &config, minted + 1799)
                .unwrap()
        );
        // ...invalid once the boundary is crossed...
        assert!(
            !verify_at("login", "submit", &nonce, &Overrides::none(), &config, minted + 1800)
                .unwrap()
        );
        // ...and certainly invalid a full lifetime later.
        assert!(
            !verify_at("login", "submit", &nonce, &Overrides::none(), &config, minted + 3600)
                .unwrap()
        );
    }

    #[test]
    fn test_concrete_scenario() {
        // secret "s3cr3t", lifetime 3600, actor 42, fixed clock
        let config = NonceConfig::new(Secret::new("s3cr3t"));
        let overrides = Overrides::none().with_actor(42).with_lifetime(3600);

        let first = generate_at("login", "submit", &overrides, &config, NOW).unwrap();
        let second = generate_at("login", "submit", &overrides, &config, NOW).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 12);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));

        assert!(verify_at("login", "submit", &first, &overrides, &config, NOW).unwrap());

        // Altering any single character must fail validation
        for i in 0..first.len() {
            let mut altered: Vec<u8> = first.clone().into_bytes();
            altered[i] = if altered[i] == b'0' { b'1' } else { b'0' };
            let altered = String::from_utf8(altered).unwrap();
            assert!(!verify_at("login", "submit", &altered, &overrides, &config, NOW).unwrap());
        }
    }

    #[test]
    fn test_misconfiguration_is_an_error_not_a_mismatch() {
        let config = test_config();
        let result = verify_at(
            "login",
            "submit",
            "abcdefabcdef",
            &Overrides::none().with_lifetime(0),
            &config,
            NOW,
        );
        assert!(result.is_err());
    }
}
