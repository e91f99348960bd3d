//! Configuration for nonce generation and validation.

use serde::Deserialize;

use crate::error::{NonceError, Result};
use crate::hash::HashAlgorithm;
use crate::secret::Secret;

/// Default number of characters in a nonce.
pub const DEFAULT_LENGTH: usize = 12;

/// Default start of the nonce window, counted back from the end of the
/// hex digest.
pub const DEFAULT_OFFSET: usize = 15;

/// Default name of the hidden form input carrying the nonce.
pub const DEFAULT_FORM_FIELD: &str = "_ononce";

/// Default name of the query parameter carrying the nonce.
pub const DEFAULT_QUERY_PARAM: &str = "ononce";

/// Actor id used when the caller supplies none.
pub const DEFAULT_ACTOR_ID: u64 = 123_456_789;

/// Default nonce lifetime in seconds.
pub const DEFAULT_LIFETIME_SECS: u32 = 3600;

/// Configuration for nonce generation and validation.
///
/// Built once at startup and treated as immutable for the process
/// lifetime. Every field except the secret has a default; the secret
/// must be injected (from deployment configuration, not a literal) and
/// must match on the generating and validating side.
#[derive(Debug, Clone, Deserialize)]
pub struct NonceConfig {
    /// Keying secret shared by the generating and validating side.
    pub secret: Secret,
    /// Digest used to derive nonces.
    #[serde(default)]
    pub algorithm: HashAlgorithm,
    /// Number of characters in a generated nonce.
    #[serde(default = "default_length")]
    pub length: usize,
    /// Where the nonce window starts, counted back from the end of the
    /// hex digest. Must be at least `length` and at most the digest
    /// length.
    #[serde(default = "default_offset")]
    pub offset: usize,
    /// Name of the hidden form input produced by [`crate::hidden_field`].
    #[serde(default = "default_form_field")]
    pub form_field: String,
    /// Name of the query parameter produced by [`crate::url_fragment`].
    /// May be empty for routing schemes that pass values positionally.
    #[serde(default = "default_query_param")]
    pub query_param: String,
    /// Actor id used when a call carries no override.
    #[serde(default = "default_actor_id")]
    pub default_actor: u64,
    /// Lifetime in seconds used when a call carries no override.
    #[serde(default = "default_lifetime_secs")]
    pub default_lifetime: u32,
}

impl NonceConfig {
    /// Create a config with the given secret and every other value at
    /// its default.
    pub fn new(secret: Secret) -> Self {
        Self {
            secret,
            algorithm: HashAlgorithm::default(),
            length: DEFAULT_LENGTH,
            offset: DEFAULT_OFFSET,
            form_field: DEFAULT_FORM_FIELD.to_string(),
            query_param: DEFAULT_QUERY_PARAM.to_string(),
            default_actor: DEFAULT_ACTOR_ID,
            default_lifetime: DEFAULT_LIFETIME_SECS,
        }
    }

    /// Set the digest algorithm.
    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the nonce length in characters.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Set the window offset, counted back from the end of the digest.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Set the hidden form input name.
    pub fn with_form_field(mut self, form_field: impl Into<String>) -> Self {
        self.form_field = form_field.into();
        self
    }

    /// Set the query parameter name. Empty means "bare nonce".
    pub fn with_query_param(mut self, query_param: impl Into<String>) -> Self {
        self.query_param = query_param.into();
        self
    }

    /// Set the actor id used when a call carries no override.
    pub fn with_default_actor(mut self, actor: u64) -> Self {
        self.default_actor = actor;
        self
    }

    /// Set the lifetime used when a call carries no override.
    pub fn with_default_lifetime(mut self, secs: u32) -> Self {
        self.default_lifetime = secs;
        self
    }

    /// Reject degenerate configurations up front.
    ///
    /// The same checks run on every derivation, so calling this is
    /// optional; it exists to surface misconfiguration at startup
    /// instead of on the first request.
    pub fn validate(&self) -> Result<()> {
        if self.default_lifetime == 0 {
            return Err(NonceError::ZeroLifetime);
        }
        let digest_len = self.algorithm.hex_len();
        if self.length == 0 || self.length > self.offset || self.offset > digest_len {
            return Err(NonceError::WindowOutOfRange {
                offset: self.offset,
                length: self.length,
                digest_len,
            });
        }
        Ok(())
    }
}

/// Per-call overrides for the configured defaults.
///
/// An absent field means "use the config default"; it is never an
/// error. Both sides of a round trip must pass the same overrides or
/// validation fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Identity of the acting entity the nonce is bound to.
    pub actor: Option<u64>,
    /// Nonce lifetime in seconds.
    pub lifetime: Option<u32>,
}

impl Overrides {
    /// No overrides; every value comes from the config.
    pub fn none() -> Self {
        Self::default()
    }

    /// Bind the nonce to a specific actor.
    pub fn with_actor(mut self, actor: u64) -> Self {
        self.actor = Some(actor);
        self
    }

    /// Use a specific lifetime in seconds.
    pub fn with_lifetime(mut self, secs: u32) -> Self {
        self.lifetime = Some(secs);
        self
    }
}

fn default_length() -> usize {
    DEFAULT_LENGTH
}

fn default_offset() -> usize {
    DEFAULT_OFFSET
}

fn default_form_field() -> String {
    DEFAULT_FORM_FIELD.to_string()
}

fn default_query_param() -> String {
    DEFAULT_QUERY_PARAM.to_string()
}

fn default_actor_id() -> u64 {
    DEFAULT_ACTOR_ID
}

fn default_lifetime_secs() -> u32 {
    DEFAULT_LIFETIME_SECS
}
