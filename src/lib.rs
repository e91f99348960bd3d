//! Deterministic, self-expiring nonces for forms and URLs.
//!
//! This crate provides functionality for:
//! - Deriving short, fixed-length nonces from a keyed, time-bucketed hash
//! - Validating submitted nonces by recomputation, with no server-side storage
//! - Rendering nonces as a hidden form input or a URL query fragment
//!
//! # How a nonce is derived
//!
//! The current unix time is coarsened into a bucket of half the nonce
//! lifetime (`ceil(now / (lifetime / 2))`), concatenated with the
//! caller's `name`, `action`, the acting entity's id and the shared
//! secret, hashed (SHA-512 by default), and a 12-character window is
//! cut from the tail of the hex digest. Validation derives the nonce
//! again and compares; a nonce therefore expires on its own the moment
//! the clock leaves the bucket it was minted in, and nothing ever needs
//! to be stored or garbage-collected.
//!
//! # Security notes
//!
//! - The scheme is a pragmatic replay/forgery deterrent keyed on a
//!   shared secret, not a formally analyzed MAC. Anyone without the
//!   secret cannot produce a valid nonce, but the 12-character token
//!   is deliberately short.
//! - Comparison is constant-time, the secret is zeroized on drop, and
//!   validation failures are indistinguishable from each other so
//!   callers cannot be used as an oracle for *why* a nonce failed.
//! - All operations are pure functions of their inputs plus the wall
//!   clock; they are freely usable from any number of threads.
//!
//! # Example
//!
//! ```rust
//! use form_nonce::{NonceConfig, Overrides, Secret};
//!
//! // In production the secret comes from deployment configuration and
//! // must be identical on the generating and validating side.
//! let config = NonceConfig::new(Secret::random());
//!
//! let nonce = form_nonce::generate("signup", "submit", &Overrides::none(), &config)?;
//! assert_eq!(nonce.len(), form_nonce::DEFAULT_LENGTH);
//! assert!(form_nonce::verify("signup", "submit", &nonce, &Overrides::none(), &config)?);
//!
//! // Render for a form or a URL instead of handling the raw value:
//! let field = form_nonce::hidden_field("signup", "submit", &Overrides::none(), &config)?;
//! assert!(field.starts_with("<input type=\"hidden\""));
//! # Ok::<(), form_nonce::NonceError>(())
//! ```

mod config;
mod error;
mod format;
mod hash;
mod secret;
mod token;
mod verify;

// Public re-exports
pub use config::{
    DEFAULT_ACTOR_ID, DEFAULT_FORM_FIELD, DEFAULT_LENGTH, DEFAULT_LIFETIME_SECS, DEFAULT_OFFSET,
    DEFAULT_QUERY_PARAM, NonceConfig, Overrides,
};
pub use error::{NonceError, Result};
pub use format::{hidden_field, url_fragment};
pub use hash::HashAlgorithm;
pub use secret::Secret;
pub use token::{generate, generate_at};
pub use verify::{verify, verify_at};
