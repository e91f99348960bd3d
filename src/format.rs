//! Rendering helpers for the two delivery surfaces.

use crate::config::{NonceConfig, Overrides};
use crate::error::Result;
use crate::token::generate;

/// Render a hidden form input carrying a freshly derived nonce.
///
/// The input name comes from `config.form_field`. The caller embeds the
/// returned markup in its form; the submitted value is checked with
/// [`crate::verify`] using the same `name`/`action`/overrides.
pub fn hidden_field(
    name: &str,
    action: &str,
    overrides: &Overrides,
    config: &NonceConfig,
) -> Result<String> {
    let nonce = generate(name, action, overrides, config)?;
    Ok(format!(
        r#"<input type="hidden" name="{}" value="{nonce}" />"#,
        config.form_field
    ))
}

/// Render a query-string fragment (`param=nonce`) carrying a freshly
/// derived nonce.
///
/// When `config.query_param` is empty the bare nonce is returned, for
/// routing schemes that pass values positionally instead of as query
/// parameters.
pub fn url_fragment(
    name: &str,
    action: &str,
    overrides: &Overrides,
    config: &NonceConfig,
) -> Result<String> {
    let nonce = generate(name, action, overrides, config)?;
    if config.query_param.is_empty() {
        Ok(nonce)
    } else {
        Ok(format!("{}={nonce}", config.query_param))
    }
}
