//! URL handling module for docsift
//!
//! This module provides relative-link resolution for the crawl chain and the
//! per-language base URL derivation used when a site hosts one documentation
//! tree per language code.

use crate::{DocsiftError, Result};
use url::Url;

/// Resolves an href against a base URL using standard relative resolution
///
/// The crawl driver calls this twice per page advance, once against the
/// local (fetch) base and once against the remote (public) base, so the two
/// address spaces stay in step.
pub fn resolve(base: &Url, href: &str) -> Result<Url> {
    base.join(href).map_err(|source| DocsiftError::Resolution {
        base: base.to_string(),
        href: href.to_string(),
        source,
    })
}

/// Derives the base URL for one language's documentation tree
///
/// Appends `{code}/` to the base, normalizing any trailing slash first, so
/// both `https://docs.example.org/latest` and `https://docs.example.org/latest/`
/// yield `https://docs.example.org/latest/en/`.
pub fn language_url(base: &str, code: &str) -> Result<Url> {
    let joined = format!("{}/{}/", base.trim_end_matches('/'), code);
    Ok(Url::parse(&joined)?)
}
