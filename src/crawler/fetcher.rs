//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building HTTP clients with proper user agent strings
//! - GET requests to fetch page content, decoded as UTF-8
//!
//! There is no retry logic. A crawl chain depends on every page in sequence,
//! so the first failed fetch aborts the whole chain.

use crate::config::UserAgentConfig;
use crate::{DocsiftError, Result};
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// The user agent is formatted as `Name/Version (+ContactURL)`. Redirects
/// follow reqwest's default policy; the crawl targets a site the operator
/// controls, so HTTPS is not enforced (the local fetch base is usually a
/// plain-HTTP localhost mirror).
pub fn build_http_client(config: &UserAgentConfig) -> std::result::Result<Client, reqwest::Error> {
    let user_agent = format!(
        "{}/{} (+{})",
        config.name, config.version, config.contact_url
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its body decoded as UTF-8
///
/// The Sphinx generator always writes UTF-8, so the body bytes are decoded
/// as UTF-8 regardless of any charset the server declares in its headers.
/// Any non-success status is a fatal [`DocsiftError::HttpStatus`].
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    tracing::debug!("Fetching {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| DocsiftError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(DocsiftError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().await.map_err(|source| DocsiftError::Http {
        url: url.to_string(),
        source,
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
