//! Multi-language scrape orchestration
//!
//! A documentation site hosts one tree per language under `{base}/{code}/`.
//! Languages share no state and are crawled strictly sequentially in
//! configured order; the first failing language aborts the whole scrape so
//! a half-crawled run never reaches the index.

use crate::config::Config;
use crate::crawler::{crawl, Record};
use crate::index::{load, DocumentStore};
use crate::url::language_url;
use crate::Result;
use reqwest::Client;
use serde::Serialize;

/// One language's complete crawl result
#[derive(Debug, Clone, Serialize)]
pub struct LanguageCrawl {
    /// The language code the records belong to
    pub code: String,

    /// The remote per-language base URL the records are attributed to
    pub base_url: String,

    /// All records of the language's page chain, in crawl order
    pub records: Vec<Record>,
}

/// Crawls every configured language and returns the per-language results
pub async fn crawl_languages(client: &Client, config: &Config) -> Result<Vec<LanguageCrawl>> {
    let mut results = Vec::new();

    for language in &config.languages {
        let local = language_url(&config.site.local_base_url, &language.code)?;
        let remote = language_url(&config.site.remote_base_url, &language.code)?;

        tracing::info!("Crawling language '{}' from {}", language.code, local);
        let records = crawl(client, local.as_str(), remote.as_str()).await?;

        results.push(LanguageCrawl {
            code: language.code.clone(),
            base_url: remote.to_string(),
            records,
        });
    }

    Ok(results)
}

/// Crawls every configured language and loads each into the store
///
/// Loading only starts once a language's crawl has fully succeeded, and
/// each language writes to its own index partition, so a failed run never
/// leaves a partially-replaced base URL behind (within the limits of the
/// store's own write discipline).
pub async fn run_scrape<S: DocumentStore>(
    client: &Client,
    config: &Config,
    store: &mut S,
) -> Result<Vec<LanguageCrawl>> {
    let results = crawl_languages(client, config).await?;

    for result in &results {
        load(store, &result.base_url, &result.records, &result.code)?;
    }

    Ok(results)
}
