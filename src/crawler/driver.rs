//! Crawl driver - sequential page-chain state machine
//!
//! A documentation tree is a linear chain of pages connected by "next"
//! links. The driver walks that chain one page at a time, because each
//! page's successor is only known after the page has been extracted; there
//! is nothing to prefetch. The loop carries the `(local, remote)` URL pair
//! as plain state so the fetch address and the public attribution address
//! advance in step.

use crate::crawler::extractor::extract_page;
use crate::crawler::fetcher::fetch_page;
use crate::state::CrawlPhase;
use crate::url::resolve;
use crate::{DocsiftError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

/// One normalized section record, addressed by its public URL
///
/// `url` is the page's remote URL plus a `#<section_id>` fragment and is
/// the record's only identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub url: String,
    pub title: String,
    pub text: String,
}

/// Crawls a whole page chain and returns its records in order
///
/// Fetches from `start_local`, attributes records to `start_remote`, and
/// follows "next" links until a page has none. Order is page order along
/// the chain, then document order within each page, which makes re-runs on
/// an unchanged site byte-identical. Any error aborts the whole crawl; no
/// partial record list is ever returned.
pub async fn crawl(client: &Client, start_local: &str, start_remote: &str) -> Result<Vec<Record>> {
    let mut local = Url::parse(start_local)?;
    let mut remote = Url::parse(start_remote)?;

    let mut records = Vec::new();
    let mut pages = 0usize;

    let mut phase = CrawlPhase::Fetching;
    let mut body: Option<String> = None;
    let mut next_href: Option<String> = None;
    let mut failure: Option<DocsiftError> = None;

    tracing::info!("Starting crawl at {} (attributed to {})", local, remote);

    while phase.is_active() {
        phase = match phase {
            CrawlPhase::Fetching => match fetch_page(client, local.as_str()).await {
                Ok(content) => {
                    body = Some(content);
                    CrawlPhase::Extracting
                }
                Err(error) => {
                    failure = Some(error);
                    CrawlPhase::Failed
                }
            },

            CrawlPhase::Extracting => {
                let content = body.take().unwrap_or_default();
                match extract_page(&content) {
                    Ok(page) => {
                        pages += 1;
                        tracing::debug!(
                            "Extracted {} sections from {} (next: {:?})",
                            page.sections.len(),
                            local,
                            page.next
                        );
                        for section in page.sections {
                            records.push(Record {
                                url: format!("{}#{}", remote, section.id),
                                title: section.title,
                                text: section.text,
                            });
                        }
                        next_href = page.next;
                        CrawlPhase::Advancing
                    }
                    Err(error) => {
                        failure = Some(error.into());
                        CrawlPhase::Failed
                    }
                }
            }

            CrawlPhase::Advancing => match next_href.take() {
                Some(href) => match advance(&local, &remote, &href) {
                    Ok((next_local, next_remote)) => {
                        local = next_local;
                        remote = next_remote;
                        CrawlPhase::Fetching
                    }
                    Err(error) => {
                        failure = Some(error);
                        CrawlPhase::Failed
                    }
                },
                None => CrawlPhase::Done,
            },

            CrawlPhase::Done | CrawlPhase::Failed => break,
        };
    }

    match failure {
        Some(error) => {
            tracing::error!("Crawl failed after {} pages: {}", pages, error);
            Err(error)
        }
        None => {
            tracing::info!("Crawl complete: {} records from {} pages", records.len(), pages);
            Ok(records)
        }
    }
}

/// Resolves the next href against both bases independently
fn advance(local: &Url, remote: &Url, href: &str) -> Result<(Url, Url)> {
    let next_local = resolve(local, href)?;
    let next_remote = resolve(remote, href)?;
    Ok((next_local, next_remote))
}
