//! Crawler module for walking a documentation site's page chain
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with forced UTF-8 decoding
//! - Per-section extraction from Sphinx-generated pages
//! - The sequential page-chain driver

mod driver;
mod extractor;
mod fetcher;

pub use driver::{crawl, Record};
pub use extractor::{extract_page, ExtractedPage, Section};
pub use fetcher::{build_http_client, fetch_page};
