//! Docsift: a Sphinx documentation site crawler and search-index feeder
//!
//! This crate walks a statically generated documentation site along its "next
//! page" navigation links, extracts per-section text records, and loads them
//! into a per-language full-text index with full-replace semantics.

pub mod config;
pub mod crawler;
pub mod index;
pub mod scrape;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for docsift operations
#[derive(Debug, Error)]
pub enum DocsiftError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Cannot resolve next link {href:?} against {base}: {source}")]
    Resolution {
        base: String,
        href: String,
        source: ::url::ParseError,
    },

    #[error("Index error: {0}")]
    Index(#[from] index::IndexError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while extracting sections from a fetched page
///
/// All of these mean the page does not have the structure the Sphinx
/// generator always produces, and they abort the whole crawl.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Page has sections but no <title> element")]
    MissingTitle,

    #[error("Section container #{index} has no id attribute")]
    MissingSectionId { index: usize },

    #[error("Section '{section_id}' has no heading element")]
    MissingHeading { section_id: String },
}

/// Result type alias for docsift operations
pub type Result<T> = std::result::Result<T, DocsiftError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl, extract_page, ExtractedPage, Record, Section};
pub use index::{analyzer_for, load, DocumentStore, MemoryStore};
pub use scrape::{crawl_languages, run_scrape, LanguageCrawl};
pub use state::CrawlPhase;
