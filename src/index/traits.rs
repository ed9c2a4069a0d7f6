//! Document store trait and error types
//!
//! This module defines the trait interface the load routine drives a
//! search-index backend through. Backends are black boxes: three write
//! operations and an existence check are all the pipeline needs.

use crate::crawler::Record;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during index operations
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Store error: {0}")]
    Store(String),

    #[error("Index not found: {0}")]
    IndexNotFound(String),

    #[error("Index already exists: {0}")]
    IndexExists(String),
}

/// Result type for index operations
pub type IndexResult<T> = Result<T, IndexError>;

/// A record as written to the search index
///
/// This is a crawl [`Record`] with the replace-scope key stamped on: every
/// document carries the base URL its crawl was attributed to, so a later
/// run can remove exactly the documents it is about to rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedRecord {
    pub url: String,
    pub title: String,
    pub text: String,
    pub base_url: String,
}

impl IndexedRecord {
    pub fn new(record: &Record, base_url: &str) -> Self {
        Self {
            url: record.url.clone(),
            title: record.title.clone(),
            text: record.text.clone(),
            base_url: base_url.to_string(),
        }
    }
}

/// Trait for search-index backends
///
/// Implementations are expected to document-key on `IndexedRecord::url`:
/// upserting a record whose URL already exists replaces the stored document.
/// No multi-document atomicity is assumed; the load routine's
/// delete-then-insert discipline is its only transaction boundary.
pub trait DocumentStore {
    /// Returns true if the named index exists
    fn index_exists(&self, index: &str) -> IndexResult<bool>;

    /// Creates the named index with the given text analyzer
    ///
    /// Fails if the index already exists.
    fn create_index(&mut self, index: &str, analyzer: &str) -> IndexResult<()>;

    /// Removes every document whose `base_url` matches, returning the count
    fn delete_by_base_url(&mut self, index: &str, base_url: &str) -> IndexResult<u64>;

    /// Inserts or replaces one document, keyed by its own `url`
    fn upsert(&mut self, index: &str, record: &IndexedRecord) -> IndexResult<()>;
}
