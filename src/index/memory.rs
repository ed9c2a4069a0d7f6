//! In-memory document store
//!
//! Backs tests and self-contained runs. Documents are kept in ordered maps
//! so iteration order is deterministic.

use crate::index::traits::{DocumentStore, IndexError, IndexResult, IndexedRecord};
use std::collections::BTreeMap;

/// An in-memory [`DocumentStore`] implementation
#[derive(Debug, Default)]
pub struct MemoryStore {
    indexes: BTreeMap<String, MemoryIndex>,
}

/// One named index inside a [`MemoryStore`]
#[derive(Debug)]
pub struct MemoryIndex {
    analyzer: String,
    documents: BTreeMap<String, IndexedRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the named index, if it has been created
    pub fn index(&self, name: &str) -> Option<&MemoryIndex> {
        self.indexes.get(name)
    }

    /// Returns the names of all created indexes
    pub fn index_names(&self) -> Vec<&str> {
        self.indexes.keys().map(|name| name.as_str()).collect()
    }
}

impl MemoryIndex {
    /// The analyzer name the index was created with
    pub fn analyzer(&self) -> &str {
        &self.analyzer
    }

    /// Number of documents in the index
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the index holds no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Looks up one document by its URL key
    pub fn get(&self, url: &str) -> Option<&IndexedRecord> {
        self.documents.get(url)
    }

    /// Iterates documents in URL order
    pub fn documents(&self) -> impl Iterator<Item = &IndexedRecord> {
        self.documents.values()
    }
}

impl DocumentStore for MemoryStore {
    fn index_exists(&self, index: &str) -> IndexResult<bool> {
        Ok(self.indexes.contains_key(index))
    }

    fn create_index(&mut self, index: &str, analyzer: &str) -> IndexResult<()> {
        if self.indexes.contains_key(index) {
            return Err(IndexError::IndexExists(index.to_string()));
        }

        self.indexes.insert(
            index.to_string(),
            MemoryIndex {
                analyzer: analyzer.to_string(),
                documents: BTreeMap::new(),
            },
        );

        Ok(())
    }

    fn delete_by_base_url(&mut self, index: &str, base_url: &str) -> IndexResult<u64> {
        let index = self
            .indexes
            .get_mut(index)
            .ok_or_else(|| IndexError::IndexNotFound(index.to_string()))?;

        let before = index.documents.len();
        index
            .documents
            .retain(|_, document| document.base_url != base_url);

        Ok((before - index.documents.len()) as u64)
    }

    fn upsert(&mut self, index: &str, record: &IndexedRecord) -> IndexResult<()> {
        let index = self
            .indexes
            .get_mut(index)
            .ok_or_else(|| IndexError::IndexNotFound(index.to_string()))?;

        index
            .documents
            .insert(record.url.clone(), record.clone());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(url: &str, base_url: &str) -> IndexedRecord {
        IndexedRecord {
            url: url.to_string(),
            title: "T".to_string(),
            text: "body".to_string(),
            base_url: base_url.to_string(),
        }
    }

    #[test]
    fn test_create_and_exists() {
        let mut store = MemoryStore::new();
        assert!(!store.index_exists("docsift_en").unwrap());

        store.create_index("docsift_en", "english").unwrap();
        assert!(store.index_exists("docsift_en").unwrap());
        assert_eq!(store.index("docsift_en").unwrap().analyzer(), "english");
    }

    #[test]
    fn test_create_existing_index_fails() {
        let mut store = MemoryStore::new();
        store.create_index("docsift_en", "english").unwrap();

        let result = store.create_index("docsift_en", "english");
        assert!(matches!(result, Err(IndexError::IndexExists(_))));
    }

    #[test]
    fn test_upsert_into_missing_index_fails() {
        let mut store = MemoryStore::new();
        let result = store.upsert("docsift_en", &document("u", "b"));
        assert!(matches!(result, Err(IndexError::IndexNotFound(_))));
    }

    #[test]
    fn test_upsert_replaces_by_url() {
        let mut store = MemoryStore::new();
        store.create_index("docsift_en", "english").unwrap();

        let mut first = document("https://e/#a", "https://e/");
        first.title = "Old".to_string();
        store.upsert("docsift_en", &first).unwrap();

        let mut second = document("https://e/#a", "https://e/");
        second.title = "New".to_string();
        store.upsert("docsift_en", &second).unwrap();

        let index = store.index("docsift_en").unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("https://e/#a").unwrap().title, "New");
    }

    #[test]
    fn test_delete_by_base_url_counts_and_filters() {
        let mut store = MemoryStore::new();
        store.create_index("docsift_en", "english").unwrap();
        store
            .upsert("docsift_en", &document("https://a/#1", "https://a/"))
            .unwrap();
        store
            .upsert("docsift_en", &document("https://a/#2", "https://a/"))
            .unwrap();
        store
            .upsert("docsift_en", &document("https://b/#1", "https://b/"))
            .unwrap();

        let removed = store.delete_by_base_url("docsift_en", "https://a/").unwrap();

        assert_eq!(removed, 2);
        let index = store.index("docsift_en").unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.get("https://b/#1").is_some());
    }
}
