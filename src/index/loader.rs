//! Per-language load routine with full-replace semantics

use crate::crawler::Record;
use crate::index::traits::{DocumentStore, IndexResult, IndexedRecord};

/// Prefix shared by every per-language index name
const INDEX_PREFIX: &str = "docsift";

/// Returns the index name for one language partition
pub fn index_name(language_code: &str) -> String {
    format!("{}_{}", INDEX_PREFIX, language_code)
}

/// Maps a language code to the index's text analyzer name
///
/// The table is fixed; unmapped codes fall back to the generic `standard`
/// analyzer rather than failing.
pub fn analyzer_for(language_code: &str) -> &'static str {
    match language_code {
        "en" => "english",
        "es" => "spanish",
        "fr" => "french",
        "it" => "italian",
        _ => "standard",
    }
}

/// Makes the index reflect exactly this record set for this base URL
///
/// Ensures the language's index exists (creating it with the language's
/// analyzer), removes every prior document carrying `base_url`, then upserts
/// the new batch in order. Running the same crawl twice therefore leaves the
/// index in the same state as running it once. A failure between the delete
/// and the last upsert leaves the base URL's partition incomplete; the store
/// offers no multi-document transaction to prevent that.
pub fn load<S: DocumentStore + ?Sized>(
    store: &mut S,
    base_url: &str,
    records: &[Record],
    language_code: &str,
) -> IndexResult<()> {
    let index = index_name(language_code);

    if !store.index_exists(&index)? {
        let analyzer = analyzer_for(language_code);
        tracing::info!("Creating index {} with {} analyzer", index, analyzer);
        store.create_index(&index, analyzer)?;
    }

    let removed = store.delete_by_base_url(&index, base_url)?;
    tracing::debug!("Removed {} prior documents for {}", removed, base_url);

    for record in records {
        store.upsert(&index, &IndexedRecord::new(record, base_url))?;
    }

    tracing::info!(
        "Loaded {} records into {} for {}",
        records.len(),
        index,
        base_url
    );

    Ok(())
}
