use crate::ParsedDocument;
use std::collections::HashMap;
use std::sync::Arc;

/// Normalized source text → finalized [`ParsedDocument`].
///
/// Entries are never evicted or replaced; the only way to remove anything is
/// [`DocumentCache::reset_all`].
#[derive(Clone, Debug, Default)]
pub struct DocumentCache {
    documents: HashMap<String, Arc<ParsedDocument>>,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_key(&self, cache_key: &str) -> bool {
        self.documents.contains_key(cache_key)
    }

    pub fn get(&self, cache_key: &str) -> Option<Arc<ParsedDocument>> {
        self.documents.get(cache_key).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Stores `document` under `cache_key` and returns the stored value.
    ///
    /// If `cache_key` is already present, the existing document is kept and
    /// returned instead.
    pub fn put(
        &mut self,
        cache_key: String,
        document: Arc<ParsedDocument>,
    ) -> Arc<ParsedDocument> {
        Arc::clone(self.documents.entry(cache_key).or_insert(document))
    }

    pub fn reset_all(&mut self) {
        self.documents.clear();
    }
}
