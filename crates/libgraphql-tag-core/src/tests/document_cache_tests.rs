use crate::ast;
use crate::DocumentCache;
use crate::ParsedDocument;
use std::sync::Arc;

fn parsed_document(cache_key: &str) -> Arc<ParsedDocument> {
    Arc::new(ParsedDocument {
        cache_key: cache_key.to_string(),
        document: ast::Document {
            definitions: vec![],
            loc: None,
        },
        fragment_source_keys: vec![],
        source: cache_key.into(),
    })
}

#[test]
fn empty_cache() {
    let cache = DocumentCache::new();
    assert!(cache.is_empty());
    assert_eq!(cache.len(), 0);
    assert!(cache.get("{ a }").is_none());
}

#[test]
fn put_then_get_returns_same_arc() {
    let mut cache = DocumentCache::new();
    let doc = parsed_document("{ a }");
    let stored = cache.put("{ a }".to_string(), Arc::clone(&doc));

    assert!(Arc::ptr_eq(&doc, &stored));
    assert!(Arc::ptr_eq(&doc, &cache.get("{ a }").unwrap()));
    assert!(cache.contains_key("{ a }"));
    assert_eq!(cache.len(), 1);
}

#[test]
fn keys_compare_exactly() {
    let mut cache = DocumentCache::new();
    cache.put("{ a }".to_string(), parsed_document("{ a }"));
    assert!(cache.get("{a}").is_none());
    assert!(cache.get("{ a } ").is_none());
}

#[test]
fn put_keeps_first_entry() {
    let mut cache = DocumentCache::new();
    let first = parsed_document("{ a }");
    let second = parsed_document("{ a }");
    cache.put("{ a }".to_string(), Arc::clone(&first));
    let stored = cache.put("{ a }".to_string(), second);

    assert!(Arc::ptr_eq(&first, &stored));
    assert_eq!(cache.len(), 1);
}

#[test]
fn reset_all_empties_cache() {
    let mut cache = DocumentCache::new();
    cache.put("{ a }".to_string(), parsed_document("{ a }"));
    cache.put("{ b }".to_string(), parsed_document("{ b }"));
    cache.reset_all();

    assert!(cache.is_empty());
    assert!(cache.get("{ a }").is_none());
}
