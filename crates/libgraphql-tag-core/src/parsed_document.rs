use crate::ast;
use std::sync::Arc;

/// A parsed, deduplicated, location-free document as stored in the
/// [`DocumentCache`](crate::DocumentCache).
///
/// Always handed out behind an `Arc`; every request for the same normalized
/// source text gets a clone of the same `Arc`.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedDocument {
    pub(crate) cache_key: String,
    pub(crate) document: ast::Document,

    /// `(fragment name, normalized fragment source)` for each fragment
    /// definition in `document`, in definition order.
    pub(crate) fragment_source_keys: Vec<(String, String)>,

    pub(crate) source: Arc<str>,
}

impl ParsedDocument {
    /// The normalized source text this document is cached under.
    pub fn cache_key(&self) -> &str {
        &self.cache_key
    }

    pub fn definitions(&self) -> &[ast::Definition] {
        &self.document.definitions
    }

    pub fn document(&self) -> &ast::Document {
        &self.document
    }

    /// Name and normalized source text of each fragment this document
    /// defines. The normalized text is what
    /// [`GraphQLTag::fragment_conflicts`](crate::GraphQLTag::fragment_conflicts)
    /// reports for each variant.
    pub fn fragment_source_keys(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fragment_source_keys
            .iter()
            .map(|(name, source_key)| (name.as_str(), source_key.as_str()))
    }

    /// The source text this document was parsed from, exactly as submitted.
    ///
    /// This is the text that gets spliced in when the document is passed as
    /// an interpolated fragment to [`GraphQLTag::parse`](crate::GraphQLTag::parse).
    pub fn source(&self) -> &str {
        &self.source
    }
}
