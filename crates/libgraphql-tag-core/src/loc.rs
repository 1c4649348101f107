use serde::Serialize;
use std::sync::Arc;

/// The full body of a document as it was handed to the parser.
///
/// Every [`Loc`] produced by a parse shares one `Source`, so holding onto any
/// single `Loc` keeps the whole source text alive. That's the reason locs
/// must not survive into long-lived (cached) ASTs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Source {
    body: String,
}

impl Source {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Location metadata attached to an AST node by the parser.
///
/// `start` and `end` are byte offsets into [`Source::body`] (`end` is
/// exclusive).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Loc {
    pub start: usize,
    pub end: usize,

    #[serde(skip)]
    pub source: Option<Arc<Source>>,
}

impl Loc {
    pub fn new(start: usize, end: usize, source: Arc<Source>) -> Self {
        Self {
            start,
            end,
            source: Some(source),
        }
    }

    /// The slice of source text this node spans, if the source reference is
    /// still attached and the offsets are in bounds.
    pub fn source_text(&self) -> Option<&str> {
        self.source
            .as_deref()
            .and_then(|source| source.body().get(self.start..self.end))
    }

    /// Drops the reference back to the full [`Source`], keeping only the
    /// offsets.
    pub fn detach_source(self) -> Self {
        Self {
            source: None,
            ..self
        }
    }
}
