use crate::ast;
use crate::normalize;
use crate::parser::DocumentParser;
use crate::parser::GraphQLParserV04;
use crate::parser::ParseOptions;
use crate::DocumentCache;
use crate::FragmentObservation;
use crate::FragmentRegistry;
use crate::GraphQLTagError;
use crate::ParsedDocument;
use crate::StripLoc;
use std::collections::HashSet;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

type Result<T> = std::result::Result<T, GraphQLTagError>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TagOptions {
    /// Forwarded to the [`DocumentParser`] as
    /// [`ParseOptions::experimental_fragment_variables`].
    pub experimental_fragment_variables: bool,

    /// Emit a `log::warn!` whenever a fragment name is reused for a
    /// different fragment body.
    pub warn_on_fragment_conflict: bool,
}

impl Default for TagOptions {
    fn default() -> Self {
        Self {
            experimental_fragment_variables: false,
            warn_on_fragment_conflict: true,
        }
    }
}

#[derive(Debug, Default)]
struct TagState {
    document_cache: DocumentCache,
    fragment_registry: FragmentRegistry,
}

/// Parses GraphQL documents at most once per distinct (whitespace
/// normalized) source text and keeps fragment names unique across every
/// document it has seen.
///
/// Most applications use the process-wide instance through the free
/// functions ([`parse`](crate::parse), [`reset_caches`](crate::reset_caches),
/// ...). Separate instances are useful for isolation, e.g. in tests or in a
/// tool that processes several unrelated projects.
///
/// The document cache and the fragment registry sit behind a single mutex
/// that is held for the whole lookup-parse-store sequence, so concurrent
/// callers never parse the same source twice.
pub struct GraphQLTag {
    experimental_fragment_variables: AtomicBool,
    parser: Box<dyn DocumentParser>,
    state: Mutex<TagState>,
    warn_on_fragment_conflict: AtomicBool,
}

impl GraphQLTag {
    pub fn new() -> Self {
        Self::with_parser(GraphQLParserV04::new())
    }

    pub fn with_parser(parser: impl DocumentParser + 'static) -> Self {
        let options = TagOptions::default();
        Self {
            experimental_fragment_variables: AtomicBool::new(
                options.experimental_fragment_variables,
            ),
            parser: Box::new(parser),
            state: Mutex::new(TagState::default()),
            warn_on_fragment_conflict: AtomicBool::new(
                options.warn_on_fragment_conflict,
            ),
        }
    }

    pub fn with_options(self, options: TagOptions) -> Self {
        self.set_experimental_fragment_variables(
            options.experimental_fragment_variables,
        );
        self.set_warn_on_fragment_conflict(options.warn_on_fragment_conflict);
        self
    }

    /// Number of distinct normalized documents currently cached.
    pub fn cached_document_count(&self) -> usize {
        self.lock_state().document_cache.len()
    }

    /// Every fragment name observed with more than one distinct body, along
    /// with those bodies (normalized, in the order first observed). Sorted
    /// by fragment name.
    pub fn fragment_conflicts(&self) -> Vec<(String, Vec<String>)> {
        self.lock_state()
            .fragment_registry
            .conflicts()
            .into_iter()
            .map(|(name, sources)| {
                (name.to_string(), sources.iter().cloned().collect())
            })
            .collect()
    }

    pub fn options(&self) -> TagOptions {
        TagOptions {
            experimental_fragment_variables:
                self.experimental_fragment_variables.load(Ordering::Relaxed),
            warn_on_fragment_conflict:
                self.warn_on_fragment_conflict.load(Ordering::Relaxed),
        }
    }

    /// Parses `source` with the source text of each of `fragments` appended
    /// to it (newline separated), so that `source` can spread fragments
    /// defined in previously parsed documents.
    pub fn parse(
        &self,
        source: &str,
        fragments: &[&ParsedDocument],
    ) -> Result<Arc<ParsedDocument>> {
        if fragments.is_empty() {
            return self.parse_document(source);
        }

        let mut full_source = source.to_string();
        for fragment in fragments {
            full_source.push('\n');
            full_source.push_str(fragment.source());
        }
        self.parse_document(&full_source)
    }

    /// Parses `source`, or returns the cached document if an equivalent
    /// (whitespace normalized) source was parsed before.
    ///
    /// Nothing is cached or registered when parsing fails.
    pub fn parse_document(&self, source: &str) -> Result<Arc<ParsedDocument>> {
        let cache_key = normalize(source);
        let mut state = self.lock_state();

        if let Some(cached) = state.document_cache.get(&cache_key) {
            log::trace!("Document cache hit for `{cache_key}`.");
            return Ok(cached);
        }

        let parse_options = ParseOptions {
            experimental_fragment_variables:
                self.experimental_fragment_variables.load(Ordering::Relaxed),
        };
        log::debug!("Parsing uncached document `{cache_key}`.");
        let document = match self.parser.parse(source, &parse_options)? {
            ast::Node::Document(document) => document,
            other => return Err(GraphQLTagError::NotADocument {
                kind: other.kind(),
            }),
        };

        let (document, fragment_source_keys) = self.process_fragments(
            &mut state.fragment_registry,
            document,
        )?;

        // The root keeps its (source-detached) loc through the strip so its
        // span can pick out the retained source text; then it goes too.
        let mut document = document.strip_loc(false);
        let retained_source: Arc<str> = match document.loc.take() {
            Some(root_loc) =>
                source.get(root_loc.start..root_loc.end).unwrap_or(source).into(),
            None => source.into(),
        };

        let parsed = Arc::new(ParsedDocument {
            cache_key: cache_key.clone(),
            document,
            fragment_source_keys,
            source: retained_source,
        });
        log::debug!(
            "Caching document `{cache_key}` ({} definitions).",
            parsed.definitions().len(),
        );
        Ok(state.document_cache.put(cache_key, parsed))
    }

    /// Clears both the document cache and the fragment registry.
    ///
    /// Intended for test isolation.
    pub fn reset_caches(&self) {
        let mut state = self.lock_state();
        state.document_cache.reset_all();
        state.fragment_registry.reset_all();
    }

    pub fn set_experimental_fragment_variables(&self, enabled: bool) {
        self.experimental_fragment_variables.store(enabled, Ordering::Relaxed);
    }

    pub fn set_warn_on_fragment_conflict(&self, enabled: bool) {
        self.warn_on_fragment_conflict.store(enabled, Ordering::Relaxed);
    }

    fn lock_state(&self) -> MutexGuard<'_, TagState> {
        // Both maps are append-only between resets.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers every fragment definition in `document` with the
    /// `fragment_registry` and drops fragment definitions whose normalized
    /// source exactly repeats one earlier in the same document. Also returns
    /// the name and normalized source of each retained fragment.
    fn process_fragments(
        &self,
        fragment_registry: &mut FragmentRegistry,
        document: ast::Document,
    ) -> Result<(ast::Document, Vec<(String, String)>)> {
        // Compute every fragment's source key before touching the registry
        // so that a failure leaves it unmodified.
        let keyed_definitions = document.definitions
            .into_iter()
            .map(|def| -> Result<(ast::Definition, Option<String>)> {
                let source_key = match &def {
                    ast::Definition::Fragment(fragment) =>
                        Some(fragment_source_key(fragment)?),
                    ast::Definition::Operation(_) => None,
                };
                Ok((def, source_key))
            })
            .collect::<Result<Vec<_>>>()?;

        let warn = self.warn_on_fragment_conflict.load(Ordering::Relaxed);
        let mut seen_in_document = HashSet::new();
        let mut definitions = Vec::with_capacity(keyed_definitions.len());
        let mut fragment_source_keys = vec![];
        for (def, source_key) in keyed_definitions {
            let Some(source_key) = source_key else {
                definitions.push(def);
                continue;
            };

            let ast::Definition::Fragment(fragment) = &def else {
                definitions.push(def);
                continue;
            };

            let observation =
                fragment_registry.observe(&fragment.name, &source_key);
            if observation == FragmentObservation::Conflict && warn {
                log::warn!(
                    "Fragment with name `{}` already exists with a \
                    different definition. Fragment names are not scoped \
                    to the document that defines them, so they must be \
                    unique across the whole application.",
                    fragment.name,
                );
            }

            if seen_in_document.insert(source_key.clone()) {
                fragment_source_keys.push((fragment.name.clone(), source_key));
                definitions.push(def);
            }
        }

        let document = ast::Document {
            definitions,
            loc: document.loc,
        };
        Ok((document, fragment_source_keys))
    }
}

impl Default for GraphQLTag {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GraphQLTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphQLTag")
            .field("options", &self.options())
            .finish_non_exhaustive()
    }
}

/// The normalized source text a fragment definition spans.
fn fragment_source_key(
    fragment: &ast::FragmentDefinition,
) -> Result<String> {
    fragment.loc
        .as_ref()
        .and_then(|loc| loc.source_text())
        .map(normalize)
        .ok_or_else(|| GraphQLTagError::MissingFragmentLocation {
            fragment_name: fragment.name.clone(),
        })
}
