//! The process-wide [`GraphQLTag`] and free-function shorthands for it.

use crate::GraphQLTag;
use crate::GraphQLTagError;
use crate::ParsedDocument;
use std::sync::Arc;
use std::sync::OnceLock;

impl GraphQLTag {
    /// The process-wide instance used by [`parse`] and friends.
    pub fn global() -> &'static GraphQLTag {
        static GLOBAL_GRAPHQL_TAG: OnceLock<GraphQLTag> = OnceLock::new();
        GLOBAL_GRAPHQL_TAG.get_or_init(GraphQLTag::new)
    }
}

/// Parses `source` (with the source of each of `fragments` spliced in) using
/// the process-wide [`GraphQLTag`].
///
/// ```
/// let user_fields = libgraphql_tag_core::parse(
///     "fragment UserFields on User { id name }",
///     &[],
/// ).unwrap();
///
/// let query = libgraphql_tag_core::parse(
///     "query Me { me { ...UserFields } }",
///     &[&*user_fields],
/// ).unwrap();
///
/// assert_eq!(query.definitions().len(), 2);
/// ```
pub fn parse(
    source: &str,
    fragments: &[&ParsedDocument],
) -> Result<Arc<ParsedDocument>, GraphQLTagError> {
    GraphQLTag::global().parse(source, fragments)
}

/// Clears the process-wide document cache and fragment registry.
///
/// Must not race with in-flight [`parse`] calls whose results the caller
/// expects to be cached afterwards. Meant for tests.
pub fn reset_caches() {
    GraphQLTag::global().reset_caches()
}

pub fn set_warn_on_fragment_conflict(enabled: bool) {
    GraphQLTag::global().set_warn_on_fragment_conflict(enabled)
}

pub fn disable_fragment_warnings() {
    set_warn_on_fragment_conflict(false)
}

pub fn set_experimental_fragment_variables(enabled: bool) {
    GraphQLTag::global().set_experimental_fragment_variables(enabled)
}

pub fn enable_experimental_fragment_variables() {
    set_experimental_fragment_variables(true)
}

pub fn disable_experimental_fragment_variables() {
    set_experimental_fragment_variables(false)
}
