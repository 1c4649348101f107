//! Parse-once, cache-forever handling of GraphQL documents written inline in
//! application code.
//!
//! Every document passed through [`GraphQLTag::parse`] (or the process-wide
//! [`parse`] function) is normalized into a cache key, parsed at most once
//! per distinct key, stripped of location metadata, and handed back as a
//! shared [`ParsedDocument`]. Fragment definitions are tracked by name across
//! every document so that two different fragments sharing a name get
//! reported.

pub mod ast;
mod document_cache;
mod fragment_registry;
mod global;
mod graphql_tag;
mod graphql_tag_error;
pub mod loc;
mod normalize;
mod parsed_document;
pub mod parser;
mod strip_loc;

pub use document_cache::DocumentCache;
pub use fragment_registry::FragmentObservation;
pub use fragment_registry::FragmentRegistry;
pub use global::disable_experimental_fragment_variables;
pub use global::disable_fragment_warnings;
pub use global::enable_experimental_fragment_variables;
pub use global::parse;
pub use global::reset_caches;
pub use global::set_experimental_fragment_variables;
pub use global::set_warn_on_fragment_conflict;
pub use graphql_tag::GraphQLTag;
pub use graphql_tag::TagOptions;
pub use graphql_tag_error::GraphQLTagError;
pub use normalize::normalize;
pub use parsed_document::ParsedDocument;
pub use strip_loc::StripLoc;

#[cfg(test)]
mod tests;
