pub use libgraphql_tag_core::*;

/// Helpful macros for doing things with GraphQL documents at Rust
/// compile-time (e.g. a [`gql!`](crate::macros::gql) document whose syntax
/// is validated when the crate builds)
#[cfg(feature = "macros")]
pub mod macros {
    pub use libgraphql_tag_macros::*;
}

#[cfg(all(test, feature = "macros"))]
mod tests;
