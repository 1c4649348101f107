use crate::ast::NodeKind;
use crate::parser::SyntaxError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphQLTagError {
    #[error(
        "Fragment `{fragment_name}` was produced by the parser without \
        location information, so its source cannot be identified"
    )]
    MissingFragmentLocation {
        fragment_name: String,
    },

    #[error("Not a valid GraphQL document: parsed a `{kind}` node")]
    NotADocument {
        kind: NodeKind,
    },

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}
