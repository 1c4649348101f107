//! The seam between [`GraphQLTag`](crate::GraphQLTag) and the GraphQL
//! grammar.
//!
//! Lexing and parsing are delegated to the `graphql-parser` crate via
//! [`GraphQLParserV04`]; its output is converted into this crate's
//! [`ast`](crate::ast) with [`Loc`](crate::loc::Loc)s attached.

mod document_parser;
mod fragment_variables;
mod graphql_parser_v0_4;
mod line_index;
mod parse_options;
mod syntax_error;

pub use document_parser::DocumentParser;
pub use graphql_parser_v0_4::GraphQLParserV04;
pub use line_index::LineIndex;
pub use parse_options::ParseOptions;
pub use syntax_error::SyntaxError;
