use thiserror::Error;

/// The source text does not conform to the GraphQL grammar.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("GraphQL syntax error: {message}")]
pub struct SyntaxError {
    message: String,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::convert::From<graphql_parser::query::ParseError> for SyntaxError {
    fn from(value: graphql_parser::query::ParseError) -> Self {
        Self::new(value.to_string().trim())
    }
}
