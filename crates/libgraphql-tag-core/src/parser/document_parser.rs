use crate::ast;
use crate::parser::ParseOptions;
use crate::parser::SyntaxError;

/// Parses GraphQL source text into an [`ast::Node`].
///
/// Implementations are expected to return an [`ast::Node::Document`] whose
/// fragment definitions each carry a [`Loc`](crate::loc::Loc) with its
/// source attached; the fragment's normalized source text is what identifies
/// it in the [`FragmentRegistry`](crate::FragmentRegistry).
pub trait DocumentParser: Send + Sync {
    fn parse(
        &self,
        source: &str,
        options: &ParseOptions,
    ) -> Result<ast::Node, SyntaxError>;
}
