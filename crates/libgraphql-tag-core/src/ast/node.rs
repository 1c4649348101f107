use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::NodeKind;
use crate::ast::SelectionSet;

/// A top-level result handed back by a
/// [`DocumentParser`](crate::parser::DocumentParser).
///
/// Well-behaved parsers only ever produce [`Node::Document`]; anything else
/// is rejected by [`GraphQLTag`](crate::GraphQLTag).
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Definition(Definition),
    Document(Document),
    SelectionSet(SelectionSet),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Definition(definition) => definition.kind(),
            Self::Document(document) => document.kind(),
            Self::SelectionSet(_) => NodeKind::SelectionSet,
        }
    }
}
