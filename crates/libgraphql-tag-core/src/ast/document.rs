use crate::ast::Definition;
use crate::ast::FragmentDefinition;
use crate::ast::NodeKind;
use crate::ast::OperationDefinition;
use crate::loc::Loc;
use serde::Serialize;

/// The root of an executable GraphQL document.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub struct Document {
    pub definitions: Vec<Definition>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

impl Document {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Document
    }

    /// Iterates over the fragment definitions in this document, in source
    /// order.
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(Definition::as_fragment)
    }

    /// Iterates over the operation definitions in this document, in source
    /// order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(Definition::as_operation)
    }
}
