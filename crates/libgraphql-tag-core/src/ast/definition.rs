use crate::ast::FragmentDefinition;
use crate::ast::NodeKind;
use crate::ast::OperationDefinition;
use crate::loc::Loc;
use serde::Serialize;

/// A top-level definition within an executable [`Document`](crate::ast::Document).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Definition {
    #[serde(rename = "OperationDefinition")]
    Operation(OperationDefinition),

    #[serde(rename = "FragmentDefinition")]
    Fragment(FragmentDefinition),
}

impl Definition {
    pub fn as_fragment(&self) -> Option<&FragmentDefinition> {
        match self {
            Self::Fragment(fragment) => Some(fragment),
            Self::Operation(_) => None,
        }
    }

    pub fn as_operation(&self) -> Option<&OperationDefinition> {
        match self {
            Self::Operation(operation) => Some(operation),
            Self::Fragment(_) => None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Operation(_) => NodeKind::OperationDefinition,
            Self::Fragment(_) => NodeKind::FragmentDefinition,
        }
    }

    pub fn loc(&self) -> Option<&Loc> {
        match self {
            Self::Operation(operation) => operation.loc.as_ref(),
            Self::Fragment(fragment) => fragment.loc.as_ref(),
        }
    }
}
