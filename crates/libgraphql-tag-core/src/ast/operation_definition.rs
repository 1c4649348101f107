use crate::ast::Directive;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::loc::Loc;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}

/// A query, mutation, or subscription.
///
/// The anonymous `{ ... }` shorthand is represented as an unnamed
/// [`OperationKind::Query`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OperationDefinition {
    pub operation: OperationKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}
