use crate::ast::Directive;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::loc::Loc;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FragmentDefinition {
    pub name: String,

    /// Only ever non-empty when parsed with experimental fragment variables
    /// enabled.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variable_definitions: Vec<VariableDefinition>,
    pub type_condition: String,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}
