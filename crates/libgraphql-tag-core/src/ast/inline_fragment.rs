use crate::ast::Directive;
use crate::ast::SelectionSet;
use crate::loc::Loc;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InlineFragment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_condition: Option<String>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}
