use crate::ast::Directive;
use crate::loc::Loc;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FragmentSpread {
    pub fragment_name: String,
    pub directives: Vec<Directive>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}
