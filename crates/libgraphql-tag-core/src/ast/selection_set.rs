use crate::ast::Selection;
use crate::loc::Loc;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub struct SelectionSet {
    pub selections: Vec<Selection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}
