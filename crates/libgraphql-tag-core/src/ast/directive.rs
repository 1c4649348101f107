use crate::ast::Argument;
use crate::loc::Loc;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub struct Directive {
    pub name: String,
    pub arguments: Vec<Argument>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}
