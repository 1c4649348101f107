use crate::ast::Value;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub struct Argument {
    pub name: String,
    pub value: Value,
}
