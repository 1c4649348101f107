use crate::ast::Type;
use crate::ast::Value;
use crate::loc::Loc;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub struct VariableDefinition {
    pub name: String,
    pub var_type: Type,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}
