use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::SelectionSet;
use crate::loc::Loc;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Field {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,

    /// `None` for leaf fields (no `{ ... }` following the field).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_set: Option<SelectionSet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Loc>,
}

impl Field {
    /// The key this field's value is returned under in a response.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}
