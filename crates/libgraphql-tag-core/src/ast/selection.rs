use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::NodeKind;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Field(_) => NodeKind::Field,
            Self::FragmentSpread(_) => NodeKind::FragmentSpread,
            Self::InlineFragment(_) => NodeKind::InlineFragment,
        }
    }
}
