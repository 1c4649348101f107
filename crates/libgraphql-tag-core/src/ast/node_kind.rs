#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    Directive,
    Document,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    OperationDefinition,
    SelectionSet,
    VariableDefinition,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Directive => "Directive",
            Self::Document => "Document",
            Self::Field => "Field",
            Self::FragmentDefinition => "FragmentDefinition",
            Self::FragmentSpread => "FragmentSpread",
            Self::InlineFragment => "InlineFragment",
            Self::OperationDefinition => "OperationDefinition",
            Self::SelectionSet => "SelectionSet",
            Self::VariableDefinition => "VariableDefinition",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
