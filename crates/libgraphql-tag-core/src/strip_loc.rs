use crate::ast;
use crate::loc::Loc;

/// Transforms an AST (sub)tree into one that carries no location metadata.
///
/// Each node first has its [`Loc`]'s reference to the full source dropped.
/// Then, if `remove_loc_at_this_level` is set, the `Loc` itself is dropped.
/// Children are always stripped with `remove_loc_at_this_level = true`, so
/// calling `node.strip_loc(false)` leaves exactly one `Loc` (offsets only)
/// on `node` itself and none anywhere beneath it.
///
/// Names, [`ast::Type`]s and [`ast::Value`]s carry no location and are
/// passed through untouched.
pub trait StripLoc: Sized {
    fn strip_loc(self, remove_loc_at_this_level: bool) -> Self;
}

fn strip_own_loc(loc: Option<Loc>, remove_loc_at_this_level: bool) -> Option<Loc> {
    let loc = loc.map(Loc::detach_source);
    if remove_loc_at_this_level {
        return None;
    }
    loc
}

impl<T: StripLoc> StripLoc for Vec<T> {
    fn strip_loc(self, remove_loc_at_this_level: bool) -> Self {
        self.into_iter()
            .map(|node| node.strip_loc(remove_loc_at_this_level))
            .collect()
    }
}

impl<T: StripLoc> StripLoc for Option<T> {
    fn strip_loc(self, remove_loc_at_this_level: bool) -> Self {
        self.map(|node| node.strip_loc(remove_loc_at_this_level))
    }
}

impl<T: StripLoc> StripLoc for Box<T> {
    fn strip_loc(self, remove_loc_at_this_level: bool) -> Self {
        Box::new((*self).strip_loc(remove_loc_at_this_level))
    }
}

impl StripLoc for ast::Document {
    fn strip_loc(self, remove_loc_at_this_level: bool) -> Self {
        Self {
            definitions: self.definitions.strip_loc(true),
            loc: strip_own_loc(self.loc, remove_loc_at_this_level),
        }
    }
}

impl StripLoc for ast::Definition {
    fn strip_loc(self, remove_loc_at_this_level: bool) -> Self {
        match self {
            Self::Fragment(fragment) =>
                Self::Fragment(fragment.strip_loc(remove_loc_at_this_level)),
            Self::Operation(operation) =>
                Self::Operation(operation.strip_loc(remove_loc_at_this_level)),
        }
    }
}

impl StripLoc for ast::OperationDefinition {
    fn strip_loc(self, remove_loc_at_this_level: bool) -> Self {
        Self {
            operation: self.operation,
            name: self.name,
            variable_definitions: self.variable_definitions.strip_loc(true),
            directives: self.directives.strip_loc(true),
            selection_set: self.selection_set.strip_loc(true),
            loc: strip_own_loc(self.loc, remove_loc_at_this_level),
        }
    }
}

impl StripLoc for ast::FragmentDefinition {
    fn strip_loc(self, remove_loc_at_this_level: bool) -> Self {
        Self {
            name: self.name,
            variable_definitions: self.variable_definitions.strip_loc(true),
            type_condition: self.type_condition,
            directives: self.directives.strip_loc(true),
            selection_set: self.selection_set.strip_loc(true),
            loc: strip_own_loc(self.loc, remove_loc_at_this_level),
        }
    }
}

impl StripLoc for ast::VariableDefinition {
    fn strip_loc(self, remove_loc_at_this_level: bool) -> Self {
        Self {
            name: self.name,
            var_type: self.var_type,
            default_value: self.default_value,
            loc: strip_own_loc(self.loc, remove_loc_at_this_level),
        }
    }
}

impl StripLoc for ast::Directive {
    fn strip_loc(self, remove_loc_at_this_level: bool) -> Self {
        Self {
            name: self.name,
            arguments: self.arguments,
            loc: strip_own_loc(self.loc, remove_loc_at_this_level),
        }
    }
}

impl StripLoc for ast::SelectionSet {
    fn strip_loc(self, remove_loc_at_this_level: bool) -> Self {
        Self {
            selections: self.selections.strip_loc(true),
            loc: strip_own_loc(self.loc, remove_loc_at_this_level),
        }
    }
}

impl StripLoc for ast::Selection {
    fn strip_loc(self, remove_loc_at_this_level: bool) -> Self {
        match self {
            Self::Field(field) =>
                Self::Field(field.strip_loc(remove_loc_at_this_level)),
            Self::FragmentSpread(spread) =>
                Self::FragmentSpread(spread.strip_loc(remove_loc_at_this_level)),
            Self::InlineFragment(inline) =>
                Self::InlineFragment(inline.strip_loc(remove_loc_at_this_level)),
        }
    }
}

impl StripLoc for ast::Field {
    fn strip_loc(self, remove_loc_at_this_level: bool) -> Self {
        Self {
            alias: self.alias,
            name: self.name,
            arguments: self.arguments,
            directives: self.directives.strip_loc(true),
            selection_set: self.selection_set.strip_loc(true),
            loc: strip_own_loc(self.loc, remove_loc_at_this_level),
        }
    }
}

impl StripLoc for ast::FragmentSpread {
    fn strip_loc(self, remove_loc_at_this_level: bool) -> Self {
        Self {
            fragment_name: self.fragment_name,
            directives: self.directives.strip_loc(true),
            loc: strip_own_loc(self.loc, remove_loc_at_this_level),
        }
    }
}

impl StripLoc for ast::InlineFragment {
    fn strip_loc(self, remove_loc_at_this_level: bool) -> Self {
        Self {
            type_condition: self.type_condition,
            directives: self.directives.strip_loc(true),
            selection_set: self.selection_set.strip_loc(true),
            loc: strip_own_loc(self.loc, remove_loc_at_this_level),
        }
    }
}
