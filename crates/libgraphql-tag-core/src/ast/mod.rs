//! The AST produced by a [`DocumentParser`](crate::parser::DocumentParser)
//! and cached by [`GraphQLTag`](crate::GraphQLTag).
//!
//! Structural nodes carry an optional [`Loc`](crate::loc::Loc). Freshly
//! parsed trees have locs wherever the parser could determine a node's full
//! extent; trees stored in the document cache have none at all.

mod argument;
mod definition;
mod directive;
mod document;
mod field;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod node;
mod node_kind;
mod operation_definition;
mod selection;
mod selection_set;
mod type_annotation;
mod value;
mod variable_definition;

pub use argument::Argument;
pub use definition::Definition;
pub use directive::Directive;
pub use document::Document;
pub use field::Field;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use node::Node;
pub use node_kind::NodeKind;
pub use operation_definition::OperationDefinition;
pub use operation_definition::OperationKind;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use type_annotation::Type;
pub use value::Value;
pub use variable_definition::VariableDefinition;
