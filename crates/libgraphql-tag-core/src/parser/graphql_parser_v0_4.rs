//! [`DocumentParser`] backed by `graphql_parser` v0.4.
//!
//! `graphql_parser` reports a start position for every node but an end
//! position only for selection sets (the position of the closing `}`). A
//! [`Loc`] is therefore attached only to nodes whose extent ends with a
//! selection set, plus the document itself:
//!
//! * `Document` (the whole source)
//! * `OperationDefinition` and `FragmentDefinition`
//! * `SelectionSet`
//! * `Field` (only when it has a sub-selection)
//! * `InlineFragment`
//!
//! All other nodes get `loc: None`.

use crate::ast;
use crate::loc::Loc;
use crate::loc::Source;
use crate::parser::fragment_variables;
use crate::parser::DocumentParser;
use crate::parser::LineIndex;
use crate::parser::ParseOptions;
use crate::parser::SyntaxError;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Default)]
pub struct GraphQLParserV04;

impl GraphQLParserV04 {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentParser for GraphQLParserV04 {
    fn parse(
        &self,
        source: &str,
        options: &ParseOptions,
    ) -> Result<ast::Node, SyntaxError> {
        // Fragment variable definitions are blanked out (same shape, all
        // spaces) before handing the text to graphql_parser, so every
        // line/column it reports is still valid against `source`.
        let (text, fragment_variables) =
            if options.experimental_fragment_variables {
                let extracted = fragment_variables::extract(source)?;
                let variables = extracted.parse_variable_definitions(source)?;
                (Cow::Owned(extracted.blanked_source), variables)
            } else {
                (Cow::Borrowed(source), HashMap::new())
            };

        let gp_doc = graphql_parser::query::parse_query::<String>(&text)?;

        let mut ctx = FromGpContext {
            fragment_variables,
            line_index: LineIndex::new(source),
            source: Arc::new(Source::new(source)),
        };
        Ok(ast::Node::Document(gp_document_to_ast(gp_doc, &mut ctx)))
    }
}

struct FromGpContext<'src> {
    /// Variable definitions extracted from `fragment Name(...)`, keyed by
    /// the byte offset of the `fragment` keyword.
    fragment_variables: HashMap<usize, Vec<ast::VariableDefinition>>,
    line_index: LineIndex<'src>,
    source: Arc<Source>,
}

impl<'src> FromGpContext<'src> {
    /// A `Loc` spanning from `start` through the closing `}` at
    /// `closing_brace`.
    fn loc_through_brace(
        &self,
        start: graphql_parser::Pos,
        closing_brace: graphql_parser::Pos,
    ) -> Loc {
        self.loc_from_offset_through_brace(self.offset(start), closing_brace)
    }

    fn loc_from_offset_through_brace(
        &self,
        start: usize,
        closing_brace: graphql_parser::Pos,
    ) -> Loc {
        let source_len = self.source.body().len();
        let end = (self.line_index.offset(closing_brace) + 1).min(source_len);
        Loc::new(start, end, Arc::clone(&self.source))
    }

    /// Byte offset of the `...` that precedes the token at `after_spread`.
    ///
    /// `graphql_parser` positions an inline fragment at the first token
    /// after its `...`. Only ignored characters may sit in between; if the
    /// `...` can't be found that way the token's own offset is returned.
    fn spread_offset(&self, after_spread: graphql_parser::Pos) -> usize {
        let offset = self.offset(after_spread);
        self.source.body()[..offset]
            .trim_end_matches(|ch: char| {
                ch == ',' || ch == '\u{feff}' || ch.is_whitespace()
            })
            .strip_suffix("...")
            .map_or(offset, str::len)
    }

    fn offset(&self, pos: graphql_parser::Pos) -> usize {
        self.line_index.offset(pos)
    }
}

fn gp_document_to_ast(
    doc: graphql_parser::query::Document<'_, String>,
    ctx: &mut FromGpContext<'_>,
) -> ast::Document {
    use graphql_parser::query::Definition as GpDef;

    let definitions = doc.definitions
        .into_iter()
        .map(|def| match def {
            GpDef::Operation(op) =>
                ast::Definition::Operation(gp_operation_to_ast(op, ctx)),
            GpDef::Fragment(frag) =>
                ast::Definition::Fragment(gp_fragment_def_to_ast(frag, ctx)),
        })
        .collect();

    ast::Document {
        definitions,
        loc: Some(Loc::new(
            0,
            ctx.source.body().len(),
            Arc::clone(&ctx.source),
        )),
    }
}

fn gp_operation_to_ast(
    op: graphql_parser::query::OperationDefinition<'_, String>,
    ctx: &FromGpContext<'_>,
) -> ast::OperationDefinition {
    use graphql_parser::query::OperationDefinition as GpOp;

    match op {
        GpOp::SelectionSet(ss) => ast::OperationDefinition {
            operation: ast::OperationKind::Query,
            name: None,
            variable_definitions: vec![],
            directives: vec![],
            loc: Some(ctx.loc_through_brace(ss.span.0, ss.span.1)),
            selection_set: gp_selection_set_to_ast(ss, ctx),
        },

        GpOp::Query(query) => ast::OperationDefinition {
            operation: ast::OperationKind::Query,
            name: query.name,
            variable_definitions: gp_variable_defs_to_ast(
                query.variable_definitions,
            ),
            directives: gp_directives_to_ast(query.directives),
            loc: Some(ctx.loc_through_brace(
                query.position,
                query.selection_set.span.1,
            )),
            selection_set: gp_selection_set_to_ast(query.selection_set, ctx),
        },

        GpOp::Mutation(mutation) => ast::OperationDefinition {
            operation: ast::OperationKind::Mutation,
            name: mutation.name,
            variable_definitions: gp_variable_defs_to_ast(
                mutation.variable_definitions,
            ),
            directives: gp_directives_to_ast(mutation.directives),
            loc: Some(ctx.loc_through_brace(
                mutation.position,
                mutation.selection_set.span.1,
            )),
            selection_set: gp_selection_set_to_ast(
                mutation.selection_set,
                ctx,
            ),
        },

        GpOp::Subscription(sub) => ast::OperationDefinition {
            operation: ast::OperationKind::Subscription,
            name: sub.name,
            variable_definitions: gp_variable_defs_to_ast(
                sub.variable_definitions,
            ),
            directives: gp_directives_to_ast(sub.directives),
            loc: Some(ctx.loc_through_brace(
                sub.position,
                sub.selection_set.span.1,
            )),
            selection_set: gp_selection_set_to_ast(sub.selection_set, ctx),
        },
    }
}

fn gp_fragment_def_to_ast(
    frag: graphql_parser::query::FragmentDefinition<'_, String>,
    ctx: &mut FromGpContext<'_>,
) -> ast::FragmentDefinition {
    let graphql_parser::query::TypeCondition::On(type_condition) =
        frag.type_condition;
    let keyword_offset = ctx.offset(frag.position);
    let variable_definitions = ctx.fragment_variables
        .remove(&keyword_offset)
        .unwrap_or_default();

    ast::FragmentDefinition {
        name: frag.name,
        variable_definitions,
        type_condition,
        directives: gp_directives_to_ast(frag.directives),
        loc: Some(ctx.loc_through_brace(
            frag.position,
            frag.selection_set.span.1,
        )),
        selection_set: gp_selection_set_to_ast(frag.selection_set, ctx),
    }
}

fn gp_selection_set_to_ast(
    ss: graphql_parser::query::SelectionSet<'_, String>,
    ctx: &FromGpContext<'_>,
) -> ast::SelectionSet {
    let loc = ctx.loc_through_brace(ss.span.0, ss.span.1);
    ast::SelectionSet {
        selections: ss.items
            .into_iter()
            .map(|sel| gp_selection_to_ast(sel, ctx))
            .collect(),
        loc: Some(loc),
    }
}

fn gp_selection_to_ast(
    sel: graphql_parser::query::Selection<'_, String>,
    ctx: &FromGpContext<'_>,
) -> ast::Selection {
    use graphql_parser::query::Selection as GpSel;

    match sel {
        GpSel::Field(field) => {
            // graphql_parser represents a leaf field with an empty selection
            // set; `{}` is not valid GraphQL, so empty means "absent".
            let (selection_set, loc) =
                if field.selection_set.items.is_empty() {
                    (None, None)
                } else {
                    let loc = ctx.loc_through_brace(
                        field.position,
                        field.selection_set.span.1,
                    );
                    (
                        Some(gp_selection_set_to_ast(field.selection_set, ctx)),
                        Some(loc),
                    )
                };

            ast::Selection::Field(ast::Field {
                alias: field.alias,
                name: field.name,
                arguments: gp_arguments_to_ast(field.arguments),
                directives: gp_directives_to_ast(field.directives),
                selection_set,
                loc,
            })
        },

        GpSel::FragmentSpread(spread) =>
            ast::Selection::FragmentSpread(ast::FragmentSpread {
                fragment_name: spread.fragment_name,
                directives: gp_directives_to_ast(spread.directives),
                loc: None,
            }),

        GpSel::InlineFragment(inline) => {
            let loc = ctx.loc_from_offset_through_brace(
                ctx.spread_offset(inline.position),
                inline.selection_set.span.1,
            );
            ast::Selection::InlineFragment(ast::InlineFragment {
                type_condition: inline.type_condition.map(|cond| {
                    let graphql_parser::query::TypeCondition::On(name) = cond;
                    name
                }),
                directives: gp_directives_to_ast(inline.directives),
                selection_set: gp_selection_set_to_ast(
                    inline.selection_set,
                    ctx,
                ),
                loc: Some(loc),
            })
        },
    }
}

pub(super) fn gp_variable_defs_to_ast(
    var_defs: Vec<graphql_parser::query::VariableDefinition<'_, String>>,
) -> Vec<ast::VariableDefinition> {
    var_defs.into_iter()
        .map(|var_def| ast::VariableDefinition {
            name: var_def.name,
            var_type: gp_type_to_ast(var_def.var_type),
            default_value: var_def.default_value.map(gp_value_to_ast),
            loc: None,
        })
        .collect()
}

fn gp_directives_to_ast(
    directives: Vec<graphql_parser::query::Directive<'_, String>>,
) -> Vec<ast::Directive> {
    directives.into_iter()
        .map(|directive| ast::Directive {
            name: directive.name,
            arguments: gp_arguments_to_ast(directive.arguments),
            loc: None,
        })
        .collect()
}

fn gp_arguments_to_ast(
    arguments: Vec<(String, graphql_parser::query::Value<'_, String>)>,
) -> Vec<ast::Argument> {
    arguments.into_iter()
        .map(|(name, value)| ast::Argument {
            name,
            value: gp_value_to_ast(value),
        })
        .collect()
}

fn gp_type_to_ast(ty: graphql_parser::query::Type<'_, String>) -> ast::Type {
    use graphql_parser::query::Type as GpType;

    match ty {
        GpType::NamedType(name) => ast::Type::Named(name),
        GpType::ListType(inner) =>
            ast::Type::List(Box::new(gp_type_to_ast(*inner))),
        GpType::NonNullType(inner) =>
            ast::Type::NonNull(Box::new(gp_type_to_ast(*inner))),
    }
}

fn gp_value_to_ast(value: graphql_parser::query::Value<'_, String>) -> ast::Value {
    use graphql_parser::query::Value as GpValue;

    match value {
        GpValue::Boolean(b) => ast::Value::Boolean(b),
        GpValue::Enum(e) => ast::Value::Enum(e),
        GpValue::Float(f) => ast::Value::Float(f),
        // `Number` always holds an i64 in graphql_parser v0.4.
        GpValue::Int(n) => ast::Value::Int(n.as_i64().unwrap_or(0)),
        GpValue::List(items) =>
            ast::Value::List(items.into_iter().map(gp_value_to_ast).collect()),
        GpValue::Null => ast::Value::Null,
        GpValue::Object(fields) => ast::Value::Object(
            fields.into_iter()
                .map(|(key, value)| (key, gp_value_to_ast(value)))
                .collect(),
        ),
        GpValue::String(s) => ast::Value::String(s),
        GpValue::Variable(name) => ast::Value::Variable(name),
    }
}
