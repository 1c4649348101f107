use crate::GraphQLTagError;
use crate::ast;
use crate::macros::gql;
use std::sync::Arc;

#[test]
pub fn basic_functionality() -> Result<(), GraphQLTagError> {
    use crate as libgraphql_tag;
    let doc = gql!("
        query MacroBasicFunctionality {
          me {
            firstName
            lastName
          }
        }
    ")?;

    let op = doc.document().operations().next().unwrap();
    assert_eq!(op.name.as_deref(), Some("MacroBasicFunctionality"));
    assert_eq!(op.operation, ast::OperationKind::Query);
    assert!(doc.document().loc.is_none());

    Ok(())
}

#[test]
pub fn repeated_expansion_shares_cached_document() -> Result<(), GraphQLTagError> {
    use crate as libgraphql_tag;
    let first = gql!("query MacroRepeatedExpansion { a }")?;
    let second = gql!("
        query MacroRepeatedExpansion {
          a
        }
    ")?;

    assert!(Arc::ptr_eq(&first, &second));

    Ok(())
}

#[test]
pub fn interpolated_fragments() -> Result<(), GraphQLTagError> {
    use crate as libgraphql_tag;
    let name_fields = gql!("fragment MacroNameFields on User { first last }")?;
    let user_fields = gql!(
        "fragment MacroUserFields on User { id ...MacroNameFields }",
        name_fields,
    )?;
    let query = gql!(
        "query MacroInterpolated { me { ...MacroUserFields } }",
        user_fields,
        name_fields,
    )?;

    let fragment_names: Vec<_> = query.document()
        .fragments()
        .map(|frag| frag.name.as_str())
        .collect();
    assert_eq!(fragment_names, vec!["MacroUserFields", "MacroNameFields"]);

    Ok(())
}

#[test]
pub fn borrowed_fragments() -> Result<(), GraphQLTagError> {
    use crate as libgraphql_tag;
    let fields = gql!("fragment MacroBorrowedFields on User { id }")?;
    let query = gql!(
        "query MacroBorrowed { me { ...MacroBorrowedFields } }",
        &*fields,
    )?;

    assert!(query.source().ends_with("fragment MacroBorrowedFields on User { id }"));

    Ok(())
}
