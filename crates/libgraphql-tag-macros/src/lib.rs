mod gql_input;

use gql_input::GqlInput;
use libgraphql_tag_core::parser::DocumentParser;
use libgraphql_tag_core::parser::GraphQLParserV04;
use libgraphql_tag_core::parser::ParseOptions;
use quote::quote;
use syn::parse_macro_input;

/// Evaluates to the result of
/// [`libgraphql_tag::parse()`](libgraphql_tag::parse()) for a string literal
/// of GraphQL document text, optionally followed by previously parsed
/// fragment documents to splice in.
///
/// The literal is checked for GraphQL syntax errors at compile time, so a
/// typo in an inline document fails the build rather than the first request
/// that uses it. Each extra argument must dereference to a
/// [`ParsedDocument`](libgraphql_tag::ParsedDocument) (e.g. the
/// `Arc<ParsedDocument>` returned by an earlier `gql!`).
///
/// Fragment variable definitions are accepted by the compile-time check;
/// whether they parse at runtime depends on
/// [`enable_experimental_fragment_variables()`](libgraphql_tag::enable_experimental_fragment_variables()).
///
/// Example usage:
///
/// ```rust
/// use libgraphql_tag::macros::gql;
///
/// let user_fields = gql!("
///     fragment UserFields on User {
///         id
///         firstName
///     }
/// ").unwrap();
///
/// let query = gql!("
///     query CurrentUser {
///         me { ...UserFields }
///     }
/// ", user_fields).unwrap();
///
/// assert_eq!(query.document().operations().count(), 1);
/// assert_eq!(query.document().fragments().count(), 1);
/// ```
#[proc_macro]
pub fn gql(
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let GqlInput { source, fragments } = parse_macro_input!(input as GqlInput);

    // Syntax-check the literal at compile time
    let options = ParseOptions {
        experimental_fragment_variables: true,
    };
    if let Err(err) = GraphQLParserV04::new().parse(&source.value(), &options) {
        let error_msg = format!("Failed to parse GraphQL document: {err}");
        return quote! {
            compile_error!(#error_msg);
        }.into();
    }

    let output = quote! {
        libgraphql_tag::parse(
            #source,
            &[#(::std::ops::Deref::deref(&#fragments)),*],
        )
    };

    output.into()
}
