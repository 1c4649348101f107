use syn::Expr;
use syn::LitStr;
use syn::Token;
use syn::parse::Parse;
use syn::parse::ParseStream;
use syn::punctuated::Punctuated;

/// `"<graphql source>" (, <fragment expr>)* ,?`
pub(crate) struct GqlInput {
    pub(crate) source: LitStr,
    pub(crate) fragments: Vec<Expr>,
}

impl Parse for GqlInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let source: LitStr = input.parse()?;
        if input.is_empty() {
            return Ok(Self {
                source,
                fragments: vec![],
            });
        }

        input.parse::<Token![,]>()?;
        let fragments =
            Punctuated::<Expr, Token![,]>::parse_terminated(input)?;
        Ok(Self {
            source,
            fragments: fragments.into_iter().collect(),
        })
    }
}
