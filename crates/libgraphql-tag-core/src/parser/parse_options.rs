/// Options forwarded to a [`DocumentParser`](crate::parser::DocumentParser).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    /// Accept variable definitions on fragment definitions, e.g.
    /// `fragment Avatar($size: Int = 64) on User { ... }`.
    pub experimental_fragment_variables: bool,
}
