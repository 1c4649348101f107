use serde::Serialize;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", content = "type")]
pub enum Type {
    #[serde(rename = "ListType")]
    List(Box<Type>),

    #[serde(rename = "NamedType")]
    Named(String),

    #[serde(rename = "NonNullType")]
    NonNull(Box<Type>),
}
