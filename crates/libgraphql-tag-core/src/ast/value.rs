use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum Value {
    #[serde(rename = "BooleanValue")]
    Boolean(bool),

    #[serde(rename = "EnumValue")]
    Enum(String),

    #[serde(rename = "FloatValue")]
    Float(f64),

    #[serde(rename = "IntValue")]
    Int(i64),

    #[serde(rename = "ListValue")]
    List(Vec<Value>),

    #[serde(rename = "NullValue")]
    Null,

    #[serde(rename = "ObjectValue")]
    Object(BTreeMap<String, Value>),

    #[serde(rename = "StringValue")]
    String(String),

    Variable(String),
}
