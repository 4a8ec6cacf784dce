use indexmap::IndexMap;
use serde::Serialize;

/// Element type of a collection, or member type of an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum ElementType {
    Bool,
    Float64,
    Int64,
    List(Box<ElementType>),
    Map(Box<ElementType>),
    Number,
    Object(IndexMap<String, ElementType>),
    Set(Box<ElementType>),
    String,
}

impl ElementType {
    /// Returns true if this type, or any type nested in it, is an object
    /// with at least one named member.
    pub fn has_member_types(&self) -> bool {
        match self {
            Self::Object(members) => !members.is_empty(),
            Self::List(inner) | Self::Map(inner) | Self::Set(inner) => inner.has_member_types(),
            Self::Bool | Self::Float64 | Self::Int64 | Self::Number | Self::String => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Float64 => "float64",
            Self::Int64 => "int64",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Number => "number",
            Self::Object(_) => "object",
            Self::Set(_) => "set",
            Self::String => "string",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_member_types() {
        assert!(!ElementType::String.has_member_types());
        assert!(!ElementType::Object(IndexMap::new()).has_member_types());

        let object = ElementType::Object(IndexMap::from([("id".to_string(), ElementType::Int64)]));
        assert!(object.has_member_types());
        assert!(ElementType::List(Box::new(object)).has_member_types());
    }

    #[test]
    fn test_object_equality_ignores_member_order() {
        let a = ElementType::Object(IndexMap::from([
            ("a".to_string(), ElementType::String),
            ("b".to_string(), ElementType::Bool),
        ]));
        let b = ElementType::Object(IndexMap::from([
            ("b".to_string(), ElementType::Bool),
            ("a".to_string(), ElementType::String),
        ]));
        assert_eq!(a, b);
    }
}
