//! Attribute variants of the IR.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    AttributeShape, CustomType, DefaultValue, ElementType, PlanModifier, Presence, Validator,
};

/// Child attributes keyed by name. Iteration order is insertion order and
/// carries no meaning; emitters sort by key.
pub type Attributes = IndexMap<String, Attribute>;

/// Fields carried by every attribute kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeCommon {
    #[serde(flatten)]
    pub shape: AttributeShape,
    pub custom_type: Option<CustomType>,
    pub validators: Vec<Validator>,
    pub plan_modifiers: Vec<PlanModifier>,
    pub default: Option<DefaultValue>,
}

impl AttributeCommon {
    pub fn new(shape: AttributeShape) -> Self {
        Self {
            shape,
            custom_type: None,
            validators: Vec::new(),
            plan_modifiers: Vec::new(),
            default: None,
        }
    }
}

/// Body of bool, float64, int64, number, and string attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimitiveAttribute {
    #[serde(flatten)]
    pub common: AttributeCommon,
}

/// Body of list, map, and set attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionAttribute {
    #[serde(flatten)]
    pub common: AttributeCommon,
    pub element_type: ElementType,
}

/// Body of an object attribute: a fixed set of named member types.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectAttribute {
    #[serde(flatten)]
    pub common: AttributeCommon,
    pub attribute_types: IndexMap<String, ElementType>,
}

/// Wrapper around the children of list, map, and set nested attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NestedAttributeObject {
    pub attributes: Attributes,
    pub custom_type: Option<CustomType>,
    pub validators: Vec<Validator>,
    pub plan_modifiers: Vec<PlanModifier>,
}

/// Body of list, map, and set nested attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NestedAttribute {
    #[serde(flatten)]
    pub common: AttributeCommon,
    pub nested_object: NestedAttributeObject,
}

/// Body of a single nested attribute. Children hang directly off the node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleNestedAttribute {
    #[serde(flatten)]
    pub common: AttributeCommon,
    pub attributes: Attributes,
}

/// A typed attribute node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Attribute {
    Bool(PrimitiveAttribute),
    Float64(PrimitiveAttribute),
    Int64(PrimitiveAttribute),
    List(CollectionAttribute),
    ListNested(NestedAttribute),
    Map(CollectionAttribute),
    MapNested(NestedAttribute),
    Number(PrimitiveAttribute),
    Object(ObjectAttribute),
    Set(CollectionAttribute),
    SetNested(NestedAttribute),
    SingleNested(SingleNestedAttribute),
    String(PrimitiveAttribute),
}

/// Discriminant of [`Attribute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    Bool,
    Float64,
    Int64,
    List,
    ListNested,
    Map,
    MapNested,
    Number,
    Object,
    Set,
    SetNested,
    SingleNested,
    String,
}

impl AttributeKind {
    /// Every kind, in converter dispatch order.
    pub const ALL: [AttributeKind; 13] = [
        Self::Bool,
        Self::Float64,
        Self::Int64,
        Self::List,
        Self::ListNested,
        Self::Map,
        Self::MapNested,
        Self::Number,
        Self::Object,
        Self::Set,
        Self::SetNested,
        Self::SingleNested,
        Self::String,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Float64 => "float64",
            Self::Int64 => "int64",
            Self::List => "list",
            Self::ListNested => "list_nested",
            Self::Map => "map",
            Self::MapNested => "map_nested",
            Self::Number => "number",
            Self::Object => "object",
            Self::Set => "set",
            Self::SetNested => "set_nested",
            Self::SingleNested => "single_nested",
            Self::String => "string",
        }
    }

    /// Returns true for kinds that own child attributes.
    pub fn is_nested(&self) -> bool {
        matches!(
            self,
            Self::ListNested | Self::MapNested | Self::SetNested | Self::SingleNested
        )
    }
}

impl std::fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Attribute {
    pub fn kind(&self) -> AttributeKind {
        match self {
            Self::Bool(_) => AttributeKind::Bool,
            Self::Float64(_) => AttributeKind::Float64,
            Self::Int64(_) => AttributeKind::Int64,
            Self::List(_) => AttributeKind::List,
            Self::ListNested(_) => AttributeKind::ListNested,
            Self::Map(_) => AttributeKind::Map,
            Self::MapNested(_) => AttributeKind::MapNested,
            Self::Number(_) => AttributeKind::Number,
            Self::Object(_) => AttributeKind::Object,
            Self::Set(_) => AttributeKind::Set,
            Self::SetNested(_) => AttributeKind::SetNested,
            Self::SingleNested(_) => AttributeKind::SingleNested,
            Self::String(_) => AttributeKind::String,
        }
    }

    pub fn common(&self) -> &AttributeCommon {
        match self {
            Self::Bool(a) | Self::Float64(a) | Self::Int64(a) | Self::Number(a) | Self::String(a) => {
                &a.common
            }
            Self::List(a) | Self::Map(a) | Self::Set(a) => &a.common,
            Self::ListNested(a) | Self::MapNested(a) | Self::SetNested(a) => &a.common,
            Self::Object(a) => &a.common,
            Self::SingleNested(a) => &a.common,
        }
    }

    pub fn shape(&self) -> &AttributeShape {
        &self.common().shape
    }

    pub fn presence(&self) -> Presence {
        self.shape().presence
    }

    pub fn custom_type(&self) -> Option<&CustomType> {
        self.common().custom_type.as_ref()
    }

    pub fn validators(&self) -> &[Validator] {
        &self.common().validators
    }

    pub fn plan_modifiers(&self) -> &[PlanModifier] {
        &self.common().plan_modifiers
    }

    pub fn default_value(&self) -> Option<&DefaultValue> {
        self.common().default.as_ref()
    }

    /// Element type of list, map, and set attributes.
    pub fn element_type(&self) -> Option<&ElementType> {
        match self {
            Self::List(a) | Self::Map(a) | Self::Set(a) => Some(&a.element_type),
            _ => None,
        }
    }

    /// Member types of an object attribute.
    pub fn attribute_types(&self) -> Option<&IndexMap<String, ElementType>> {
        match self {
            Self::Object(a) => Some(&a.attribute_types),
            _ => None,
        }
    }

    /// Nested object of list, map, and set nested attributes.
    pub fn nested_object(&self) -> Option<&NestedAttributeObject> {
        match self {
            Self::ListNested(a) | Self::MapNested(a) | Self::SetNested(a) => {
                Some(&a.nested_object)
            }
            _ => None,
        }
    }

    /// Child attributes of nested kinds.
    pub fn children(&self) -> Option<&Attributes> {
        match self {
            Self::ListNested(a) | Self::MapNested(a) | Self::SetNested(a) => {
                Some(&a.nested_object.attributes)
            }
            Self::SingleNested(a) => Some(&a.attributes),
            _ => None,
        }
    }
}
