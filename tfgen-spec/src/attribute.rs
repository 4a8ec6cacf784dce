//! Attribute nodes of a schema.

use serde::Deserialize;

use crate::{
    AttributeBehavior, BoolDefault, CustomDefault, CustomType, ElementType, Float64Default,
    Int64Default, ObjectAttributeType, PlanModifier, StringDefault, Validator,
};

/// A named attribute. Exactly one kind body is expected to be populated;
/// they are listed in the order the converter inspects them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub bool: Option<BoolAttribute>,
    pub float64: Option<Float64Attribute>,
    pub int64: Option<Int64Attribute>,
    pub list: Option<ListAttribute>,
    pub list_nested: Option<ListNestedAttribute>,
    pub map: Option<MapAttribute>,
    pub map_nested: Option<MapNestedAttribute>,
    pub number: Option<NumberAttribute>,
    pub object: Option<ObjectAttribute>,
    pub set: Option<SetAttribute>,
    pub set_nested: Option<SetNestedAttribute>,
    pub single_nested: Option<SingleNestedAttribute>,
    pub string: Option<StringAttribute>,
}

impl Attribute {
    /// Create an attribute with no kind body set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn bool(name: impl Into<String>, body: BoolAttribute) -> Self {
        Self {
            bool: Some(body),
            ..Self::named(name)
        }
    }

    pub fn float64(name: impl Into<String>, body: Float64Attribute) -> Self {
        Self {
            float64: Some(body),
            ..Self::named(name)
        }
    }

    pub fn int64(name: impl Into<String>, body: Int64Attribute) -> Self {
        Self {
            int64: Some(body),
            ..Self::named(name)
        }
    }

    pub fn list(name: impl Into<String>, body: ListAttribute) -> Self {
        Self {
            list: Some(body),
            ..Self::named(name)
        }
    }

    pub fn list_nested(name: impl Into<String>, body: ListNestedAttribute) -> Self {
        Self {
            list_nested: Some(body),
            ..Self::named(name)
        }
    }

    pub fn map(name: impl Into<String>, body: MapAttribute) -> Self {
        Self {
            map: Some(body),
            ..Self::named(name)
        }
    }

    pub fn map_nested(name: impl Into<String>, body: MapNestedAttribute) -> Self {
        Self {
            map_nested: Some(body),
            ..Self::named(name)
        }
    }

    pub fn number(name: impl Into<String>, body: NumberAttribute) -> Self {
        Self {
            number: Some(body),
            ..Self::named(name)
        }
    }

    pub fn object(name: impl Into<String>, body: ObjectAttribute) -> Self {
        Self {
            object: Some(body),
            ..Self::named(name)
        }
    }

    pub fn set(name: impl Into<String>, body: SetAttribute) -> Self {
        Self {
            set: Some(body),
            ..Self::named(name)
        }
    }

    pub fn set_nested(name: impl Into<String>, body: SetNestedAttribute) -> Self {
        Self {
            set_nested: Some(body),
            ..Self::named(name)
        }
    }

    pub fn single_nested(name: impl Into<String>, body: SingleNestedAttribute) -> Self {
        Self {
            single_nested: Some(body),
            ..Self::named(name)
        }
    }

    pub fn string(name: impl Into<String>, body: StringAttribute) -> Self {
        Self {
            string: Some(body),
            ..Self::named(name)
        }
    }

    /// Fields shared by every kind, taken from whichever kind body is set first.
    pub fn behavior(&self) -> Option<&AttributeBehavior> {
        self.bool
            .as_ref()
            .map(|a| &a.behavior)
            .or(self.float64.as_ref().map(|a| &a.behavior))
            .or(self.int64.as_ref().map(|a| &a.behavior))
            .or(self.list.as_ref().map(|a| &a.behavior))
            .or(self.list_nested.as_ref().map(|a| &a.behavior))
            .or(self.map.as_ref().map(|a| &a.behavior))
            .or(self.map_nested.as_ref().map(|a| &a.behavior))
            .or(self.number.as_ref().map(|a| &a.behavior))
            .or(self.object.as_ref().map(|a| &a.behavior))
            .or(self.set.as_ref().map(|a| &a.behavior))
            .or(self.set_nested.as_ref().map(|a| &a.behavior))
            .or(self.single_nested.as_ref().map(|a| &a.behavior))
            .or(self.string.as_ref().map(|a| &a.behavior))
    }

    /// Child attributes for nested kinds.
    pub fn nested_attributes(&self) -> &[Attribute] {
        let nested = self
            .list_nested
            .as_ref()
            .map(|a| &a.nested_object.attributes)
            .or(self.map_nested.as_ref().map(|a| &a.nested_object.attributes))
            .or(self.set_nested.as_ref().map(|a| &a.nested_object.attributes))
            .or(self.single_nested.as_ref().map(|a| &a.attributes));
        nested.and_then(|a| a.as_deref()).unwrap_or_default()
    }

    /// Returns true if a default is configured on the populated kind body.
    pub fn has_default(&self) -> bool {
        self.bool.as_ref().is_some_and(|a| a.default.is_some())
            || self.float64.as_ref().is_some_and(|a| a.default.is_some())
            || self.int64.as_ref().is_some_and(|a| a.default.is_some())
            || self.list.as_ref().is_some_and(|a| a.default.is_some())
            || self.list_nested.as_ref().is_some_and(|a| a.default.is_some())
            || self.map.as_ref().is_some_and(|a| a.default.is_some())
            || self.map_nested.as_ref().is_some_and(|a| a.default.is_some())
            || self.number.as_ref().is_some_and(|a| a.default.is_some())
            || self.object.as_ref().is_some_and(|a| a.default.is_some())
            || self.set.as_ref().is_some_and(|a| a.default.is_some())
            || self.set_nested.as_ref().is_some_and(|a| a.default.is_some())
            || self.single_nested.as_ref().is_some_and(|a| a.default.is_some())
            || self.string.as_ref().is_some_and(|a| a.default.is_some())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BoolAttribute {
    #[serde(flatten)]
    pub behavior: AttributeBehavior,
    pub default: Option<BoolDefault>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Float64Attribute {
    #[serde(flatten)]
    pub behavior: AttributeBehavior,
    pub default: Option<Float64Default>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Int64Attribute {
    #[serde(flatten)]
    pub behavior: AttributeBehavior,
    pub default: Option<Int64Default>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NumberAttribute {
    #[serde(flatten)]
    pub behavior: AttributeBehavior,
    pub default: Option<CustomDefault>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StringAttribute {
    #[serde(flatten)]
    pub behavior: AttributeBehavior,
    pub default: Option<StringDefault>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListAttribute {
    #[serde(flatten)]
    pub behavior: AttributeBehavior,
    pub element_type: ElementType,
    pub default: Option<CustomDefault>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MapAttribute {
    #[serde(flatten)]
    pub behavior: AttributeBehavior,
    pub element_type: ElementType,
    pub default: Option<CustomDefault>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SetAttribute {
    #[serde(flatten)]
    pub behavior: AttributeBehavior,
    pub element_type: ElementType,
    pub default: Option<CustomDefault>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ObjectAttribute {
    #[serde(flatten)]
    pub behavior: AttributeBehavior,
    #[serde(default)]
    pub attribute_types: Vec<ObjectAttributeType>,
    pub default: Option<CustomDefault>,
}

/// The object wrapping the children of a list, map, or set nested attribute.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NestedAttributeObject {
    pub attributes: Option<Vec<Attribute>>,
    pub custom_type: Option<CustomType>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub plan_modifiers: Vec<PlanModifier>,
}

impl NestedAttributeObject {
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self {
            attributes: Some(attributes),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListNestedAttribute {
    #[serde(flatten)]
    pub behavior: AttributeBehavior,
    pub nested_object: NestedAttributeObject,
    pub default: Option<CustomDefault>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MapNestedAttribute {
    #[serde(flatten)]
    pub behavior: AttributeBehavior,
    pub nested_object: NestedAttributeObject,
    pub default: Option<CustomDefault>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SetNestedAttribute {
    #[serde(flatten)]
    pub behavior: AttributeBehavior,
    pub nested_object: NestedAttributeObject,
    pub default: Option<CustomDefault>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SingleNestedAttribute {
    #[serde(flatten)]
    pub behavior: AttributeBehavior,
    pub attributes: Option<Vec<Attribute>>,
    pub default: Option<CustomDefault>,
}
