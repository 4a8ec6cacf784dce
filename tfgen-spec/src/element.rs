//! Element and member types of collection and object attributes.

use serde::Deserialize;

/// The type of the elements held by a list, map, or set.
///
/// Exactly one field is expected to be populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ElementType {
    pub bool: Option<PrimitiveElement>,
    pub float64: Option<PrimitiveElement>,
    pub int64: Option<PrimitiveElement>,
    pub list: Option<CollectionElement>,
    pub map: Option<CollectionElement>,
    pub number: Option<PrimitiveElement>,
    pub object: Option<ObjectElement>,
    pub set: Option<CollectionElement>,
    pub string: Option<PrimitiveElement>,
}

impl ElementType {
    pub fn bool() -> Self {
        Self {
            bool: Some(PrimitiveElement {}),
            ..Default::default()
        }
    }

    pub fn float64() -> Self {
        Self {
            float64: Some(PrimitiveElement {}),
            ..Default::default()
        }
    }

    pub fn int64() -> Self {
        Self {
            int64: Some(PrimitiveElement {}),
            ..Default::default()
        }
    }

    pub fn number() -> Self {
        Self {
            number: Some(PrimitiveElement {}),
            ..Default::default()
        }
    }

    pub fn string() -> Self {
        Self {
            string: Some(PrimitiveElement {}),
            ..Default::default()
        }
    }

    pub fn list(element_type: ElementType) -> Self {
        Self {
            list: Some(CollectionElement::new(element_type)),
            ..Default::default()
        }
    }

    pub fn map(element_type: ElementType) -> Self {
        Self {
            map: Some(CollectionElement::new(element_type)),
            ..Default::default()
        }
    }

    pub fn set(element_type: ElementType) -> Self {
        Self {
            set: Some(CollectionElement::new(element_type)),
            ..Default::default()
        }
    }

    pub fn object(attribute_types: Vec<ObjectAttributeType>) -> Self {
        Self {
            object: Some(ObjectElement { attribute_types }),
            ..Default::default()
        }
    }
}

/// Marker body for element kinds without further configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PrimitiveElement {}

/// Body of a list, map, or set element type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CollectionElement {
    pub element_type: Box<ElementType>,
}

impl CollectionElement {
    pub fn new(element_type: ElementType) -> Self {
        Self {
            element_type: Box::new(element_type),
        }
    }
}

/// Body of an object element type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ObjectElement {
    #[serde(default)]
    pub attribute_types: Vec<ObjectAttributeType>,
}

/// A named member of an object type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ObjectAttributeType {
    pub name: String,
    #[serde(flatten)]
    pub element_type: ElementType,
}

impl ObjectAttributeType {
    pub fn new(name: impl Into<String>, element_type: ElementType) -> Self {
        Self {
            name: name.into(),
            element_type,
        }
    }
}
