//! Shape, documentation, and custom definitions shared by attributes and blocks.

use serde::Serialize;

/// Whether a value must, may, or cannot be set by the practitioner.
///
/// The three framework flags are derived from this single value, so
/// `required` never coexists with `optional` or `computed`, and a node is
/// never left with all three unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Computed,
    ComputedOptional,
    Optional,
    Required,
}

impl Presence {
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required)
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional | Self::ComputedOptional)
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed | Self::ComputedOptional)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Computed => "computed",
            Self::ComputedOptional => "computed_optional",
            Self::Optional => "optional",
            Self::Required => "required",
        }
    }
}

/// Description and deprecation text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Docs {
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
}

impl Docs {
    pub fn new(description: Option<String>, deprecation_message: Option<String>) -> Self {
        Self {
            description,
            deprecation_message,
        }
    }

    /// Markdown description. Always identical to the plain description.
    pub fn markdown_description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Shape fields carried by every attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeShape {
    pub presence: Presence,
    pub sensitive: bool,
    pub docs: Docs,
}

impl AttributeShape {
    pub fn new(presence: Presence) -> Self {
        Self {
            presence,
            sensitive: false,
            docs: Docs::default(),
        }
    }

    pub fn is_required(&self) -> bool {
        self.presence.is_required()
    }

    pub fn is_optional(&self) -> bool {
        self.presence.is_optional()
    }

    pub fn is_computed(&self) -> bool {
        self.presence.is_computed()
    }
}

/// A module reference with an optional alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Import {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
        }
    }

    pub fn aliased(path: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: Some(alias.into()),
        }
    }
}

/// Replacement for the default value representation of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomType {
    pub import: Option<Import>,
    pub type_name: String,
    pub value_type: String,
}

/// An externally supplied expression plus the imports it needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomDefinition {
    pub imports: Vec<Import>,
    pub schema_definition: String,
}

/// A validator descriptor. Framework built-in validators are not modelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "definition", rename_all = "snake_case")]
pub enum Validator {
    Empty,
    Custom(CustomDefinition),
}

impl Validator {
    pub fn custom(&self) -> Option<&CustomDefinition> {
        match self {
            Self::Custom(definition) => Some(definition),
            Self::Empty => None,
        }
    }
}

/// A plan modifier descriptor. Only the custom form is modelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "definition", rename_all = "snake_case")]
pub enum PlanModifier {
    Empty,
    Custom(CustomDefinition),
}

impl PlanModifier {
    pub fn custom(&self) -> Option<&CustomDefinition> {
        match self {
            Self::Custom(definition) => Some(definition),
            Self::Empty => None,
        }
    }
}

/// A literal default value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StaticValue {
    Bool(bool),
    Float64(f64),
    Int64(i64),
    String(String),
}

/// The default applied when the practitioner leaves an attribute unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValue {
    Static(StaticValue),
    Custom(CustomDefinition),
}
