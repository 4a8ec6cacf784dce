//! Building blocks shared by attribute and block bodies.

use serde::Deserialize;

/// Whether a value must, may, or cannot be set by the practitioner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputedOptionalRequired {
    Computed,
    ComputedOptional,
    #[default]
    Optional,
    Required,
}

impl ComputedOptionalRequired {
    /// Get the string representation used in specification documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Computed => "computed",
            Self::ComputedOptional => "computed_optional",
            Self::Optional => "optional",
            Self::Required => "required",
        }
    }
}

/// A module reference with an optional alias.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
pub struct Import {
    pub path: String,
    pub alias: Option<String>,
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
        }
    }
}

/// Replacement for the default value representation of an attribute or block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomType {
    pub import: Option<Import>,
    #[serde(rename = "type")]
    pub type_name: String,
    pub value_type: String,
}

/// An externally supplied expression plus the imports it needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomDefinition {
    #[serde(default)]
    pub imports: Vec<Import>,
    pub schema_definition: String,
}

impl CustomDefinition {
    pub fn new(schema_definition: impl Into<String>) -> Self {
        Self {
            imports: Vec::new(),
            schema_definition: schema_definition.into(),
        }
    }

    /// Add an import required by the definition.
    pub fn import(mut self, path: impl Into<String>) -> Self {
        self.imports.push(Import::new(path));
        self
    }
}

/// A validator entry. Only the custom form is described here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Validator {
    pub custom: Option<CustomDefinition>,
}

impl Validator {
    pub fn custom(definition: CustomDefinition) -> Self {
        Self {
            custom: Some(definition),
        }
    }
}

/// A plan modifier entry. Only the custom form is described here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlanModifier {
    pub custom: Option<CustomDefinition>,
}

impl PlanModifier {
    pub fn custom(definition: CustomDefinition) -> Self {
        Self {
            custom: Some(definition),
        }
    }
}

/// A default that may be a static literal or a custom expression.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StaticDefault<T> {
    #[serde(rename = "static")]
    pub static_value: Option<T>,
    pub custom: Option<CustomDefinition>,
}

pub type BoolDefault = StaticDefault<bool>;
pub type Float64Default = StaticDefault<f64>;
pub type Int64Default = StaticDefault<i64>;
pub type StringDefault = StaticDefault<String>;

/// A default that can only be expressed as a custom expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CustomDefault {
    pub custom: Option<CustomDefinition>,
}

/// Fields common to every attribute kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AttributeBehavior {
    pub computed_optional_required: ComputedOptionalRequired,
    pub sensitive: Option<bool>,
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub custom_type: Option<CustomType>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub plan_modifiers: Vec<PlanModifier>,
}

impl AttributeBehavior {
    pub fn new(computed_optional_required: ComputedOptionalRequired) -> Self {
        Self {
            computed_optional_required,
            ..Default::default()
        }
    }

    pub fn required() -> Self {
        Self::new(ComputedOptionalRequired::Required)
    }

    pub fn optional() -> Self {
        Self::new(ComputedOptionalRequired::Optional)
    }

    pub fn computed() -> Self {
        Self::new(ComputedOptionalRequired::Computed)
    }

    pub fn computed_optional() -> Self {
        Self::new(ComputedOptionalRequired::ComputedOptional)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = Some(true);
        self
    }

    pub fn custom_type(mut self, custom_type: CustomType) -> Self {
        self.custom_type = Some(custom_type);
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }
}

/// Fields common to every block kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BlockBehavior {
    pub description: Option<String>,
    pub deprecation_message: Option<String>,
    pub custom_type: Option<CustomType>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub plan_modifiers: Vec<PlanModifier>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computed_optional_required_names() {
        let parsed: Vec<ComputedOptionalRequired> = serde_json::from_str(
            r#"["computed", "computed_optional", "optional", "required"]"#,
        )
        .unwrap();

        let names: Vec<&str> = parsed.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            ["computed", "computed_optional", "optional", "required"]
        );
    }

    #[test]
    fn test_unknown_presence_rejected() {
        let parsed = serde_json::from_str::<ComputedOptionalRequired>(r#""sometimes""#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_custom_type_renames_type_field() {
        let custom: CustomType = serde_json::from_str(
            r#"{
                "import": { "path": "example.com/my_types" },
                "type": "my_types.StringType{}",
                "value_type": "my_types.String"
            }"#,
        )
        .unwrap();

        assert_eq!(custom.type_name, "my_types.StringType{}");
        assert_eq!(custom.value_type, "my_types.String");
        assert_eq!(custom.import, Some(Import::new("example.com/my_types")));
    }

    #[test]
    fn test_static_default() {
        let default: Int64Default = serde_json::from_str(r#"{ "static": 42 }"#).unwrap();
        assert_eq!(default.static_value, Some(42));
        assert!(default.custom.is_none());
    }

    #[test]
    fn test_empty_validator() {
        let validator: Validator = serde_json::from_str("{}").unwrap();
        assert!(validator.custom.is_none());
    }
}
