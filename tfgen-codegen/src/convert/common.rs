//! Conversion of fields shared by attribute and block bodies.

use tfgen_ir as ir;
use tfgen_spec as spec;

use super::{Convert, ConvertError};

pub(super) fn presence(value: spec::ComputedOptionalRequired) -> ir::Presence {
    match value {
        spec::ComputedOptionalRequired::Computed => ir::Presence::Computed,
        spec::ComputedOptionalRequired::ComputedOptional => ir::Presence::ComputedOptional,
        spec::ComputedOptionalRequired::Optional => ir::Presence::Optional,
        spec::ComputedOptionalRequired::Required => ir::Presence::Required,
    }
}

pub(super) fn docs(description: &Option<String>, deprecation_message: &Option<String>) -> ir::Docs {
    ir::Docs::new(description.clone(), deprecation_message.clone())
}

pub(super) fn import(import: &spec::Import) -> ir::Import {
    ir::Import {
        path: import.path.clone(),
        alias: import.alias.clone(),
    }
}

pub(super) fn custom_type(custom: Option<&spec::CustomType>) -> Option<ir::CustomType> {
    custom.map(|c| ir::CustomType {
        import: c.import.as_ref().map(import),
        type_name: c.type_name.clone(),
        value_type: c.value_type.clone(),
    })
}

pub(super) fn custom_definition(definition: &spec::CustomDefinition) -> ir::CustomDefinition {
    ir::CustomDefinition {
        imports: definition.imports.iter().map(import).collect(),
        schema_definition: definition.schema_definition.clone(),
    }
}

pub(super) fn validators(validators: &[spec::Validator]) -> Vec<ir::Validator> {
    validators
        .iter()
        .map(|v| match &v.custom {
            Some(definition) => ir::Validator::Custom(custom_definition(definition)),
            None => ir::Validator::Empty,
        })
        .collect()
}

pub(super) fn plan_modifiers(plan_modifiers: &[spec::PlanModifier]) -> Vec<ir::PlanModifier> {
    plan_modifiers
        .iter()
        .map(|p| match &p.custom {
            Some(definition) => ir::PlanModifier::Custom(custom_definition(definition)),
            None => ir::PlanModifier::Empty,
        })
        .collect()
}

/// A static literal wins over a custom expression when both are given.
pub(super) fn static_default<T: Clone>(
    default: Option<&spec::StaticDefault<T>>,
    wrap: fn(T) -> ir::StaticValue,
) -> Option<ir::DefaultValue> {
    let default = default?;
    match (&default.static_value, &default.custom) {
        (Some(value), _) => Some(ir::DefaultValue::Static(wrap(value.clone()))),
        (None, Some(custom)) => Some(ir::DefaultValue::Custom(custom_definition(custom))),
        (None, None) => None,
    }
}

pub(super) fn custom_default(default: Option<&spec::CustomDefault>) -> Option<ir::DefaultValue> {
    default
        .and_then(|d| d.custom.as_ref())
        .map(|custom| ir::DefaultValue::Custom(custom_definition(custom)))
}

pub(super) fn attribute_common(
    behavior: &spec::AttributeBehavior,
    default: Option<ir::DefaultValue>,
) -> ir::AttributeCommon {
    ir::AttributeCommon {
        shape: ir::AttributeShape {
            presence: presence(behavior.computed_optional_required),
            sensitive: behavior.sensitive.unwrap_or(false),
            docs: docs(&behavior.description, &behavior.deprecation_message),
        },
        custom_type: custom_type(behavior.custom_type.as_ref()),
        validators: validators(&behavior.validators),
        plan_modifiers: plan_modifiers(&behavior.plan_modifiers),
        default,
    }
}

pub(super) fn block_common(behavior: &spec::BlockBehavior) -> ir::BlockCommon {
    ir::BlockCommon {
        docs: docs(&behavior.description, &behavior.deprecation_message),
        custom_type: custom_type(behavior.custom_type.as_ref()),
        validators: validators(&behavior.validators),
        plan_modifiers: plan_modifiers(&behavior.plan_modifiers),
    }
}

/// Convert a child collection. Unset and empty both yield an empty map; a
/// later entry with a repeated name replaces the earlier one.
pub(super) fn attributes(
    attributes: Option<&Vec<spec::Attribute>>,
) -> Result<ir::Attributes, ConvertError> {
    let mut converted = ir::Attributes::new();
    for attribute in attributes.into_iter().flatten() {
        converted.insert(attribute.name.clone(), attribute.convert()?);
    }
    Ok(converted)
}

pub(super) fn blocks(blocks: Option<&Vec<spec::Block>>) -> Result<ir::Blocks, ConvertError> {
    let mut converted = ir::Blocks::new();
    for block in blocks.into_iter().flatten() {
        converted.insert(block.name.clone(), block.convert()?);
    }
    Ok(converted)
}
