//! Import aggregation.
//!
//! Collects the Go module references a node's generated code refers to,
//! recursing into every child. The result is deduplicated and keeps the
//! order in which references were first seen; children are visited in
//! sorted key order so the output does not depend on declaration order.

use tfgen_codegen::generation::ImportCollector;
use tfgen_ir::{
    Attribute, Block, CustomDefinition, CustomType, DefaultValue, NestedAttributeObject,
    NestedBlockObject, PlanModifier, Schema, Validator,
};

use crate::{
    emit::sorted_entries,
    packages::{ATTR, PLANMODIFIER, TYPES, VALIDATOR},
    templates::registry,
};

/// A node that can report the module references its generated code needs.
pub trait CollectImports {
    /// Add this node's references, and those of its children, to `imports`.
    fn collect_imports(&self, imports: &mut ImportCollector);

    /// Collect into a fresh collector.
    fn imports(&self) -> ImportCollector {
        let mut imports = ImportCollector::new();
        self.collect_imports(&mut imports);
        imports
    }
}

/// The aggregated references for one schema root.
#[tracing::instrument(level = "debug", skip_all, fields(name = %schema.name))]
pub fn schema_imports(schema: &Schema) -> ImportCollector {
    let imports = schema.imports();
    tracing::debug!(count = imports.len(), "aggregated imports");
    imports
}

/// Without a custom type the node uses a built-in value type; a custom type
/// brings its own reference, or none when it is defined locally.
fn value_type(custom_type: Option<&CustomType>, imports: &mut ImportCollector) {
    match custom_type {
        None => {
            imports.add_path(TYPES);
        }
        Some(custom) => custom_type_import(Some(custom), imports),
    }
}

fn custom_type_import(custom_type: Option<&CustomType>, imports: &mut ImportCollector) {
    if let Some(import) = custom_type.and_then(|c| c.import.as_ref()) {
        imports.extend([import]);
    }
}

/// Add `support` followed by the definition's own references, but only when
/// it has at least one.
fn custom_definition(definition: &CustomDefinition, support: &str, imports: &mut ImportCollector) {
    if definition.imports.iter().any(|i| !i.path.is_empty()) {
        imports.add_path(support);
        imports.extend(&definition.imports);
    }
}

fn validators(validators: &[Validator], imports: &mut ImportCollector) {
    for definition in validators.iter().filter_map(Validator::custom) {
        custom_definition(definition, VALIDATOR, imports);
    }
}

fn plan_modifiers(plan_modifiers: &[PlanModifier], imports: &mut ImportCollector) {
    for definition in plan_modifiers.iter().filter_map(PlanModifier::custom) {
        custom_definition(definition, PLANMODIFIER, imports);
    }
}

impl CollectImports for Attribute {
    fn collect_imports(&self, imports: &mut ImportCollector) {
        value_type(self.custom_type(), imports);

        // Element and member type expressions are always `types.*Type`,
        // whatever the value type.
        let has_element_types = self.element_type().is_some()
            || self.attribute_types().is_some_and(|members| !members.is_empty());
        if has_element_types {
            imports.add_path(TYPES);
        }

        let has_member_types = self.element_type().is_some_and(|e| e.has_member_types())
            || self.attribute_types().is_some_and(|members| !members.is_empty());
        if has_member_types {
            imports.add_path(ATTR);
        }

        validators(self.validators(), imports);
        plan_modifiers(self.plan_modifiers(), imports);

        match self.default_value() {
            Some(DefaultValue::Static(_)) => {
                if let Some(package) = registry().attribute(self.kind()).default_package {
                    imports.add_path(&package.path());
                }
            }
            Some(DefaultValue::Custom(definition)) => imports.extend(&definition.imports),
            None => {}
        }

        if let Some(nested_object) = self.nested_object() {
            nested_object.collect_imports(imports);
        } else if let Some(children) = self.children() {
            for (_, child) in sorted_entries(children) {
                child.collect_imports(imports);
            }
        }
    }
}

impl CollectImports for NestedAttributeObject {
    fn collect_imports(&self, imports: &mut ImportCollector) {
        custom_type_import(self.custom_type.as_ref(), imports);
        validators(&self.validators, imports);
        plan_modifiers(&self.plan_modifiers, imports);

        for (_, child) in sorted_entries(&self.attributes) {
            child.collect_imports(imports);
        }
    }
}

impl CollectImports for Block {
    fn collect_imports(&self, imports: &mut ImportCollector) {
        value_type(self.custom_type(), imports);
        validators(self.validators(), imports);
        plan_modifiers(self.plan_modifiers(), imports);

        match self.nested_object() {
            Some(nested_object) => nested_object.collect_imports(imports),
            None => {
                for (_, child) in sorted_entries(self.attributes()) {
                    child.collect_imports(imports);
                }
                for (_, child) in sorted_entries(self.blocks()) {
                    child.collect_imports(imports);
                }
            }
        }
    }
}

impl CollectImports for NestedBlockObject {
    fn collect_imports(&self, imports: &mut ImportCollector) {
        custom_type_import(self.custom_type.as_ref(), imports);
        validators(&self.validators, imports);
        plan_modifiers(&self.plan_modifiers, imports);

        for (_, child) in sorted_entries(&self.attributes) {
            child.collect_imports(imports);
        }
        for (_, child) in sorted_entries(&self.blocks) {
            child.collect_imports(imports);
        }
    }
}

impl CollectImports for Schema {
    fn collect_imports(&self, imports: &mut ImportCollector) {
        for (_, attribute) in sorted_entries(&self.attributes) {
            attribute.collect_imports(imports);
        }
        for (_, block) in sorted_entries(&self.blocks) {
            block.collect_imports(imports);
        }
    }
}
