//! Per-kind rendering data.
//!
//! The registry is built once on first use and shared by the emitter, the
//! model deriver and the import aggregator.

use std::{collections::HashMap, sync::LazyLock};

use tfgen_ir::{AttributeKind, BlockKind};

use crate::packages::DefaultPackage;

/// Registry key: one entry per attribute kind and per block kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKey {
    Attribute(AttributeKind),
    Block(BlockKind),
}

/// What the generated code names for one node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindTemplate {
    /// Framework schema type, e.g. `StringAttribute`.
    pub schema_type: &'static str,
    /// Model value type, e.g. `types.String`.
    pub value_type: &'static str,
    /// Suffix shared by `validator.<X>` and `planmodifier.<X>`.
    pub element: &'static str,
    /// Package holding static default constructors, if the kind has one.
    pub default_package: Option<DefaultPackage>,
}

impl KindTemplate {
    const fn new(schema_type: &'static str, value_type: &'static str, element: &'static str) -> Self {
        Self {
            schema_type,
            value_type,
            element,
            default_package: None,
        }
    }

    const fn with_default(mut self, name: &'static str, constructor: &'static str) -> Self {
        self.default_package = Some(DefaultPackage::new(name, constructor));
        self
    }

    /// Element type of a `Validators` slice, e.g. `validator.String`.
    pub fn validator_type(&self) -> String {
        format!("validator.{}", self.element)
    }

    /// Element type of a `PlanModifiers` slice, e.g. `planmodifier.String`.
    pub fn plan_modifier_type(&self) -> String {
        format!("planmodifier.{}", self.element)
    }
}

/// Lookup table from node kind to [`KindTemplate`].
#[derive(Debug)]
pub struct TemplateRegistry {
    templates: HashMap<TemplateKey, KindTemplate>,
}

impl TemplateRegistry {
    fn new() -> Self {
        use AttributeKind as A;

        let attributes = [
            (A::Bool, KindTemplate::new("BoolAttribute", "types.Bool", "Bool").with_default("booldefault", "StaticBool")),
            (A::Float64, KindTemplate::new("Float64Attribute", "types.Float64", "Float64").with_default("float64default", "StaticFloat64")),
            (A::Int64, KindTemplate::new("Int64Attribute", "types.Int64", "Int64").with_default("int64default", "StaticInt64")),
            (A::List, KindTemplate::new("ListAttribute", "types.List", "List")),
            (A::ListNested, KindTemplate::new("ListNestedAttribute", "types.List", "List")),
            (A::Map, KindTemplate::new("MapAttribute", "types.Map", "Map")),
            (A::MapNested, KindTemplate::new("MapNestedAttribute", "types.Map", "Map")),
            (A::Number, KindTemplate::new("NumberAttribute", "types.Number", "Number")),
            (A::Object, KindTemplate::new("ObjectAttribute", "types.Object", "Object")),
            (A::Set, KindTemplate::new("SetAttribute", "types.Set", "Set")),
            (A::SetNested, KindTemplate::new("SetNestedAttribute", "types.Set", "Set")),
            (A::SingleNested, KindTemplate::new("SingleNestedAttribute", "types.Object", "Object")),
            (A::String, KindTemplate::new("StringAttribute", "types.String", "String").with_default("stringdefault", "StaticString")),
        ];
        let blocks = [
            (BlockKind::ListNested, KindTemplate::new("ListNestedBlock", "types.List", "List")),
            (BlockKind::SetNested, KindTemplate::new("SetNestedBlock", "types.Set", "Set")),
            (BlockKind::SingleNested, KindTemplate::new("SingleNestedBlock", "types.Object", "Object")),
        ];

        let templates = attributes
            .into_iter()
            .map(|(kind, template)| (TemplateKey::Attribute(kind), template))
            .chain(
                blocks
                    .into_iter()
                    .map(|(kind, template)| (TemplateKey::Block(kind), template)),
            )
            .collect();

        tracing::trace!("built template registry");
        Self { templates }
    }

    pub fn get(&self, key: TemplateKey) -> Option<&KindTemplate> {
        self.templates.get(&key)
    }

    pub fn attribute(&self, kind: AttributeKind) -> &KindTemplate {
        self.get(TemplateKey::Attribute(kind))
            .unwrap_or(&NESTED_OBJECT)
    }

    pub fn block(&self, kind: BlockKind) -> &KindTemplate {
        self.get(TemplateKey::Block(kind)).unwrap_or(&NESTED_OBJECT)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// The object wrapping nested children. Every kind is registered, so this
/// is also what a lookup falls back to.
pub const NESTED_OBJECT: KindTemplate = KindTemplate::new("NestedAttributeObject", "types.Object", "Object");

static REGISTRY: LazyLock<TemplateRegistry> = LazyLock::new(TemplateRegistry::new);

/// The process-wide template registry.
pub fn registry() -> &'static TemplateRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_registered() {
        for kind in AttributeKind::ALL {
            assert!(registry().get(TemplateKey::Attribute(kind)).is_some(), "{kind}");
        }
        for kind in BlockKind::ALL {
            assert!(registry().get(TemplateKey::Block(kind)).is_some(), "{kind}");
        }
        assert_eq!(registry().len(), 16);
    }

    #[test]
    fn test_registry_is_shared() {
        assert!(std::ptr::eq(registry(), registry()));
    }

    #[test]
    fn test_string_template() {
        let template = registry().attribute(AttributeKind::String);
        assert_eq!(template.schema_type, "StringAttribute");
        assert_eq!(template.value_type, "types.String");
        assert_eq!(template.validator_type(), "validator.String");
        assert_eq!(template.plan_modifier_type(), "planmodifier.String");
        assert_eq!(
            template.default_package,
            Some(DefaultPackage::new("stringdefault", "StaticString"))
        );
    }

    #[test]
    fn test_nested_kinds_share_value_types() {
        assert_eq!(
            registry().attribute(AttributeKind::ListNested).value_type,
            registry().block(BlockKind::ListNested).value_type
        );
        assert_eq!(
            registry().attribute(AttributeKind::SingleNested).value_type,
            "types.Object"
        );
        assert!(registry().attribute(AttributeKind::List).default_package.is_none());
    }
}
