//! Model struct derivation.
//!
//! Each root gets a `<Name>Model` struct holding one field per top-level
//! attribute and block. Every nested composite (nested attributes and all
//! blocks) gets its own `<Field>Model` struct in turn.

use tfgen_codegen::builder::CodeBuilder;
use tfgen_ir::{Attribute, Attributes, Block, Blocks, Schema};

use crate::{naming::GO_NAMING, templates::registry};

/// One field of a model struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelField {
    /// Go field name, e.g. `DiskSize`.
    pub name: String,
    /// Serialization key, the schema key verbatim.
    pub key: String,
    /// Go value type, e.g. `types.String`.
    pub value_type: String,
}

impl ModelField {
    pub fn render(&self) -> String {
        format!("{} {} `tfsdk:\"{}\"`", self.name, self.value_type, self.key)
    }
}

/// A node that maps to a model struct field.
pub trait DeriveField {
    /// The field for this node under `key`. A custom type's value type
    /// replaces the built-in one.
    fn derive_field(&self, key: &str) -> ModelField;
}

fn field(key: &str, custom_value_type: Option<&str>, default_value_type: &str) -> ModelField {
    ModelField {
        name: GO_NAMING.field_name(key),
        key: key.to_string(),
        value_type: custom_value_type.unwrap_or(default_value_type).to_string(),
    }
}

impl DeriveField for Attribute {
    fn derive_field(&self, key: &str) -> ModelField {
        field(
            key,
            self.custom_type().map(|c| c.value_type.as_str()),
            registry().attribute(self.kind()).value_type,
        )
    }
}

impl DeriveField for Block {
    fn derive_field(&self, key: &str) -> ModelField {
        field(
            key,
            self.custom_type().map(|c| c.value_type.as_str()),
            registry().block(self.kind()).value_type,
        )
    }
}

/// A generated `type <Name> struct {...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelStruct {
    pub name: String,
    pub fields: Vec<ModelField>,
}

impl ModelStruct {
    pub fn render(&self) -> String {
        let mut b = CodeBuilder::go();
        b.push_line(&format!("type {} struct {{", self.name)).push_indent();
        for field in &self.fields {
            b.push_line(&field.render());
        }
        b.push_dedent().push_line("}");
        b.build()
    }
}

/// Children of a composite field: its attributes and, for blocks, its blocks.
type Composite<'a> = (&'a Attributes, Option<&'a Blocks>);

/// A nested struct that was not generated because an earlier struct with
/// different fields already took its name.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Shadowed {
    name: String,
    /// Dotted key path of the composite, e.g. `config.config`.
    path: String,
}

#[derive(Debug, Default)]
struct Collector {
    structs: Vec<ModelStruct>,
    shadowed: Vec<Shadowed>,
}

impl Collector {
    fn collect(
        &mut self,
        name: String,
        path: &str,
        attributes: &Attributes,
        blocks: Option<&Blocks>,
    ) {
        let mut fields: Vec<(ModelField, Option<Composite<'_>>)> = attributes
            .iter()
            .map(|(key, attribute)| {
                let composite = attribute.children().map(|children| (children, None));
                (attribute.derive_field(key), composite)
            })
            .chain(blocks.into_iter().flatten().map(|(key, block)| {
                let composite = (block.attributes(), Some(block.blocks()));
                (block.derive_field(key), Some(composite))
            }))
            .collect();
        fields.sort_by(|a, b| a.0.key.cmp(&b.0.key));

        let model = ModelStruct {
            name,
            fields: fields.iter().map(|(field, _)| field.clone()).collect(),
        };

        // The first struct with a given name wins.
        if let Some(existing) = self.structs.iter().find(|s| s.name == model.name) {
            if existing.fields != model.fields {
                self.shadowed.push(Shadowed {
                    name: model.name,
                    path: path.to_string(),
                });
            }
            return;
        }
        self.structs.push(model);

        for (field, composite) in fields {
            if let Some((children, blocks)) = composite {
                let nested_name = format!("{}Model", GO_NAMING.type_name(&field.key));
                let nested_path = if path.is_empty() {
                    field.key.clone()
                } else {
                    format!("{}.{}", path, field.key)
                };
                self.collect(nested_name, &nested_path, children, blocks);
            }
        }
    }
}

fn collect_models(schema: &Schema) -> Collector {
    let mut collector = Collector::default();
    collector.collect(
        format!("{}Model", GO_NAMING.type_name(&schema.name)),
        "",
        &schema.attributes,
        Some(&schema.blocks),
    );
    collector
}

/// Every model struct for one root: the root first, then nested structs
/// depth-first in key order.
pub fn model_structs(schema: &Schema) -> Vec<ModelStruct> {
    let collector = collect_models(schema);
    for shadowed in &collector.shadowed {
        tracing::warn!(
            schema = %schema.name,
            name = %shadowed.name,
            path = %shadowed.path,
            "model struct name already taken, nested struct not generated"
        );
    }
    collector.structs
}
