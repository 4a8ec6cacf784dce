//! Conversion of schema roots and whole specifications.

use tfgen_ir as ir;
use tfgen_spec as spec;

use super::{
    ConvertError,
    common::{attributes, blocks, docs},
};

/// A root that failed to convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertFailure {
    pub name: String,
    pub target: ir::Target,
    pub error: ConvertError,
}

impl std::fmt::Display for ConvertFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}': {}", self.target, self.name, self.error)
    }
}

/// Result of converting every root of a specification. Each root is
/// converted independently; one failure does not affect the others.
#[derive(Debug, Default)]
pub struct ConvertOutcome {
    pub schemas: Vec<ir::Schema>,
    pub failures: Vec<ConvertFailure>,
}

pub fn target_of(kind: spec::RootKind) -> ir::Target {
    match kind {
        spec::RootKind::Resource => ir::Target::Resource,
        spec::RootKind::DataSource => ir::Target::DataSource,
    }
}

/// Convert one resource or data source.
#[tracing::instrument(level = "debug", skip_all, fields(name = root.name, target = %root.kind))]
pub fn convert_root(root: &spec::Root<'_>) -> Result<ir::Schema, ConvertError> {
    let schema = root.schema.ok_or(ConvertError::Nil { kind: "Schema" })?;

    let converted = ir::Schema {
        name: root.name.to_string(),
        target: target_of(root.kind),
        docs: docs(&schema.description, &schema.deprecation_message),
        attributes: attributes(schema.attributes.as_ref())?,
        blocks: blocks(schema.blocks.as_ref())?,
    };
    tracing::debug!(
        attributes = converted.attributes.len(),
        blocks = converted.blocks.len(),
        "converted schema"
    );
    Ok(converted)
}

/// Convert every root, collecting failures instead of stopping at the first.
pub fn convert_specification(specification: &spec::Specification) -> ConvertOutcome {
    let mut outcome = ConvertOutcome::default();
    for root in specification.roots() {
        match convert_root(&root) {
            Ok(schema) => outcome.schemas.push(schema),
            Err(error) => {
                tracing::debug!(name = root.name, %error, "conversion failed");
                outcome.failures.push(ConvertFailure {
                    name: root.name.to_string(),
                    target: target_of(root.kind),
                    error,
                });
            }
        }
    }
    outcome
}
