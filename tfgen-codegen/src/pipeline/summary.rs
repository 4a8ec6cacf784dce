//! Per-root analysis data shared by generators and reports.

use serde::Serialize;
use tfgen_ir::{Attributes, Blocks, Schema, Target};

/// Counts computed once per converted root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaSummary {
    pub name: String,
    pub target: Target,
    /// Attributes at every level, including those inside blocks.
    pub attributes: usize,
    /// Blocks at every level.
    pub blocks: usize,
    pub max_depth: usize,
}

impl SchemaSummary {
    pub fn from_schema(schema: &Schema) -> Self {
        let (attributes, blocks) = count_level(&schema.attributes, &schema.blocks);
        Self {
            name: schema.name.clone(),
            target: schema.target,
            attributes,
            blocks,
            max_depth: schema.max_depth(),
        }
    }
}

fn count_attributes(attributes: &Attributes) -> usize {
    attributes
        .values()
        .map(|a| 1 + a.children().map_or(0, count_attributes))
        .sum()
}

fn count_level(attributes: &Attributes, blocks: &Blocks) -> (usize, usize) {
    blocks.values().fold(
        (count_attributes(attributes), blocks.len()),
        |(a, b), block| {
            let (inner_a, inner_b) = count_level(block.attributes(), block.blocks());
            (a + inner_a, b + inner_b)
        },
    )
}
