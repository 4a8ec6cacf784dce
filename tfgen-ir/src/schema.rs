use serde::Serialize;

use crate::{Attributes, Blocks, Docs};

/// Whether a schema describes a managed resource or a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Resource,
    #[serde(rename = "datasource")]
    DataSource,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resource => "resource",
            Self::DataSource => "datasource",
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One IR root: the converted schema of a resource or data source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    pub name: String,
    pub target: Target,
    #[serde(flatten)]
    pub docs: Docs,
    pub attributes: Attributes,
    pub blocks: Blocks,
}

impl Schema {
    pub fn new(name: impl Into<String>, target: Target) -> Self {
        Self {
            name: name.into(),
            target,
            docs: Docs::default(),
            attributes: Attributes::new(),
            blocks: Blocks::new(),
        }
    }

    /// Deepest nesting level below the root. A schema with only leaf
    /// attributes has depth 1; an empty schema has depth 0.
    pub fn max_depth(&self) -> usize {
        level_depth(&self.attributes, &self.blocks)
    }
}

fn level_depth(attributes: &Attributes, blocks: &Blocks) -> usize {
    let attribute_depth = attributes
        .values()
        .map(|a| 1 + a.children().map_or(0, |c| level_depth(c, &Blocks::new())))
        .max()
        .unwrap_or(0);
    let block_depth = blocks
        .values()
        .map(|b| 1 + level_depth(b.attributes(), b.blocks()))
        .max()
        .unwrap_or(0);
    attribute_depth.max(block_depth)
}
