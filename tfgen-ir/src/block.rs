//! Block variants of the IR.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{Attributes, CustomType, Docs, PlanModifier, Validator};

/// Child blocks keyed by name.
pub type Blocks = IndexMap<String, Block>;

/// Fields carried by every block kind. Blocks have no presence flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlockCommon {
    #[serde(flatten)]
    pub docs: Docs,
    pub custom_type: Option<CustomType>,
    pub validators: Vec<Validator>,
    pub plan_modifiers: Vec<PlanModifier>,
}

/// Wrapper around the children of list and set nested blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NestedBlockObject {
    pub attributes: Attributes,
    pub blocks: Blocks,
    pub custom_type: Option<CustomType>,
    pub validators: Vec<Validator>,
    pub plan_modifiers: Vec<PlanModifier>,
}

/// Body of list and set nested blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NestedBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    pub nested_object: NestedBlockObject,
}

/// Body of a single nested block.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SingleNestedBlock {
    #[serde(flatten)]
    pub common: BlockCommon,
    pub attributes: Attributes,
    pub blocks: Blocks,
}

/// A typed block node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    ListNested(NestedBlock),
    SetNested(NestedBlock),
    SingleNested(SingleNestedBlock),
}

/// Discriminant of [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    ListNested,
    SetNested,
    SingleNested,
}

impl BlockKind {
    /// Every kind, in converter dispatch order.
    pub const ALL: [BlockKind; 3] = [Self::ListNested, Self::SetNested, Self::SingleNested];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListNested => "list_nested",
            Self::SetNested => "set_nested",
            Self::SingleNested => "single_nested",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Self::ListNested(_) => BlockKind::ListNested,
            Self::SetNested(_) => BlockKind::SetNested,
            Self::SingleNested(_) => BlockKind::SingleNested,
        }
    }

    pub fn common(&self) -> &BlockCommon {
        match self {
            Self::ListNested(b) | Self::SetNested(b) => &b.common,
            Self::SingleNested(b) => &b.common,
        }
    }

    pub fn docs(&self) -> &Docs {
        &self.common().docs
    }

    pub fn custom_type(&self) -> Option<&CustomType> {
        self.common().custom_type.as_ref()
    }

    pub fn validators(&self) -> &[Validator] {
        &self.common().validators
    }

    pub fn plan_modifiers(&self) -> &[PlanModifier] {
        &self.common().plan_modifiers
    }

    pub fn nested_object(&self) -> Option<&NestedBlockObject> {
        match self {
            Self::ListNested(b) | Self::SetNested(b) => Some(&b.nested_object),
            Self::SingleNested(_) => None,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Self::ListNested(b) | Self::SetNested(b) => &b.nested_object.attributes,
            Self::SingleNested(b) => &b.attributes,
        }
    }

    pub fn blocks(&self) -> &Blocks {
        match self {
            Self::ListNested(b) | Self::SetNested(b) => &b.nested_object.blocks,
            Self::SingleNested(b) => &b.blocks,
        }
    }
}
