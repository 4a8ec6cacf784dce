//! Block nodes of a schema.

use serde::Deserialize;

use crate::{Attribute, BlockBehavior, CustomType, PlanModifier, Validator};

/// A named block. Exactly one kind body is expected to be populated.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Block {
    pub name: String,
    pub list_nested: Option<ListNestedBlock>,
    pub set_nested: Option<SetNestedBlock>,
    pub single_nested: Option<SingleNestedBlock>,
}

impl Block {
    /// Create a block with no kind body set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn list_nested(name: impl Into<String>, body: ListNestedBlock) -> Self {
        Self {
            list_nested: Some(body),
            ..Self::named(name)
        }
    }

    pub fn set_nested(name: impl Into<String>, body: SetNestedBlock) -> Self {
        Self {
            set_nested: Some(body),
            ..Self::named(name)
        }
    }

    pub fn single_nested(name: impl Into<String>, body: SingleNestedBlock) -> Self {
        Self {
            single_nested: Some(body),
            ..Self::named(name)
        }
    }

    pub fn behavior(&self) -> Option<&BlockBehavior> {
        self.list_nested
            .as_ref()
            .map(|b| &b.behavior)
            .or(self.set_nested.as_ref().map(|b| &b.behavior))
            .or(self.single_nested.as_ref().map(|b| &b.behavior))
    }

    /// Child attributes of whichever kind body is set.
    pub fn child_attributes(&self) -> &[Attribute] {
        let attributes = self
            .list_nested
            .as_ref()
            .map(|b| &b.nested_object.attributes)
            .or(self.set_nested.as_ref().map(|b| &b.nested_object.attributes))
            .or(self.single_nested.as_ref().map(|b| &b.attributes));
        attributes.and_then(|a| a.as_deref()).unwrap_or_default()
    }

    /// Child blocks of whichever kind body is set.
    pub fn child_blocks(&self) -> &[Block] {
        let blocks = self
            .list_nested
            .as_ref()
            .map(|b| &b.nested_object.blocks)
            .or(self.set_nested.as_ref().map(|b| &b.nested_object.blocks))
            .or(self.single_nested.as_ref().map(|b| &b.blocks));
        blocks.and_then(|b| b.as_deref()).unwrap_or_default()
    }
}

/// The object wrapping the children of a list or set nested block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NestedBlockObject {
    pub attributes: Option<Vec<Attribute>>,
    pub blocks: Option<Vec<Block>>,
    pub custom_type: Option<CustomType>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    #[serde(default)]
    pub plan_modifiers: Vec<PlanModifier>,
}

impl NestedBlockObject {
    pub fn new(attributes: Vec<Attribute>, blocks: Vec<Block>) -> Self {
        Self {
            attributes: Some(attributes),
            blocks: Some(blocks),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListNestedBlock {
    #[serde(flatten)]
    pub behavior: BlockBehavior,
    pub nested_object: NestedBlockObject,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SetNestedBlock {
    #[serde(flatten)]
    pub behavior: BlockBehavior,
    pub nested_object: NestedBlockObject,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SingleNestedBlock {
    #[serde(flatten)]
    pub behavior: BlockBehavior,
    pub attributes: Option<Vec<Attribute>>,
    pub blocks: Option<Vec<Block>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_nested_block_children() {
        let block: Block = serde_json::from_str(
            r#"{
                "name": "rule",
                "list_nested": {
                    "description": "A rule",
                    "nested_object": {
                        "attributes": [
                            { "name": "port", "int64": { "computed_optional_required": "required" } }
                        ],
                        "blocks": [
                            { "name": "match", "single_nested": {} }
                        ]
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            block.behavior().and_then(|b| b.description.as_deref()),
            Some("A rule")
        );
        assert_eq!(block.child_attributes().len(), 1);
        assert_eq!(block.child_blocks()[0].name, "match");
        assert!(block.child_blocks()[0].child_attributes().is_empty());
    }

    #[test]
    fn test_unset_block_has_no_children() {
        let block = Block::named("empty");
        assert!(block.behavior().is_none());
        assert!(block.child_attributes().is_empty());
        assert!(block.child_blocks().is_empty());
    }
}
