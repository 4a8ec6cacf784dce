use tfgen_ir as ir;
use tfgen_spec as spec;

use super::{
    Convert, ConvertError,
    common::{attributes, block_common, blocks, custom_type, plan_modifiers, validators},
};

impl Convert for spec::Block {
    type Output = ir::Block;
    const KIND: &'static str = "Block";

    #[tracing::instrument(level = "trace", skip_all, fields(name = %self.name))]
    fn convert(&self) -> Result<ir::Block, ConvertError> {
        if let Some(body) = &self.list_nested {
            return body.convert();
        }
        if let Some(body) = &self.set_nested {
            return body.convert();
        }
        if let Some(body) = &self.single_nested {
            return body.convert();
        }

        Err(ConvertError::type_not_defined("block", self))
    }
}

impl Convert for spec::NestedBlockObject {
    type Output = ir::NestedBlockObject;
    const KIND: &'static str = "NestedBlockObject";

    fn convert(&self) -> Result<ir::NestedBlockObject, ConvertError> {
        Ok(ir::NestedBlockObject {
            attributes: attributes(self.attributes.as_ref())?,
            blocks: blocks(self.blocks.as_ref())?,
            custom_type: custom_type(self.custom_type.as_ref()),
            validators: validators(&self.validators),
            plan_modifiers: plan_modifiers(&self.plan_modifiers),
        })
    }
}

impl Convert for spec::ListNestedBlock {
    type Output = ir::Block;
    const KIND: &'static str = "ListNestedBlock";

    fn convert(&self) -> Result<ir::Block, ConvertError> {
        Ok(ir::Block::ListNested(ir::NestedBlock {
            common: block_common(&self.behavior),
            nested_object: self.nested_object.convert()?,
        }))
    }
}

impl Convert for spec::SetNestedBlock {
    type Output = ir::Block;
    const KIND: &'static str = "SetNestedBlock";

    fn convert(&self) -> Result<ir::Block, ConvertError> {
        Ok(ir::Block::SetNested(ir::NestedBlock {
            common: block_common(&self.behavior),
            nested_object: self.nested_object.convert()?,
        }))
    }
}

impl Convert for spec::SingleNestedBlock {
    type Output = ir::Block;
    const KIND: &'static str = "SingleNestedBlock";

    fn convert(&self) -> Result<ir::Block, ConvertError> {
        Ok(ir::Block::SingleNested(ir::SingleNestedBlock {
            common: block_common(&self.behavior),
            attributes: attributes(self.attributes.as_ref())?,
            blocks: blocks(self.blocks.as_ref())?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert;

    fn port() -> spec::Attribute {
        spec::Attribute::int64(
            "port",
            spec::Int64Attribute {
                behavior: spec::AttributeBehavior::required(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_nil_block_kinds() {
        let cases = [
            (convert::<spec::Block>(None), "Block is nil"),
            (convert::<spec::ListNestedBlock>(None), "ListNestedBlock is nil"),
            (convert::<spec::SetNestedBlock>(None), "SetNestedBlock is nil"),
            (convert::<spec::SingleNestedBlock>(None), "SingleNestedBlock is nil"),
        ];

        for (result, expected) in cases {
            assert_eq!(result.unwrap_err().to_string(), expected);
        }
    }

    #[test]
    fn test_no_kind_is_type_not_defined() {
        let error = spec::Block::named("rule").convert().unwrap_err();
        assert!(error.to_string().starts_with("block type not defined"));
    }

    #[test]
    fn test_list_block_with_children() {
        let block = spec::Block::list_nested(
            "rule",
            spec::ListNestedBlock {
                behavior: spec::BlockBehavior {
                    description: Some("Firewall rule".into()),
                    ..Default::default()
                },
                nested_object: spec::NestedBlockObject::new(
                    vec![port()],
                    vec![spec::Block::single_nested("match", Default::default())],
                ),
            },
        );

        let converted = block.convert().unwrap();
        assert_eq!(converted.kind(), ir::BlockKind::ListNested);
        assert_eq!(converted.docs().description.as_deref(), Some("Firewall rule"));
        assert_eq!(converted.docs().markdown_description(), Some("Firewall rule"));
        assert!(converted.attributes().contains_key("port"));
        assert_eq!(converted.blocks()["match"].kind(), ir::BlockKind::SingleNested);
    }

    #[test]
    fn test_nested_block_error_propagates() {
        let inner = spec::Block::named("inner");
        let expected = inner.convert().unwrap_err();

        let outer = spec::Block::single_nested(
            "outer",
            spec::SingleNestedBlock {
                blocks: Some(vec![inner]),
                ..Default::default()
            },
        );
        assert_eq!(outer.convert().unwrap_err(), expected);
    }

    #[test]
    fn test_set_block_empty_children() {
        let unset = spec::SetNestedBlock::default().convert().unwrap();
        let empty = spec::SetNestedBlock {
            nested_object: spec::NestedBlockObject::new(Vec::new(), Vec::new()),
            ..Default::default()
        }
        .convert()
        .unwrap();

        assert_eq!(unset, empty);
    }
}
