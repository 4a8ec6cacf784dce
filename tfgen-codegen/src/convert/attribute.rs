use tfgen_ir as ir;
use tfgen_spec as spec;

use super::{
    Convert, ConvertError,
    common::{
        attribute_common, attributes, custom_default, custom_type, plan_modifiers,
        static_default, validators,
    },
};

impl Convert for spec::Attribute {
    type Output = ir::Attribute;
    const KIND: &'static str = "Attribute";

    #[tracing::instrument(level = "trace", skip_all, fields(name = %self.name))]
    fn convert(&self) -> Result<ir::Attribute, ConvertError> {
        if let Some(body) = &self.bool {
            return body.convert();
        }
        if let Some(body) = &self.float64 {
            return body.convert();
        }
        if let Some(body) = &self.int64 {
            return body.convert();
        }
        if let Some(body) = &self.list {
            return body.convert();
        }
        if let Some(body) = &self.list_nested {
            return body.convert();
        }
        if let Some(body) = &self.map {
            return body.convert();
        }
        if let Some(body) = &self.map_nested {
            return body.convert();
        }
        if let Some(body) = &self.number {
            return body.convert();
        }
        if let Some(body) = &self.object {
            return body.convert();
        }
        if let Some(body) = &self.set {
            return body.convert();
        }
        if let Some(body) = &self.set_nested {
            return body.convert();
        }
        if let Some(body) = &self.single_nested {
            return body.convert();
        }
        if let Some(body) = &self.string {
            return body.convert();
        }

        Err(ConvertError::type_not_defined("attribute", self))
    }
}

impl Convert for spec::BoolAttribute {
    type Output = ir::Attribute;
    const KIND: &'static str = "BoolAttribute";

    fn convert(&self) -> Result<ir::Attribute, ConvertError> {
        let default = static_default(self.default.as_ref(), ir::StaticValue::Bool);
        Ok(ir::Attribute::Bool(ir::PrimitiveAttribute {
            common: attribute_common(&self.behavior, default),
        }))
    }
}

impl Convert for spec::Float64Attribute {
    type Output = ir::Attribute;
    const KIND: &'static str = "Float64Attribute";

    fn convert(&self) -> Result<ir::Attribute, ConvertError> {
        let default = static_default(self.default.as_ref(), ir::StaticValue::Float64);
        Ok(ir::Attribute::Float64(ir::PrimitiveAttribute {
            common: attribute_common(&self.behavior, default),
        }))
    }
}

impl Convert for spec::Int64Attribute {
    type Output = ir::Attribute;
    const KIND: &'static str = "Int64Attribute";

    fn convert(&self) -> Result<ir::Attribute, ConvertError> {
        let default = static_default(self.default.as_ref(), ir::StaticValue::Int64);
        Ok(ir::Attribute::Int64(ir::PrimitiveAttribute {
            common: attribute_common(&self.behavior, default),
        }))
    }
}

impl Convert for spec::NumberAttribute {
    type Output = ir::Attribute;
    const KIND: &'static str = "NumberAttribute";

    fn convert(&self) -> Result<ir::Attribute, ConvertError> {
        let default = custom_default(self.default.as_ref());
        Ok(ir::Attribute::Number(ir::PrimitiveAttribute {
            common: attribute_common(&self.behavior, default),
        }))
    }
}

impl Convert for spec::StringAttribute {
    type Output = ir::Attribute;
    const KIND: &'static str = "StringAttribute";

    fn convert(&self) -> Result<ir::Attribute, ConvertError> {
        let default = static_default(self.default.as_ref(), ir::StaticValue::String);
        Ok(ir::Attribute::String(ir::PrimitiveAttribute {
            common: attribute_common(&self.behavior, default),
        }))
    }
}

fn collection(
    behavior: &spec::AttributeBehavior,
    element_type: &spec::ElementType,
    default: Option<&spec::CustomDefault>,
) -> Result<ir::CollectionAttribute, ConvertError> {
    Ok(ir::CollectionAttribute {
        common: attribute_common(behavior, custom_default(default)),
        element_type: element_type.convert()?,
    })
}

impl Convert for spec::ListAttribute {
    type Output = ir::Attribute;
    const KIND: &'static str = "ListAttribute";

    fn convert(&self) -> Result<ir::Attribute, ConvertError> {
        collection(&self.behavior, &self.element_type, self.default.as_ref())
            .map(ir::Attribute::List)
    }
}

impl Convert for spec::MapAttribute {
    type Output = ir::Attribute;
    const KIND: &'static str = "MapAttribute";

    fn convert(&self) -> Result<ir::Attribute, ConvertError> {
        collection(&self.behavior, &self.element_type, self.default.as_ref())
            .map(ir::Attribute::Map)
    }
}

impl Convert for spec::SetAttribute {
    type Output = ir::Attribute;
    const KIND: &'static str = "SetAttribute";

    fn convert(&self) -> Result<ir::Attribute, ConvertError> {
        collection(&self.behavior, &self.element_type, self.default.as_ref())
            .map(ir::Attribute::Set)
    }
}

impl Convert for spec::ObjectAttribute {
    type Output = ir::Attribute;
    const KIND: &'static str = "ObjectAttribute";

    fn convert(&self) -> Result<ir::Attribute, ConvertError> {
        let mut attribute_types = indexmap::IndexMap::new();
        for member in &self.attribute_types {
            attribute_types.insert(member.name.clone(), member.convert()?);
        }

        Ok(ir::Attribute::Object(ir::ObjectAttribute {
            common: attribute_common(&self.behavior, custom_default(self.default.as_ref())),
            attribute_types,
        }))
    }
}

impl Convert for spec::NestedAttributeObject {
    type Output = ir::NestedAttributeObject;
    const KIND: &'static str = "NestedAttributeObject";

    fn convert(&self) -> Result<ir::NestedAttributeObject, ConvertError> {
        Ok(ir::NestedAttributeObject {
            attributes: attributes(self.attributes.as_ref())?,
            custom_type: custom_type(self.custom_type.as_ref()),
            validators: validators(&self.validators),
            plan_modifiers: plan_modifiers(&self.plan_modifiers),
        })
    }
}

fn nested(
    behavior: &spec::AttributeBehavior,
    nested_object: &spec::NestedAttributeObject,
    default: Option<&spec::CustomDefault>,
) -> Result<ir::NestedAttribute, ConvertError> {
    Ok(ir::NestedAttribute {
        common: attribute_common(behavior, custom_default(default)),
        nested_object: nested_object.convert()?,
    })
}

impl Convert for spec::ListNestedAttribute {
    type Output = ir::Attribute;
    const KIND: &'static str = "ListNestedAttribute";

    fn convert(&self) -> Result<ir::Attribute, ConvertError> {
        nested(&self.behavior, &self.nested_object, self.default.as_ref())
            .map(ir::Attribute::ListNested)
    }
}

impl Convert for spec::MapNestedAttribute {
    type Output = ir::Attribute;
    const KIND: &'static str = "MapNestedAttribute";

    fn convert(&self) -> Result<ir::Attribute, ConvertError> {
        nested(&self.behavior, &self.nested_object, self.default.as_ref())
            .map(ir::Attribute::MapNested)
    }
}

impl Convert for spec::SetNestedAttribute {
    type Output = ir::Attribute;
    const KIND: &'static str = "SetNestedAttribute";

    fn convert(&self) -> Result<ir::Attribute, ConvertError> {
        nested(&self.behavior, &self.nested_object, self.default.as_ref())
            .map(ir::Attribute::SetNested)
    }
}

impl Convert for spec::SingleNestedAttribute {
    type Output = ir::Attribute;
    const KIND: &'static str = "SingleNestedAttribute";

    fn convert(&self) -> Result<ir::Attribute, ConvertError> {
        Ok(ir::Attribute::SingleNested(ir::SingleNestedAttribute {
            common: attribute_common(&self.behavior, custom_default(self.default.as_ref())),
            attributes: attributes(self.attributes.as_ref())?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::convert::convert;

    fn list_nested(children: Option<Vec<spec::Attribute>>) -> spec::ListNestedAttribute {
        spec::ListNestedAttribute {
            behavior: spec::AttributeBehavior::optional(),
            nested_object: spec::NestedAttributeObject {
                attributes: children,
                ..Default::default()
            },
            default: None,
        }
    }

    #[test]
    fn test_nil_kind_names() {
        let cases = [
            (convert::<spec::Attribute>(None), "Attribute is nil"),
            (convert::<spec::BoolAttribute>(None), "BoolAttribute is nil"),
            (convert::<spec::Float64Attribute>(None), "Float64Attribute is nil"),
            (convert::<spec::Int64Attribute>(None), "Int64Attribute is nil"),
            (convert::<spec::ListAttribute>(None), "ListAttribute is nil"),
            (convert::<spec::ListNestedAttribute>(None), "ListNestedAttribute is nil"),
            (convert::<spec::MapAttribute>(None), "MapAttribute is nil"),
            (convert::<spec::MapNestedAttribute>(None), "MapNestedAttribute is nil"),
            (convert::<spec::NumberAttribute>(None), "NumberAttribute is nil"),
            (convert::<spec::ObjectAttribute>(None), "ObjectAttribute is nil"),
            (convert::<spec::SetAttribute>(None), "SetAttribute is nil"),
            (convert::<spec::SetNestedAttribute>(None), "SetNestedAttribute is nil"),
            (
                convert::<spec::SingleNestedAttribute>(None),
                "SingleNestedAttribute is nil",
            ),
            (convert::<spec::StringAttribute>(None), "StringAttribute is nil"),
        ];

        for (result, expected) in cases {
            assert_eq!(result.unwrap_err().to_string(), expected);
        }
    }

    #[test]
    fn test_no_kind_is_type_not_defined() {
        let error = spec::Attribute::named("empty").convert().unwrap_err();
        assert!(error.is_type_not_defined());
        assert!(error.to_string().starts_with("attribute type not defined"));
        assert!(error.to_string().contains("empty"));
    }

    #[test]
    fn test_bool_computed_optional_sensitive() {
        let attribute = spec::Attribute::bool(
            "enabled",
            spec::BoolAttribute {
                behavior: spec::AttributeBehavior::computed_optional().sensitive(),
                default: None,
            },
        );

        let converted = attribute.convert().unwrap();
        let shape = converted.shape();
        assert_eq!(converted.kind(), ir::AttributeKind::Bool);
        assert!(shape.is_computed());
        assert!(shape.is_optional());
        assert!(shape.sensitive);
        assert!(!shape.is_required());
    }

    #[test]
    fn test_every_kind_dispatches() {
        let behavior = spec::AttributeBehavior::required;
        let attributes = [
            spec::Attribute::bool("a", spec::BoolAttribute { behavior: behavior(), ..Default::default() }),
            spec::Attribute::float64("a", spec::Float64Attribute { behavior: behavior(), ..Default::default() }),
            spec::Attribute::int64("a", spec::Int64Attribute { behavior: behavior(), ..Default::default() }),
            spec::Attribute::list(
                "a",
                spec::ListAttribute {
                    behavior: behavior(),
                    element_type: spec::ElementType::string(),
                    default: None,
                },
            ),
            spec::Attribute::list_nested("a", list_nested(None)),
            spec::Attribute::map(
                "a",
                spec::MapAttribute {
                    behavior: behavior(),
                    element_type: spec::ElementType::int64(),
                    default: None,
                },
            ),
            spec::Attribute::map_nested(
                "a",
                spec::MapNestedAttribute { behavior: behavior(), ..Default::default() },
            ),
            spec::Attribute::number("a", spec::NumberAttribute { behavior: behavior(), ..Default::default() }),
            spec::Attribute::object("a", spec::ObjectAttribute { behavior: behavior(), ..Default::default() }),
            spec::Attribute::set(
                "a",
                spec::SetAttribute {
                    behavior: behavior(),
                    element_type: spec::ElementType::bool(),
                    default: None,
                },
            ),
            spec::Attribute::set_nested(
                "a",
                spec::SetNestedAttribute { behavior: behavior(), ..Default::default() },
            ),
            spec::Attribute::single_nested(
                "a",
                spec::SingleNestedAttribute { behavior: behavior(), ..Default::default() },
            ),
            spec::Attribute::string("a", spec::StringAttribute { behavior: behavior(), ..Default::default() }),
        ];

        let kinds: Vec<ir::AttributeKind> = attributes
            .iter()
            .map(|a| a.convert().unwrap().kind())
            .collect();
        assert_eq!(kinds, ir::AttributeKind::ALL);
    }

    #[test]
    fn test_first_kind_wins() {
        let mut attribute = spec::Attribute::string(
            "a",
            spec::StringAttribute {
                behavior: spec::AttributeBehavior::required(),
                ..Default::default()
            },
        );
        attribute.int64 = Some(spec::Int64Attribute {
            behavior: spec::AttributeBehavior::optional(),
            ..Default::default()
        });

        assert_eq!(attribute.convert().unwrap().kind(), ir::AttributeKind::Int64);
    }

    #[test]
    fn test_child_error_propagates_unchanged() {
        let child = spec::Attribute::named("broken");
        let child_error = child.convert().unwrap_err();

        let parent = spec::Attribute::list_nested("rules", list_nested(Some(vec![child])));
        assert_eq!(parent.convert().unwrap_err(), child_error);
    }

    #[test]
    fn test_empty_and_unset_children_match() {
        let unset = list_nested(None).convert().unwrap();
        let empty = list_nested(Some(Vec::new())).convert().unwrap();

        assert_eq!(unset, empty);
        assert_eq!(unset.children().map(|c| c.len()), Some(0));
    }

    #[test]
    fn test_object_member_without_kind() {
        let object = spec::ObjectAttribute {
            behavior: spec::AttributeBehavior::optional(),
            attribute_types: vec![spec::ObjectAttributeType {
                name: "x".into(),
                element_type: spec::ElementType::default(),
            }],
            default: None,
        };

        let error = object.convert().unwrap_err();
        assert!(
            error
                .to_string()
                .starts_with("object attribute type not defined")
        );
    }

    #[test]
    fn test_defaults() {
        let string = spec::StringAttribute {
            behavior: spec::AttributeBehavior::computed_optional(),
            default: Some(spec::StringDefault {
                static_value: Some("dev".into()),
                custom: None,
            }),
        }
        .convert()
        .unwrap();

        assert_eq!(
            string.default_value(),
            Some(&ir::DefaultValue::Static(ir::StaticValue::String(
                "dev".into()
            )))
        );
    }
}
