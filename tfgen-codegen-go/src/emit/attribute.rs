use tfgen_codegen::builder::CodeBuilder;
use tfgen_ir::{Attribute, NestedAttributeObject};

use super::{
    Emit,
    common::{
        push_custom_type, push_default, push_docs, push_expr, push_plan_modifiers, push_shape,
        push_validators,
    },
    element::{element_type_expr, push_member_types},
    go_quote, push_attributes,
};
use crate::templates::{NESTED_OBJECT, registry};

impl Emit for Attribute {
    #[tracing::instrument(level = "trace", skip_all, fields(key = %key, kind = %self.kind()))]
    fn emit(&self, key: &str) -> String {
        let template = registry().attribute(self.kind());
        let common = self.common();

        let mut b = CodeBuilder::go();
        b.push_line(&format!("{}: schema.{}{{", go_quote(key), template.schema_type))
            .push_indent();

        match self {
            Attribute::List(c) | Attribute::Map(c) | Attribute::Set(c) => {
                push_expr(&mut b, "ElementType", &element_type_expr(&c.element_type));
            }
            Attribute::Object(o) if !o.attribute_types.is_empty() => {
                push_member_types(&mut b, "AttributeTypes", &o.attribute_types);
            }
            Attribute::ListNested(n) | Attribute::MapNested(n) | Attribute::SetNested(n) => {
                push_nested_object(&mut b, &n.nested_object);
            }
            Attribute::SingleNested(s) => push_attributes(&mut b, &s.attributes),
            _ => {}
        }

        push_shape(&mut b, &common.shape);
        push_docs(&mut b, &common.shape.docs);
        push_custom_type(&mut b, common.custom_type.as_ref());
        push_validators(&mut b, template, &common.validators);
        push_plan_modifiers(&mut b, template, &common.plan_modifiers);
        push_default(&mut b, template, common.default.as_ref());

        b.push_dedent().push_line("},");
        b.build()
    }
}

fn push_nested_object(b: &mut CodeBuilder, nested_object: &NestedAttributeObject) {
    b.push_line("NestedObject: schema.NestedAttributeObject{")
        .push_indent();
    push_attributes(b, &nested_object.attributes);
    push_custom_type(b, nested_object.custom_type.as_ref());
    push_validators(b, &NESTED_OBJECT, &nested_object.validators);
    push_plan_modifiers(b, &NESTED_OBJECT, &nested_object.plan_modifiers);
    b.push_dedent().push_line("},");
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;
    use tfgen_ir::{
        AttributeCommon, AttributeShape, CollectionAttribute, CustomDefinition, CustomType, Docs,
        ElementType, Import, NestedAttribute, ObjectAttribute, Presence, PrimitiveAttribute,
        SingleNestedAttribute, Validator,
    };

    use super::*;

    fn common(presence: Presence) -> AttributeCommon {
        AttributeCommon::new(AttributeShape::new(presence))
    }

    fn leaf(presence: Presence) -> Attribute {
        Attribute::String(PrimitiveAttribute {
            common: common(presence),
        })
    }

    #[test]
    fn test_bool_computed_optional_sensitive() {
        let mut shape = AttributeShape::new(Presence::ComputedOptional);
        shape.sensitive = true;
        let attribute = Attribute::Bool(PrimitiveAttribute {
            common: AttributeCommon::new(shape),
        });

        assert_eq!(
            attribute.emit("flag"),
            "\"flag\": schema.BoolAttribute{\n\tOptional: true,\n\tComputed: true,\n\tSensitive: true,\n},\n"
        );
    }

    #[test]
    fn test_leaf_with_everything() {
        let mut common = common(Presence::Required);
        common.shape.docs = Docs::new(Some("The name".into()), Some("Use label".into()));
        common.custom_type = Some(CustomType {
            import: Some(Import::new("example.com/fwtypes")),
            type_name: "fwtypes.NameType{}".into(),
            value_type: "fwtypes.Name".into(),
        });
        common.validators = vec![Validator::Custom(CustomDefinition {
            imports: Vec::new(),
            schema_definition: "stringvalidator.LengthAtLeast(1)".into(),
        })];
        let attribute = Attribute::String(PrimitiveAttribute { common });

        let expected = "\
\"name\": schema.StringAttribute{
\tRequired: true,
\tDescription: \"The name\",
\tMarkdownDescription: \"The name\",
\tDeprecationMessage: \"Use label\",
\tCustomType: fwtypes.NameType{},
\tValidators: []validator.String{
\t\tstringvalidator.LengthAtLeast(1),
\t},
},
";
        assert_eq!(attribute.emit("name"), expected);
    }

    #[test]
    fn test_list_element_type() {
        let attribute = Attribute::List(CollectionAttribute {
            common: common(Presence::Optional),
            element_type: ElementType::String,
        });

        assert_eq!(
            attribute.emit("tags"),
            "\"tags\": schema.ListAttribute{\n\tElementType: types.StringType,\n\tOptional: true,\n},\n"
        );
    }

    #[test]
    fn test_object_attribute_types() {
        let attribute = Attribute::Object(ObjectAttribute {
            common: common(Presence::Computed),
            attribute_types: IndexMap::from([("id".to_string(), ElementType::Int64)]),
        });

        let expected = "\
\"ref\": schema.ObjectAttribute{
\tAttributeTypes: map[string]attr.Type{
\t\t\"id\": types.Int64Type,
\t},
\tComputed: true,
},
";
        assert_eq!(attribute.emit("ref"), expected);

        let empty = Attribute::Object(ObjectAttribute {
            common: common(Presence::Computed),
            attribute_types: IndexMap::new(),
        });
        assert_eq!(
            empty.emit("ref"),
            "\"ref\": schema.ObjectAttribute{\n\tComputed: true,\n},\n"
        );
    }

    #[test]
    fn test_list_nested_children_sorted() {
        let mut nested = NestedAttribute {
            common: common(Presence::Optional),
            nested_object: NestedAttributeObject::default(),
        };
        nested
            .nested_object
            .attributes
            .insert("b".into(), leaf(Presence::Required));
        nested
            .nested_object
            .attributes
            .insert("a".into(), leaf(Presence::Computed));

        let expected = "\
\"rules\": schema.ListNestedAttribute{
\tNestedObject: schema.NestedAttributeObject{
\t\tAttributes: map[string]schema.Attribute{
\t\t\t\"a\": schema.StringAttribute{
\t\t\t\tComputed: true,
\t\t\t},
\t\t\t\"b\": schema.StringAttribute{
\t\t\t\tRequired: true,
\t\t\t},
\t\t},
\t},
\tOptional: true,
},
";
        let attribute = Attribute::ListNested(nested);
        assert_eq!(attribute.emit("rules"), expected);
        assert_eq!(attribute.emit("rules"), expected);
    }

    #[test]
    fn test_single_nested_empty_children() {
        let attribute = Attribute::SingleNested(SingleNestedAttribute {
            common: common(Presence::Optional),
            attributes: Default::default(),
        });

        assert_eq!(
            attribute.emit("meta"),
            "\"meta\": schema.SingleNestedAttribute{\n\tAttributes: map[string]schema.Attribute{},\n\tOptional: true,\n},\n"
        );
    }
}
