use indexmap::IndexMap;
use tfgen_codegen::builder::CodeBuilder;
use tfgen_ir::ElementType;

use super::{common::push_expr, go_quote, sorted_entries};

/// The `attr.Type` expression for an element or member type.
pub fn element_type_expr(element: &ElementType) -> String {
    match element {
        ElementType::Bool => "types.BoolType".to_string(),
        ElementType::Float64 => "types.Float64Type".to_string(),
        ElementType::Int64 => "types.Int64Type".to_string(),
        ElementType::Number => "types.NumberType".to_string(),
        ElementType::String => "types.StringType".to_string(),
        ElementType::List(inner) => collection("ListType", inner),
        ElementType::Map(inner) => collection("MapType", inner),
        ElementType::Set(inner) => collection("SetType", inner),
        ElementType::Object(members) if members.is_empty() => "types.ObjectType{}".to_string(),
        ElementType::Object(members) => {
            let mut b = CodeBuilder::go();
            b.push_line("types.ObjectType{").push_indent();
            push_member_types(&mut b, "AttrTypes", members);
            b.push_dedent().push_line("}");
            b.build().trim_end().to_string()
        }
    }
}

fn collection(type_name: &str, inner: &ElementType) -> String {
    let mut b = CodeBuilder::go();
    b.push_line(&format!("types.{}{{", type_name)).push_indent();
    push_expr(&mut b, "ElemType", &element_type_expr(inner));
    b.push_dedent().push_line("}");
    b.build().trim_end().to_string()
}

/// Write `label: map[string]attr.Type{...},` with members in name order.
pub(crate) fn push_member_types(
    b: &mut CodeBuilder,
    label: &str,
    members: &IndexMap<String, ElementType>,
) {
    b.push_line(&format!("{}: map[string]attr.Type{{", label)).push_indent();
    for (name, member) in sorted_entries(members) {
        push_expr(b, &go_quote(name), &element_type_expr(member));
    }
    b.push_dedent().push_line("},");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_primitive_elements() {
        assert_eq!(element_type_expr(&ElementType::String), "types.StringType");
        assert_eq!(element_type_expr(&ElementType::Number), "types.NumberType");
    }

    #[test]
    fn test_nested_collection() {
        let element = ElementType::List(Box::new(ElementType::Map(Box::new(ElementType::Int64))));

        assert_eq!(
            element_type_expr(&element),
            "types.ListType{\n\tElemType: types.MapType{\n\t\tElemType: types.Int64Type,\n\t},\n}"
        );
    }

    #[test]
    fn test_object_members_sorted() {
        let element = ElementType::Object(IndexMap::from([
            ("zone".to_string(), ElementType::String),
            ("active".to_string(), ElementType::Bool),
        ]));

        assert_eq!(
            element_type_expr(&element),
            "types.ObjectType{\n\tAttrTypes: map[string]attr.Type{\n\t\t\"active\": types.BoolType,\n\t\t\"zone\": types.StringType,\n\t},\n}"
        );
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(
            element_type_expr(&ElementType::Object(IndexMap::new())),
            "types.ObjectType{}"
        );
    }
}
