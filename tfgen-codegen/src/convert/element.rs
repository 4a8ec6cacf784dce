use indexmap::IndexMap;
use tfgen_ir as ir;
use tfgen_spec as spec;

use super::{Convert, ConvertError};

/// Convert the kind body that is set, or `None` when there is none.
fn dispatch(element: &spec::ElementType) -> Option<Result<ir::ElementType, ConvertError>> {
    if element.bool.is_some() {
        return Some(Ok(ir::ElementType::Bool));
    }
    if element.float64.is_some() {
        return Some(Ok(ir::ElementType::Float64));
    }
    if element.int64.is_some() {
        return Some(Ok(ir::ElementType::Int64));
    }
    if let Some(list) = &element.list {
        return Some(list.element_type.convert().map(|e| ir::ElementType::List(Box::new(e))));
    }
    if let Some(map) = &element.map {
        return Some(map.element_type.convert().map(|e| ir::ElementType::Map(Box::new(e))));
    }
    if element.number.is_some() {
        return Some(Ok(ir::ElementType::Number));
    }
    if let Some(object) = &element.object {
        return Some(object.convert());
    }
    if let Some(set) = &element.set {
        return Some(set.element_type.convert().map(|e| ir::ElementType::Set(Box::new(e))));
    }
    if element.string.is_some() {
        return Some(Ok(ir::ElementType::String));
    }
    None
}

impl Convert for spec::ElementType {
    type Output = ir::ElementType;
    const KIND: &'static str = "ElementType";

    fn convert(&self) -> Result<ir::ElementType, ConvertError> {
        dispatch(self).unwrap_or_else(|| Err(ConvertError::type_not_defined("element", self)))
    }
}

impl Convert for spec::ObjectElement {
    type Output = ir::ElementType;
    const KIND: &'static str = "ObjectElement";

    fn convert(&self) -> Result<ir::ElementType, ConvertError> {
        let mut members = IndexMap::new();
        for member in &self.attribute_types {
            members.insert(member.name.clone(), member.convert()?);
        }
        Ok(ir::ElementType::Object(members))
    }
}

impl Convert for spec::ObjectAttributeType {
    type Output = ir::ElementType;
    const KIND: &'static str = "ObjectAttributeType";

    fn convert(&self) -> Result<ir::ElementType, ConvertError> {
        dispatch(&self.element_type)
            .unwrap_or_else(|| Err(ConvertError::type_not_defined("object attribute", self)))
    }
}
