//! Intermediate representation of provider schemas for tfgen.
//!
//! The IR is a closed tree of attribute and block kinds built once by the
//! converter in `tfgen-codegen` and only read afterwards. Every generator
//! (schema emission, model structs, import manifests) consumes it.
//!
//! ```text
//! spec.json → tfgen-spec (loading) → tfgen-ir (typed tree) → codegen
//! ```

mod attribute;
mod block;
mod common;
mod element;
mod equal;
mod schema;

pub use attribute::{
    Attribute, AttributeCommon, AttributeKind, Attributes, CollectionAttribute, NestedAttribute,
    NestedAttributeObject, ObjectAttribute, PrimitiveAttribute, SingleNestedAttribute,
};
pub use block::{Block, BlockCommon, BlockKind, Blocks, NestedBlock, NestedBlockObject, SingleNestedBlock};
pub use common::{
    AttributeShape, CustomDefinition, CustomType, DefaultValue, Docs, Import, PlanModifier,
    Presence, StaticValue, Validator,
};
pub use element::ElementType;
pub use equal::{DiffReason, Difference, Side, StructuralEq, diff_forests};
pub use schema::{Schema, Target};
