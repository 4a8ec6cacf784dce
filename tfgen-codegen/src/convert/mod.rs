//! Spec Converter: maps `tfgen-spec` nodes onto `tfgen-ir` nodes.
//!
//! Each specification node type implements [`Convert`]. Dispatch inspects
//! the optional kind bodies of a node in a fixed order and converts the
//! first one that is set. A node with no kind body fails with
//! [`ConvertError::TypeNotDefined`]; an absent node handed to [`convert`]
//! fails earlier with [`ConvertError::Nil`]. Errors from children abort the
//! parent conversion unchanged.

mod attribute;
mod block;
mod common;
mod element;
mod error;
mod schema;

pub use error::ConvertError;
pub use schema::{ConvertFailure, ConvertOutcome, convert_root, convert_specification, target_of};

/// Conversion of one specification node into one IR node.
pub trait Convert {
    type Output;

    /// Name reported when the node is absent.
    const KIND: &'static str;

    fn convert(&self) -> Result<Self::Output, ConvertError>;
}

/// Convert an optional specification node.
///
/// ```
/// use tfgen_codegen::convert::{ConvertError, convert};
/// use tfgen_spec::BoolAttribute;
///
/// let error = convert::<BoolAttribute>(None).unwrap_err();
/// assert_eq!(error.to_string(), "BoolAttribute is nil");
/// ```
pub fn convert<T: Convert>(spec: Option<&T>) -> Result<T::Output, ConvertError> {
    spec.ok_or(ConvertError::Nil { kind: T::KIND })?.convert()
}
