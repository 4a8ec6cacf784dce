use thiserror::Error;

/// Failure while converting a specification node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A node that must be present was not supplied.
    #[error("{kind} is nil")]
    Nil { kind: &'static str },

    /// A node was supplied but none of its kind bodies is set.
    #[error("{context} type not defined: {node}")]
    TypeNotDefined {
        context: &'static str,
        /// Debug rendering of the offending node.
        node: String,
    },
}

impl ConvertError {
    pub(crate) fn type_not_defined(context: &'static str, node: &impl std::fmt::Debug) -> Self {
        Self::TypeNotDefined {
            context,
            node: format!("{node:?}"),
        }
    }

    /// Returns true for the "type not defined" kind.
    pub fn is_type_not_defined(&self) -> bool {
        matches!(self, Self::TypeNotDefined { .. })
    }
}
