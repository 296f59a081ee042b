//! Attribute configuration error types.

use crate::attribute::AttributeId;

/// Which range invariant a ranged attribute definition violated.
///
/// The three ordering checks run in declaration order and the first failure
/// is reported, so the same bad definition always produces the same error.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum RangeError {
    /// `minimum > maximum`.
    #[error("minimum value {min} cannot be bigger than maximum value {max}")]
    MinAboveMax { min: f64, max: f64 },

    /// `default < minimum`.
    #[error("default value {default} cannot be lower than minimum value {min}")]
    DefaultBelowMin { default: f64, min: f64 },

    /// `default > maximum`.
    #[error("default value {default} cannot be bigger than maximum value {max}")]
    DefaultAboveMax { default: f64, max: f64 },

    /// One of the three values is NaN.
    #[error("attribute range contains NaN (default={default}, min={min}, max={max})")]
    NotANumber { default: f64, min: f64, max: f64 },
}

/// Errors raised while constructing or registering attributes.
///
/// All of these indicate malformed attribute data and are meant to abort
/// startup rather than be handled at runtime.
#[derive(Debug, thiserror::Error)]
pub enum AttributeError {
    /// A ranged attribute was constructed with an inconsistent range.
    #[error("invalid range for attribute '{name}': {source}")]
    InvalidRange {
        name: String,
        #[source]
        source: RangeError,
    },

    /// An attribute with the same unlocalized name is already registered.
    #[error("duplicate attribute name: {0}")]
    DuplicateName(String),

    /// The parent handle was not issued by this registry.
    #[error("unknown parent attribute {0:?}")]
    UnknownParent(AttributeId),

    /// A definition names a parent that has not been defined before it.
    #[error("attribute '{child}' references undefined parent '{parent}'")]
    UndefinedParentName { child: String, parent: String },
}

impl AttributeError {
    /// Returns the range violation if this is an [`AttributeError::InvalidRange`].
    pub fn range_error(&self) -> Option<RangeError> {
        match self {
            Self::InvalidRange { source, .. } => Some(*source),
            _ => None,
        }
    }
}
