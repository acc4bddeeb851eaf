use std::fmt;

/// Errors produced by field interpolation, descent, and refinement.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// The gradient field was queried against a store with no samples.
    ///
    /// Inverse-distance weighting is undefined over an empty sample set, so
    /// this is checked explicitly rather than letting the weight sum collapse
    /// to a silent zero vector.
    EmptyStore,
    /// A configuration parameter or sample component was out of range.
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value, widened to `f64` for reporting.
        value: f64,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::EmptyStore => {
                write!(f, "gradient field queried with an empty sample store")
            }
            FieldError::InvalidParameter { name, value } => {
                write!(f, "invalid parameter {name} = {value}")
            }
        }
    }
}

impl std::error::Error for FieldError {}
