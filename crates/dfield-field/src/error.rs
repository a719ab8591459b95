//! Error types for field construction and field operations.

use dfield_core::CoreError;
use dfield_mesh::MeshError;
use std::error::Error;
use std::fmt;

/// Errors from materializing, mutating, or querying a field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldError {
    /// The value specification does not fit the field dimension.
    InvalidValue {
        /// Dimension of the field being assigned.
        dim: usize,
        /// What was wrong with the value.
        reason: String,
    },
    /// A field dimension of zero.
    InvalidDim {
        /// The rejected dimension.
        dim: usize,
    },
    /// An array does not have the shape `(nx, ny, nz, dim)`.
    ShapeMismatch {
        /// The required shape.
        expected: [usize; 4],
        /// The shape that was supplied.
        found: [usize; 4],
    },
    /// Normalization was requested on a scalar field.
    ScalarNormalisation {
        /// Dimension of the field.
        dim: usize,
    },
    /// Normalization was requested on a field whose values are all zero.
    ZeroField,
    /// A component accessor does not exist for this field.
    NoSuchAttribute {
        /// The requested attribute.
        name: String,
        /// Dimension of the field.
        dim: usize,
    },
    /// A geometric query failed.
    Mesh(MeshError),
    /// A field name failed validation.
    Name(CoreError),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { dim, reason } => {
                write!(f, "invalid value for dim={dim} field: {reason}")
            }
            Self::InvalidDim { dim } => write!(f, "field dimension must be positive, got {dim}"),
            Self::ShapeMismatch { expected, found } => {
                write!(f, "array shape {found:?} does not match field shape {expected:?}")
            }
            Self::ScalarNormalisation { dim } => {
                write!(f, "cannot normalise field with dim={dim}")
            }
            Self::ZeroField => write!(f, "cannot normalise field with all zero values"),
            Self::NoSuchAttribute { name, dim } => {
                write!(f, "dim={dim} field has no attribute '{name}'")
            }
            Self::Mesh(e) => write!(f, "mesh: {e}"),
            Self::Name(e) => write!(f, "{e}"),
        }
    }
}

impl Error for FieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Mesh(e) => Some(e),
            Self::Name(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MeshError> for FieldError {
    fn from(e: MeshError) -> Self {
        Self::Mesh(e)
    }
}

impl From<CoreError> for FieldError {
    fn from(e: CoreError) -> Self {
        Self::Name(e)
    }
}
