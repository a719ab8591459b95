//! Error types for field file export and import.

use dfield_field::FieldError;
use dfield_mesh::MeshError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while writing or reading field files.
#[derive(Debug)]
pub enum IoError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The file extension does not select a known format.
    UnsupportedExtension {
        /// The offending path.
        path: PathBuf,
    },
    /// The representation name is not one of `txt`, `bin4`, `bin8`.
    UnknownRepresentation {
        /// The unrecognized name.
        name: String,
    },
    /// The field dimension cannot be stored in the chosen format.
    UnsupportedDim {
        /// Dimension of the field.
        dim: usize,
    },
    /// The OVF header is missing a key or has an unparsable value.
    MalformedHeader {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// The data section is truncated, has extra values, or is unparsable.
    MalformedData {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// The binary check value does not match the representation.
    BadSentinel {
        /// The value the representation requires.
        expected: f64,
        /// The value found in the file.
        found: f64,
    },
    /// The decoded values do not form a valid field.
    Field(FieldError),
    /// The decoded geometry does not form a valid mesh.
    Mesh(MeshError),
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnsupportedExtension { path } => {
                write!(f, "unsupported file extension: {}", path.display())
            }
            Self::UnknownRepresentation { name } => {
                write!(f, "unknown representation '{name}' (expected txt, bin4 or bin8)")
            }
            Self::UnsupportedDim { dim } => write!(f, "cannot write dim={dim} field to file"),
            Self::MalformedHeader { detail } => write!(f, "malformed header: {detail}"),
            Self::MalformedData { detail } => write!(f, "malformed data: {detail}"),
            Self::BadSentinel { expected, found } => {
                write!(f, "binary check value {found} != {expected}")
            }
            Self::Field(e) => write!(f, "field: {e}"),
            Self::Mesh(e) => write!(f, "mesh: {e}"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Field(e) => Some(e),
            Self::Mesh(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for IoError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<FieldError> for IoError {
    fn from(e: FieldError) -> Self {
        Self::Field(e)
    }
}

impl From<MeshError> for IoError {
    fn from(e: MeshError) -> Self {
        Self::Mesh(e)
    }
}
