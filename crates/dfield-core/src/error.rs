//! Error types for the core vocabulary.

use std::error::Error;
use std::fmt;

/// Errors from parsing axis names and validating field names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// The string is not one of `"x"`, `"y"`, `"z"`.
    InvalidAxis {
        /// The rejected axis name.
        name: String,
    },
    /// The string is not a valid field name.
    ///
    /// Names must be non-empty, start with a letter, and contain only
    /// alphanumerics and underscores.
    InvalidName {
        /// The rejected field name.
        name: String,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAxis { name } => {
                write!(f, "invalid axis '{name}' (expected one of x, y, z)")
            }
            Self::InvalidName { name } => {
                write!(
                    f,
                    "invalid field name '{name}': must start with a letter and \
                     contain only alphanumerics and underscores"
                )
            }
        }
    }
}

impl Error for CoreError {}
