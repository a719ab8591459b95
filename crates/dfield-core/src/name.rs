//! Validated field names.

use crate::axis::Axis;
use crate::error::CoreError;
use std::fmt;

/// An identifier-like field name used for labelling and export.
///
/// Valid names are non-empty, start with a letter (so never with a digit or
/// an underscore), and contain only ASCII alphanumerics and underscores. No
/// spaces. The name ends up in OVF `valuelabels` and VTK array names, both
/// of which are whitespace-delimited.
///
/// # Examples
///
/// ```
/// use dfield_core::{Axis, FieldName};
///
/// let name = FieldName::new("magnetisation").unwrap();
/// assert_eq!(name.component(Axis::Y).as_str(), "magnetisation_y");
///
/// assert!(FieldName::new("_hidden").is_err());
/// assert!(FieldName::new("2d").is_err());
/// assert!(FieldName::new("has space").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldName(String);

impl FieldName {
    /// Validate and wrap a field name.
    pub fn new(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        if Self::is_valid(&name) {
            Ok(Self(name))
        } else {
            Err(CoreError::InvalidName { name })
        }
    }

    /// Whether `name` would be accepted by [`FieldName::new`].
    pub fn is_valid(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the component field along `axis`: `"<name>_<axis>"`.
    pub fn component(&self, axis: Axis) -> FieldName {
        // A valid name followed by `_` and an ASCII letter is still valid.
        Self(format!("{}_{}", self.0, axis.name()))
    }

    /// The name given to per-cell magnitude fields, `"norm"`.
    pub fn norm() -> FieldName {
        Self("norm".to_string())
    }
}

impl Default for FieldName {
    fn default() -> Self {
        Self("field".to_string())
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for FieldName {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for FieldName {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
