//! Write options.

use crate::error::IoError;
use std::fmt;
use std::str::FromStr;

/// How OVF data values are stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Space-separated ASCII reals, one line per cell.
    #[default]
    Text,
    /// Little-endian `f32` values after a `1234567.0` check value.
    Binary4,
    /// Little-endian `f64` values after a `123456789012345.0` check value.
    Binary8,
}

impl Representation {
    /// Check value written before `Binary4` data.
    pub const BINARY4_SENTINEL: f32 = 1_234_567.0;
    /// Check value written before `Binary8` data.
    pub const BINARY8_SENTINEL: f64 = 123_456_789_012_345.0;

    /// Parse the short names `txt`, `bin4` and `bin8`.
    pub fn parse(name: &str) -> Result<Self, IoError> {
        match name {
            "txt" => Ok(Self::Text),
            "bin4" => Ok(Self::Binary4),
            "bin8" => Ok(Self::Binary8),
            _ => Err(IoError::UnknownRepresentation {
                name: name.to_string(),
            }),
        }
    }

    /// The tag used in `Begin: Data <tag>` lines.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Binary4 => "Binary 4",
            Self::Binary8 => "Binary 8",
        }
    }

    /// Inverse of [`tag`](Self::tag), ignoring case and surrounding space.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        [Self::Text, Self::Binary4, Self::Binary8]
            .into_iter()
            .find(|r| r.tag().eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Representation {
    type Err = IoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Options for [`write_with`](crate::write_with).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// OVF data representation. Ignored for VTK.
    pub representation: Representation,
}

impl WriteOptions {
    /// Options with the given representation.
    pub fn representation(representation: Representation) -> Self {
        Self { representation }
    }
}
