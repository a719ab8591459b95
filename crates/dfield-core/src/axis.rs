//! Spatial axes and the [`Point`] / [`Index`] triple aliases.

use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

/// A point in 3-D space, `[x, y, z]`.
pub type Point = [f64; 3];

/// A cell index triple `[i, j, k]` along x, y, z.
pub type Index = [usize; 3];

/// One of the three Cartesian axes.
///
/// Axis order is fixed: `X = 0`, `Y = 1`, `Z = 2`. Component extraction,
/// plane slicing, and file export all index through [`Axis::index`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// The x axis (index 0).
    X,
    /// The y axis (index 1).
    Y,
    /// The z axis (index 2).
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of this axis in a [`Point`] or [`Index`].
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Axis at position `i`, or `None` if `i > 2`.
    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Lower-case axis name: `"x"`, `"y"` or `"z"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }

    /// The two remaining axes in increasing order.
    ///
    /// ```
    /// use dfield_core::Axis;
    ///
    /// assert_eq!(Axis::X.others(), (Axis::Y, Axis::Z));
    /// assert_eq!(Axis::Y.others(), (Axis::X, Axis::Z));
    /// assert_eq!(Axis::Z.others(), (Axis::X, Axis::Y));
    /// ```
    pub fn others(self) -> (Axis, Axis) {
        match self {
            Self::X => (Self::Y, Self::Z),
            Self::Y => (Self::X, Self::Z),
            Self::Z => (Self::X, Self::Y),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            other => Err(CoreError::InvalidAxis {
                name: other.to_string(),
            }),
        }
    }
}
