//! Error types for mesh construction and spatial queries.

use dfield_core::{Axis, Index, Point};
use std::fmt;

/// Errors arising from mesh construction or spatial queries.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshError {
    /// A cell size component is zero, negative, or not finite.
    InvalidCell {
        /// The offending axis.
        axis: Axis,
        /// The rejected cell size.
        cell: f64,
    },
    /// The domain has zero (or non-finite) extent along an axis.
    ZeroExtent {
        /// The degenerate axis.
        axis: Axis,
    },
    /// The cell is larger than the domain along an axis.
    CellTooLarge {
        /// The offending axis.
        axis: Axis,
        /// Domain extent along `axis`.
        extent: f64,
        /// Cell size along `axis`.
        cell: f64,
    },
    /// The domain extent is not an integer multiple of the cell size.
    NotDivisible {
        /// The offending axis.
        axis: Axis,
        /// Domain extent along `axis`.
        extent: f64,
        /// Cell size along `axis`.
        cell: f64,
    },
    /// The total cell count `n[0] * n[1] * n[2]` does not fit in `usize`.
    TooManyCells {
        /// Cell counts per axis.
        n: Index,
    },
    /// A point lies outside the mesh domain.
    PointOutsideMesh {
        /// The offending point.
        point: Point,
        /// Domain minimum corner.
        pmin: Point,
        /// Domain maximum corner.
        pmax: Point,
    },
    /// A cell index is outside `[0, n)` on some axis.
    IndexOutOfBounds {
        /// The offending index.
        index: Index,
        /// Cell counts of the mesh.
        n: Index,
    },
    /// An axis name other than `x`, `y` or `z`.
    InvalidAxis {
        /// The rejected name.
        name: String,
    },
    /// A plane specification cannot be resolved on this mesh.
    InvalidPlane {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCell { axis, cell } => {
                write!(f, "cell size along {axis} must be finite and positive, got {cell}")
            }
            Self::ZeroExtent { axis } => write!(f, "domain has zero extent along {axis}"),
            Self::CellTooLarge { axis, extent, cell } => {
                write!(f, "cell size {cell} along {axis} exceeds domain extent {extent}")
            }
            Self::NotDivisible { axis, extent, cell } => {
                write!(
                    f,
                    "domain extent {extent} along {axis} is not divisible by cell size {cell}"
                )
            }
            Self::TooManyCells { n } => {
                write!(f, "cell counts {n:?} overflow the total cell count")
            }
            Self::PointOutsideMesh { point, pmin, pmax } => {
                write!(f, "point {point:?} is outside the mesh [{pmin:?}, {pmax:?}]")
            }
            Self::IndexOutOfBounds { index, n } => {
                write!(f, "cell index {index:?} out of bounds for n = {n:?}")
            }
            Self::InvalidAxis { name } => {
                write!(f, "invalid axis '{name}' (expected one of x, y, z)")
            }
            Self::InvalidPlane { reason } => write!(f, "invalid plane: {reason}"),
        }
    }
}

impl std::error::Error for MeshError {}
