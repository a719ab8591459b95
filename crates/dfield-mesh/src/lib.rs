//! Regular rectangular meshes for finite-difference fields.
//!
//! A [`Mesh`] discretises an axis-aligned box into `nx * ny * nz` equal
//! cells. It maps points to cells, enumerates cells in the canonical
//! x-fastest order shared with the OVF file format, and produces the
//! sample points of axis-aligned slicing planes.
//!
//! # Planes
//!
//! A [`PlaneSpec`] fixes one axis at a coordinate (or at the domain
//! centre). [`Mesh::plane_info`] resolves it into a [`PlaneInfo`] and
//! [`Mesh::plane`] iterates its sample points as [`PlanePoints`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod mesh;
pub mod plane;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::MeshError;
pub use mesh::{IndexIter, Mesh};
pub use plane::{PlaneInfo, PlanePoints, PlaneSpec};
