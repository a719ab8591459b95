//! dfield: scalar and vector fields on regular finite-difference meshes.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all dfield sub-crates. For most users, adding `dfield` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use dfield::prelude::*;
//!
//! // A 10 x 10 x 1 nm thin film with 1 nm cells.
//! let mesh = Mesh::new([0.0; 3], [10e-9, 10e-9, 1e-9], [1e-9; 3]).unwrap();
//!
//! // A vector field pointing along the cell position, normalised to 8e5.
//! let m = FieldConfig::default()
//!     .value(Value::function(|p| [p[0], p[1], 1e-9]))
//!     .norm(8e5)
//!     .name("m")
//!     .build(mesh)
//!     .unwrap();
//!
//! let value = m.sample([5e-9, 5e-9, 0.5e-9]).unwrap();
//! assert!((value.norm() - 8e5).abs() < 1e-6);
//!
//! // The z component through the centre of the film.
//! let slice = m.z().unwrap().slice(&PlaneSpec::centre(Axis::Z)).unwrap();
//! assert_eq!(slice.shape(), (10, 10, 1));
//!
//! // Serialize to OVF in memory and read it back.
//! let mut buf = Vec::new();
//! dfield::io::ovf::encode(&mut buf, &m, Representation::Binary8).unwrap();
//! let back = dfield::io::ovf::decode(&mut buf.as_slice()).unwrap();
//! assert_eq!(back.array(), m.array());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `dfield-core` | Axes, points, per-cell components, field names |
//! | [`mesh`] | `dfield-mesh` | Rectangular meshes and slicing planes |
//! | [`field`] | `dfield-field` | Fields, value materialization, norms, slices |
//! | [`io`] | `dfield-io` | OVF 2.0 read/write and VTK export |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary types (`dfield-core`).
///
/// [`types::Axis`], [`types::Point`], [`types::Components`] and
/// [`types::FieldName`].
pub use dfield_core as types;

/// Meshes and planes (`dfield-mesh`).
///
/// [`mesh::Mesh`] defines the domain, cells, and canonical cell order;
/// [`mesh::PlaneSpec`] selects axis-aligned planes.
pub use dfield_mesh as mesh;

/// Fields (`dfield-field`).
///
/// [`field::Field`] owns the values; [`field::Value`] describes how to
/// fill them.
pub use dfield_field as field;

/// File formats (`dfield-io`).
///
/// [`io::write`] dispatches on extension; [`io::read_ovf`] reads OVF.
pub use dfield_io as io;

/// Common imports for typical dfield usage.
///
/// ```rust
/// use dfield::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use dfield_core::{Axis, Components, FieldName, Index, Point};

    // Mesh
    pub use dfield_mesh::{Mesh, MeshError, PlaneInfo, PlaneSpec};

    // Field
    pub use dfield_field::{
        Field, FieldArray, FieldConfig, FieldError, FieldSlice, Value, ValueRepr,
    };

    // I/O
    pub use dfield_io::{read_ovf, write, write_with, IoError, Representation, WriteOptions};
}
