//! File export and import for dfield fields.
//!
//! # Formats
//!
//! - OOMMF OVF 2.0 (`.omf`, `.ovf`, `.ohf`): write and read, in `Text`,
//!   `Binary 4` or `Binary 8` representation. See [`ovf`].
//! - Legacy VTK rectilinear grid (`.vtk`): write only. See [`vtk`].
//!
//! [`write`] and [`write_with`] dispatch on the file extension;
//! [`read_ovf`] reads OVF back into a [`Field`](dfield_field::Field).
//! The codecs in [`ovf`] and [`vtk`] work on any `Write`/`BufRead`, so
//! tests can use in-memory buffers.
//!
//! # Examples
//!
//! ```no_run
//! use dfield_field::Field;
//! use dfield_io::{Representation, WriteOptions};
//! use dfield_mesh::Mesh;
//!
//! let mesh = Mesh::new([0.0; 3], [10e-9; 3], [1e-9; 3]).unwrap();
//! let field = Field::new(mesh, 3, [0.0, 0.0, 1.0]).unwrap();
//!
//! dfield_io::write(&field, "m.omf").unwrap();
//! let options = WriteOptions::representation(Representation::Binary8);
//! dfield_io::write_with(&field, "m_bin.ovf", &options).unwrap();
//! dfield_io::write(&field, "m.vtk").unwrap();
//!
//! let back = dfield_io::read_ovf("m_bin.ovf").unwrap();
//! assert_eq!(back.array(), field.array());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod format;
pub mod options;
pub mod ovf;
pub mod reader;
pub mod vtk;
pub mod writer;

pub use error::IoError;
pub use options::{Representation, WriteOptions};
pub use ovf::OvfHeader;
pub use reader::read_ovf;
pub use writer::{write, write_ovf, write_vtk, write_with, FileFormat};
