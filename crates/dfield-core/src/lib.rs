//! Core types for the dfield workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the mesh, field, and I/O crates: spatial
//! [`Axis`] names, [`Point`] and [`Index`] triples, per-cell
//! [`Components`], validated [`FieldName`]s, and [`CoreError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod components;
pub mod error;
pub mod name;

pub use axis::{Axis, Index, Point};
pub use components::Components;
pub use error::CoreError;
pub use name::FieldName;
