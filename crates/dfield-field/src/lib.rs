//! Finite-difference fields on regular rectangular meshes.
//!
//! A [`Field`] owns a dense `(nx, ny, nz, dim)` [`FieldArray`] defined on a
//! shared [`Mesh`](dfield_mesh::Mesh). Values are assigned from a [`Value`]
//! specification (zero, constant scalar or vector, per-point function, or
//! a pre-built array) and materialized by [`materialize`].
//!
//! # Operations
//!
//! - sampling at a point ([`Field::sample`]) and averaging ([`Field::average`])
//! - norm computation and renormalization ([`Field::norm`], [`Field::set_norm`])
//! - component extraction ([`Field::x`], [`Field::component`])
//! - plane iteration and slicing ([`Field::plane`], [`Field::slice`])
//!
//! [`FieldConfig`] collects the construction parameters with defaults.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod error;
pub mod field;
pub mod norm;
pub mod plane;
pub mod value;

pub use array::FieldArray;
pub use config::FieldConfig;
pub use error::FieldError;
pub use field::{Field, ValueRepr};
pub use plane::{FieldPlane, FieldSlice};
pub use value::{materialize, Value, ValueFn};
