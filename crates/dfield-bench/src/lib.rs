//! Benchmark profiles for dfield.
//!
//! Provides pre-built meshes and fields for benchmarking and examples:
//!
//! - [`reference_mesh`]: 100x100x10 thin film (100K cells)
//! - [`stress_mesh`]: 200x200x25 slab (1M cells)
//! - [`vortex`]: an in-plane vortex value with a small out-of-plane core

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dfield_field::{Field, FieldConfig, FieldError, Value};
use dfield_mesh::{Mesh, MeshError};

/// 100x100x10 cells of 1 nm.
pub fn reference_mesh() -> Result<Mesh, MeshError> {
    Mesh::new([0.0; 3], [100e-9, 100e-9, 10e-9], [1e-9; 3])
}

/// 200x200x25 cells of 1 nm.
pub fn stress_mesh() -> Result<Mesh, MeshError> {
    Mesh::new([0.0; 3], [200e-9, 200e-9, 25e-9], [1e-9; 3])
}

/// A vortex centred on `centre` in the xy plane, with core radius `core`.
///
/// The in-plane direction circulates counter-clockwise; the z component
/// decays from 1 at the centre.
pub fn vortex(centre: [f64; 2], core: f64) -> Value {
    Value::function(move |p| {
        let (dx, dy) = (p[0] - centre[0], p[1] - centre[1]);
        let r2 = dx * dx + dy * dy;
        [-dy, dx, core * (-r2 / (core * core)).exp()]
    })
}

/// A vortex field on `mesh`, normalised to `ms`.
pub fn vortex_field(mesh: Mesh, ms: f64) -> Result<Field, FieldError> {
    let centre = mesh.domain_centre();
    let core = mesh.l()[0] / 20.0;
    FieldConfig::default()
        .value(vortex([centre[0], centre[1]], core))
        .norm(ms)
        .name("m")
        .build(mesh)
}
