//! Shared fixtures for dfield tests.
//!
//! Provides the standard mesh set, scalar and vector value sets, seeded
//! random sample points and tolerance assertions. Depends only on the core
//! and mesh crates so every other crate can use it as a dev-dependency.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    constant_values, random_points, scalar_functions, standard_meshes, tuple_values,
    vector_functions, ScalarFn, VectorFn,
};

/// Assert `|a - b| <= tol`.
#[track_caller]
pub fn assert_close(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() <= tol,
        "{a} and {b} differ by {} (tolerance {tol})",
        (a - b).abs()
    );
}

/// Assert two slices have equal length and are element-wise within `tol`.
#[track_caller]
pub fn assert_all_close(a: &[f64], b: &[f64], tol: f64) {
    assert_eq!(a.len(), b.len(), "length mismatch");
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        assert!(
            (x - y).abs() <= tol,
            "element {i}: {x} and {y} differ by {} (tolerance {tol})",
            (x - y).abs()
        );
    }
}

/// Assert two points are equal to within a relative tolerance of the
/// larger magnitude.
#[track_caller]
pub fn assert_point_close(a: [f64; 3], b: [f64; 3], rel: f64) {
    for axis in 0..3 {
        let scale = a[axis].abs().max(b[axis].abs()).max(f64::MIN_POSITIVE);
        assert!(
            (a[axis] - b[axis]).abs() <= rel * scale,
            "axis {axis}: {a:?} vs {b:?}"
        );
    }
}
