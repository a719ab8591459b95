//! Standard meshes and value sets.

use dfield_core::Point;
use dfield_mesh::Mesh;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A scalar value function.
pub type ScalarFn = fn(Point) -> f64;

/// A 3-vector value function.
pub type VectorFn = fn(Point) -> [f64; 3];

/// Three meshes covering nanometre and metre scales, one with negative
/// coordinates and one with anisotropic cells.
pub fn standard_meshes() -> Vec<Mesh> {
    let specs: [(Point, Point, Point); 3] = [
        ([0.0, 0.0, 0.0], [5e-9, 8e-9, 10e-9], [1e-9, 1e-9, 1e-9]),
        ([-5e-9, -8e-9, -10e-9], [11e-9, 4e-9, 4e-9], [1e-9, 2e-9, 1e-9]),
        ([10.0, -5.0, -80.0], [15.0, 10.0, 85.0], [5.0, 5.0, 2.5]),
    ];
    specs
        .into_iter()
        .map(|(p1, p2, cell)| {
            Mesh::new(p1, p2, cell).unwrap_or_else(|e| panic!("standard mesh {p1:?}: {e}"))
        })
        .collect()
}

/// Scalar constants, including zero and extreme magnitudes.
pub fn constant_values() -> Vec<f64> {
    vec![0.0, -5.0, std::f64::consts::PI, 1e-15, 1.2e12, 0.417_022]
}

/// Constant 3-vectors.
pub fn tuple_values() -> Vec<[f64; 3]> {
    use std::f64::consts::PI;
    vec![
        [0.0, 0.0, 1.0],
        [0.0, -5.1, PI],
        [70.0, 1e15, 2.0 * PI],
        [5.0, 0.720_324, PI],
        [4.0, -1.0, 3.7],
        [2.1, 0.0, -0.000_114],
    ]
}

/// Deterministic scalar functions of position.
pub fn scalar_functions() -> Vec<ScalarFn> {
    let functions: [ScalarFn; 6] = [
        |_| 1.0,
        |_| -2.4,
        |_| -6.4e-15,
        |c| c[0] + c[1] + c[2] + 1.0,
        |c| (c[0] - 1.0).powi(2) - c[1] + 7.0 + c[2] * 0.1,
        |c| c[0].sin() + c[1].cos() - (2.0 * c[2]).sin(),
    ];
    functions.to_vec()
}

/// Deterministic vector functions of position.
pub fn vector_functions() -> Vec<VectorFn> {
    let functions: [VectorFn; 6] = [
        |_| [1.0, 2.0, 0.0],
        |_| [-2.4, 1e-3, 9.0],
        |c| [c[0], c[1], c[2] + 100.0],
        |c| [c[0] + c[2] + 10.0, c[1], c[2] + 1.0],
        |c| [c[0] - 1.0, c[1] + 70.0, c[2] * 0.1],
        |c| [c[0].sin(), c[1].cos(), -(2.0 * c[2]).sin()],
    ];
    functions.to_vec()
}

/// `count` uniformly random in-domain points from a seeded generator.
pub fn random_points(mesh: &Mesh, count: usize, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| mesh.random_coord(&mut rng)).collect()
}
