//! Mesh compliance test helpers.
//!
//! These functions verify the invariants every mesh must satisfy so that
//! fields and file formats can rely on them. Reused across the mesh test
//! modules.

use crate::mesh::Mesh;
use crate::plane::PlaneSpec;
use dfield_core::Axis;
use indexmap::IndexSet;

/// Assert that `indices` yields exactly `cell_count` unique, in-bounds triples.
pub fn assert_indices_complete(mesh: &Mesh) {
    let indices: Vec<_> = mesh.indices().collect();
    assert_eq!(
        indices.len(),
        mesh.cell_count(),
        "indices length ({}) != cell_count ({})",
        indices.len(),
        mesh.cell_count()
    );
    let unique: IndexSet<_> = indices.iter().collect();
    assert_eq!(unique.len(), mesh.cell_count(), "indices has duplicates");
    for index in &indices {
        for a in 0..3 {
            assert!(index[a] < mesh.n()[a], "index {index:?} out of bounds");
        }
    }
}

/// Assert the canonical order: x fastest, then y, then z.
pub fn assert_indices_x_fastest(mesh: &Mesh) {
    let n = mesh.n();
    for (rank, index) in mesh.indices().enumerate() {
        let expected = index[0] + n[0] * (index[1] + n[1] * index[2]);
        assert_eq!(rank, expected, "index {index:?} at rank {rank}");
    }
}

/// Assert that `coordinates` are the centres of `indices`, in the same order.
pub fn assert_coordinates_match_indices(mesh: &Mesh) {
    for (index, point) in mesh.indices().zip(mesh.coordinates()) {
        assert_eq!(mesh.index2point(index).unwrap(), point);
    }
}

/// Assert that every cell centre maps back to its own index.
pub fn assert_centre_roundtrip(mesh: &Mesh) {
    for index in mesh.indices() {
        let centre = mesh.index2point(index).unwrap();
        assert!(mesh.contains(centre), "centre {centre:?} outside mesh");
        assert_eq!(mesh.point2index(centre).unwrap(), index);
    }
}

/// Assert that default planes through the centre cover the right cells.
pub fn assert_centre_planes_cover_cross_section(mesh: &Mesh) {
    for axis in Axis::ALL {
        let points: Vec<_> = mesh.plane(&PlaneSpec::centre(axis)).unwrap().collect();
        let (a1, a2) = axis.others();
        assert_eq!(points.len(), mesh.n()[a1.index()] * mesh.n()[a2.index()]);
        let cells: IndexSet<_> = points
            .iter()
            .map(|&p| mesh.point2index(p).unwrap())
            .collect();
        assert_eq!(cells.len(), points.len(), "plane {axis} revisits a cell");
    }
}

/// Run all compliance checks on a mesh.
pub fn run_full_compliance(mesh: &Mesh) {
    assert_indices_complete(mesh);
    assert_indices_x_fastest(mesh);
    assert_coordinates_match_indices(mesh);
    assert_centre_roundtrip(mesh);
    assert_centre_planes_cover_cross_section(mesh);
}
