//! The rectangular finite-difference [`Mesh`].

use crate::error::MeshError;
use dfield_core::{Axis, Index, Point};
use rand::Rng;
use std::fmt;

/// A regular, axis-aligned rectangular mesh.
///
/// The domain `[pmin, pmax]` is divided into `n[0] * n[1] * n[2]` cells of
/// size `cell`. Cells are addressed by `[i, j, k]` index triples and
/// enumerated in canonical order with **x fastest**, then y, then z. The
/// same order is used for OVF data records and VTK cell data.
///
/// # Examples
///
/// ```
/// use dfield_mesh::Mesh;
///
/// let mesh = Mesh::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [0.5, 1.0, 1.0]).unwrap();
/// assert_eq!(mesh.n(), [2, 1, 1]);
/// assert_eq!(mesh.cell_count(), 2);
///
/// // Cell centres in canonical order.
/// let centres: Vec<_> = mesh.coordinates().collect();
/// assert_eq!(centres, vec![[0.25, 0.5, 0.5], [0.75, 0.5, 0.5]]);
///
/// // Point lookup.
/// assert_eq!(mesh.point2index([0.9, 0.1, 0.3]).unwrap(), [1, 0, 0]);
/// assert!(mesh.point2index([1.5, 0.0, 0.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pmin: Point,
    pmax: Point,
    cell: Point,
    n: Index,
}

impl Mesh {
    /// Relative tolerance for `extent / cell` to count as an integer.
    pub const DIVISIBILITY_TOLERANCE: f64 = 1e-6;

    /// Create a mesh spanning the box with corners `p1` and `p2`.
    ///
    /// The corners may be given in any order; the minimum and maximum are
    /// taken per axis. Every extent must be a positive integer multiple of
    /// the matching `cell` component.
    pub fn new(p1: Point, p2: Point, cell: Point) -> Result<Self, MeshError> {
        let mut pmin = [0.0; 3];
        let mut pmax = [0.0; 3];
        let mut n = [0usize; 3];

        for axis in Axis::ALL {
            let a = axis.index();
            pmin[a] = p1[a].min(p2[a]);
            pmax[a] = p1[a].max(p2[a]);
            let d = cell[a];
            if !(d.is_finite() && d > 0.0) {
                return Err(MeshError::InvalidCell { axis, cell: d });
            }

            let extent = pmax[a] - pmin[a];
            if !(extent.is_finite() && extent > 0.0) {
                return Err(MeshError::ZeroExtent { axis });
            }

            let ratio = extent / d;
            let rounded = ratio.round();
            if rounded < 1.0 {
                return Err(MeshError::CellTooLarge {
                    axis,
                    extent,
                    cell: d,
                });
            }
            if (ratio - rounded).abs() > Self::DIVISIBILITY_TOLERANCE * rounded {
                return Err(MeshError::NotDivisible {
                    axis,
                    extent,
                    cell: d,
                });
            }
            n[a] = rounded as usize;
        }
        if n[0].checked_mul(n[1]).and_then(|c| c.checked_mul(n[2])).is_none() {
            return Err(MeshError::TooManyCells { n });
        }

        Ok(Self { pmin, pmax, cell, n })
    }

    /// Domain minimum corner.
    pub fn pmin(&self) -> Point {
        self.pmin
    }

    /// Domain maximum corner.
    pub fn pmax(&self) -> Point {
        self.pmax
    }

    /// Cell size per axis.
    pub fn cell(&self) -> Point {
        self.cell
    }

    /// Number of cells per axis.
    pub fn n(&self) -> Index {
        self.n
    }

    /// Domain extent per axis, `pmax - pmin`.
    pub fn l(&self) -> Point {
        [
            self.pmax[0] - self.pmin[0],
            self.pmax[1] - self.pmin[1],
            self.pmax[2] - self.pmin[2],
        ]
    }

    /// Total number of cells. Construction guarantees this does not
    /// overflow.
    pub fn cell_count(&self) -> usize {
        self.n[0] * self.n[1] * self.n[2]
    }

    /// Geometric centre of the domain.
    pub fn domain_centre(&self) -> Point {
        let l = self.l();
        [
            self.pmin[0] + l[0] / 2.0,
            self.pmin[1] + l[1] / 2.0,
            self.pmin[2] + l[2] / 2.0,
        ]
    }

    /// Whether `point` lies inside the domain (boundary inclusive).
    pub fn contains(&self, point: Point) -> bool {
        (0..3).all(|a| point[a] >= self.pmin[a] && point[a] <= self.pmax[a])
    }

    /// All cell index triples in canonical order (x fastest).
    pub fn indices(&self) -> IndexIter {
        IndexIter::new(self.n)
    }

    /// All cell-centre coordinates, in the same order as [`indices`](Self::indices).
    pub fn coordinates(&self) -> impl Iterator<Item = Point> + Clone + '_ {
        self.indices().map(move |index| self.centre_of(index))
    }

    /// Centre of the cell at `index`.
    pub fn index2point(&self, index: Index) -> Result<Point, MeshError> {
        if (0..3).any(|a| index[a] >= self.n[a]) {
            return Err(MeshError::IndexOutOfBounds { index, n: self.n });
        }
        Ok(self.centre_of(index))
    }

    /// Index of the cell containing `point`.
    ///
    /// Points on the upper domain boundary belong to the last cell along
    /// that axis. Returns `Err(MeshError::PointOutsideMesh)` for points
    /// outside the domain.
    pub fn point2index(&self, point: Point) -> Result<Index, MeshError> {
        if !self.contains(point) {
            return Err(MeshError::PointOutsideMesh {
                point,
                pmin: self.pmin,
                pmax: self.pmax,
            });
        }
        Ok(self.point2index_clamped(point))
    }

    /// Index of the cell nearest to `point`, clamping each coordinate into
    /// the domain first. Never fails; useful for sample points that sit on
    /// the boundary up to rounding.
    pub fn point2index_clamped(&self, point: Point) -> Index {
        let mut index = [0usize; 3];
        for a in 0..3 {
            let i = ((point[a] - self.pmin[a]) / self.cell[a]).floor();
            // NaN casts to 0.
            index[a] = (i.max(0.0) as usize).min(self.n[a] - 1);
        }
        index
    }

    /// Centre of the cell containing `point`.
    pub fn nearest_cell_coord(&self, point: Point) -> Result<Point, MeshError> {
        Ok(self.centre_of(self.point2index(point)?))
    }

    /// A uniformly distributed point inside the domain.
    pub fn random_coord<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        [
            rng.gen_range(self.pmin[0]..=self.pmax[0]),
            rng.gen_range(self.pmin[1]..=self.pmax[1]),
            rng.gen_range(self.pmin[2]..=self.pmax[2]),
        ]
    }

    /// Centre coordinate along `axis` of the cell with index `i`.
    pub(crate) fn centre_along(&self, axis: Axis, i: usize) -> f64 {
        let a = axis.index();
        self.pmin[a] + self.cell[a] * (i as f64 + 0.5)
    }

    fn centre_of(&self, index: Index) -> Point {
        [
            self.centre_along(Axis::X, index[0]),
            self.centre_along(Axis::Y, index[1]),
            self.centre_along(Axis::Z, index[2]),
        ]
    }
}

impl fmt::Display for Mesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mesh(p1={:?}, p2={:?}, cell={:?})",
            self.pmin, self.pmax, self.cell
        )
    }
}

/// Iterator over cell index triples in canonical order (x fastest).
#[derive(Debug, Clone)]
pub struct IndexIter {
    n: Index,
    next: Option<Index>,
    remaining: usize,
}

impl IndexIter {
    fn new(n: Index) -> Self {
        let remaining = n[0] * n[1] * n[2];
        Self {
            n,
            next: (remaining > 0).then_some([0, 0, 0]),
            remaining,
        }
    }
}

impl Iterator for IndexIter {
    type Item = Index;

    fn next(&mut self) -> Option<Index> {
        let current = self.next?;
        let mut following = current;
        let mut advanced = false;
        for a in 0..3 {
            following[a] += 1;
            if following[a] < self.n[a] {
                advanced = true;
                break;
            }
            following[a] = 0;
        }
        self.next = advanced.then_some(following);
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for IndexIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn unit_mesh() -> Mesh {
        Mesh::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [0.5, 1.0, 1.0]).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn cell_counts_from_extent() {
        let mesh = Mesh::new([0.0, -4.0, 11.0], [15.0, 10.1, 16.5], [1.0, 0.1, 0.5]).unwrap();
        assert_eq!(mesh.n(), [15, 141, 11]);
    }

    #[test]
    fn corners_are_normalised() {
        let mesh = Mesh::new([1.0, 1.0, 1.0], [0.0, 0.0, 0.0], [0.5, 0.5, 0.5]).unwrap();
        assert_eq!(mesh.pmin(), [0.0, 0.0, 0.0]);
        assert_eq!(mesh.pmax(), [1.0, 1.0, 1.0]);
        assert_eq!(mesh.l(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn nanometre_scale_mesh() {
        let mesh = Mesh::new([-5e-9, -8e-9, -10e-9], [11e-9, 4e-9, 4e-9], [1e-9, 2e-9, 1e-9])
            .unwrap();
        assert_eq!(mesh.n(), [16, 6, 14]);
    }

    #[test]
    fn rejects_non_positive_cell() {
        let err = Mesh::new([0.0; 3], [1.0; 3], [0.5, 0.0, 0.5]).unwrap_err();
        assert!(matches!(err, MeshError::InvalidCell { axis: Axis::Y, .. }));
        let err = Mesh::new([0.0; 3], [1.0; 3], [0.5, 0.5, -1.0]).unwrap_err();
        assert!(matches!(err, MeshError::InvalidCell { axis: Axis::Z, .. }));
        let err = Mesh::new([0.0; 3], [1.0; 3], [f64::NAN, 0.5, 0.5]).unwrap_err();
        assert!(matches!(err, MeshError::InvalidCell { axis: Axis::X, .. }));
    }

    #[test]
    fn rejects_zero_extent() {
        let err = Mesh::new([0.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.5; 3]).unwrap_err();
        assert!(matches!(err, MeshError::ZeroExtent { axis: Axis::Y }));
    }

    #[test]
    fn rejects_cell_larger_than_domain() {
        let err = Mesh::new([0.0; 3], [1.0; 3], [3.0, 0.5, 0.5]).unwrap_err();
        assert!(matches!(err, MeshError::CellTooLarge { axis: Axis::X, .. }));
    }

    #[test]
    fn rejects_overflowing_cell_count() {
        let err = Mesh::new([0.0; 3], [1e7; 3], [1.0; 3]).unwrap_err();
        assert!(matches!(
            err,
            MeshError::TooManyCells { n } if n == [10_000_000; 3]
        ));
    }

    #[test]
    fn rejects_indivisible_extent() {
        let err = Mesh::new([0.0; 3], [1.0; 3], [0.3, 0.5, 0.5]).unwrap_err();
        assert!(matches!(err, MeshError::NotDivisible { axis: Axis::X, .. }));
    }

    // ── Iteration ───────────────────────────────────────────────

    #[test]
    fn indices_are_x_fastest() {
        let mesh = Mesh::new([0.0; 3], [2.0, 2.0, 2.0], [1.0; 3]).unwrap();
        let indices: Vec<_> = mesh.indices().collect();
        assert_eq!(
            indices,
            vec![
                [0, 0, 0],
                [1, 0, 0],
                [0, 1, 0],
                [1, 1, 0],
                [0, 0, 1],
                [1, 0, 1],
                [0, 1, 1],
                [1, 1, 1],
            ]
        );
        assert_eq!(mesh.indices().len(), 8);
    }

    #[test]
    fn coordinates_are_cell_centres() {
        let mesh = unit_mesh();
        let coords: Vec<_> = mesh.coordinates().collect();
        assert_eq!(coords, vec![[0.25, 0.5, 0.5], [0.75, 0.5, 0.5]]);
    }

    // ── Lookup ──────────────────────────────────────────────────

    #[test]
    fn point2index_boundaries() {
        let mesh = unit_mesh();
        assert_eq!(mesh.point2index([0.0, 0.0, 0.0]).unwrap(), [0, 0, 0]);
        assert_eq!(mesh.point2index([0.49, 0.5, 0.5]).unwrap(), [0, 0, 0]);
        assert_eq!(mesh.point2index([0.5, 0.5, 0.5]).unwrap(), [1, 0, 0]);
        assert_eq!(mesh.point2index([1.0, 1.0, 1.0]).unwrap(), [1, 0, 0]);
    }

    #[test]
    fn point2index_outside_fails() {
        let mesh = unit_mesh();
        for p in [[-0.1, 0.5, 0.5], [0.5, 1.1, 0.5], [0.5, 0.5, 100.0]] {
            assert!(matches!(
                mesh.point2index(p),
                Err(MeshError::PointOutsideMesh { .. })
            ));
        }
    }

    #[test]
    fn point2index_clamped_saturates() {
        let mesh = unit_mesh();
        assert_eq!(mesh.point2index_clamped([-3.0, 0.5, 0.5]), [0, 0, 0]);
        assert_eq!(mesh.point2index_clamped([1.0 + 1e-15, 2.0, 0.0]), [1, 0, 0]);
        assert_eq!(mesh.point2index_clamped([0.7, 0.5, 0.5]), [1, 0, 0]);
    }

    #[test]
    fn index2point_out_of_bounds() {
        let mesh = unit_mesh();
        assert_eq!(mesh.index2point([1, 0, 0]).unwrap(), [0.75, 0.5, 0.5]);
        assert!(matches!(
            mesh.index2point([2, 0, 0]),
            Err(MeshError::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn domain_centre_and_display() {
        let mesh = unit_mesh();
        assert_eq!(mesh.domain_centre(), [0.5, 0.5, 0.5]);
        assert_eq!(
            mesh.to_string(),
            "Mesh(p1=[0.0, 0.0, 0.0], p2=[1.0, 1.0, 1.0], cell=[0.5, 1.0, 1.0])"
        );
    }

    #[test]
    fn random_coord_is_seeded_and_inside() {
        let mesh = Mesh::new([10.0, -5.0, -80.0], [15.0, 10.0, 85.0], [5.0, 5.0, 2.5]).unwrap();
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let p = mesh.random_coord(&mut a);
            assert!(mesh.contains(p), "{p:?} outside mesh");
            assert_eq!(p, mesh.random_coord(&mut b));
        }
    }

    // ── Compliance ──────────────────────────────────────────────

    #[test]
    fn compliance_unit_mesh() {
        compliance::run_full_compliance(&unit_mesh());
    }

    #[test]
    fn compliance_offset_mesh() {
        let mesh = Mesh::new([10.0, -5.0, -80.0], [15.0, 10.0, 85.0], [5.0, 5.0, 2.5]).unwrap();
        compliance::run_full_compliance(&mesh);
    }

    #[test]
    fn compliance_nanometre_mesh() {
        let mesh = Mesh::new([0.0; 3], [5e-9, 8e-9, 10e-9], [1e-9, 1e-9, 1e-9]).unwrap();
        compliance::run_full_compliance(&mesh);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn centre_lookup_roundtrip(
            nx in 1usize..8,
            ny in 1usize..8,
            nz in 1usize..8,
            dx in 0.1f64..4.0,
            origin in -50.0f64..50.0,
        ) {
            let pmax = [
                origin + nx as f64 * dx,
                origin + ny as f64 * dx,
                origin + nz as f64 * dx,
            ];
            let mesh = Mesh::new([origin; 3], pmax, [dx; 3]).unwrap();
            prop_assert_eq!(mesh.n(), [nx, ny, nz]);
            for index in mesh.indices() {
                let centre = mesh.index2point(index).unwrap();
                prop_assert_eq!(mesh.point2index(centre).unwrap(), index);
            }
        }

        #[test]
        fn inside_points_resolve(
            fx in 0.0f64..=1.0,
            fy in 0.0f64..=1.0,
            fz in 0.0f64..=1.0,
        ) {
            let mesh = Mesh::new([-5.0, 0.0, 2.0], [5.0, 4.0, 3.0], [1.0, 0.5, 0.25]).unwrap();
            let l = mesh.l();
            let p = [
                mesh.pmin()[0] + fx * l[0],
                mesh.pmin()[1] + fy * l[1],
                mesh.pmin()[2] + fz * l[2],
            ];
            let index = mesh.point2index(p).unwrap();
            for a in 0..3 {
                prop_assert!(index[a] < mesh.n()[a]);
            }
        }
    }
}
