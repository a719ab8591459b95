//! Axis-aligned slicing planes.

use crate::error::MeshError;
use crate::mesh::Mesh;
use dfield_core::{Axis, Point};

/// Selects an axis-aligned plane through a mesh.
///
/// # Examples
///
/// ```
/// use dfield_core::Axis;
/// use dfield_mesh::{Mesh, PlaneSpec};
///
/// let mesh = Mesh::new([0.0; 3], [4.0, 2.0, 1.0], [1.0; 3]).unwrap();
///
/// // Plane perpendicular to z through the domain centre.
/// let info = mesh.plane_info(&PlaneSpec::centre(Axis::Z)).unwrap();
/// assert_eq!((info.axis1, info.axis2), (Axis::X, Axis::Y));
/// assert_eq!(info.shape(), (4, 2));
///
/// // Sample points, axis1 fastest.
/// let points: Vec<_> = mesh.plane(&PlaneSpec::new(Axis::Z, 0.5)).unwrap().collect();
/// assert_eq!(points.len(), 8);
/// assert_eq!(points[1], [1.5, 0.5, 0.5]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneSpec {
    /// The axis held fixed.
    pub axis: Axis,
    /// Fixed coordinate along `axis`; `None` means the domain centre.
    pub coord: Option<f64>,
    /// Number of sample points along the two in-plane axes; `None` uses
    /// the mesh cell counts (one point per cell centre).
    pub n: Option<(usize, usize)>,
}

impl PlaneSpec {
    /// Plane perpendicular to `axis` at `coord`.
    pub fn new(axis: Axis, coord: f64) -> Self {
        Self {
            axis,
            coord: Some(coord),
            n: None,
        }
    }

    /// Plane perpendicular to `axis` through the domain centre.
    pub fn centre(axis: Axis) -> Self {
        Self {
            axis,
            coord: None,
            n: None,
        }
    }

    /// Parse an axis name (`"x"`, `"y"` or `"z"`) and build a plane at `coord`.
    pub fn parse(axis: &str, coord: f64) -> Result<Self, MeshError> {
        let axis = axis.parse::<Axis>().map_err(|_| MeshError::InvalidAxis {
            name: axis.to_string(),
        })?;
        Ok(Self::new(axis, coord))
    }

    /// Override the number of sample points along the in-plane axes.
    pub fn resample(mut self, n1: usize, n2: usize) -> Self {
        self.n = Some((n1, n2));
        self
    }
}

/// A [`PlaneSpec`] resolved against a particular mesh.
///
/// This is everything a plotting backend needs to lay out a 2-D view:
/// which axes span the image and where the samples sit.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaneInfo {
    /// The axis held fixed.
    pub plane_axis: Axis,
    /// First in-plane axis (horizontal in plots).
    pub axis1: Axis,
    /// Second in-plane axis (vertical in plots).
    pub axis2: Axis,
    /// Fixed coordinate along `plane_axis`.
    pub point: f64,
    /// Sample coordinates along `axis1`.
    pub axis1_coords: Vec<f64>,
    /// Sample coordinates along `axis2`.
    pub axis2_coords: Vec<f64>,
}

impl PlaneInfo {
    /// Number of samples along `(axis1, axis2)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.axis1_coords.len(), self.axis2_coords.len())
    }

    /// Total number of sample points.
    pub fn len(&self) -> usize {
        self.axis1_coords.len() * self.axis2_coords.len()
    }

    /// Always `false`: resolution rejects empty planes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The 3-D point for sample `(i, j)`.
    pub fn point_at(&self, i: usize, j: usize) -> Point {
        let mut p = [0.0; 3];
        p[self.plane_axis.index()] = self.point;
        p[self.axis1.index()] = self.axis1_coords[i];
        p[self.axis2.index()] = self.axis2_coords[j];
        p
    }
}

impl Mesh {
    /// Resolve a plane specification against this mesh.
    ///
    /// Fails with [`MeshError::PointOutsideMesh`] if the fixed coordinate
    /// lies outside the domain, and with [`MeshError::InvalidPlane`] if a
    /// resample count is zero.
    pub fn plane_info(&self, spec: &PlaneSpec) -> Result<PlaneInfo, MeshError> {
        let a = spec.axis.index();
        let point = spec.coord.unwrap_or_else(|| self.domain_centre()[a]);
        if !(point >= self.pmin()[a] && point <= self.pmax()[a]) {
            let mut p = self.domain_centre();
            p[a] = point;
            return Err(MeshError::PointOutsideMesh {
                point: p,
                pmin: self.pmin(),
                pmax: self.pmax(),
            });
        }

        let (axis1, axis2) = spec.axis.others();
        let (n1, n2) = spec
            .n
            .unwrap_or((self.n()[axis1.index()], self.n()[axis2.index()]));
        if n1 == 0 || n2 == 0 {
            return Err(MeshError::InvalidPlane {
                reason: format!("resample counts must be positive, got ({n1}, {n2})"),
            });
        }

        Ok(PlaneInfo {
            plane_axis: spec.axis,
            axis1,
            axis2,
            point,
            axis1_coords: self.sample_coords(axis1, n1),
            axis2_coords: self.sample_coords(axis2, n2),
        })
    }

    /// Sample points of a plane, `axis1` fastest.
    pub fn plane(&self, spec: &PlaneSpec) -> Result<PlanePoints, MeshError> {
        Ok(PlanePoints::new(self.plane_info(spec)?))
    }

    /// `m` evenly spaced sample coordinates along `axis`, centred in their
    /// sub-intervals. With `m == n[axis]` these are exactly the cell centres.
    fn sample_coords(&self, axis: Axis, m: usize) -> Vec<f64> {
        let a = axis.index();
        if m == self.n()[a] {
            return (0..m).map(|i| self.centre_along(axis, i)).collect();
        }
        let step = self.l()[a] / m as f64;
        (0..m)
            .map(|i| self.pmin()[a] + step * (i as f64 + 0.5))
            .collect()
    }
}

/// Finite, restartable iterator over the sample points of a plane.
///
/// Cloning yields an independent iterator positioned at the same sample;
/// [`PlanePoints::info`] gives access to the plane geometry.
#[derive(Clone, Debug)]
pub struct PlanePoints {
    info: PlaneInfo,
    pos: usize,
}

impl PlanePoints {
    fn new(info: PlaneInfo) -> Self {
        Self { info, pos: 0 }
    }

    /// Geometry of the plane being iterated.
    pub fn info(&self) -> &PlaneInfo {
        &self.info
    }

    /// Rewind to the first sample.
    pub fn restart(&mut self) {
        self.pos = 0;
    }
}

impl Iterator for PlanePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.pos >= self.info.len() {
            return None;
        }
        let n1 = self.info.axis1_coords.len();
        let p = self.info.point_at(self.pos % n1, self.pos / n1);
        self.pos += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.info.len().saturating_sub(self.pos);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PlanePoints {}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh() -> Mesh {
        Mesh::new([0.0, -4.0, 11.0], [15.0, 10.1, 16.5], [1.0, 0.1, 0.5]).unwrap()
    }

    #[test]
    fn in_plane_axes() {
        let m = mesh();
        for (axis, expected) in [
            (Axis::X, (Axis::Y, Axis::Z)),
            (Axis::Y, (Axis::X, Axis::Z)),
            (Axis::Z, (Axis::X, Axis::Y)),
        ] {
            let info = m.plane_info(&PlaneSpec::centre(axis)).unwrap();
            assert_eq!((info.axis1, info.axis2), expected);
            assert_eq!(info.plane_axis, axis);
            assert_eq!(
                info.shape(),
                (m.n()[expected.0.index()], m.n()[expected.1.index()])
            );
        }
    }

    #[test]
    fn default_samples_are_cell_centres() {
        let m = mesh();
        let info = m.plane_info(&PlaneSpec::centre(Axis::X)).unwrap();
        let tol = 1e-12;
        let first = info.axis1_coords[0];
        let last = *info.axis1_coords.last().unwrap();
        assert!((first - (m.pmin()[1] + m.cell()[1] / 2.0)).abs() < tol);
        assert!((last - (m.pmax()[1] - m.cell()[1] / 2.0)).abs() < tol);
        for point in m.plane(&PlaneSpec::centre(Axis::X)).unwrap() {
            let index = m.point2index(point).unwrap();
            assert_eq!(m.index2point(index).unwrap()[1], point[1]);
        }
    }

    #[test]
    fn outside_coordinate_fails() {
        let m = mesh();
        for axis in Axis::ALL {
            let centre = m.domain_centre()[axis.index()];
            for coord in [centre + 100.0, centre - 100.0] {
                assert!(matches!(
                    m.plane(&PlaneSpec::new(axis, coord)),
                    Err(MeshError::PointOutsideMesh { .. })
                ));
            }
        }
    }

    #[test]
    fn parse_rejects_multi_axis_names() {
        for bad in ["xy", "xyz", "zy", "string", "point"] {
            assert!(matches!(
                PlaneSpec::parse(bad, 0.0),
                Err(MeshError::InvalidAxis { .. })
            ));
        }
        assert_eq!(PlaneSpec::parse("y", 1.0).unwrap(), PlaneSpec::new(Axis::Y, 1.0));
    }

    #[test]
    fn resampling_changes_point_count() {
        let m = Mesh::new([0.0; 3], [1.0; 3], [0.25; 3]).unwrap();
        let points = m
            .plane(&PlaneSpec::centre(Axis::Z).resample(2, 3))
            .unwrap();
        assert_eq!(points.len(), 6);
        let info = points.info().clone();
        assert_eq!(info.axis1_coords, vec![0.25, 0.75]);
        assert!(m.plane(&PlaneSpec::centre(Axis::Z).resample(0, 3)).is_err());
    }

    #[test]
    fn plane_iteration_restarts() {
        let m = mesh();
        let mut points = m.plane(&PlaneSpec::centre(Axis::Y)).unwrap();
        let first: Vec<_> = points.clone().collect();
        points.by_ref().for_each(drop);
        assert_eq!(points.next(), None);
        points.restart();
        let second: Vec<_> = points.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), m.n()[0] * m.n()[2]);
    }
}
