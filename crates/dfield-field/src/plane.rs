//! Plane iteration and 2-D slices of a field.

use crate::error::FieldError;
use crate::field::Field;
use dfield_core::{Components, Point};
use dfield_mesh::{PlaneInfo, PlanePoints, PlaneSpec};

/// Lazy `(point, value)` pairs on a plane through a field.
///
/// Finite and restartable: clone it or call [`restart`](Self::restart) to
/// walk the plane again.
#[derive(Clone, Debug)]
pub struct FieldPlane<'a> {
    field: &'a Field,
    points: PlanePoints,
}

impl FieldPlane<'_> {
    /// Geometry of the plane.
    pub fn info(&self) -> &PlaneInfo {
        self.points.info()
    }

    /// Rewind to the first sample.
    pub fn restart(&mut self) {
        self.points.restart();
    }
}

impl Iterator for FieldPlane<'_> {
    type Item = (Point, Components);

    fn next(&mut self) -> Option<Self::Item> {
        let point = self.points.next()?;
        // Sample points lie inside the domain by construction.
        let index = self.field.mesh.point2index_clamped(point);
        Some((point, Components::from_slice(self.field.array.cell(index))))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }
}

impl ExactSizeIterator for FieldPlane<'_> {}

/// A materialized plane slice, ready for plotting.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSlice {
    /// Geometry: the fixed axis, the in-plane axes and sample coordinates.
    pub info: PlaneInfo,
    /// Components per sample.
    pub dim: usize,
    values: Vec<f64>,
}

impl FieldSlice {
    /// `(m1, m2, dim)`: samples along axis1, along axis2, components.
    pub fn shape(&self) -> (usize, usize, usize) {
        let (m1, m2) = self.info.shape();
        (m1, m2, self.dim)
    }

    /// Sample coordinates along the first in-plane axis.
    pub fn axis1_coords(&self) -> &[f64] {
        &self.info.axis1_coords
    }

    /// Sample coordinates along the second in-plane axis.
    pub fn axis2_coords(&self) -> &[f64] {
        &self.info.axis2_coords
    }

    /// Components at sample `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `(i, j)` is outside [`shape`](Self::shape).
    pub fn value(&self, i: usize, j: usize) -> &[f64] {
        let (m1, m2) = self.info.shape();
        assert!(i < m1 && j < m2, "sample ({i}, {j}) outside slice ({m1}, {m2})");
        let start = (i * m2 + j) * self.dim;
        &self.values[start..start + self.dim]
    }

    /// Flat values, laid out as `(m1, m2, dim)` row-major.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl Field {
    /// Iterate `(point, value)` over a plane.
    ///
    /// The plane is validated immediately; an out-of-domain coordinate fails
    /// here rather than during iteration.
    ///
    /// ```
    /// use dfield_core::Axis;
    /// use dfield_field::{Field, Value};
    /// use dfield_mesh::{Mesh, PlaneSpec};
    ///
    /// let mesh = Mesh::new([0.0; 3], [2.0, 3.0, 4.0], [1.0; 3]).unwrap();
    /// let f = Field::new(mesh, 1, Value::function(|p| p[1])).unwrap();
    ///
    /// let pairs: Vec<_> = f.plane(&PlaneSpec::centre(Axis::X)).unwrap().collect();
    /// assert_eq!(pairs.len(), 12);
    /// for (point, value) in pairs {
    ///     assert_eq!(value, point[1]);
    /// }
    /// assert!(f.plane(&PlaneSpec::new(Axis::X, 7.0)).is_err());
    /// ```
    pub fn plane(&self, spec: &PlaneSpec) -> Result<FieldPlane<'_>, FieldError> {
        Ok(FieldPlane {
            field: self,
            points: self.mesh.plane(spec)?,
        })
    }

    /// Sample a plane into a [`FieldSlice`].
    pub fn slice(&self, spec: &PlaneSpec) -> Result<FieldSlice, FieldError> {
        let plane = self.plane(spec)?;
        let info = plane.info().clone();
        let (m1, m2) = info.shape();
        let mut values = vec![0.0; m1 * m2 * self.dim];
        // The plane walks axis1 fastest; the slice is stored axis2 fastest.
        for (pos, (_, c)) in plane.enumerate() {
            let (i, j) = (pos % m1, pos / m1);
            let start = (i * m2 + j) * self.dim;
            values[start..start + self.dim].copy_from_slice(&c);
        }
        Ok(FieldSlice {
            info,
            dim: self.dim,
            values,
        })
    }
}
