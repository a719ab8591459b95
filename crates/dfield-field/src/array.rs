//! Dense 4-D storage for field values.

use crate::error::FieldError;
use dfield_core::Index;

/// Dense `(nx, ny, nz, dim)` array of `f64`, row-major.
///
/// The component axis is fastest, then z, then y, then x, so the
/// components of one cell are contiguous. The memory layout is
/// independent of the mesh iteration order; code that walks cells in
/// canonical order goes through [`FieldArray::cell`] with an index.
///
/// # Examples
///
/// ```
/// use dfield_field::FieldArray;
///
/// let mut a = FieldArray::filled([2, 1, 1], &[0.0, 0.0, 1.0]);
/// assert_eq!(a.shape(), [2, 1, 1, 3]);
/// assert_eq!(a.cell([1, 0, 0]), &[0.0, 0.0, 1.0]);
///
/// a.cell_mut([0, 0, 0])[0] = 5.0;
/// assert_eq!(a.column(0).as_slice(), &[5.0, 0.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FieldArray {
    shape: [usize; 4],
    data: Vec<f64>,
}

impl FieldArray {
    /// An all-zero array for `n` cells with `dim` components each.
    pub fn zeros(n: Index, dim: usize) -> Self {
        let shape = [n[0], n[1], n[2], dim];
        Self {
            shape,
            data: vec![0.0; shape.iter().product()],
        }
    }

    /// An array with every cell set to `components`.
    pub fn filled(n: Index, components: &[f64]) -> Self {
        let shape = [n[0], n[1], n[2], components.len()];
        let cells = n[0] * n[1] * n[2];
        let mut data = Vec::with_capacity(cells * components.len());
        for _ in 0..cells {
            data.extend_from_slice(components);
        }
        Self { shape, data }
    }

    /// Wrap a flat row-major buffer.
    ///
    /// Returns `Err(FieldError::ShapeMismatch)` if `data.len()` is not the
    /// product of `shape`.
    pub fn from_vec(shape: [usize; 4], data: Vec<f64>) -> Result<Self, FieldError> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(FieldError::ShapeMismatch {
                expected: shape,
                found: [data.len(), 1, 1, 1],
            });
        }
        Ok(Self { shape, data })
    }

    /// `[nx, ny, nz, dim]`.
    pub fn shape(&self) -> [usize; 4] {
        self.shape
    }

    /// Spatial cell counts `[nx, ny, nz]`.
    pub fn n(&self) -> Index {
        [self.shape[0], self.shape[1], self.shape[2]]
    }

    /// Components per cell.
    pub fn dim(&self) -> usize {
        self.shape[3]
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.shape[0] * self.shape[1] * self.shape[2]
    }

    /// The flat buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// The flat buffer, mutably. The shape cannot change.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the array, returning the flat buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Whether `index` addresses a cell of this array.
    pub fn contains(&self, index: Index) -> bool {
        (0..3).all(|a| index[a] < self.shape[a])
    }

    /// Components of the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn cell(&self, index: Index) -> &[f64] {
        let start = self.offset(index);
        &self.data[start..start + self.dim()]
    }

    /// Components of the cell at `index`, mutably.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn cell_mut(&mut self, index: Index) -> &mut [f64] {
        let start = self.offset(index);
        let dim = self.dim();
        &mut self.data[start..start + dim]
    }

    /// Components of the cell at `index`, or `None` if out of bounds.
    pub fn get(&self, index: Index) -> Option<&[f64]> {
        self.contains(index).then(|| self.cell(index))
    }

    /// Iterate cells in memory order (z fastest).
    pub fn cells(&self) -> std::slice::Chunks<'_, f64> {
        self.data.chunks(self.dim().max(1))
    }

    /// Iterate cells mutably in memory order (z fastest).
    pub fn cells_mut(&mut self) -> std::slice::ChunksMut<'_, f64> {
        let dim = self.dim().max(1);
        self.data.chunks_mut(dim)
    }

    /// A `dim = 1` copy of component `c`.
    ///
    /// # Panics
    ///
    /// Panics if `c >= dim`.
    pub fn column(&self, c: usize) -> FieldArray {
        assert!(c < self.dim(), "component {c} out of range for dim {}", self.dim());
        let data = self.cells().map(|cell| cell[c]).collect();
        Self {
            shape: [self.shape[0], self.shape[1], self.shape[2], 1],
            data,
        }
    }

    /// `true` if every element is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&v| v == 0.0)
    }

    fn offset(&self, index: Index) -> usize {
        debug_assert!(self.contains(index), "index {index:?} out of bounds");
        ((index[0] * self.shape[1] + index[1]) * self.shape[2] + index[2]) * self.shape[3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_layout() {
        let mut a = FieldArray::zeros([2, 3, 4], 2);
        a.cell_mut([1, 2, 3])[1] = 7.0;
        assert_eq!(a.as_slice()[((1 * 3 + 2) * 4 + 3) * 2 + 1], 7.0);
        assert_eq!(a.as_slice().iter().filter(|&&v| v != 0.0).count(), 1);
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(FieldArray::from_vec([2, 1, 1, 3], vec![0.0; 6]).is_ok());
        assert!(matches!(
            FieldArray::from_vec([2, 1, 1, 3], vec![0.0; 5]),
            Err(FieldError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let a = FieldArray::zeros([2, 2, 2], 1);
        assert!(a.get([1, 1, 1]).is_some());
        assert!(a.get([2, 0, 0]).is_none());
    }

    #[test]
    fn column_copies() {
        let a = FieldArray::filled([1, 2, 1], &[1.0, 2.0, 3.0]);
        let mut y = a.column(1);
        assert_eq!(y.shape(), [1, 2, 1, 1]);
        y.as_mut_slice()[0] = -1.0;
        assert_eq!(a.cell([0, 0, 0]), &[1.0, 2.0, 3.0]);
    }
}
