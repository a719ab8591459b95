//! Per-cell magnitude and renormalization.

use crate::array::FieldArray;
use crate::error::FieldError;
use crate::field::Field;
use crate::value::{materialize, Value};
use dfield_core::FieldName;
use std::borrow::Cow;
use std::sync::Arc;

impl Field {
    /// Per-cell Euclidean norm as a dim=1 field named `"norm"`.
    ///
    /// When a target norm was set with [`set_norm`](Self::set_norm) and the
    /// current magnitudes still equal it, the cached target is returned
    /// borrowed. Otherwise a fresh field is built.
    pub fn norm(&self) -> Cow<'_, Field> {
        let current = self.norm_array();
        if let Some(cached) = &self.norm {
            if cached.array == current {
                return Cow::Borrowed(cached);
            }
        }
        Cow::Owned(Field {
            mesh: Arc::clone(&self.mesh),
            dim: 1,
            name: FieldName::norm(),
            array: current,
            value: None,
            norm: None,
        })
    }

    /// Rescale every cell to the magnitude given by `target`.
    ///
    /// `target` takes the dim=1 [`Value`] forms. A zero target clears the
    /// cached norm and leaves the values alone. Cells whose current norm is
    /// zero stay zero.
    ///
    /// # Errors
    ///
    /// - [`FieldError::ScalarNormalisation`] if `dim == 1`.
    /// - [`FieldError::ZeroField`] if every value is zero.
    /// - Any [`materialize`] error for a malformed target.
    ///
    /// Nothing is modified on error.
    ///
    /// ```
    /// use dfield_field::Field;
    /// use dfield_mesh::Mesh;
    ///
    /// let mesh = Mesh::new([0.0; 3], [2.0, 1.0, 1.0], [1.0; 3]).unwrap();
    /// let mut f = Field::new(mesh, 3, [3.0, 0.0, 4.0]).unwrap();
    /// f.set_norm(10.0).unwrap();
    /// assert_eq!(f.sample([0.5, 0.5, 0.5]).unwrap(), [6.0, 0.0, 8.0]);
    /// assert_eq!(f.norm().average(), 10.0);
    /// ```
    pub fn set_norm(&mut self, target: impl Into<Value>) -> Result<(), FieldError> {
        let target = target.into();
        if target.is_zero_spec() {
            self.norm = None;
            return Ok(());
        }
        if self.dim == 1 {
            return Err(FieldError::ScalarNormalisation { dim: self.dim });
        }
        if self.array.is_zero() {
            return Err(FieldError::ZeroField);
        }
        let target = materialize(&self.mesh, 1, &target)?;

        let mut zero_cells = 0usize;
        for (cell, &m) in self.array.cells_mut().zip(target.as_slice()) {
            let current = cell.iter().map(|v| v * v).sum::<f64>().sqrt();
            if current == 0.0 {
                zero_cells += 1;
                continue;
            }
            for v in cell.iter_mut() {
                *v = *v / current * m;
            }
        }
        tracing::debug!(dim = self.dim, zero_cells, "normalised field");

        self.norm = Some(Box::new(Field {
            mesh: Arc::clone(&self.mesh),
            dim: 1,
            name: FieldName::norm(),
            array: target,
            value: None,
            norm: None,
        }));
        Ok(())
    }

    /// Forget the cached target norm.
    pub fn clear_norm(&mut self) {
        self.norm = None;
    }

    fn norm_array(&self) -> FieldArray {
        let mut out = FieldArray::zeros(self.array.n(), 1);
        for (dst, cell) in out.as_mut_slice().iter_mut().zip(self.array.cells()) {
            *dst = cell.iter().map(|v| v * v).sum::<f64>().sqrt();
        }
        out
    }
}
