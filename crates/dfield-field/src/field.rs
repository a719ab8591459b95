//! The [`Field`] type.

use crate::array::FieldArray;
use crate::error::FieldError;
use crate::value::{self, materialize, Value};
use dfield_core::{Axis, Components, FieldName, Index, Point};
use dfield_mesh::Mesh;
use std::fmt;
use std::sync::Arc;

/// A scalar or vector field sampled on a regular mesh.
///
/// The field owns a dense `(nx, ny, nz, dim)` [`FieldArray`] and shares its
/// [`Mesh`] by `Arc` with derived fields (components, norms).
///
/// # Examples
///
/// ```
/// use dfield_field::Field;
/// use dfield_mesh::Mesh;
///
/// let mesh = Mesh::new([0.0; 3], [1.0; 3], [0.5, 1.0, 1.0]).unwrap();
/// let field = Field::new(mesh, 3, [0.0, 0.0, 1.0]).unwrap();
///
/// assert_eq!(field.array().shape(), [2, 1, 1, 3]);
/// assert_eq!(field.average(), [0.0, 0.0, 1.0]);
/// assert_eq!(field.sample([0.8, 0.5, 0.5]).unwrap(), [0.0, 0.0, 1.0]);
/// ```
#[derive(Clone, Debug)]
pub struct Field {
    pub(crate) mesh: Arc<Mesh>,
    pub(crate) dim: usize,
    pub(crate) name: FieldName,
    pub(crate) array: FieldArray,
    /// What the array was last materialized from; `None` after `set_array`.
    pub(crate) value: Option<Value>,
    /// Cached target norm, a dim=1 field named `norm`.
    pub(crate) norm: Option<Box<Field>>,
}

/// What [`Field::value`] hands back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueRepr<'a> {
    /// The specification the array was materialized from; the array still
    /// matches it exactly.
    Spec(&'a Value),
    /// The dense array, when it no longer matches (or never had) a
    /// specification.
    Array(&'a FieldArray),
}

impl<'a> ValueRepr<'a> {
    /// The specification, if the field still matches one.
    pub fn spec(self) -> Option<&'a Value> {
        match self {
            Self::Spec(v) => Some(v),
            Self::Array(_) => None,
        }
    }
}

impl Field {
    /// Create a field named `"field"`.
    ///
    /// `value` accepts anything convertible to [`Value`]: `0.0`, a scalar,
    /// a `[f64; N]` or tuple, a [`FieldArray`], or [`Value::function`].
    pub fn new(
        mesh: impl Into<Arc<Mesh>>,
        dim: usize,
        value: impl Into<Value>,
    ) -> Result<Self, FieldError> {
        Self::with_name(mesh, dim, value, FieldName::default())
    }

    /// Create a field with an explicit name.
    pub fn with_name(
        mesh: impl Into<Arc<Mesh>>,
        dim: usize,
        value: impl Into<Value>,
        name: FieldName,
    ) -> Result<Self, FieldError> {
        let mesh = mesh.into();
        let value = value.into();
        let array = materialize(&mesh, dim, &value)?;
        Ok(Self {
            mesh,
            dim,
            name,
            array,
            value: Some(stored_tag(value)),
            norm: None,
        })
    }

    /// Wrap an existing array without keeping a specification tag.
    pub fn from_array(
        mesh: impl Into<Arc<Mesh>>,
        array: FieldArray,
        name: FieldName,
    ) -> Result<Self, FieldError> {
        let mesh = mesh.into();
        let dim = array.dim();
        if dim == 0 {
            return Err(FieldError::InvalidDim { dim });
        }
        check_shape(&mesh, dim, &array)?;
        Ok(Self {
            mesh,
            dim,
            name,
            array,
            value: None,
            norm: None,
        })
    }

    /// The mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// A shared handle to the mesh.
    pub fn mesh_arc(&self) -> Arc<Mesh> {
        Arc::clone(&self.mesh)
    }

    /// Components per cell.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The field name.
    pub fn name(&self) -> &FieldName {
        &self.name
    }

    /// Rename the field.
    pub fn set_name(&mut self, name: FieldName) {
        self.name = name;
    }

    // ── Values ──────────────────────────────────────────────────

    /// The compact specification if the array still equals what it
    /// materializes to, otherwise the array.
    ///
    /// ```
    /// use dfield_field::{Field, Value, ValueRepr};
    /// use dfield_mesh::Mesh;
    ///
    /// let mesh = Mesh::new([0.0; 3], [2.0; 3], [1.0; 3]).unwrap();
    /// let mut f = Field::new(mesh, 3, [1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(f.value(), ValueRepr::Spec(&Value::from([1.0, 2.0, 3.0])));
    ///
    /// f.array_mut().cell_mut([0, 0, 0])[0] = 9.0;
    /// assert!(matches!(f.value(), ValueRepr::Array(_)));
    /// ```
    pub fn value(&self) -> ValueRepr<'_> {
        match &self.value {
            Some(v) if value::matches(&self.mesh, self.dim, v, &self.array) => ValueRepr::Spec(v),
            _ => ValueRepr::Array(&self.array),
        }
    }

    /// Replace the values. On error the field is unchanged.
    pub fn set_value(&mut self, value: impl Into<Value>) -> Result<(), FieldError> {
        let value = value.into();
        self.array = materialize(&self.mesh, self.dim, &value)?;
        self.value = Some(stored_tag(value));
        Ok(())
    }

    /// The dense array.
    pub fn array(&self) -> &FieldArray {
        &self.array
    }

    /// The dense array, mutably. Its shape is fixed.
    pub fn array_mut(&mut self) -> &mut FieldArray {
        &mut self.array
    }

    /// Replace the array. The shape must be `(nx, ny, nz, dim)`.
    pub fn set_array(&mut self, array: FieldArray) -> Result<(), FieldError> {
        check_shape(&self.mesh, self.dim, &array)?;
        self.array = array;
        self.value = None;
        Ok(())
    }

    /// Mean over all cells, one entry per component.
    pub fn average(&self) -> Components {
        let mut sum = vec![0.0; self.dim];
        for cell in self.array.cells() {
            for (s, v) in sum.iter_mut().zip(cell) {
                *s += v;
            }
        }
        let count = self.array.cell_count() as f64;
        sum.into_iter().map(|s| s / count).collect()
    }

    /// Value of the cell containing `point`.
    pub fn sample(&self, point: Point) -> Result<Components, FieldError> {
        let index = self.mesh.point2index(point)?;
        Ok(Components::from_slice(self.array.cell(index)))
    }

    /// Value of the cell at `index`.
    pub fn value_at_index(&self, index: Index) -> Result<Components, FieldError> {
        self.mesh.index2point(index)?;
        Ok(Components::from_slice(self.array.cell(index)))
    }

    /// Overwrite one cell.
    pub fn set_at_index(&mut self, index: Index, value: &[f64]) -> Result<(), FieldError> {
        self.mesh.index2point(index)?;
        if value.len() != self.dim {
            return Err(FieldError::InvalidValue {
                dim: self.dim,
                reason: format!("cell value has {} components", value.len()),
            });
        }
        self.array.cell_mut(index).copy_from_slice(value);
        Ok(())
    }

    // ── Components ──────────────────────────────────────────────

    /// The axes that [`component`](Self::component) accepts.
    pub fn available_components(&self) -> Vec<Axis> {
        if self.dim <= 1 || self.dim > 3 {
            return Vec::new();
        }
        Axis::ALL[..self.dim].to_vec()
    }

    /// A dim=1 copy of one component, named `<name>_<axis>`.
    ///
    /// Fails with [`FieldError::NoSuchAttribute`] unless `1 < dim <= 3`
    /// and `axis` is one of the first `dim` axes.
    pub fn component(&self, axis: Axis) -> Result<Field, FieldError> {
        if !self.available_components().contains(&axis) {
            return Err(FieldError::NoSuchAttribute {
                name: axis.name().to_string(),
                dim: self.dim,
            });
        }
        Ok(Field {
            mesh: Arc::clone(&self.mesh),
            dim: 1,
            name: self.name.component(axis),
            array: self.array.column(axis.index()),
            value: None,
            norm: None,
        })
    }

    /// Component by axis name (`"x"`, `"y"` or `"z"`).
    pub fn component_by_name(&self, name: &str) -> Result<Field, FieldError> {
        let axis = name
            .parse::<Axis>()
            .map_err(|_| FieldError::NoSuchAttribute {
                name: name.to_string(),
                dim: self.dim,
            })?;
        self.component(axis)
    }

    /// The x component.
    pub fn x(&self) -> Result<Field, FieldError> {
        self.component(Axis::X)
    }

    /// The y component.
    pub fn y(&self) -> Result<Field, FieldError> {
        self.component(Axis::Y)
    }

    /// The z component.
    pub fn z(&self) -> Result<Field, FieldError> {
        self.component(Axis::Z)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Field(mesh={}, dim={}, name=\"{}\")",
            self.mesh, self.dim, self.name
        )
    }
}

fn check_shape(mesh: &Mesh, dim: usize, array: &FieldArray) -> Result<(), FieldError> {
    let n = mesh.n();
    let expected = [n[0], n[1], n[2], dim];
    if array.shape() != expected {
        return Err(FieldError::ShapeMismatch {
            expected,
            found: array.shape(),
        });
    }
    Ok(())
}

/// A zero scalar is kept as [`Value::Zero`].
fn stored_tag(value: Value) -> Value {
    if value.is_zero_spec() {
        Value::Zero
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh() -> Arc<Mesh> {
        Arc::new(Mesh::new([0.0; 3], [4.0, 3.0, 2.0], [1.0; 3]).unwrap())
    }

    #[test]
    fn value_round_trips_spec() {
        let mut f = Field::new(mesh(), 3, Value::Zero).unwrap();
        assert_eq!(f.value(), ValueRepr::Spec(&Value::Zero));

        f.set_value([0.0, 1.0, 0.0]).unwrap();
        assert_eq!(f.value().spec(), Some(&Value::from([0.0, 1.0, 0.0])));

        f.set_at_index([1, 1, 1], &[5.0, 0.0, 0.0]).unwrap();
        assert_eq!(f.value(), ValueRepr::Array(f.array()));
    }

    #[test]
    fn zero_scalar_reads_back_as_zero() {
        let mesh = Arc::new(Mesh::new([0.0; 3], [2.0; 3], [1.0; 3]).unwrap());
        let f = Field::new(Arc::clone(&mesh), 1, 0.0).unwrap();
        assert_eq!(f.value(), ValueRepr::Spec(&Value::Zero));

        let mut f = Field::new(mesh, 3, [1.0, 2.0, 3.0]).unwrap();
        f.set_value(Value::Scalar(0.0)).unwrap();
        assert_eq!(f.value(), ValueRepr::Spec(&Value::Zero));
        assert!(f.array().is_zero());
    }

    #[test]
    fn failed_set_value_leaves_field_untouched() {
        let mut f = Field::new(mesh(), 3, [1.0, 1.0, 1.0]).unwrap();
        let before = f.array().clone();
        assert!(f.set_value(2.0).is_err());
        assert!(f.set_value([1.0, 2.0]).is_err());
        assert_eq!(f.array(), &before);
        assert_eq!(f.value().spec(), Some(&Value::from([1.0, 1.0, 1.0])));
    }

    #[test]
    fn set_array_validates_shape() {
        let m = mesh();
        let mut f = Field::new(Arc::clone(&m), 2, Value::Zero).unwrap();
        let err = f.set_array(FieldArray::zeros(m.n(), 3)).unwrap_err();
        assert!(matches!(err, FieldError::ShapeMismatch { .. }));
        f.set_array(FieldArray::filled(m.n(), &[1.0, 2.0])).unwrap();
        assert!(matches!(f.value(), ValueRepr::Array(_)));
        assert_eq!(f.average(), [1.0, 2.0]);
    }

    #[test]
    fn average_of_linear_function() {
        let f = Field::new(mesh(), 1, Value::function(|p| p[0])).unwrap();
        assert_eq!(f.average().as_scalar(), Some(2.0));
    }

    #[test]
    fn sample_outside_fails() {
        let f = Field::new(mesh(), 1, 1.0).unwrap();
        assert!(matches!(
            f.sample([5.0, 0.0, 0.0]),
            Err(FieldError::Mesh(dfield_mesh::MeshError::PointOutsideMesh { .. }))
        ));
    }

    #[test]
    fn components_are_named_copies() {
        let f = Field::new(mesh(), 3, [1.0, 2.0, 3.0]).unwrap();
        let mut y = f.y().unwrap();
        assert_eq!(y.dim(), 1);
        assert_eq!(y.name().as_str(), "field_y");
        assert_eq!(y.average(), 2.0);

        y.set_value(-1.0).unwrap();
        assert_eq!(f.average(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn component_availability_by_dim() {
        let m = mesh();
        let scalar = Field::new(Arc::clone(&m), 1, 1.0).unwrap();
        assert!(scalar.available_components().is_empty());
        assert!(matches!(scalar.x(), Err(FieldError::NoSuchAttribute { .. })));

        let planar = Field::new(Arc::clone(&m), 2, [1.0, 2.0]).unwrap();
        assert_eq!(planar.available_components(), vec![Axis::X, Axis::Y]);
        assert!(planar.x().is_ok());
        assert!(matches!(planar.z(), Err(FieldError::NoSuchAttribute { .. })));

        let wide = Field::new(m, 4, [1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!(wide.x().is_err());
    }

    #[test]
    fn component_by_name_rejects_unknown() {
        let f = Field::new(mesh(), 3, Value::Zero).unwrap();
        assert!(f.component_by_name("z").is_ok());
        for bad in ["w", "xy", "__len__", ""] {
            assert!(matches!(
                f.component_by_name(bad),
                Err(FieldError::NoSuchAttribute { .. })
            ));
        }
    }

    #[test]
    fn set_at_index_checks_bounds_and_len() {
        let mut f = Field::new(mesh(), 3, Value::Zero).unwrap();
        assert!(f.set_at_index([4, 0, 0], &[1.0, 1.0, 1.0]).is_err());
        assert!(f.set_at_index([0, 0, 0], &[1.0]).is_err());
        f.set_at_index([3, 2, 1], &[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(f.value_at_index([3, 2, 1]).unwrap(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn display() {
        let m = Mesh::new([0.0; 3], [1.0; 3], [0.5, 1.0, 1.0]).unwrap();
        let f = Field::new(m, 3, Value::Zero).unwrap();
        assert_eq!(
            f.to_string(),
            "Field(mesh=Mesh(p1=[0.0, 0.0, 0.0], p2=[1.0, 1.0, 1.0], cell=[0.5, 1.0, 1.0]), dim=3, name=\"field\")"
        );
    }
}
