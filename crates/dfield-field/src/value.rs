//! Value specifications and their materialization into dense arrays.

use crate::array::FieldArray;
use crate::error::FieldError;
use dfield_core::{Components, Point};
use dfield_mesh::Mesh;
use std::fmt;
use std::sync::Arc;

/// A per-point value function, evaluated at cell centres.
pub type ValueFn = Arc<dyn Fn(Point) -> Components + Send + Sync>;

/// How to fill a field.
///
/// Every form is accepted by [`materialize`], which turns it into a dense
/// [`FieldArray`]. A field keeps the `Value` it was last materialized from
/// so that [`Field::value`](crate::Field::value) can hand the compact form
/// back while the array is unchanged.
///
/// # Examples
///
/// ```
/// use dfield_field::Value;
///
/// assert_eq!(Value::from(0.5), Value::Scalar(0.5));
/// assert_eq!(Value::from([0.0, 0.0, 1.0]).kind(), "vector");
///
/// let f = Value::function(|p| [p[0], 0.0, 0.0]);
/// assert_eq!(f.kind(), "function");
/// ```
#[derive(Clone, Default)]
pub enum Value {
    /// Every component of every cell is zero, for any `dim`.
    #[default]
    Zero,
    /// One real per cell. Only valid for `dim == 1` unless exactly zero.
    Scalar(f64),
    /// A constant `dim`-component vector broadcast to every cell.
    Vector(Components),
    /// A function of the cell-centre coordinate.
    Function(ValueFn),
    /// A pre-built array of shape `(nx, ny, nz, dim)`.
    Array(FieldArray),
}

impl Value {
    /// Wrap a closure returning anything convertible to [`Components`].
    pub fn function<F, C>(f: F) -> Self
    where
        F: Fn(Point) -> C + Send + Sync + 'static,
        C: Into<Components>,
    {
        Self::Function(Arc::new(move |p| f(p).into()))
    }

    /// Short lower-case name of the form, for logs and messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Scalar(_) => "scalar",
            Self::Vector(_) => "vector",
            Self::Function(_) => "function",
            Self::Array(_) => "array",
        }
    }

    /// `true` for [`Value::Zero`] and for a scalar that is exactly zero.
    pub fn is_zero_spec(&self) -> bool {
        match self {
            Self::Zero => true,
            Self::Scalar(v) => *v == 0.0,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => f.write_str("Zero"),
            Self::Scalar(v) => f.debug_tuple("Scalar").field(v).finish(),
            Self::Vector(c) => f.debug_tuple("Vector").field(c).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
            Self::Array(a) => f.debug_tuple("Array").field(&a.shape()).finish(),
        }
    }
}

impl PartialEq for Value {
    /// Functions compare by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Zero, Self::Zero) => true,
            (Self::Scalar(a), Self::Scalar(b)) => a == b,
            (Self::Vector(a), Self::Vector(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Arc::ptr_eq(a, b),
            (Self::Array(a), Self::Array(b)) => a == b,
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Components> for Value {
    fn from(v: Components) -> Self {
        Self::Vector(v)
    }
}

impl<const N: usize> From<[f64; N]> for Value {
    fn from(v: [f64; N]) -> Self {
        Self::Vector(v.into())
    }
}

impl From<(f64, f64, f64)> for Value {
    fn from(v: (f64, f64, f64)) -> Self {
        Self::Vector(v.into())
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Self::Vector(v.into())
    }
}

impl From<FieldArray> for Value {
    fn from(v: FieldArray) -> Self {
        Self::Array(v)
    }
}

// ── Materialization ─────────────────────────────────────────────

/// Build the dense `(nx, ny, nz, dim)` array described by `value`.
///
/// Constants are broadcast without evaluating anything per cell; a
/// function is called once per cell at the cell centre, in canonical mesh
/// order. The result is deterministic.
///
/// # Errors
///
/// - [`FieldError::InvalidDim`] if `dim == 0`.
/// - [`FieldError::InvalidValue`] if a nonzero scalar is given for
///   `dim != 1`, a vector or function result has the wrong length, or an
///   array has the wrong shape.
pub fn materialize(mesh: &Mesh, dim: usize, value: &Value) -> Result<FieldArray, FieldError> {
    if dim == 0 {
        return Err(FieldError::InvalidDim { dim });
    }
    let n = mesh.n();
    let array = match value {
        Value::Zero => FieldArray::zeros(n, dim),
        Value::Scalar(v) if *v == 0.0 => FieldArray::zeros(n, dim),
        Value::Scalar(v) => {
            if dim != 1 {
                return Err(FieldError::InvalidValue {
                    dim,
                    reason: format!("cannot broadcast scalar {v} to {dim} components"),
                });
            }
            FieldArray::filled(n, &[*v])
        }
        Value::Vector(c) => {
            check_len(dim, c.len(), "vector")?;
            FieldArray::filled(n, c)
        }
        Value::Function(f) => {
            let mut array = FieldArray::zeros(n, dim);
            for (index, point) in mesh.indices().zip(mesh.coordinates()) {
                let c = f(point);
                if c.len() != dim {
                    return Err(FieldError::InvalidValue {
                        dim,
                        reason: format!(
                            "function returned {} components at cell {index:?} ({point:?})",
                            c.len()
                        ),
                    });
                }
                array.cell_mut(index).copy_from_slice(&c);
            }
            array
        }
        Value::Array(a) => {
            let expected = [n[0], n[1], n[2], dim];
            if a.shape() != expected {
                return Err(FieldError::InvalidValue {
                    dim,
                    reason: format!("array shape {:?} != {expected:?}", a.shape()),
                });
            }
            a.clone()
        }
    };
    tracing::debug!(
        dim,
        kind = value.kind(),
        cells = mesh.cell_count(),
        "materialized field values"
    );
    Ok(array)
}

/// Whether `array` is exactly what `materialize(mesh, dim, value)` would
/// produce. Does not allocate.
pub(crate) fn matches(mesh: &Mesh, dim: usize, value: &Value, array: &FieldArray) -> bool {
    let n = mesh.n();
    if array.shape() != [n[0], n[1], n[2], dim] {
        return false;
    }
    match value {
        Value::Zero => array.is_zero(),
        Value::Scalar(v) if *v == 0.0 => array.is_zero(),
        Value::Scalar(v) => dim == 1 && array.as_slice().iter().all(|x| x == v),
        Value::Vector(c) => c.len() == dim && array.cells().all(|cell| cell == c.as_slice()),
        Value::Function(f) => mesh
            .indices()
            .zip(mesh.coordinates())
            .all(|(index, point)| f(point).as_slice() == array.cell(index)),
        Value::Array(a) => a == array,
    }
}

fn check_len(dim: usize, len: usize, what: &str) -> Result<(), FieldError> {
    if len != dim {
        return Err(FieldError::InvalidValue {
            dim,
            reason: format!("{what} has {len} components"),
        });
    }
    Ok(())
}
