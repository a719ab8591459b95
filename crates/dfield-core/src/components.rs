//! Per-cell field values.

use smallvec::SmallVec;
use std::fmt;
use std::ops::Deref;

/// The value stored in one cell: `dim` floating-point components.
///
/// Scalars (`dim == 1`) and 3-vectors stay inline; the `SmallVec`
/// spills to the heap only for `dim > 3`.
///
/// # Examples
///
/// ```
/// use dfield_core::Components;
///
/// let v = Components::from([3.0, 4.0, 0.0]);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.norm(), 5.0);
/// assert_eq!(v.as_scalar(), None);
///
/// let s = Components::from(2.5);
/// assert_eq!(s.as_scalar(), Some(2.5));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Components(SmallVec<[f64; 3]>);

impl Components {
    /// A single scalar component.
    pub fn scalar(v: f64) -> Self {
        let mut inner = SmallVec::new();
        inner.push(v);
        Self(inner)
    }

    /// `dim` zeros.
    pub fn zeros(dim: usize) -> Self {
        Self(SmallVec::from_elem(0.0, dim))
    }

    /// Copy components from a slice.
    pub fn from_slice(values: &[f64]) -> Self {
        Self(SmallVec::from_slice(values))
    }

    /// The scalar value if there is exactly one component.
    pub fn as_scalar(&self) -> Option<f64> {
        match self.0.as_slice() {
            [v] => Some(*v),
            _ => None,
        }
    }

    /// Components as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Euclidean norm of the components.
    pub fn norm(&self) -> f64 {
        self.0.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// `true` if every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&v| v == 0.0)
    }
}

impl Deref for Components {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<f64> for Components {
    fn from(v: f64) -> Self {
        Self::scalar(v)
    }
}

impl<const N: usize> From<[f64; N]> for Components {
    fn from(v: [f64; N]) -> Self {
        Self::from_slice(&v)
    }
}

impl From<(f64, f64, f64)> for Components {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::from_slice(&[x, y, z])
    }
}

impl From<Vec<f64>> for Components {
    fn from(v: Vec<f64>) -> Self {
        Self(SmallVec::from_vec(v))
    }
}

impl From<&[f64]> for Components {
    fn from(v: &[f64]) -> Self {
        Self::from_slice(v)
    }
}

impl FromIterator<f64> for Components {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> PartialEq<[f64; N]> for Components {
    fn eq(&self, other: &[f64; N]) -> bool {
        self.0.as_slice() == other.as_slice()
    }
}

impl PartialEq<f64> for Components {
    fn eq(&self, other: &f64) -> bool {
        self.as_scalar() == Some(*other)
    }
}

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(v) = self.as_scalar() {
            return write!(f, "{v}");
        }
        f.write_str("(")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_agree() {
        let a = Components::from([1.0, -2.0, 3.5]);
        let b = Components::from((1.0, -2.0, 3.5));
        let c = Components::from(vec![1.0, -2.0, 3.5]);
        let d: Components = [1.0, -2.0, 3.5].into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a, d);
        assert_eq!(a, [1.0, -2.0, 3.5]);
    }

    #[test]
    fn scalar_accessors() {
        let s = Components::scalar(-4.0);
        assert_eq!(s, -4.0);
        assert_eq!(s.norm(), 4.0);
        assert!(Components::zeros(3).is_zero());
        assert!(!s.is_zero());
    }

    #[test]
    fn display() {
        assert_eq!(Components::scalar(1.5).to_string(), "1.5");
        assert_eq!(Components::from([0.0, 0.0, 1.0]).to_string(), "(0, 0, 1)");
    }
}
