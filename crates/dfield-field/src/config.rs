//! Field construction parameters.

use crate::error::FieldError;
use crate::field::Field;
use crate::value::Value;
use dfield_core::FieldName;
use dfield_mesh::Mesh;
use std::sync::Arc;

/// Everything needed to build a [`Field`] on a mesh.
///
/// # Examples
///
/// ```
/// use dfield_field::FieldConfig;
/// use dfield_mesh::Mesh;
///
/// let mesh = Mesh::new([0.0; 3], [10.0; 3], [1.0; 3]).unwrap();
/// let field = FieldConfig::default()
///     .value([1.0, 1.0, 0.0])
///     .norm(2.0)
///     .name("m")
///     .build(mesh)
///     .unwrap();
///
/// assert_eq!(field.name().as_str(), "m");
/// assert!((field.sample([5.0; 3]).unwrap()[0] - 2f64.sqrt()).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Components per cell. Default 3.
    pub dim: usize,
    /// Initial values. Default [`Value::Zero`].
    pub value: Value,
    /// Target norm applied after the values. Default none.
    pub norm: Option<Value>,
    /// Field name, validated on build. Default `"field"`.
    pub name: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            dim: 3,
            value: Value::Zero,
            norm: None,
            name: "field".to_string(),
        }
    }
}

impl FieldConfig {
    /// Set the dimension.
    pub fn dim(mut self, dim: usize) -> Self {
        self.dim = dim;
        self
    }

    /// Set the initial values.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    /// Set a target norm.
    pub fn norm(mut self, norm: impl Into<Value>) -> Self {
        self.norm = Some(norm.into());
        self
    }

    /// Set the name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Validate the name, materialize the values and apply the norm.
    pub fn build(self, mesh: impl Into<Arc<Mesh>>) -> Result<Field, FieldError> {
        let name = FieldName::new(self.name)?;
        let mut field = Field::with_name(mesh, self.dim, self.value, name)?;
        if let Some(norm) = self.norm {
            field.set_norm(norm)?;
        }
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh() -> Mesh {
        Mesh::new([0.0; 3], [2.0; 3], [1.0; 3]).unwrap()
    }

    #[test]
    fn defaults() {
        let f = FieldConfig::default().build(mesh()).unwrap();
        assert_eq!(f.dim(), 3);
        assert_eq!(f.name().as_str(), "field");
        assert!(f.array().is_zero());
    }

    #[test]
    fn invalid_name_rejected() {
        let err = FieldConfig::default().name("1field").build(mesh()).unwrap_err();
        assert!(matches!(err, FieldError::Name(_)));
    }

    #[test]
    fn norm_on_scalar_rejected() {
        let err = FieldConfig::default()
            .dim(1)
            .value(1.0)
            .norm(1.0)
            .build(mesh())
            .unwrap_err();
        assert_eq!(err, FieldError::ScalarNormalisation { dim: 1 });
    }
}
