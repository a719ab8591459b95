//! Legacy VTK rectilinear-grid export.
//!
//! Cell data holds one `VECTORS` array named after the field and one
//! `SCALARS` array per component, named `<name>_x`, `<name>_y`, `<name>_z`.
//! Cells are listed x fastest, which is the order VTK expects.

use std::io::Write;

use dfield_core::Axis;
use dfield_field::Field;
use dfield_mesh::Mesh;

use crate::error::IoError;
use crate::format::push_real;
use crate::ovf::check_dim;

/// Node coordinates along `axis`: `n + 1` evenly spaced values from
/// `pmin` to `pmax`.
pub fn node_coords(mesh: &Mesh, axis: Axis) -> Vec<f64> {
    let a = axis.index();
    let (pmin, l, n) = (mesh.pmin()[a], mesh.l()[a], mesh.n()[a]);
    let step = l / n as f64;
    (0..=n)
        .map(|i| if i == n { pmin + l } else { pmin + step * i as f64 })
        .collect()
}

/// Write a complete legacy ASCII VTK file.
///
/// Scalar fields are exported as `(v, 0, 0)` vectors.
pub fn encode<W: Write>(w: &mut W, field: &Field) -> Result<(), IoError> {
    check_dim(field.dim())?;
    let mesh = field.mesh();
    let n = mesh.n();
    let name = field.name();

    let mut out = String::new();
    out.push_str("# vtk DataFile Version 2.0\n");
    out.push_str("Field generated vtk file\n");
    out.push_str("ASCII\n");
    out.push_str("DATASET RECTILINEAR_GRID\n");
    out.push_str(&format!("DIMENSIONS {} {} {}\n", n[0] + 1, n[1] + 1, n[2] + 1));
    for axis in Axis::ALL {
        let coords = node_coords(mesh, axis);
        out.push_str(&format!(
            "{}_COORDINATES {} double\n",
            axis.name().to_ascii_uppercase(),
            coords.len()
        ));
        push_row(&mut out, &coords);
    }

    let vectors: Vec<[f64; 3]> = mesh
        .indices()
        .map(|index| {
            let cell = field.array().cell(index);
            let mut v = [0.0; 3];
            v[..cell.len()].copy_from_slice(cell);
            v
        })
        .collect();

    out.push_str(&format!("CELL_DATA {}\n", mesh.cell_count()));
    out.push_str(&format!("VECTORS {name} double\n"));
    for v in &vectors {
        push_row(&mut out, v);
    }
    for axis in Axis::ALL {
        out.push_str(&format!("SCALARS {} double 1\n", name.component(axis)));
        out.push_str("LOOKUP_TABLE default\n");
        let column: Vec<f64> = vectors.iter().map(|v| v[axis.index()]).collect();
        push_row(&mut out, &column);
    }

    w.write_all(out.as_bytes())?;
    Ok(())
}

fn push_row(out: &mut String, values: &[f64]) {
    for (i, &v) in values.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        push_real(out, v);
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfield_core::FieldName;
    use dfield_field::Value;

    fn encoded(field: &Field) -> String {
        let mut buf = Vec::new();
        encode(&mut buf, field).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn node_coordinates_span_domain() {
        let mesh = Mesh::new([10.0, -5.0, -80.0], [15.0, 10.0, 85.0], [5.0, 5.0, 2.5]).unwrap();
        assert_eq!(node_coords(&mesh, Axis::X), vec![10.0, 15.0]);
        assert_eq!(node_coords(&mesh, Axis::Y), vec![-5.0, 0.0, 5.0, 10.0]);
        let z = node_coords(&mesh, Axis::Z);
        assert_eq!(z.len(), 67);
        assert_eq!((z[0], z[66]), (-80.0, 85.0));
    }

    #[test]
    fn vector_field_layout() {
        let mesh = Mesh::new([0.0; 3], [2.0, 1.0, 1.0], [1.0; 3]).unwrap();
        let f = Field::with_name(
            mesh,
            3,
            Value::function(|p| [p[0], 0.0, -1.0]),
            FieldName::new("m").unwrap(),
        )
        .unwrap();
        let text = encoded(&f);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[3], "DATASET RECTILINEAR_GRID");
        assert_eq!(lines[4], "DIMENSIONS 3 2 2");
        assert_eq!(lines[5], "X_COORDINATES 3 double");
        assert_eq!(lines[6], "0.0 1.0 2.0");
        assert_eq!(lines[11], "CELL_DATA 2");
        assert_eq!(lines[12], "VECTORS m double");
        assert_eq!(lines[13], "0.5 0.0 -1.0");
        assert_eq!(lines[14], "1.5 0.0 -1.0");
        assert_eq!(lines[15], "SCALARS m_x double 1");
        assert_eq!(lines[16], "LOOKUP_TABLE default");
        assert_eq!(lines[17], "0.5 1.5");
        assert!(text.contains("SCALARS m_z double 1\nLOOKUP_TABLE default\n-1.0 -1.0\n"));
    }

    #[test]
    fn scalar_field_padded() {
        let mesh = Mesh::new([0.0; 3], [1.0; 3], [1.0; 3]).unwrap();
        let f = Field::new(mesh, 1, 4.0).unwrap();
        let text = encoded(&f);
        assert!(text.contains("VECTORS field double\n4.0 0.0 0.0\n"));
    }

    #[test]
    fn unsupported_dim() {
        let mesh = Mesh::new([0.0; 3], [1.0; 3], [1.0; 3]).unwrap();
        let f = Field::new(mesh, 2, [1.0, 2.0]).unwrap();
        let mut buf = Vec::new();
        assert!(matches!(
            encode(&mut buf, &f),
            Err(IoError::UnsupportedDim { dim: 2 })
        ));
    }
}
