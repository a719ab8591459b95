//! File writers.
//!
//! OVF files are written in three stages, each through its own handle: the
//! text header, then the data section appended, then the footer appended.
//! Every handle is closed when its stage ends, on success or error.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use dfield_field::Field;

use crate::error::IoError;
use crate::options::{Representation, WriteOptions};
use crate::{ovf, vtk};

/// File formats selected by extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileFormat {
    /// OOMMF vector field, `.omf`, `.ovf` or `.ohf`.
    Ovf,
    /// Legacy VTK rectilinear grid, `.vtk`.
    Vtk,
}

impl FileFormat {
    /// Pick the format from the extension of `path` (case-sensitive).
    pub fn from_path(path: &Path) -> Result<Self, IoError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("omf" | "ovf" | "ohf") => Ok(Self::Ovf),
            Some("vtk") => Ok(Self::Vtk),
            _ => Err(IoError::UnsupportedExtension {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Write `field` to `path` with default options.
pub fn write(field: &Field, path: impl AsRef<Path>) -> Result<(), IoError> {
    write_with(field, path, &WriteOptions::default())
}

/// Write `field` to `path`, choosing the format from the extension.
pub fn write_with(
    field: &Field,
    path: impl AsRef<Path>,
    options: &WriteOptions,
) -> Result<(), IoError> {
    let path = path.as_ref();
    match FileFormat::from_path(path)? {
        FileFormat::Ovf => write_ovf(field, path, options.representation),
        FileFormat::Vtk => write_vtk(field, path),
    }
}

/// Write an OVF file. The dimension is checked before the file is created.
pub fn write_ovf(
    field: &Field,
    path: impl AsRef<Path>,
    representation: Representation,
) -> Result<(), IoError> {
    let path = path.as_ref();
    ovf::check_dim(field.dim())?;

    stage(File::create(path)?, |w| {
        ovf::encode_header(w, field, representation)
    })?;
    stage(append(path)?, |w| ovf::encode_data(w, field, representation))?;
    stage(append(path)?, |w| ovf::encode_footer(w, representation))?;

    tracing::info!(
        path = %path.display(),
        format = "ovf",
        %representation,
        cells = field.mesh().cell_count(),
        "wrote field"
    );
    Ok(())
}

/// Write a legacy VTK file. The dimension is checked before the file is
/// created.
pub fn write_vtk(field: &Field, path: impl AsRef<Path>) -> Result<(), IoError> {
    let path = path.as_ref();
    ovf::check_dim(field.dim())?;
    stage(File::create(path)?, |w| vtk::encode(w, field))?;
    tracing::info!(
        path = %path.display(),
        format = "vtk",
        cells = field.mesh().cell_count(),
        "wrote field"
    );
    Ok(())
}

fn append(path: &Path) -> Result<File, IoError> {
    Ok(OpenOptions::new().append(true).open(path)?)
}

/// Run one write stage through a buffered handle, then flush and close it.
fn stage<F>(file: File, body: F) -> Result<(), IoError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), IoError>,
{
    let mut w = BufWriter::new(file);
    body(&mut w)?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_dispatch() {
        for (name, expected) in [
            ("a.omf", FileFormat::Ovf),
            ("a.ovf", FileFormat::Ovf),
            ("dir/a.ohf", FileFormat::Ovf),
            ("a.vtk", FileFormat::Vtk),
        ] {
            assert_eq!(FileFormat::from_path(Path::new(name)).unwrap(), expected);
        }
        for bad in ["a.txt", "a.OMF", "omf", "a.vtk.bak"] {
            assert!(matches!(
                FileFormat::from_path(Path::new(bad)),
                Err(IoError::UnsupportedExtension { .. })
            ));
        }
    }
}
