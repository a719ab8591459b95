//! File readers.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use dfield_field::Field;

use crate::error::IoError;
use crate::ovf;

/// Read an OVF file written by [`write`](crate::write) or by OOMMF.
///
/// The result has `dim = valuedim` (3 for files written by this crate).
pub fn read_ovf(path: impl AsRef<Path>) -> Result<Field, IoError> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let field = ovf::decode(&mut reader)?;
    tracing::info!(
        path = %path.display(),
        format = "ovf",
        cells = field.mesh().cell_count(),
        name = %field.name(),
        "read field"
    );
    Ok(field)
}
