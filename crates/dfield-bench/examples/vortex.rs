//! Build a normalised vortex, inspect it, and export it.
//!
//! Writes `vortex.omf`, `vortex_bin8.ovf` and `vortex.vtk` into a
//! temporary directory (or the directory given as the first argument).

use dfield_bench::vortex_field;
use dfield_core::Axis;
use dfield_io::{read_ovf, write, write_with, Representation, WriteOptions};
use dfield_mesh::{Mesh, PlaneSpec};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== dfield vortex example ===\n");

    let dir = tempfile::tempdir()?;
    let out = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| dir.path().to_path_buf());

    let mesh = Mesh::new([-50e-9, -50e-9, 0.0], [50e-9, 50e-9, 5e-9], [2.5e-9; 3])?;
    println!("{mesh}");
    println!("  cells: {:?} = {}", mesh.n(), mesh.cell_count());

    let m = vortex_field(mesh, 8e5)?;
    println!("{m}");
    println!("  average: {}", m.average());
    println!("  centre:  {}", m.sample(m.mesh().domain_centre())?);

    let mz = m.z()?.slice(&PlaneSpec::centre(Axis::Z))?;
    let (m1, m2, _) = mz.shape();
    println!("  mz at slice centre: {:.1}", mz.value(m1 / 2, m2 / 2)[0]);

    let txt = out.join("vortex.omf");
    let bin = out.join("vortex_bin8.ovf");
    let vtk = out.join("vortex.vtk");
    write(&m, &txt)?;
    write_with(&m, &bin, &WriteOptions::representation(Representation::Binary8))?;
    write(&m, &vtk)?;

    let back = read_ovf(&bin)?;
    println!(
        "\nwrote {}, {}, {}; binary round trip exact: {}",
        txt.display(),
        bin.display(),
        vtk.display(),
        back.array() == m.array()
    );
    Ok(())
}
