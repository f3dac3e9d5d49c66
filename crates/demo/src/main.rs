// File: crates/demo/src/main.rs
// Summary: Demo generates the sample chart into a target directory and prints the path.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_gen::{create_chart, DirStorage};

fn main() -> Result<()> {
    // Accept an output directory from CLI or fall back to the OS temp dir,
    // standing in for the writable files dir a mobile host would supply.
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);

    std::fs::create_dir_all(&dir)
        .with_context(|| format!("cannot prepare output directory '{}'", dir.display()))?;
    let dir = dir
        .canonicalize()
        .with_context(|| format!("cannot resolve '{}'", dir.display()))?;

    let path = create_chart(&DirStorage::new(dir))?;
    println!("Wrote {path}");
    Ok(())
}
