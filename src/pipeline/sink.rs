//! Output sink: sequential write of the final lines to one file.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `lines` to `path`, newline-terminated, overwriting any existing
/// file. An empty slice still produces the (zero-length) file. A failure
/// partway may leave partial output behind; there is no atomic rename.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{line}")
            .with_context(|| format!("Failed to write to '{}'", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush '{}'", path.display()))?;
    Ok(())
}
