//! Source file fixtures.
//!
//! Writes rows out in the startup CSV layout so loader and pipeline tests
//! can run against real files in a temporary directory.

use std::fmt::Write as _;
use std::path::PathBuf;

use frames_common::Scanline;
use tempfile::TempDir;

/// Render rows as source CSV text with a `depth,pixel_0,...` header.
///
/// The header is sized from the widest row so ragged rows can be produced
/// on purpose.
pub fn source_csv(rows: &[Scanline]) -> String {
    let width = rows.iter().map(Scanline::width).max().unwrap_or(0);

    let mut text = String::from("depth");
    for i in 0..width {
        let _ = write!(text, ",pixel_{}", i);
    }
    text.push('\n');

    for row in rows {
        let _ = write!(text, "{}", row.depth);
        for value in &row.pixels {
            let _ = write!(text, ",{}", value);
        }
        text.push('\n');
    }

    text
}

/// A temporary directory holding `img.csv` built from `rows`.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn write_source_csv(rows: &[Scanline]) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("img.csv");
    std::fs::write(&path, source_csv(rows))?;
    Ok((dir, path))
}
