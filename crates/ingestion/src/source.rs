//! Loading of the startup source file.
//!
//! The source is a CSV with a header row. One column must be named `depth`;
//! every other column is a pixel column, taken in file order:
//!
//! ```text
//! depth,pixel_0,pixel_1,...,pixel_199
//! 9000.1,160.0,158.0,...,171.0
//! ```
//!
//! Cells may be wrapped in one pair of double quotes. Embedded commas are
//! not supported.

use std::path::Path;

use frames_common::{FramesError, FramesResult, Scanline};

/// Name of the key column.
pub const DEPTH_COLUMN: &str = "depth";

/// Read and parse the source file at `path`.
pub async fn load_source(path: impl AsRef<Path>) -> FramesResult<Vec<Scanline>> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| FramesError::Source(format!("{}: {}", path.display(), e)))?;

    parse_source(&text)
}

/// Parse CSV text into source rows, keeping file order.
pub fn parse_source(text: &str) -> FramesResult<Vec<Scanline>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((_, header)) = lines.next() else {
        return Err(FramesError::Source("source file is empty".to_string()));
    };

    let columns: Vec<&str> = header.split(',').map(cell_text).collect();
    let depth_col = columns
        .iter()
        .position(|c| *c == DEPTH_COLUMN)
        .ok_or_else(|| {
            FramesError::Source(format!("header has no '{}' column", DEPTH_COLUMN))
        })?;

    let mut rows = Vec::new();
    for (line_no, line) in lines {
        let mut depth = None;
        let mut pixels = Vec::with_capacity(columns.len().saturating_sub(1));

        for (col, cell) in line.split(',').map(cell_text).enumerate() {
            let value = parse_cell(cell, line_no, columns.get(col).copied())?;
            if col == depth_col {
                depth = Some(value);
            } else {
                pixels.push(value);
            }
        }

        let depth = depth
            .filter(|d| d.is_finite())
            .ok_or_else(|| {
                FramesError::Source(format!("line {}: missing or non-finite depth", line_no))
            })?;
        rows.push(Scanline::new(depth, pixels));
    }

    Ok(rows)
}

/// Trim a raw cell and strip one layer of surrounding double quotes.
fn cell_text(raw: &str) -> &str {
    let cell = raw.trim();
    cell.strip_prefix('"')
        .and_then(|c| c.strip_suffix('"'))
        .map(str::trim)
        .unwrap_or(cell)
}

fn parse_cell(cell: &str, line_no: usize, column: Option<&str>) -> FramesResult<f64> {
    cell.parse::<f64>().map_err(|_| {
        FramesError::Source(format!(
            "line {}, column '{}': cannot parse '{}' as a number",
            line_no,
            column.unwrap_or("<extra>"),
            cell
        ))
    })
}
