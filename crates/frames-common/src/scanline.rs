//! Scanline rows and the resampled table built from them.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{FramesError, FramesResult};

/// One depth-indexed row of pixel intensity samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Scanline {
    /// Key identifying the row's position in the source dataset
    pub depth: f64,
    /// Pixel samples, left to right
    pub pixels: Vec<f64>,
}

impl Scanline {
    pub fn new(depth: f64, pixels: Vec<f64>) -> Self {
        Self { depth, pixels }
    }

    /// Number of pixel samples in this row.
    pub fn width(&self) -> usize {
        self.pixels.len()
    }
}

/// Rows serialize flat, as `{"depth": d, "pixel_0": v0, "pixel_1": v1, ...}`,
/// matching the column names of the source file.
impl Serialize for Scanline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pixels.len() + 1))?;
        map.serialize_entry("depth", &self.depth)?;
        for (i, value) in self.pixels.iter().enumerate() {
            map.serialize_entry(&format!("pixel_{}", i), value)?;
        }
        map.end()
    }
}

/// Table of scanlines that all share the same width.
///
/// Rows keep source order. Depths are not required to be unique.
#[derive(Debug, Clone, PartialEq)]
pub struct ResampledTable {
    width: usize,
    rows: Vec<Scanline>,
}

impl ResampledTable {
    /// Assemble a table, checking that every row has exactly `width` samples.
    pub fn new(width: usize, rows: Vec<Scanline>) -> FramesResult<Self> {
        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.width() != width) {
            return Err(FramesError::SchemaMismatch {
                row,
                expected: width,
                actual: bad.width(),
            });
        }

        Ok(Self { width, rows })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> &[Scanline] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<Scanline> {
        self.rows
    }
}
