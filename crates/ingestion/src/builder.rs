//! Builds the resampled table from source rows.

use rayon::prelude::*;

use frames_common::{FramesError, FramesResult, ResampledTable, Scanline, ScanlineWidths};

use crate::resample::Resampler;

/// Resample every source row with `resampler`.
///
/// All rows are checked against the source width before any work is done,
/// so a bad row fails the whole build and nothing is produced. Rows are
/// resampled in parallel; output order matches input order.
pub fn build(source_rows: &[Scanline], resampler: &Resampler) -> FramesResult<ResampledTable> {
    let expected = resampler.source_width();
    if let Some((row, bad)) = source_rows
        .iter()
        .enumerate()
        .find(|(_, r)| r.width() != expected)
    {
        return Err(FramesError::SchemaMismatch {
            row,
            expected,
            actual: bad.width(),
        });
    }

    let rows = source_rows
        .par_iter()
        .map(|row| {
            resampler
                .resample(&row.pixels)
                .map(|pixels| Scanline::new(row.depth, pixels))
        })
        .collect::<FramesResult<Vec<_>>>()?;

    ResampledTable::new(resampler.target_width(), rows)
}

/// Build the resampler for `widths` and apply it to `source_rows`.
pub fn resample_all(source_rows: &[Scanline], widths: ScanlineWidths) -> FramesResult<ResampledTable> {
    let resampler = Resampler::new(widths.original_width, widths.target_width)?;
    build(source_rows, &resampler)
}
