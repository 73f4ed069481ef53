//! The row store behind the query paths.

use async_trait::async_trait;

use frames_common::{FramesResult, ResampledTable, Scanline};

/// Persisted table of resampled scanlines.
///
/// Rows come back in the order they were written ("persisted order").
/// Depths are not unique, so lookups return every matching row.
#[async_trait]
pub trait FrameStore: Send + Sync {
    /// Replace the whole table with `table`, atomically.
    ///
    /// Readers see either the previous table or the new one, never a mix.
    async fn replace_all(&self, table: &ResampledTable) -> FramesResult<()>;

    /// Rows with `depth_min <= depth <= depth_max`.
    async fn range(&self, depth_min: f64, depth_max: f64) -> FramesResult<Vec<Scanline>>;

    /// Rows whose depth equals `depth` exactly.
    async fn exact(&self, depth: f64) -> FramesResult<Vec<Scanline>>;

    /// Release the underlying handle. Later calls fail with a storage error.
    async fn close(&self);
}
