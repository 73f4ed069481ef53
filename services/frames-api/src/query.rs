//! Read paths over the persisted frames table.

use std::sync::Arc;

use frames_common::{FramesError, FramesResult, Scanline};
use renderer::{colorize, Colormap};
use storage::FrameStore;

/// Message carried by every "no rows" outcome.
pub const NO_DATA_MESSAGE: &str = "No data found for the given depth range.";

/// Range listing and single-row rendering against a frame store.
///
/// Holds no state of its own; every call goes to the store.
#[derive(Clone)]
pub struct QueryService {
    store: Arc<dyn FrameStore>,
}

impl QueryService {
    pub fn new(store: Arc<dyn FrameStore>) -> Self {
        Self { store }
    }

    /// Every row with `depth_min <= depth <= depth_max`, in persisted order.
    pub async fn range_fetch(&self, depth_min: f64, depth_max: f64) -> FramesResult<Vec<Scanline>> {
        if !depth_min.is_finite() || !depth_max.is_finite() {
            return Err(FramesError::InvalidRange(
                "depth_min and depth_max must be finite numbers.".to_string(),
            ));
        }
        if depth_min > depth_max {
            return Err(FramesError::InvalidRange(
                "depth_min cannot be greater than depth_max.".to_string(),
            ));
        }

        let rows = self.store.range(depth_min, depth_max).await?;
        if rows.is_empty() {
            return Err(FramesError::NotFound(NO_DATA_MESSAGE.to_string()));
        }
        Ok(rows)
    }

    /// PNG of the first row at exactly `depth`.
    ///
    /// Unknown or missing colormap names render with JET.
    pub async fn point_render(&self, depth: f64, colormap_name: Option<&str>) -> FramesResult<Vec<u8>> {
        if !depth.is_finite() {
            return Err(FramesError::InvalidDepth(
                "Invalid or missing depth parameters.".to_string(),
            ));
        }

        let rows = self.store.exact(depth).await?;
        let row = rows
            .first()
            .ok_or_else(|| FramesError::NotFound(NO_DATA_MESSAGE.to_string()))?;

        colorize(&row.pixels, Colormap::from_name_or_default(colormap_name))
    }
}
