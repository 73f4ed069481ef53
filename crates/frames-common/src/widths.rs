//! Source and target scanline widths fixed at ingestion.

use crate::{FramesError, FramesResult};

/// Default width of scanlines in the source file.
pub const DEFAULT_ORIGINAL_WIDTH: usize = 200;

/// Default width scanlines are resampled to.
pub const DEFAULT_TARGET_WIDTH: usize = 150;

/// Pair of widths the resampling pipeline runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanlineWidths {
    pub original_width: usize,
    pub target_width: usize,
}

impl ScanlineWidths {
    /// Create a width pair. Both widths must be non-zero.
    pub fn new(original_width: usize, target_width: usize) -> FramesResult<Self> {
        if original_width == 0 {
            return Err(FramesError::InvalidConfig(
                "original_width must be greater than 0".to_string(),
            ));
        }
        if target_width == 0 {
            return Err(FramesError::InvalidConfig(
                "target_width must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            original_width,
            target_width,
        })
    }
}

impl Default for ScanlineWidths {
    fn default() -> Self {
        Self {
            original_width: DEFAULT_ORIGINAL_WIDTH,
            target_width: DEFAULT_TARGET_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let widths = ScanlineWidths::default();
        assert_eq!(widths.original_width, 200);
        assert_eq!(widths.target_width, 150);
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(ScanlineWidths::new(0, 150).is_err());
        assert!(ScanlineWidths::new(200, 0).is_err());
        assert!(ScanlineWidths::new(150, 200).is_ok());
    }
}
