//! False-color rendering of sonar scanlines.
//!
//! - Per-row min/max normalization to 8-bit intensity
//! - Fixed colormap lookup tables
//! - RGB PNG encoding

pub mod colorize;
pub mod colormap;
pub mod png;

pub use colorize::{apply_colormap, colorize, normalize_to_u8};
pub use colormap::{Color, Colormap, Lut};
pub use png::create_png_rgb;
