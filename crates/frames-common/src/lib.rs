//! Common types and utilities shared across the scanline frames crates.

pub mod error;
pub mod scanline;
pub mod table;
pub mod widths;

pub use error::{FramesError, FramesResult};
pub use scanline::{ResampledTable, Scanline};
pub use table::TableName;
pub use widths::{ScanlineWidths, DEFAULT_ORIGINAL_WIDTH, DEFAULT_TARGET_WIDTH};
