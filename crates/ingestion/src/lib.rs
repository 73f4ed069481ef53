//! Scanline ingestion library.
//!
//! Turns the startup source file into the resampled table:
//!
//! - `source`: CSV parsing into `(depth, pixels)` rows
//! - `resample`: anti-aliased width conversion of a single row
//! - `builder`: applies the resampler to every row, all-or-nothing
//!
//! Persisting the table is left to the caller.

pub mod builder;
pub mod resample;
pub mod source;

// Re-exports
pub use builder::{build, resample_all};
pub use resample::Resampler;
pub use source::{load_source, parse_source};
