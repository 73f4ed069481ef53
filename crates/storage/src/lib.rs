//! Storage for resampled scanline tables.
//!
//! Provides:
//! - The `FrameStore` trait used by the query paths and startup pipeline
//! - SQLite persistence via sqlx
//! - An in-memory store for tests and embedding

pub mod memory;
pub mod sqlite;
pub mod store;

pub use memory::MemoryFrameStore;
pub use sqlite::SqliteFrameStore;
pub use store::FrameStore;
