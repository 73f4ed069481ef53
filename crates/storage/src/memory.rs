//! In-process frame store.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use frames_common::{FramesError, FramesResult, ResampledTable, Scanline};

use crate::store::FrameStore;

/// Frame store held in memory, with the same ordering and matching rules
/// as [`crate::SqliteFrameStore`].
#[derive(Default)]
pub struct MemoryFrameStore {
    rows: RwLock<Vec<Scanline>>,
    closed: AtomicBool,
}

impl MemoryFrameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with `rows`, in order.
    pub fn with_rows(rows: Vec<Scanline>) -> Self {
        Self {
            rows: RwLock::new(rows),
            closed: AtomicBool::new(false),
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    fn ensure_open(&self) -> FramesResult<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(FramesError::Storage("store is closed".to_string()));
        }
        Ok(())
    }

    async fn select(&self, keep: impl Fn(f64) -> bool) -> FramesResult<Vec<Scanline>> {
        self.ensure_open()?;
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|r| keep(r.depth)).cloned().collect())
    }
}

#[async_trait]
impl FrameStore for MemoryFrameStore {
    async fn replace_all(&self, table: &ResampledTable) -> FramesResult<()> {
        self.ensure_open()?;
        let mut rows = self.rows.write().await;
        *rows = table.rows().to_vec();
        Ok(())
    }

    async fn range(&self, depth_min: f64, depth_max: f64) -> FramesResult<Vec<Scanline>> {
        self.select(|d| depth_min <= d && d <= depth_max).await
    }

    async fn exact(&self, depth: f64) -> FramesResult<Vec<Scanline>> {
        self.select(|d| d == depth).await
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }
}
