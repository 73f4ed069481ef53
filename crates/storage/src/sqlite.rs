//! SQLite-backed frame store.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;

use frames_common::{FramesError, FramesResult, ResampledTable, Scanline, TableName};

use crate::store::FrameStore;

/// Frames table in a SQLite database.
///
/// Each row is stored as `(seq, depth, pixels)` where `seq` is the row's
/// position in the source and `pixels` is the samples packed as
/// little-endian `f64`.
pub struct SqliteFrameStore {
    pool: SqlitePool,
    table: TableName,
}

impl SqliteFrameStore {
    /// Open (creating if needed) the database at `database_url`.
    pub async fn connect(database_url: &str, table: TableName) -> FramesResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| FramesError::Storage(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true);

        // Every in-memory connection would otherwise see its own empty database.
        let in_memory = database_url.contains(":memory:");
        if !in_memory {
            create_parent_dir(options.get_filename()).await?;
        }

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(8)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| FramesError::Storage(format!("Connection failed: {}", e)))?;

        Ok(Self { pool, table })
    }

    pub fn table(&self) -> &TableName {
        &self.table
    }

    fn select_sql(&self, predicate: &str) -> String {
        format!(
            "SELECT depth, pixels FROM {} WHERE {} ORDER BY seq",
            self.table.quoted(),
            predicate
        )
    }

    async fn fetch(&self, sql: &str, binds: &[f64]) -> FramesResult<Vec<Scanline>> {
        let mut query = sqlx::query_as::<_, FrameRow>(sql);
        for value in binds {
            query = query.bind(*value);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| FramesError::Storage(format!("Query failed: {}", e)))?;

        rows.into_iter().map(Scanline::try_from).collect()
    }
}

#[async_trait]
impl FrameStore for SqliteFrameStore {
    async fn replace_all(&self, table: &ResampledTable) -> FramesResult<()> {
        let name = self.table.quoted();
        let index = format!("\"{}_depth_idx\"", self.table.as_str());

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| FramesError::Storage(format!("Transaction failed: {}", e)))?;

        let schema = [
            format!("DROP TABLE IF EXISTS {}", name),
            format!(
                "CREATE TABLE {} (seq INTEGER PRIMARY KEY, depth REAL NOT NULL, pixels BLOB NOT NULL)",
                name
            ),
            format!("CREATE INDEX {} ON {} (depth)", index, name),
        ];
        for statement in &schema {
            sqlx::query(statement)
                .execute(&mut *tx)
                .await
                .map_err(|e| FramesError::Storage(format!("Migration failed: {}", e)))?;
        }

        let insert = format!("INSERT INTO {} (seq, depth, pixels) VALUES (?, ?, ?)", name);
        for (seq, row) in table.rows().iter().enumerate() {
            sqlx::query(&insert)
                .bind(seq as i64)
                .bind(row.depth)
                .bind(encode_pixels(&row.pixels))
                .execute(&mut *tx)
                .await
                .map_err(|e| FramesError::Storage(format!("Insert failed: {}", e)))?;
        }

        tx.commit()
            .await
            .map_err(|e| FramesError::Storage(format!("Commit failed: {}", e)))?;

        Ok(())
    }

    async fn range(&self, depth_min: f64, depth_max: f64) -> FramesResult<Vec<Scanline>> {
        let sql = self.select_sql("depth >= ? AND depth <= ?");
        self.fetch(&sql, &[depth_min, depth_max]).await
    }

    async fn exact(&self, depth: f64) -> FramesResult<Vec<Scanline>> {
        let sql = self.select_sql("depth = ?");
        self.fetch(&sql, &[depth]).await
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

/// Database row representation
#[derive(FromRow)]
struct FrameRow {
    depth: f64,
    pixels: Vec<u8>,
}

impl TryFrom<FrameRow> for Scanline {
    type Error = FramesError;

    fn try_from(row: FrameRow) -> FramesResult<Self> {
        Ok(Scanline::new(row.depth, decode_pixels(&row.pixels)?))
    }
}

/// Pack samples as little-endian `f64`.
pub fn encode_pixels(pixels: &[f64]) -> Vec<u8> {
    pixels.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Unpack little-endian `f64` samples.
pub fn decode_pixels(bytes: &[u8]) -> FramesResult<Vec<f64>> {
    if bytes.len() % 8 != 0 {
        return Err(FramesError::Storage(format!(
            "pixel blob of {} bytes is not a whole number of samples",
            bytes.len()
        )));
    }

    Ok(bytes
        .chunks_exact(8)
        .map(|chunk| {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            f64::from_le_bytes(buf)
        })
        .collect())
}

async fn create_parent_dir(path: &Path) -> FramesResult<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| FramesError::Storage(format!("Cannot create {}: {}", dir.display(), e))),
        _ => Ok(()),
    }
}
