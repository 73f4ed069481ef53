//! Service configuration from flags and environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use frames_common::{
    FramesError, FramesResult, ScanlineWidths, TableName, DEFAULT_ORIGINAL_WIDTH,
    DEFAULT_TARGET_WIDTH,
};

/// Scanline frames API server
#[derive(Parser, Debug, Clone)]
#[command(name = "frames-api")]
#[command(about = "Serves resampled sonar scanlines as JSON rows and false-color PNGs")]
pub struct FramesConfig {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:5000", env = "FRAMES_LISTEN_ADDR")]
    pub listen: String,

    /// SQLite database URL
    #[arg(
        long,
        default_value = "sqlite://data/database/image_data.db",
        env = "DATABASE_URL"
    )]
    pub database_url: String,

    /// Table holding the resampled rows
    #[arg(long, default_value = "resized_images", env = "FRAMES_TABLE")]
    pub table: TableName,

    /// CSV file ingested at startup
    #[arg(long, default_value = "data/csv/img.csv", env = "FRAMES_SOURCE")]
    pub source: PathBuf,

    /// Pixel count of every source row
    #[arg(long, default_value_t = DEFAULT_ORIGINAL_WIDTH, env = "FRAMES_ORIGINAL_WIDTH")]
    pub original_width: usize,

    /// Pixel count of every persisted row
    #[arg(long, default_value_t = DEFAULT_TARGET_WIDTH, env = "FRAMES_TARGET_WIDTH")]
    pub target_width: usize,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,
}

impl FramesConfig {
    pub fn widths(&self) -> FramesResult<ScanlineWidths> {
        ScanlineWidths::new(self.original_width, self.target_width)
    }

    pub fn listen_addr(&self) -> FramesResult<SocketAddr> {
        self.listen
            .parse()
            .map_err(|e| FramesError::InvalidConfig(format!("listen address '{}': {}", self.listen, e)))
    }
}
