//! Fetch module
//!
//! This module contains the whole retrieval pipeline: source resolution,
//! metadata fetch, level-data decompression/decode, and asset download.

pub mod assets;
pub mod config;
pub mod error;
pub mod http;
pub mod level;
pub mod model;
pub mod registry;

// Re-export main types for convenience
pub use assets::{COVER_SIZE, download_background, download_cover};
pub use config::FetchConfig;
pub use error::{FetchError, FileOperation, Result};
pub use http::HttpClient;
pub use level::{fetch_level_data, fetch_level_info};
pub use model::{
    BackgroundItem, InfoResponse, LevelData, LevelDataEntity, LevelInfo, ResourceLocator, UseItem,
};
pub use registry::{Source, SourceRegistry};

use std::path::{Path, PathBuf};

/// Facade tying the pipeline together
///
/// Owns the source registry and the HTTP client. All methods take `&self`
/// and share no mutable state, so the independent operations (level data,
/// cover, background) may run concurrently from the same instance.
pub struct ChartFetcher {
    registry: SourceRegistry,
    http: HttpClient,
}

impl ChartFetcher {
    /// Create a fetcher with the default source table
    pub fn new(config: FetchConfig) -> Result<Self> {
        Ok(Self {
            registry: SourceRegistry::with_default_sources(),
            http: HttpClient::from_config(&config)?,
        })
    }

    /// Replace the source table, e.g. to inject fake sources in tests
    pub fn with_registry(mut self, registry: SourceRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Resolve a chart identifier to its hosting source
    pub fn resolve_source(&self, chart_id: &str) -> Result<Source> {
        self.registry.resolve(chart_id)
    }

    /// Fetch chart metadata from the source
    pub async fn fetch_level_info(&self, source: &Source, chart_id: &str) -> Result<LevelInfo> {
        level::fetch_level_info(&self.http, source, chart_id).await
    }

    /// Fetch and decode the gzip-compressed level data
    pub async fn fetch_level_data(&self, source: &Source, level: &LevelInfo) -> Result<LevelData> {
        level::fetch_level_data(&self.http, source, level).await
    }

    /// Download the cover, resized to 512×512, as `{dest_dir}/cover.png`
    pub async fn download_cover(
        &self,
        source: &Source,
        level: &LevelInfo,
        dest_dir: &Path,
    ) -> Result<PathBuf> {
        assets::download_cover(&self.http, source, level, dest_dir).await
    }

    /// Download the background verbatim as `{dest_dir}/background.png`
    pub async fn download_background(
        &self,
        source: &Source,
        level: &LevelInfo,
        dest_dir: &Path,
    ) -> Result<PathBuf> {
        assets::download_background(&self.http, source, level, dest_dir).await
    }
}
