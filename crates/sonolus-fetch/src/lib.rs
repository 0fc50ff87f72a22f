//! Chart Retrieval Library
//!
//! This library resolves chart identifiers to their hosting source, fetches
//! chart metadata and gzip-compressed level data from that source's Sonolus
//! API, and downloads the associated visual assets (a cover image resized to
//! a fixed 512×512 square and a background image copied verbatim).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use sonolus_fetch::{ChartFetcher, FetchConfig};
//!
//! # async fn example() -> sonolus_fetch::Result<()> {
//! let fetcher = ChartFetcher::new(FetchConfig::default())?;
//!
//! // Identifier prefixes select the hosting source.
//! let source = fetcher.resolve_source("ptlv-abc123")?;
//!
//! let info = fetcher.fetch_level_info(&source, "ptlv-abc123").await?;
//! let data = fetcher.fetch_level_data(&source, &info).await?;
//! println!("{} entities", data.entities.len());
//!
//! // Asset downloads are independent and may run concurrently.
//! let dest = Path::new("charts/ptlv-abc123");
//! fetcher.download_cover(&source, &info, dest).await?;
//! fetcher.download_background(&source, &info, dest).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Prefix-based source resolution**: an ordered, immutable registry maps
//!   identifier prefixes to known hosts and is the extension point for new ones
//! - **Single-shot network calls**: one GET per operation, no retry, no cache;
//!   callers own concurrency, backpressure and cancellation
//! - **Transparent decompression**: level data is decoded from gzip-compressed
//!   JSON into a structured document
//! - **Asset transforms**: covers are decoded (PNG/JPEG auto-detect), stretched
//!   to 512×512 with bilinear resampling and re-encoded as lossless PNG;
//!   backgrounds are written byte-for-byte
//! - **Async/await**: full async support with the Tokio runtime

pub mod fetch;

// Re-export commonly used types for convenience
pub use fetch::{
    ChartFetcher, FetchConfig, FetchError, FileOperation, HttpClient, LevelData, LevelInfo,
    Result, Source, SourceRegistry,
};
