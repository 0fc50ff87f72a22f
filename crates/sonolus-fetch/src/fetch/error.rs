//! Error types for the retrieval pipeline.
//!
//! Each variant is a distinct error *kind* carrying enough context for a
//! caller to handle it programmatically; the `Display` strings are a
//! presentation view over the kind, not part of the contract.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the retrieval pipeline
#[derive(Error, Debug)]
pub enum FetchError {
    /// The chart identifier matches no registered source prefix
    #[error("no registered source matches chart id '{chart_id}'")]
    UnknownSource { chart_id: String },

    /// Transport-level failure (DNS, TCP, TLS) reaching a host
    #[error("could not connect to '{url}'")]
    Connectivity {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The host answered with a non-success status
    #[error("'{url}' returned HTTP {status}")]
    NotFound { url: String, status: u16 },

    /// A relative URL from the metadata could not be resolved
    #[error("invalid relative URL '{reference}'")]
    InvalidUrl {
        reference: String,
        #[source]
        source: url::ParseError,
    },

    /// The level metadata carries no background entry to download
    #[error("level '{chart}' has no background entry")]
    MissingBackground { chart: String },

    /// Response body failed to decode (JSON, gzip stream, or raster image)
    #[error("failed to decode response from '{url}'")]
    Decode {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Local file system failure while writing output assets
    #[error("file operation failed while {operation} '{path}'")]
    FileSystem {
        path: PathBuf,
        operation: FileOperation,
        #[source]
        source: std::io::Error,
    },

    /// Invalid client configuration
    #[error("invalid configuration: {message}")]
    Configuration { message: String },
}

/// Types of file operations for error context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Write,
    Create,
    CreateDir,
}

impl std::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOperation::Write => write!(f, "writing"),
            FileOperation::Create => write!(f, "creating"),
            FileOperation::CreateDir => write!(f, "creating directory"),
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;

impl FetchError {
    /// Get error category for metrics and logging
    pub fn category(&self) -> &'static str {
        match self {
            FetchError::UnknownSource { .. } => "unknown_source",
            FetchError::Connectivity { .. } => "connectivity",
            FetchError::NotFound { .. } => "not_found",
            FetchError::InvalidUrl { .. } => "invalid_url",
            FetchError::MissingBackground { .. } => "missing_background",
            FetchError::Decode { .. } => "decode",
            FetchError::FileSystem { .. } => "file_system",
            FetchError::Configuration { .. } => "configuration",
        }
    }
}
