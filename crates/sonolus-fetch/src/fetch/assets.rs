//! Cover and background asset download
//!
//! Two independent operations sharing a destination directory. The directory
//! is created (including parents) before either writes; creation is
//! idempotent and safe under concurrent invocation. They write distinct
//! filenames, so running both at once is safe.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use tokio::fs;
use tracing::debug;

use crate::fetch::error::{FetchError, FileOperation, Result};
use crate::fetch::http::{HttpClient, resolve_url};
use crate::fetch::model::LevelInfo;
use crate::fetch::registry::Source;

/// Edge length of the square cover written by [`download_cover`]
pub const COVER_SIZE: u32 = 512;

/// Download the cover image and write it as `{dest_dir}/cover.png`
///
/// The response body is decoded with format auto-detection (PNG and JPEG),
/// stretched to exactly 512×512 with bilinear resampling regardless of the
/// source aspect ratio, drawn over a fresh RGBA canvas, and re-encoded as
/// lossless PNG. Returns the path of the written file.
pub async fn download_cover(
    http: &HttpClient,
    source: &Source,
    level: &LevelInfo,
    dest_dir: &Path,
) -> Result<PathBuf> {
    let url = resolve_url(source, &level.cover.url)?;
    let body = http.get_bytes(url.as_str()).await?;

    let decoded = image::load_from_memory(&body).map_err(|e| FetchError::Decode {
        url: url.to_string(),
        source: Box::new(e),
    })?;

    debug!(
        "resizing cover for '{}' from {}x{}",
        level.name,
        decoded.width(),
        decoded.height()
    );

    let resized = decoded.resize_exact(COVER_SIZE, COVER_SIZE, FilterType::Triangle);
    let mut canvas = RgbaImage::new(COVER_SIZE, COVER_SIZE);
    imageops::overlay(&mut canvas, &resized.to_rgba8(), 0, 0);

    ensure_dest_dir(dest_dir).await?;
    let dest = dest_dir.join("cover.png");

    let mut encoded = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
        .map_err(|e| FetchError::FileSystem {
            path: dest.clone(),
            operation: FileOperation::Write,
            source: std::io::Error::other(e),
        })?;

    fs::write(&dest, &encoded)
        .await
        .map_err(|e| FetchError::FileSystem {
            path: dest.clone(),
            operation: FileOperation::Write,
            source: e,
        })?;

    debug!("wrote cover to {}", dest.display());
    Ok(dest)
}

/// Download the background image and write it as `{dest_dir}/background.png`
///
/// The bytes are copied verbatim: no decode, no format validation. Whatever
/// the server returns is written under the `.png` name. Metadata without a
/// background entry fails with [`FetchError::MissingBackground`]. Returns the
/// path of the written file.
pub async fn download_background(
    http: &HttpClient,
    source: &Source,
    level: &LevelInfo,
    dest_dir: &Path,
) -> Result<PathBuf> {
    let image_ref = level
        .background_image()
        .ok_or_else(|| FetchError::MissingBackground {
            chart: level.name.clone(),
        })?;

    let url = resolve_url(source, &image_ref.url)?;
    let body = http.get_bytes(url.as_str()).await?;

    ensure_dest_dir(dest_dir).await?;
    let dest = dest_dir.join("background.png");

    fs::write(&dest, &body)
        .await
        .map_err(|e| FetchError::FileSystem {
            path: dest.clone(),
            operation: FileOperation::Write,
            source: e,
        })?;

    debug!("wrote background to {} ({} bytes)", dest.display(), body.len());
    Ok(dest)
}

async fn ensure_dest_dir(dest_dir: &Path) -> Result<()> {
    fs::create_dir_all(dest_dir)
        .await
        .map_err(|e| FetchError::FileSystem {
            path: dest_dir.to_path_buf(),
            operation: FileOperation::CreateDir,
            source: e,
        })
}
