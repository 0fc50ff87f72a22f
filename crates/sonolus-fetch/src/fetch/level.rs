//! Level metadata and level data retrieval

use flate2::read::GzDecoder;
use tracing::debug;

use crate::fetch::error::{FetchError, Result};
use crate::fetch::http::{HttpClient, resolve_url};
use crate::fetch::model::{InfoResponse, LevelData, LevelInfo};
use crate::fetch::registry::Source;

/// Fetch chart metadata from `{base}/sonolus/levels/{chart_id}`
///
/// A non-success status is a miss ([`FetchError::NotFound`]); a 200 body that
/// is not a valid item envelope is a [`FetchError::Decode`].
pub async fn fetch_level_info(
    http: &HttpClient,
    source: &Source,
    chart_id: &str,
) -> Result<LevelInfo> {
    let url = format!("{}/sonolus/levels/{}", source.base_url(), chart_id);
    let body = http.get_bytes(&url).await?;

    let envelope: InfoResponse<LevelInfo> =
        serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            url: url.clone(),
            source: Box::new(e),
        })?;

    debug!("fetched metadata for '{}'", envelope.item.name);
    Ok(envelope.item)
}

/// Fetch and decode the gzip-compressed level data referenced by `level`
///
/// The data URL is resolved relative to the source's base URL. The body is
/// decompressed through a streaming gzip reader and decoded as JSON; a
/// failure in either step surfaces as [`FetchError::Decode`] with the
/// underlying cause chained.
pub async fn fetch_level_data(
    http: &HttpClient,
    source: &Source,
    level: &LevelInfo,
) -> Result<LevelData> {
    let url = resolve_url(source, &level.data.url)?;
    let body = http.get_bytes(url.as_str()).await?;

    let decoder = GzDecoder::new(body.as_slice());
    let data: LevelData = serde_json::from_reader(decoder).map_err(|e| FetchError::Decode {
        url: url.to_string(),
        source: Box::new(e),
    })?;

    debug!(
        "decoded level data for '{}': {} entities",
        level.name,
        data.entities.len()
    );
    Ok(data)
}
