//! HTTP utilities
//!
//! Centralized HTTP client for the fetch operations. Every network call in
//! the pipeline is a single one-shot GET: no retry, no resume, no caching.
//! Callers needing bounded concurrency or backpressure impose it externally.

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::fetch::config::FetchConfig;
use crate::fetch::error::{FetchError, Result};
use crate::fetch::registry::Source;

/// HTTP client shared by the fetch operations
///
/// Timeout and user agent come from [`FetchConfig`] at construction and are
/// enforced at the transport layer. The client is cheap to clone and safe to
/// use from concurrent tasks.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client from fetch configuration
    pub fn from_config(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| FetchError::Configuration {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }

    /// Issue a single GET and return the whole response body
    ///
    /// Transport failures (DNS, TCP, TLS) map to [`FetchError::Connectivity`];
    /// any non-success status maps to [`FetchError::NotFound`] and the body is
    /// discarded. The response is released on every exit path.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {}", url);

        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|e| FetchError::Connectivity {
                    url: url.to_string(),
                    source: e,
                })?;

        let status = response.status();
        if !status.is_success() {
            debug!("GET {} -> {}", url, status);
            return Err(FetchError::NotFound {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Connectivity {
                url: url.to_string(),
                source: e,
            })?;

        debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(body.to_vec())
    }
}

/// Resolve a source-relative reference against the source's base URL
///
/// Standard relative-reference resolution; a malformed reference fails with
/// [`FetchError::InvalidUrl`] before any network call is made.
pub fn resolve_url(source: &Source, reference: &str) -> Result<Url> {
    let base_url = source.base_url();
    let base = Url::parse(&base_url).map_err(|e| FetchError::InvalidUrl {
        reference: base_url,
        source: e,
    })?;

    base.join(reference).map_err(|e| FetchError::InvalidUrl {
        reference: reference.to_string(),
        source: e,
    })
}
