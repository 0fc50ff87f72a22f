//! Configuration types for the retrieval pipeline

use std::time::Duration;

/// Configuration for fetch operations
///
/// The timeout applies at the transport layer: there is no per-operation
/// deadline logic, each call is a single blocking-until-headers GET.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!("sonolus-fetch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
