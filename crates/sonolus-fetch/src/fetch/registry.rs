//! Source registry for resolving chart identifiers to hosting sources
//!
//! The registry is an ordered, immutable list of prefix registrations. The
//! first matching prefix wins, so overlapping prefixes are resolved by
//! declaration order. Registering a new host here is the designed extension
//! point for supporting additional sources.

use crate::fetch::error::{FetchError, Result};

/// A named remote host exposing the Sonolus chart-hosting API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Stable key, e.g. `"potato_leaves"`
    pub id: String,
    /// Display label
    pub name: String,
    /// Packed RGB accent color
    pub color: u32,
    /// Hostname, reached over https. An explicit `scheme://` prefix is
    /// honored as-is, which is how tests point a source at a local server.
    pub host: String,
}

impl Source {
    pub fn new<S: Into<String>>(id: S, name: S, color: u32, host: S) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color,
            host: host.into(),
        }
    }

    /// Base URL that requests against this source are resolved under
    pub fn base_url(&self) -> String {
        if self.host.contains("://") {
            self.host.clone()
        } else {
            format!("https://{}", self.host)
        }
    }
}

#[derive(Debug, Clone)]
struct SourceEntry {
    prefix: String,
    source: Source,
}

/// Ordered mapping of identifier prefixes to known sources
///
/// Owned by the caller (or by [`ChartFetcher`](crate::fetch::ChartFetcher));
/// there is no global table, so tests can inject fake sources freely.
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    entries: Vec<SourceEntry>,
}

impl SourceRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a source for an identifier prefix
    ///
    /// Builder-style so registrations chain fluently. Order matters: earlier
    /// registrations shadow later ones on overlapping prefixes.
    pub fn register<S: Into<String>>(mut self, prefix: S, source: Source) -> Self {
        self.entries.push(SourceEntry {
            prefix: prefix.into(),
            source,
        });
        self
    }

    /// Registry pre-populated with the known public hosts
    pub fn with_default_sources() -> Self {
        Self::new()
            .register(
                "ptlv-",
                Source::new(
                    "potato_leaves",
                    "Potato Leaves",
                    0x88cb7f,
                    "ptlv.sevenc7c.com",
                ),
            )
            .register(
                "chcy-",
                Source::new("chart_cyanvas", "Chart Cyanvas", 0x83ccd2, "cc.sevenc7c.com"),
            )
    }

    /// Resolve a chart identifier to its hosting source
    ///
    /// Matches the identifier against the registered prefixes in declaration
    /// order. An identifier that matches nothing yields
    /// [`FetchError::UnknownSource`]; no partially-valid `Source` escapes on
    /// that path, so a successful return always carries a usable host.
    pub fn resolve(&self, chart_id: &str) -> Result<Source> {
        self.entries
            .iter()
            .find(|entry| chart_id.starts_with(&entry.prefix))
            .map(|entry| entry.source.clone())
            .ok_or_else(|| FetchError::UnknownSource {
                chart_id: chart_id.to_string(),
            })
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::with_default_sources()
    }
}
