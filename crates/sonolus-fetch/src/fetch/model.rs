//! Wire types for the Sonolus server API
//!
//! Field sets follow the server contract; anything this pipeline does not
//! interpret is either defaulted or ignored. All records are transient,
//! constructed per call and discarded after it.

use serde::{Deserialize, Serialize};

/// JSON envelope wrapping a single item, as returned by detail endpoints
/// such as `GET /sonolus/levels/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct InfoResponse<T> {
    pub item: T,
    #[serde(default)]
    pub description: String,
}

/// A hash + relative-URL pair pointing at a server resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceLocator {
    #[serde(default)]
    pub hash: String,
    pub url: String,
}

/// Reference to an item another item uses, e.g. a level's background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseItem<T> {
    #[serde(default)]
    pub use_default: bool,
    #[serde(default)]
    pub item: Option<T>,
}

/// Background entry nested inside level metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackgroundItem {
    #[serde(default)]
    pub name: String,
    pub image: ResourceLocator,
}

/// Level metadata returned by a source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelInfo {
    pub name: String,
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub rating: i32,
    pub title: String,
    #[serde(default)]
    pub artists: String,
    #[serde(default)]
    pub author: String,
    pub cover: ResourceLocator,
    pub bgm: ResourceLocator,
    pub data: ResourceLocator,
    #[serde(default)]
    pub use_background: Option<UseItem<BackgroundItem>>,
}

impl LevelInfo {
    /// Locator of the background image, if the metadata references one
    pub fn background_image(&self) -> Option<&ResourceLocator> {
        self.use_background
            .as_ref()
            .and_then(|use_background| use_background.item.as_ref())
            .map(|background| &background.image)
    }
}

/// Decoded gameplay data document
///
/// Treated as opaque by this pipeline: fields are carried through a
/// successful decode but never interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelData {
    #[serde(default)]
    pub bgm_offset: f64,
    pub entities: Vec<LevelDataEntity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDataEntity {
    #[serde(default)]
    pub archetype: String,
    #[serde(default)]
    pub data: serde_json::Value,
}
