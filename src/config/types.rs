// Configuration type definitions

use serde::Deserialize;

use crate::groups::{IngestPolicy, RelationMode};

pub const DEFAULT_PAGE_SIZE: usize = 36;

/// Browsing configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct BrowseConfig {
    /// Entries per page of the frequency ranking
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Relation mode used when none is given
    #[serde(default)]
    pub default_mode: RelationMode,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for BrowseConfig {
    fn default() -> Self {
        BrowseConfig {
            page_size: DEFAULT_PAGE_SIZE,
            default_mode: RelationMode::Similar,
        }
    }
}

/// Dataset configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetConfig {
    #[serde(default)]
    pub policy: IngestPolicy,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub browse: BrowseConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
}
