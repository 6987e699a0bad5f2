//! JSON configuration file.
//!
//! ```json
//! {
//!   "api_url": "https://example.org/omeka",
//!   "namespaces": { "ex": "http://example.org/ns#" },
//!   "output": { "directory": "rdf" },
//!   "format": "turtle"
//! }
//! ```
//!
//! Every key is optional. `namespaces` is layered over
//! [`NamespaceTable::standard`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_PER_PAGE;
use crate::error::ConfigError;
use crate::model::NamespaceTable;
use crate::persist::{Format, OutputLayout};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: Option<String>,
    pub key_identity: Option<String>,
    pub key_credential: Option<String>,
    pub per_page: u32,
    /// Extra or overriding prefixes.
    pub namespaces: NamespaceTable,
    pub output: OutputLayout,
    pub format: Format,
    /// Write one graph for all categories instead of one per category.
    pub combined: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: None,
            key_identity: None,
            key_credential: None,
            per_page: DEFAULT_PER_PAGE,
            namespaces: NamespaceTable::empty(),
            output: OutputLayout::default(),
            format: Format::default(),
            combined: false,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The table handed to the transformers: standard prefixes plus ours.
    pub fn namespace_table(&self) -> NamespaceTable {
        NamespaceTable::standard().merged(&self.namespaces)
    }
}
