//! Load record lists saved from the API as JSON files.

use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use crate::error::SourceError;
use crate::record::Record;

/// File names [`load_dir`] looks for.
pub const ITEMS_FILE: &str = "items.json";
pub const MEDIA_FILE: &str = "media.json";
pub const COLLECTIONS_FILE: &str = "item_sets.json";

/// The three record lists of one conversion run.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    pub items: Vec<Record>,
    pub media: Vec<Record>,
    pub collections: Vec<Record>,
}

/// Read a JSON array of records. Array entries that are not objects are
/// dropped with a warning.
pub fn load_records(path: &Path) -> Result<Vec<Record>, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let values: Vec<Value> = serde_json::from_str(&content).map_err(|source| SourceError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let total = values.len();
    let records: Vec<Record> = values
        .into_iter()
        .filter_map(|v| Record::try_from(v).ok())
        .collect();
    if records.len() != total {
        warn!(
            path = %path.display(),
            dropped = total - records.len(),
            "ignoring entries that are not JSON objects"
        );
    }
    Ok(records)
}

/// Load `items.json`, `media.json` and `item_sets.json` from `dir`.
/// A missing file yields an empty list.
pub fn load_dir(dir: &Path) -> Result<RecordSet, SourceError> {
    let load = |name: &str| -> Result<Vec<Record>, SourceError> {
        let path = dir.join(name);
        if !path.exists() {
            warn!(path = %path.display(), "input file not found, treating as empty");
            return Ok(Vec::new());
        }
        let records = load_records(&path)?;
        info!(path = %path.display(), count = records.len(), "loaded records");
        Ok(records)
    };

    Ok(RecordSet {
        items: load(ITEMS_FILE)?,
        media: load(MEDIA_FILE)?,
        collections: load(COLLECTIONS_FILE)?,
    })
}
