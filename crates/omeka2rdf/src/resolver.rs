//! Lookup of media records referenced from items.

use std::collections::HashMap;

use crate::error::FetchError;
use crate::record::Record;

/// Fetches the full media record behind an item's `o:media` reference.
pub trait MediaResolver {
    /// `Ok(None)` means the lookup succeeded but returned no content.
    fn fetch_media(&self, media_id: &str) -> Result<Option<Record>, FetchError>;
}

/// Resolver that never finds anything; items get no depiction statements.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMediaResolver;

impl MediaResolver for NoMediaResolver {
    fn fetch_media(&self, _media_id: &str) -> Result<Option<Record>, FetchError> {
        Ok(None)
    }
}

/// Resolver backed by already-loaded media records, keyed by `@id`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryMediaResolver {
    media: HashMap<String, Record>,
}

impl InMemoryMediaResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `records` by their `@id`; records without one are ignored.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let media = records
            .into_iter()
            .filter_map(|r| r.id().ok().map(|id| (id.to_string(), r.clone())))
            .collect();
        Self { media }
    }

    pub fn insert(&mut self, media_id: impl Into<String>, record: Record) {
        self.media.insert(media_id.into(), record);
    }
}

impl MediaResolver for InMemoryMediaResolver {
    fn fetch_media(&self, media_id: &str) -> Result<Option<Record>, FetchError> {
        Ok(self.media.get(media_id).cloned())
    }
}
