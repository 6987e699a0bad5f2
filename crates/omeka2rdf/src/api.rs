//! Blocking client for the Omeka S REST API.

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::FetchError;
use crate::model::Category;
use crate::record::Record;
use crate::resolver::MediaResolver;

/// Default page size for list requests.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Access to one Omeka S installation.
pub struct OmekaClient {
    client: Client,
    base_url: String,
    per_page: u32,
    credentials: Option<(String, String)>,
}

impl OmekaClient {
    /// `base_url` is the site root; `/api/...` is appended to it.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            per_page: DEFAULT_PER_PAGE,
            credentials: None,
        }
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// API key pair, sent as `key_identity`/`key_credential` query parameters.
    pub fn with_credentials(mut self, identity: String, credential: String) -> Self {
        self.credentials = Some((identity, credential));
        self
    }

    /// URL of a list endpoint, e.g. `items` → `{base}/api/items`.
    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}/api/{}", self.base_url, resource)
    }

    /// Fetch every record of `resource`, page by page, until an empty page.
    pub fn fetch_all(&self, resource: &str) -> Result<Vec<Record>, FetchError> {
        let url = self.resource_url(resource);
        let mut records = Vec::new();
        let mut page: u32 = 1;
        loop {
            let mut query = vec![
                ("page", page.to_string()),
                ("per_page", self.per_page.to_string()),
            ];
            if let Some((identity, credential)) = &self.credentials {
                query.push(("key_identity", identity.clone()));
                query.push(("key_credential", credential.clone()));
            }

            let body = self.get_text(self.client.get(&url).query(&query), &url)?;
            let batch: Vec<Value> =
                serde_json::from_str(&body).map_err(|source| FetchError::Decode {
                    url: url.clone(),
                    source,
                })?;
            if batch.is_empty() {
                break;
            }
            debug!(resource, page, count = batch.len(), "fetched page");
            records.extend(batch.into_iter().filter_map(|v| Record::try_from(v).ok()));
            page += 1;
        }
        info!(resource, count = records.len(), "fetched records");
        Ok(records)
    }

    /// Fetch every record of one category. [`Category::Combined`] has no
    /// endpoint of its own and yields nothing.
    pub fn fetch_category(&self, category: Category) -> Result<Vec<Record>, FetchError> {
        match category.api_resource() {
            Some(resource) => self.fetch_all(resource),
            None => Ok(Vec::new()),
        }
    }

    fn get_text(
        &self,
        request: reqwest::blocking::RequestBuilder,
        url: &str,
    ) -> Result<String, FetchError> {
        let response = request.send().map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })
    }
}

impl MediaResolver for OmekaClient {
    /// GET the media `@id` itself; Omeka serves the JSON-LD record there.
    fn fetch_media(&self, media_id: &str) -> Result<Option<Record>, FetchError> {
        let mut request = self.client.get(media_id);
        if let Some((identity, credential)) = &self.credentials {
            request = request.query(&[("key_identity", identity), ("key_credential", credential)]);
        }
        let body = self.get_text(request, media_id)?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        let value: Value = serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            url: media_id.to_string(),
            source,
        })?;
        Ok(Record::try_from(value).ok())
    }
}
