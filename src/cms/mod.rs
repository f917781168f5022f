//! CMS: read-only access to the site's content collections.
//!
//! DESIGN
//! ======
//! `ContentSource` returns raw JSON records for a collection. `CmsClient`
//! dispatches to the HTTP content service or to local fixture files based on
//! `CMS_PROVIDER`. Typed decoding happens per record in `fetch_all`, so one
//! malformed record never hides the rest of the collection.

pub mod config;
pub mod fixture;
pub mod http;
pub mod types;

use client::net::types::{Collection, ItemsResponse, first_record};
use serde::de::DeserializeOwned;

use config::{CmsConfig, CmsProviderKind, CmsSourceConfig};
pub use types::ContentSource;
use types::CmsError;

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

pub struct CmsClient {
    inner: CmsProvider,
}

enum CmsProvider {
    Http(http::HttpContentClient),
    Fixture(fixture::FixtureContentClient),
}

impl CmsClient {
    /// Build a CMS client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if config is missing or invalid, or if the HTTP
    /// client cannot be built.
    pub fn from_env() -> Result<Self, CmsError> {
        let config = CmsConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build a CMS client from typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: CmsConfig) -> Result<Self, CmsError> {
        tracing::debug!(provider = config.provider().as_str(), "building content source");
        let inner = match config.source {
            CmsSourceConfig::Http { base_url, api_key, timeouts } => {
                CmsProvider::Http(http::HttpContentClient::new(base_url, api_key, timeouts)?)
            }
            CmsSourceConfig::Fixture { dir } => CmsProvider::Fixture(fixture::FixtureContentClient::new(dir)),
        };
        Ok(Self { inner })
    }

    /// Short provider label for startup logs.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        match &self.inner {
            CmsProvider::Http(_) => CmsProviderKind::Http.as_str(),
            CmsProvider::Fixture(_) => CmsProviderKind::Fixture.as_str(),
        }
    }
}

#[async_trait::async_trait]
impl ContentSource for CmsClient {
    async fn query(&self, collection: Collection) -> Result<Vec<serde_json::Value>, CmsError> {
        match &self.inner {
            CmsProvider::Http(c) => c.query(collection).await,
            CmsProvider::Fixture(c) => c.query(collection).await,
        }
    }
}

// =============================================================================
// TYPED QUERIES
// =============================================================================

/// Fetch every record of `collection`, decoded as `T`, in service order.
///
/// Records that fail to decode are skipped with a warning.
///
/// # Errors
///
/// Returns the source's error if the query itself fails.
pub async fn fetch_all<T: DeserializeOwned>(
    source: &dyn ContentSource,
    collection: Collection,
) -> Result<Vec<T>, CmsError> {
    let raw = source.query(collection).await?;
    let total = raw.len();
    let records: Vec<T> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| decode_record(collection, index, value))
        .collect();
    tracing::debug!(%collection, total, count = records.len(), "collection fetched");
    Ok(records)
}

/// Fetch the first record of `collection`, if any.
///
/// Later records are never consulted: an undecodable first record yields
/// `None`, not the second record.
///
/// # Errors
///
/// Returns the source's error if the query itself fails.
pub async fn fetch_first<T: DeserializeOwned>(
    source: &dyn ContentSource,
    collection: Collection,
) -> Result<Option<T>, CmsError> {
    let raw = source.query(collection).await?;
    let total = raw.len();
    let record = first_record(raw).and_then(|value| decode_record(collection, 0, value));
    tracing::debug!(%collection, total, found = record.is_some(), "first record fetched");
    Ok(record)
}

fn decode_record<T: DeserializeOwned>(collection: Collection, index: usize, value: serde_json::Value) -> Option<T> {
    match serde_json::from_value::<T>(value) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(%collection, index, error = %e, "skipping undecodable record");
            None
        }
    }
}

/// Parse a `{ "items": [...] }` body into raw records.
pub(crate) fn parse_items(json: &str) -> Result<Vec<serde_json::Value>, CmsError> {
    let body: ItemsResponse<serde_json::Value> =
        serde_json::from_str(json).map_err(|e| CmsError::ResponseParse(e.to_string()))?;
    Ok(body.items)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
