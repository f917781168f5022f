//! Content service HTTP client.
//!
//! Thin wrapper over `GET {base}/collections/{collection}/items`. Body
//! parsing lives in [`super::parse_items`].

use std::time::Duration;

use client::net::types::Collection;

use super::config::CmsTimeouts;
use super::types::{CmsError, ContentSource};

pub struct HttpContentClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpContentClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: String, api_key: Option<String>, timeouts: CmsTimeouts) -> Result<Self, CmsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| CmsError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string(), api_key })
    }

    fn items_url(&self, collection: Collection) -> String {
        format!("{}/collections/{collection}/items", self.base_url)
    }
}

#[async_trait::async_trait]
impl ContentSource for HttpContentClient {
    async fn query(&self, collection: Collection) -> Result<Vec<serde_json::Value>, CmsError> {
        let mut request = self.http.get(self.items_url(collection));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CmsError::ServiceRequest(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CmsError::ServiceRequest(e.to_string()))?;

        if !status.is_success() {
            return Err(CmsError::ServiceResponse { status: status.as_u16(), body: text });
        }

        super::parse_items(&text)
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
