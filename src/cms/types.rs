//! CMS types: errors and the content-source seam.

use client::net::types::{Collection, UnknownCollection};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by content-service operations.
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// A required configuration variable is not set.
    #[error("missing config: env var {var} not set")]
    MissingConfig { var: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to the content service failed or timed out.
    #[error("content service request failed: {0}")]
    ServiceRequest(String),

    /// The content service returned a non-success HTTP status.
    #[error("content service response error: status {status}")]
    ServiceResponse { status: u16, body: String },

    /// The content service response body could not be deserialized.
    #[error("content service response parse failed: {0}")]
    ResponseParse(String),

    /// A fixture file exists but could not be read.
    #[error("fixture read failed: {path}: {message}")]
    FixtureRead { path: String, message: String },

    /// The requested collection is not one the site serves.
    #[error("unknown collection: {0}")]
    UnknownCollection(String),
}

impl CmsError {
    /// Stable machine-readable code for API error bodies and logs.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::MissingConfig { .. } => "E_MISSING_CONFIG",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::ServiceRequest(_) => "E_SERVICE_REQUEST",
            Self::ServiceResponse { .. } => "E_SERVICE_RESPONSE",
            Self::ResponseParse(_) => "E_RESPONSE_PARSE",
            Self::FixtureRead { .. } => "E_FIXTURE_READ",
            Self::UnknownCollection(_) => "E_UNKNOWN_COLLECTION",
        }
    }

    /// Whether retrying the same query could succeed. Nothing retries today;
    /// the flag is logged so operators can tell outages from bad config.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::ServiceRequest(_) | Self::ServiceResponse { status: 429 | 500..=599, .. })
    }
}

impl From<UnknownCollection> for CmsError {
    fn from(err: UnknownCollection) -> Self {
        Self::UnknownCollection(err.0)
    }
}

// =============================================================================
// CONTENT SOURCE
// =============================================================================

/// Read-only access to named CMS collections.
///
/// Implementations return raw records in service order; typed decoding
/// happens in [`super::fetch_all`].
#[async_trait::async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch every record of `collection` in one round trip.
    async fn query(&self, collection: Collection) -> Result<Vec<serde_json::Value>, CmsError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
