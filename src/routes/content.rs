//! CMS proxy routes.
//!
//! `GET /api/cms/{collection}` answers `{ "items": [...] }` with records
//! decoded into the shared record types, so the browser only ever sees
//! records that will deserialize on its side too.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use client::net::types::{Collection, EventInfo, GalleryItem, ItemsResponse};
use serde::Serialize;

use crate::cms::types::CmsError;
use crate::cms::{fetch_all, fetch_first};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// A failed proxy request: status plus JSON error body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    fn not_configured() -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: ErrorBody { error: "E_CMS_NOT_CONFIGURED", message: "content service not configured".into() },
        }
    }
}

impl From<CmsError> for ApiError {
    fn from(err: CmsError) -> Self {
        Self { status: cms_error_to_status(&err), body: ErrorBody { error: err.error_code(), message: err.to_string() } }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// `GET /api/cms/:collection`: all records of a collection.
///
/// `hackathonevents` is trimmed to its first record.
pub async fn list_collection(State(state): State<AppState>, Path(name): Path<String>) -> Result<Response, ApiError> {
    let collection: Collection = name.parse().map_err(CmsError::from)?;
    let Some(cms) = state.cms.as_deref() else {
        tracing::warn!(%collection, "content query with no content source configured");
        return Err(ApiError::not_configured());
    };

    let response = match collection {
        Collection::EventGallery => {
            let items: Vec<GalleryItem> = fetch_all(cms, collection).await.inspect_err(|e| log_failure(collection, e))?;
            tracing::info!(%collection, count = items.len(), "content query");
            Json(ItemsResponse { items }).into_response()
        }
        Collection::HackathonEvents => {
            let event: Option<EventInfo> =
                fetch_first(cms, collection).await.inspect_err(|e| log_failure(collection, e))?;
            tracing::info!(%collection, count = usize::from(event.is_some()), "content query");
            Json(ItemsResponse { items: event.into_iter().collect() }).into_response()
        }
    };
    Ok(response)
}

fn log_failure(collection: Collection, err: &CmsError) {
    tracing::error!(%collection, error = %err, code = err.error_code(), retryable = err.retryable(), "content query failed");
}

/// HTTP status for a content-service failure seen by the browser.
fn cms_error_to_status(err: &CmsError) -> StatusCode {
    match err {
        CmsError::UnknownCollection(_) => StatusCode::NOT_FOUND,
        CmsError::ConfigParse(_) | CmsError::MissingConfig { .. } | CmsError::HttpClientBuild(_) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        CmsError::ServiceRequest(_)
        | CmsError::ServiceResponse { .. }
        | CmsError::ResponseParse(_)
        | CmsError::FixtureRead { .. } => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
