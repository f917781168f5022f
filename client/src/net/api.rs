//! REST helpers for reading CMS collections through the site server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, raced against
//! [`FETCH_TIMEOUT`] so a hung content service cannot pin a page in its
//! loading state.
//! Server-side (SSR): stubs returning an error since pages only query
//! content after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with display strings. Page binders log the
//! failure and fall back to the empty state; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::types::{Collection, EventInfo, GalleryItem, first_record};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ItemsResponse;

/// Upper bound on a single collection query from the browser.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

#[cfg(any(test, feature = "hydrate"))]
fn collection_endpoint(collection: Collection) -> String {
    format!("/api/cms/{collection}")
}

#[cfg(any(test, feature = "hydrate"))]
fn fetch_failed_message(collection: Collection, status: u16) -> String {
    format!("{collection} query failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn fetch_timed_out_message(collection: Collection) -> String {
    format!("{collection} query timed out after {}s", FETCH_TIMEOUT.as_secs())
}

/// Decode a proxy `{ "items": [...] }` body. A missing `items` key is an empty list.
#[cfg(any(test, feature = "hydrate"))]
fn decode_items<T: DeserializeOwned>(collection: Collection, body: &str) -> Result<Vec<T>, String> {
    serde_json::from_str::<ItemsResponse<T>>(body)
        .map(|response| response.items)
        .map_err(|e| format!("{collection} response decode failed: {e}"))
}

/// Fetch every record of `collection` in content-service order.
///
/// # Errors
///
/// Returns an error string if the request fails, times out, the server
/// responds with a non-OK status, or the body cannot be decoded.
pub async fn fetch_all<T: DeserializeOwned>(collection: Collection) -> Result<Vec<T>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = collection_endpoint(collection);
        let request = async move {
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(fetch_failed_message(collection, resp.status()));
            }
            let text = resp.text().await.map_err(|e| e.to_string())?;
            decode_items(collection, &text)
        };
        with_timeout(collection, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = collection;
        Err("not available on server".to_owned())
    }
}

/// Fetch the gallery photos, unsorted.
///
/// # Errors
///
/// See [`fetch_all`].
pub async fn fetch_gallery() -> Result<Vec<GalleryItem>, String> {
    fetch_all(Collection::EventGallery).await
}

/// Fetch the event record. Only the first `hackathonevents` record is kept.
///
/// # Errors
///
/// See [`fetch_all`].
pub async fn fetch_event() -> Result<Option<EventInfo>, String> {
    fetch_all(Collection::HackathonEvents).await.map(first_record)
}

#[cfg(feature = "hydrate")]
async fn with_timeout<T>(
    collection: Collection,
    request: impl std::future::Future<Output = Result<T, String>>,
) -> Result<T, String> {
    use futures::future::{Either, select};

    let request = std::pin::pin!(request);
    let timer = std::pin::pin!(gloo_timers::future::sleep(FETCH_TIMEOUT));
    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(fetch_timed_out_message(collection)),
    }
}
