use super::*;
use client::net::types::{EventInfo, GalleryItem};
use serde_json::json;

struct MockSource {
    result: Result<Vec<serde_json::Value>, u16>,
}

#[async_trait::async_trait]
impl ContentSource for MockSource {
    async fn query(&self, _collection: Collection) -> Result<Vec<serde_json::Value>, CmsError> {
        match &self.result {
            Ok(records) => Ok(records.clone()),
            Err(status) => Err(CmsError::ServiceResponse { status: *status, body: "down".into() }),
        }
    }
}

fn source(records: Vec<serde_json::Value>) -> MockSource {
    MockSource { result: Ok(records) }
}

#[tokio::test]
async fn fetch_all_keeps_service_order() {
    let src = source(vec![
        json!({ "_id": "a", "displayOrder": 2 }),
        json!({ "_id": "b" }),
        json!({ "_id": "c", "displayOrder": 1 }),
    ]);
    let items: Vec<GalleryItem> = fetch_all(&src, Collection::EventGallery).await.unwrap();
    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn fetch_all_skips_undecodable_records() {
    let src = source(vec![
        json!({ "_id": "a" }),
        json!({ "caption": "no id" }),
        json!("not an object"),
        json!({ "_id": "d", "caption": "" }),
    ]);
    let items: Vec<GalleryItem> = fetch_all(&src, Collection::EventGallery).await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].id, "d");
    assert_eq!(items[1].caption, None);
}

#[tokio::test]
async fn fetch_all_empty_collection() {
    let src = source(Vec::new());
    let items: Vec<GalleryItem> = fetch_all(&src, Collection::EventGallery).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn fetch_all_propagates_source_error() {
    let src = MockSource { result: Err(503) };
    let err = fetch_all::<GalleryItem>(&src, Collection::EventGallery).await.unwrap_err();
    assert!(matches!(err, CmsError::ServiceResponse { status: 503, .. }));
}

#[tokio::test]
async fn fetch_first_takes_only_first_record() {
    let src = source(vec![
        json!({ "_id": "ev1", "eventName": "FUSION 2025" }),
        json!({ "_id": "ev2", "eventName": "Other" }),
    ]);
    let event: Option<EventInfo> = fetch_first(&src, Collection::HackathonEvents).await.unwrap();
    let event = event.unwrap();
    assert_eq!(event.id, "ev1");
    assert_eq!(event.event_name.as_deref(), Some("FUSION 2025"));
}

#[tokio::test]
async fn fetch_first_empty_is_none() {
    let src = source(Vec::new());
    let event: Option<EventInfo> = fetch_first(&src, Collection::HackathonEvents).await.unwrap();
    assert!(event.is_none());
}

#[test]
fn parse_items_reads_items_array() {
    let items = parse_items(r#"{"items":[{"_id":"a"},{"_id":"b"}],"totalCount":2}"#).unwrap();
    assert_eq!(items.len(), 2);
}

#[test]
fn parse_items_missing_key_is_empty() {
    assert!(parse_items("{}").unwrap().is_empty());
}

#[test]
fn parse_items_rejects_malformed_json() {
    let err = parse_items("<html>").unwrap_err();
    assert!(matches!(err, CmsError::ResponseParse(_)));
}

#[test]
fn client_from_fixture_config() {
    let config = CmsConfig { source: CmsSourceConfig::Fixture { dir: "content".into() } };
    let client = CmsClient::from_config(config).unwrap();
    assert_eq!(client.provider_name(), "fixture");
}

#[test]
fn client_from_http_config() {
    let config = CmsConfig {
        source: CmsSourceConfig::Http {
            base_url: "http://127.0.0.1:9".into(),
            api_key: None,
            timeouts: config::CmsTimeouts { request_secs: 1, connect_secs: 1 },
        },
    };
    let client = CmsClient::from_config(config).unwrap();
    assert_eq!(client.provider_name(), "http");
}

#[tokio::test]
async fn fetch_first_never_falls_through_to_second_record() {
    let src = source(vec![
        json!({ "_id": 7, "eventDescription": "first record" }),
        json!({ "_id": "ev2", "eventDescription": "second record" }),
    ]);
    let event: Option<EventInfo> = fetch_first(&src, Collection::HackathonEvents).await.unwrap();
    assert!(event.is_none());
}

#[tokio::test]
async fn fetch_all_drops_unrepresentable_dates_but_keeps_record() {
    let src = source(vec![
        json!({ "_id": "good" }),
        json!({ "_id": "bad", "dateTaken": -70_000_000_000_000_i64 }),
    ]);
    let items: Vec<GalleryItem> = fetch_all(&src, Collection::EventGallery).await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].date_taken, None);
}
