use super::*;

#[test]
fn collection_endpoint_uses_collection_id() {
    assert_eq!(collection_endpoint(Collection::EventGallery), "/api/cms/eventgallery");
    assert_eq!(collection_endpoint(Collection::HackathonEvents), "/api/cms/hackathonevents");
}

#[test]
fn fetch_failed_message_includes_collection_and_status() {
    assert_eq!(fetch_failed_message(Collection::EventGallery, 502), "eventgallery query failed: 502");
}

#[test]
fn fetch_timed_out_message_names_the_limit() {
    assert_eq!(
        fetch_timed_out_message(Collection::HackathonEvents),
        "hackathonevents query timed out after 15s"
    );
}

#[test]
fn decode_items_reads_gallery_body() {
    let body = r#"{"items":[{"_id":"a","displayOrder":2,"dateTaken":"2024-10-10T00:00:00Z"},{"_id":"b"}]}"#;
    let items: Vec<GalleryItem> = decode_items(Collection::EventGallery, body).unwrap();
    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(items[0].display_order, Some(2));
    let taken = items[0].date_taken.as_ref().map(crate::net::types::CmsDate::short_label);
    assert_eq!(taken.as_deref(), Some("Oct 10, 2024"));
}

#[test]
fn decode_items_reads_event_body() {
    let body = r#"{"items":[{"_id":"ev1","eventName":"FUSION 2025","maxTeamSize":4,"lunchIncluded":true}]}"#;
    let events: Vec<EventInfo> = decode_items(Collection::HackathonEvents, body).unwrap();
    let event = first_record(events).unwrap();
    assert_eq!(event.event_name.as_deref(), Some("FUSION 2025"));
    assert_eq!(event.max_team_size, Some(4));
    assert_eq!(event.lunch_included, Some(true));
}

#[test]
fn decode_items_missing_key_is_empty() {
    let items: Vec<GalleryItem> = decode_items(Collection::EventGallery, "{}").unwrap();
    assert!(items.is_empty());
}

#[test]
fn decode_items_rejects_malformed_body() {
    let err = decode_items::<GalleryItem>(Collection::EventGallery, "<html>").unwrap_err();
    assert!(err.starts_with("eventgallery response decode failed"));
}

#[test]
fn decode_items_reads_server_serialized_body() {
    let served = ItemsResponse {
        items: vec![serde_json::from_value::<GalleryItem>(serde_json::json!({
            "_id": "a",
            "caption": "Opening ceremony",
            "dateTaken": 1_759_968_000_000_i64,
            "displayOrder": 1
        }))
        .unwrap()],
    };
    let body = serde_json::to_string(&served).unwrap();
    let items: Vec<GalleryItem> = decode_items(Collection::EventGallery, &body).unwrap();
    assert_eq!(items, served.items);
}
