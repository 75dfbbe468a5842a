use serde_json::json;

mod common;
use common::utils::spawn_app;
use common::sports_helpers::{create_event, get_json, post_json};

#[tokio::test]
async fn create_event_applies_defaults() {
    // Arrange
    let test_app = spawn_app().await;

    // Act
    let body = post_json(&test_app, "/events", json!({
        "name": "Vishwakarandak 25",
        "start_date": "2025-02-01"
    })).await;

    // Assert
    assert_eq!(body["message"], "Event added successfully");
    let events = get_json(&test_app, "/events").await;
    let event = &events.as_array().expect("Expected an array")[0];
    assert_eq!(event["name"], "Vishwakarandak 25");
    assert_eq!(event["start_date"], "2025-02-01");
    assert_eq!(event["status"], "upcoming");
    assert_eq!(event["total_teams"], 0);
    assert!(event["end_date"].is_null());
}

#[tokio::test]
async fn events_are_listed_by_start_date_descending() {
    let test_app = spawn_app().await;
    let older = create_event(&test_app, "Winter Cup", "2024-12-01").await;
    let newer = create_event(&test_app, "Spring Cup", "2025-04-01").await;

    let events = get_json(&test_app, "/events").await;

    let ids: Vec<i64> = events
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![newer, older]);
}
