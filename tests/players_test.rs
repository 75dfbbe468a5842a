use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::spawn_app;
use common::sports_helpers::{
    create_event, create_match, create_player, create_team, get_json, insert_stat_line,
    post_json, put_json, set_player_record,
};

#[tokio::test]
async fn create_player_defaults_status_to_active() {
    // Arrange
    let test_app = spawn_app().await;
    let team_id = create_team(&test_app, "Falcons", "Cricket").await;

    // Act
    let body = post_json(&test_app, "/players", json!({
        "name": "A",
        "age": 20,
        "sport": "Cricket",
        "team_id": team_id
    })).await;

    // Assert
    assert_eq!(body["message"], "Player added successfully");
    let player_id = body["id"].as_i64().unwrap();
    let detail = get_json(&test_app, &format!("/players/{}", player_id)).await;
    assert_eq!(detail["player"]["status"], "active");
    assert_eq!(detail["player"]["matches_played"], 0);
    assert_eq!(detail["player"]["runs_scored"], 0);
}

#[tokio::test]
async fn create_player_keeps_explicit_status() {
    let test_app = spawn_app().await;

    let body = post_json(&test_app, "/players", json!({
        "name": "Benched",
        "age": 31,
        "sport": "Cricket",
        "team_id": null,
        "status": "inactive"
    })).await;

    let detail = get_json(&test_app, &format!("/players/{}", body["id"])).await;
    assert_eq!(detail["player"]["status"], "inactive");
}

#[tokio::test]
async fn list_players_resolves_team_names_newest_first() {
    // Arrange
    let test_app = spawn_app().await;
    let team_id = create_team(&test_app, "Falcons", "Cricket").await;
    let first = create_player(&test_app, "A", 20, "Cricket", Some(team_id)).await;
    let second = create_player(&test_app, "B", 22, "Cricket", None).await;

    // Act
    let players = get_json(&test_app, "/players").await;

    // Assert
    let players = players.as_array().expect("Expected an array");
    assert_eq!(players.len(), 2);
    assert_eq!(players[0]["id"].as_i64(), Some(second));
    assert!(players[0]["team_name"].is_null());
    assert_eq!(players[1]["id"].as_i64(), Some(first));
    assert_eq!(players[1]["team_name"], "Falcons");
}

#[tokio::test]
async fn player_detail_returns_404_for_unknown_player() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(test_app.api("/players/987654"))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "error": "Player not found" }));
}

#[tokio::test]
async fn player_detail_includes_match_stats_latest_first() {
    // Arrange
    let test_app = spawn_app().await;
    let falcons = create_team(&test_app, "Falcons", "Cricket").await;
    let hawks = create_team(&test_app, "Hawks", "Cricket").await;
    let event_id = create_event(&test_app, "Vishwakarandak", "2025-02-01").await;
    let early = create_match(&test_app, event_id, falcons, hawks, "2025-02-02").await;
    let late = create_match(&test_app, event_id, hawks, falcons, "2025-02-09").await;
    let player_id = create_player(&test_app, "A", 20, "Cricket", Some(falcons)).await;
    insert_stat_line(&test_app, player_id, early, 12).await;
    insert_stat_line(&test_app, player_id, late, 40).await;

    // Act
    let detail = get_json(&test_app, &format!("/players/{}", player_id)).await;

    // Assert
    assert_eq!(detail["player"]["team_name"], "Falcons");
    assert_eq!(detail["player"]["coach"], "Coach of Falcons");
    let stats = detail["matchStats"].as_array().expect("Expected matchStats array");
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0]["match_id"].as_i64(), Some(late));
    assert_eq!(stats[0]["match_date"], "2025-02-09");
    assert_eq!(stats[0]["team1_name"], "Hawks");
    assert_eq!(stats[0]["team2_name"], "Falcons");
    assert_eq!(stats[0]["event_name"], "Vishwakarandak");
    assert_eq!(stats[1]["match_id"].as_i64(), Some(early));
    assert_eq!(stats[1]["runs_scored"], 12);
}

#[tokio::test]
async fn update_player_replaces_every_field() {
    // Arrange
    let test_app = spawn_app().await;
    let team_id = create_team(&test_app, "Falcons", "Cricket").await;
    let player_id = create_player(&test_app, "A", 20, "Cricket", Some(team_id)).await;

    // Act
    set_player_record(&test_app, player_id, "A. Kumar", 21, None, 5, 50, "inactive").await;

    // Assert
    let detail = get_json(&test_app, &format!("/players/{}", player_id)).await;
    assert_eq!(detail["player"]["name"], "A. Kumar");
    assert_eq!(detail["player"]["age"], 21);
    assert!(detail["player"]["team_id"].is_null());
    assert_eq!(detail["player"]["matches_played"], 5);
    assert_eq!(detail["player"]["runs_scored"], 50);
    assert_eq!(detail["player"]["status"], "inactive");
}

#[tokio::test]
async fn update_player_with_missing_required_field_is_a_server_error() {
    // Arrange
    let test_app = spawn_app().await;
    let player_id = create_player(&test_app, "A", 20, "Cricket", None).await;

    // Act: no partial updates, so an absent name is written as NULL
    let response = put_json(&test_app, &format!("/players/{}", player_id), json!({
        "age": 21,
        "sport": "Cricket",
        "matches_played": 1,
        "runs_scored": 3,
        "status": "active"
    })).await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].as_str().unwrap().contains("null value"));
}

#[tokio::test]
async fn create_player_accepts_numeric_strings_from_form_inputs() {
    // Arrange
    let test_app = spawn_app().await;
    let team_id = create_team(&test_app, "Falcons", "Cricket").await;

    // Act
    let body = post_json(&test_app, "/players", json!({
        "name": "A",
        "age": "20",
        "sport": "Cricket",
        "team_id": team_id.to_string()
    })).await;

    // Assert
    assert_eq!(body["message"], "Player added successfully");
    let detail = get_json(&test_app, &format!("/players/{}", body["id"])).await;
    assert_eq!(detail["player"]["age"], 20);
    assert_eq!(detail["player"]["team_id"].as_i64(), Some(team_id));
    assert_eq!(detail["player"]["team_name"], "Falcons");
}

#[tokio::test]
async fn update_player_accepts_numeric_strings_from_form_inputs() {
    let test_app = spawn_app().await;
    let player_id = create_player(&test_app, "A", 20, "Cricket", None).await;

    let response = put_json(&test_app, &format!("/players/{}", player_id), json!({
        "name": "A",
        "age": "21",
        "sport": "Cricket",
        "team_id": "",
        "matches_played": "4",
        "runs_scored": "120",
        "status": "active"
    })).await;

    assert_eq!(200, response.status().as_u16());
    let detail = get_json(&test_app, &format!("/players/{}", player_id)).await;
    assert_eq!(detail["player"]["age"], 21);
    assert!(detail["player"]["team_id"].is_null());
    assert_eq!(detail["player"]["matches_played"], 4);
    assert_eq!(detail["player"]["runs_scored"], 120);
}

#[tokio::test]
async fn create_player_with_non_numeric_age_is_a_server_error() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(test_app.api("/players"))
        .json(&json!({ "name": "A", "age": "twenty", "sport": "Cricket" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
    let players = get_json(&test_app, "/players").await;
    assert_eq!(players.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn player_routes_with_non_numeric_id_return_json_404() {
    let test_app = spawn_app().await;
    let client = Client::new();

    for path in ["/players/abc", "/players/99999999999"] {
        let response = client
            .get(test_app.api(path))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(404, response.status().as_u16(), "GET {}", path);
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body, json!({ "error": "Player not found" }));
    }

    let response = client
        .delete(test_app.api("/players/abc"))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn delete_player_removes_player_and_stat_lines() {
    // Arrange
    let test_app = spawn_app().await;
    let falcons = create_team(&test_app, "Falcons", "Cricket").await;
    let hawks = create_team(&test_app, "Hawks", "Cricket").await;
    let event_id = create_event(&test_app, "Cup", "2025-02-01").await;
    let match_id = create_match(&test_app, event_id, falcons, hawks, "2025-02-02").await;
    let player_id = create_player(&test_app, "A", 20, "Cricket", Some(falcons)).await;
    insert_stat_line(&test_app, player_id, match_id, 30).await;
    let client = Client::new();

    // Act
    let response = client
        .delete(test_app.api(&format!("/players/{}", player_id)))
        .send()
        .await
        .expect("Failed to execute request.");

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Player deleted successfully");

    let players = get_json(&test_app, "/players").await;
    assert!(players.as_array().unwrap().is_empty());

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM player_match_stats")
        .fetch_one(&test_app.db_pool)
        .await
        .expect("Failed to count stat lines");
    assert_eq!(remaining, 0);
}
