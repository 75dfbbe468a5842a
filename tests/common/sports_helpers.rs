use reqwest::Client;
use serde_json::{json, Value};

use crate::common::utils::TestApp;

pub async fn post_json(app: &TestApp, path: &str, body: Value) -> Value {
    let response = Client::new()
        .post(app.api(path))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16(), "POST {} failed", path);
    response.json().await.expect("Failed to parse response")
}

pub async fn put_json(app: &TestApp, path: &str, body: Value) -> reqwest::Response {
    Client::new()
        .put(app.api(path))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request.")
}

pub async fn get_json(app: &TestApp, path: &str) -> Value {
    let response = Client::new()
        .get(app.api(path))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16(), "GET {} failed", path);
    response.json().await.expect("Failed to parse response")
}

fn created_id(body: &Value) -> i64 {
    body["id"].as_i64().expect("No id in response")
}

pub async fn create_team(app: &TestApp, name: &str, sport: &str) -> i64 {
    let body = post_json(app, "/teams", json!({
        "name": name,
        "sport": sport,
        "coach": format!("Coach of {}", name),
        "founded": 2001
    })).await;
    created_id(&body)
}

pub async fn create_player(app: &TestApp, name: &str, age: i32, sport: &str, team_id: Option<i64>) -> i64 {
    let body = post_json(app, "/players", json!({
        "name": name,
        "age": age,
        "sport": sport,
        "team_id": team_id
    })).await;
    created_id(&body)
}

/// Full-replace update of a player's counters, keeping the other fields.
pub async fn set_player_record(
    app: &TestApp,
    player_id: i64,
    name: &str,
    age: i32,
    team_id: Option<i64>,
    matches_played: i32,
    runs_scored: i32,
    status: &str,
) {
    let response = put_json(app, &format!("/players/{}", player_id), json!({
        "name": name,
        "age": age,
        "sport": "Cricket",
        "team_id": team_id,
        "matches_played": matches_played,
        "runs_scored": runs_scored,
        "status": status
    })).await;
    assert_eq!(200, response.status().as_u16());
}

pub async fn create_event(app: &TestApp, name: &str, start_date: &str) -> i64 {
    let body = post_json(app, "/events", json!({
        "name": name,
        "sport": "Cricket",
        "start_date": start_date,
        "end_date": start_date,
        "location": "Pune",
        "total_teams": 2
    })).await;
    created_id(&body)
}

pub async fn create_match(app: &TestApp, event_id: i64, team1_id: i64, team2_id: i64, match_date: &str) -> i64 {
    let body = post_json(app, "/matches", json!({
        "event_id": event_id,
        "team1_id": team1_id,
        "team2_id": team2_id,
        "match_date": match_date,
        "location": "Main Ground"
    })).await;
    created_id(&body)
}

pub async fn complete_match(app: &TestApp, match_id: i64, team1_score: i32, team2_score: i32, winner_id: Option<i64>) {
    let response = put_json(app, &format!("/matches/{}", match_id), json!({
        "status": "completed",
        "team1_score": team1_score,
        "team2_score": team2_score,
        "winner_id": winner_id
    })).await;
    assert_eq!(200, response.status().as_u16());
}

/// There is no endpoint for stat lines; they are seeded directly.
pub async fn insert_stat_line(app: &TestApp, player_id: i64, match_id: i64, runs_scored: i32) {
    sqlx::query(
        "INSERT INTO player_match_stats (player_id, match_id, runs_scored, wickets_taken, minutes_played) VALUES ($1, $2, $3, 1, 90)"
    )
    .bind(player_id as i32)
    .bind(match_id as i32)
    .bind(runs_scored)
    .execute(&app.db_pool)
    .await
    .expect("Failed to insert stat line");
}
