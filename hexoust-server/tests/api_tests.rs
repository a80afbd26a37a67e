//! Integration tests for hexoust-server API

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use hexoust_server::{create_router, ServerConfig, ServerState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> (Router, Arc<ServerState>) {
    let config = ServerConfig::default();
    let state = Arc::new(ServerState::new(config.game));
    (create_router(&config, state.clone()), state)
}

async fn send(app: &Router, request: Request<Body>) -> Value {
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn get(app: &Router, uri: &str) -> Value {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post(app: &Router, uri: &str, body: Value) -> Value {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

#[tokio::test]
async fn test_status_endpoint() {
    let (app, _) = test_app();
    let json = get(&app, "/api/status").await;

    assert_eq!(json["status"], "ok");
    assert_eq!(json["engine"], "rust");
    assert_eq!(json["radius"], 6);
    assert_eq!(json["to_move"], "Red");
    assert_eq!(json["game_over"], false);
}

#[tokio::test]
async fn test_board_endpoint() {
    let (app, _) = test_app();
    let json = get(&app, "/api/board").await;

    assert_eq!(json["radius"], 6);
    assert_eq!(json["cell_count"], 127);
    let hexes = json["hexes"].as_array().unwrap();
    assert_eq!(hexes.len(), 127);
    assert_eq!(hexes[0]["corners"].as_array().unwrap().len(), 6);
    assert_eq!(json["directions"][0], json!([1, -1]));
}

#[tokio::test]
async fn test_initial_game_state() {
    let (app, _) = test_app();
    let json = get(&app, "/api/game").await;

    assert_eq!(json["current_player"], "Red");
    assert_eq!(json["game_over"], false);
    assert_eq!(json["extra_turn"], false);
    assert!(json["winner"].is_null());
    assert_eq!(json["stones"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_move_accepted_then_rejected() {
    let (app, state) = test_app();

    let json = post(&app, "/api/game/move", json!({"q": 0, "r": 0})).await;
    assert_eq!(json["outcome"], "accepted");
    assert_eq!(json["player"], "Red");
    assert_eq!(json["state"]["current_player"], "Blue");
    assert_eq!(json["state"]["red_stones"], 1);

    let json = post(&app, "/api/game/move", json!({"q": 0, "r": 0})).await;
    assert_eq!(json["outcome"], "rejected");
    assert_eq!(json["reason"]["kind"], "cell_occupied");
    assert_eq!(json["state"]["current_player"], "Blue");

    assert_eq!(state.game().board().stone_count(hexoust_core::Player::Red), 1);
}

#[tokio::test]
async fn test_capture_and_win_over_http() {
    let (app, _) = test_app();

    post(&app, "/api/game/move", json!({"q": 2, "r": -1})).await;
    post(&app, "/api/game/move", json!({"q": 0, "r": 0})).await;
    let json = post(&app, "/api/game/move", json!({"q": 1, "r": 0})).await;

    assert_eq!(json["outcome"], "accepted");
    assert_eq!(json["captured"], json!([{"q": 0, "r": 0}]));
    assert_eq!(json["winner"], "Red");
    assert_eq!(json["state"]["game_over"], true);
    assert_eq!(json["state"]["result"], "RedWins");

    let json = post(&app, "/api/game/move", json!({"q": -3, "r": 0})).await;
    assert_eq!(json["outcome"], "rejected");
    assert_eq!(json["reason"]["kind"], "invalid_state");
}

#[tokio::test]
async fn test_click_and_restart() {
    let (app, _) = test_app();

    // Default layout puts the origin cell at (410, 345)
    let json = post(&app, "/api/game/click", json!({"x": 412.0, "y": 340.0})).await;
    assert_eq!(json["outcome"], "accepted");
    assert_eq!(json["placed"], json!({"q": 0, "r": 0}));

    let json = post(&app, "/api/game/click", json!({"x": -900.0, "y": 10.0})).await;
    assert_eq!(json["outcome"], "rejected");
    assert_eq!(json["reason"]["kind"], "out_of_bounds");

    let json = post(&app, "/api/game/restart", json!({})).await;
    assert_eq!(json["current_player"], "Red");
    assert_eq!(json["stones"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_extreme_coordinates_rejected() {
    let (app, state) = test_app();

    let json = post(&app, "/api/game/move", json!({"q": i32::MIN, "r": 0})).await;
    assert_eq!(json["outcome"], "rejected");
    assert_eq!(json["reason"]["kind"], "out_of_bounds");
    assert_eq!(json["reason"]["hex"], json!({"q": i32::MIN, "r": 0}));

    let json = post(&app, "/api/game/click", json!({"x": -1e12, "y": -1.2e12})).await;
    assert_eq!(json["outcome"], "rejected");
    assert_eq!(json["reason"]["kind"], "out_of_bounds");
    assert!(json["reason"]["hex"].is_null());

    assert!(state.game().board().is_empty());
}
