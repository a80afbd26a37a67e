//! Game API routes
//!
//! Rejected moves are normal responses: the outcome says why, and the
//! snapshot is unchanged.

use crate::state::{GameSnapshot, ServerState};
use axum::{extract::State, Json};
use hexoust_core::{Hex, MoveOutcome};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Move request in axial coordinates
#[derive(Deserialize)]
pub struct MoveRequest {
    pub q: i32,
    pub r: i32,
}

/// Click request in pixel coordinates
#[derive(Deserialize)]
pub struct ClickRequest {
    pub x: f64,
    pub y: f64,
}

#[derive(Serialize)]
pub struct MoveResponse {
    #[serde(flatten)]
    pub outcome: MoveOutcome,
    pub state: GameSnapshot,
}

/// Get current game state
pub async fn get_game(State(state): State<Arc<ServerState>>) -> Json<GameSnapshot> {
    let game = state.game();
    Json(GameSnapshot::of(&game))
}

/// Place a stone at a hex
pub async fn make_move(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<MoveRequest>,
) -> Json<MoveResponse> {
    let mut game = state.game_mut();
    let hex = Hex::new(req.q, req.r);
    tracing::debug!("move request at {}", hex);

    let outcome = game.attempt_move(hex);
    Json(MoveResponse {
        outcome,
        state: GameSnapshot::of(&game),
    })
}

/// Place a stone at the hex under a pixel
pub async fn click(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<ClickRequest>,
) -> Json<MoveResponse> {
    let mut game = state.game_mut();
    tracing::debug!("click request at ({}, {})", req.x, req.y);

    let outcome = game.attempt_click(req.x, req.y);
    Json(MoveResponse {
        outcome,
        state: GameSnapshot::of(&game),
    })
}

/// Clear the board and hand the first move back to Red
pub async fn restart(State(state): State<Arc<ServerState>>) -> Json<GameSnapshot> {
    let mut game = state.game_mut();
    game.restart();
    Json(GameSnapshot::of(&game))
}
