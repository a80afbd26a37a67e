//! Status endpoint: liveness plus a one-line summary of the session

use crate::state::ServerState;
use axum::{extract::State, Json};
use hexoust_core::Player;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub engine: &'static str,
    pub radius: i32,
    pub to_move: Player,
    pub game_over: bool,
}

pub async fn status_handler(State(state): State<Arc<ServerState>>) -> Json<StatusResponse> {
    let game = state.game();
    Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        engine: "rust",
        radius: game.board().radius(),
        to_move: game.current_player(),
        game_over: game.is_game_over(),
    })
}
