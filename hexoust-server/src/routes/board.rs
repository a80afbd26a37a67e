//! Board geometry endpoint

use crate::state::ServerState;
use axum::{extract::State, Json};
use hexoust_core::{Board, GameConfig, Layout, Point, DIRECTIONS};
use serde::Serialize;
use std::sync::Arc;

/// One drawable cell
#[derive(Clone, Debug, Serialize)]
pub struct HexInfo {
    pub q: i32,
    pub r: i32,
    pub s: i64,
    pub center: Point,
    pub corners: [Point; 6],
}

#[derive(Clone, Debug, Serialize)]
pub struct BoardInfo {
    pub radius: i32,
    pub cell_count: usize,
    pub layout: Layout,
    pub hexes: Vec<HexInfo>,
    pub directions: Vec<[i32; 2]>,
}

/// Geometry of every cell on a board built from `config`
pub fn board_info(config: &GameConfig) -> BoardInfo {
    let board = Board::new(config.radius);
    let layout = config.layout;

    let hexes = board
        .hexes()
        .map(|hex| HexInfo {
            q: hex.q,
            r: hex.r,
            s: hex.s(),
            center: layout.hex_to_pixel(hex),
            corners: layout.corners(hex),
        })
        .collect();

    BoardInfo {
        radius: config.radius,
        cell_count: board.cell_count(),
        layout,
        hexes,
        directions: DIRECTIONS.iter().map(|&(dq, dr)| [dq, dr]).collect(),
    }
}

/// Get board geometry
pub async fn get_board(State(state): State<Arc<ServerState>>) -> Json<BoardInfo> {
    let config = *state.game().config();
    Json(board_info(&config))
}
