//! Error types for board access and move validation

use crate::hex::Hex;
use serde::{Deserialize, Serialize};

/// Why a board access or a placement was refused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngineError {
    /// `hex` is `None` for a click too far out to name a cell
    #[error("{} is outside the board", describe(.hex))]
    OutOfBounds { hex: Option<Hex> },

    #[error("hex {hex} is already occupied")]
    CellOccupied { hex: Hex },

    #[error("hex {hex} touches an own stone and captures nothing")]
    IllegalAdjacency { hex: Hex },

    #[error("the game is over")]
    InvalidState,
}

fn describe(hex: &Option<Hex>) -> String {
    match hex {
        Some(hex) => format!("hex {hex}"),
        None => "click".to_string(),
    }
}
