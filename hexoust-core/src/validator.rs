//! Placement legality
//!
//! A stone may go on any empty cell, except next to one of the mover's own
//! stones. That restriction is lifted when the placement captures.

use crate::board::{Board, Player};
use crate::capture::would_capture;
use crate::error::EngineError;
use crate::hex::Hex;

/// Check whether `mover` may place a stone at `hex`. Never mutates `board`.
pub fn validate_move(board: &Board, hex: Hex, mover: Player) -> Result<(), EngineError> {
    if !board.is_on_board(hex) {
        return Err(EngineError::OutOfBounds { hex: Some(hex) });
    }

    if board.owner_at(hex).is_some() {
        return Err(EngineError::CellOccupied { hex });
    }

    // Opening move
    if board.is_empty() {
        return Ok(());
    }

    let touches_own = hex
        .neighbors()
        .iter()
        .any(|&n| board.owner_at(n) == Some(mover));

    if touches_own && !would_capture(board, hex, mover) {
        return Err(EngineError::IllegalAdjacency { hex });
    }

    Ok(())
}

pub fn is_valid_move(board: &Board, hex: Hex, mover: Player) -> bool {
    validate_move(board, hex, mover).is_ok()
}
