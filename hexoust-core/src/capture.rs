//! Capture rules
//!
//! A stone placed at `hex` captures every adjacent opponent group that is
//! strictly smaller than the mover's group containing `hex` after placement.
//! Each adjacent group is compared against that same mover size on its own;
//! captured groups are always removed whole.

use crate::board::{Board, Player};
use crate::group::{find_group, group_size};
use crate::hex::Hex;
use rustc_hash::FxHashSet;

/// Would placing `mover` at `hex` capture anything?
///
/// Works on a snapshot; `board` is never touched.
pub fn would_capture(board: &Board, hex: Hex, mover: Player) -> bool {
    let mut sim = board.snapshot();
    if sim.place(hex, mover).is_err() {
        return false;
    }

    let mover_size = group_size(&sim, hex, mover);
    let opponent = mover.opponent();

    for neighbor in hex.neighbors() {
        if sim.owner_at(neighbor) != Some(opponent) {
            continue;
        }
        let opponent_size = group_size(&sim, neighbor, opponent);
        tracing::debug!(
            "capture check at {}: opponent group {} vs mover group {}",
            neighbor,
            opponent_size,
            mover_size
        );
        if opponent_size < mover_size {
            return true;
        }
    }

    false
}

/// Opponent stones that a stone already standing at `hex` captures
pub fn find_captures(board: &Board, hex: Hex, mover: Player) -> FxHashSet<Hex> {
    let mover_size = group_size(board, hex, mover);
    let opponent = mover.opponent();
    let mut captured = FxHashSet::default();

    for neighbor in hex.neighbors() {
        if board.owner_at(neighbor) != Some(opponent) || captured.contains(&neighbor) {
            continue;
        }
        let group = find_group(board, neighbor, opponent);
        if group.len() < mover_size {
            captured.extend(group);
        }
    }

    captured
}

/// Remove everything the stone at `hex` captures.
///
/// Expects `mover`'s stone to be placed already. Returns the removed cells
/// ordered by (q, r); empty when nothing qualified.
pub fn apply_capture(board: &mut Board, hex: Hex, mover: Player) -> Vec<Hex> {
    let mut captured: Vec<Hex> = find_captures(board, hex, mover).into_iter().collect();
    captured.sort_unstable();

    // Captured hexes come from the stone map, which only holds on-board cells
    for &stone in &captured {
        let removed = board.remove(stone);
        debug_assert!(removed.is_ok(), "captured {stone} lies off the board");
    }

    if !captured.is_empty() {
        tracing::debug!("{} at {} captured {} stones", mover, hex, captured.len());
    }

    captured
}
