//! Connected groups of same-owner stones

use crate::board::{Board, Player};
use crate::hex::Hex;
use rustc_hash::FxHashSet;

/// All stones of `owner` connected to `start` through hex adjacency.
///
/// Empty when `start` is not an `owner` stone. Uses an explicit stack, so
/// depth is bounded by the board size rather than the call stack.
pub fn find_group(board: &Board, start: Hex, owner: Player) -> FxHashSet<Hex> {
    let mut group = FxHashSet::default();
    if board.owner_at(start) != Some(owner) {
        return group;
    }

    let mut stack = vec![start];
    group.insert(start);

    while let Some(current) = stack.pop() {
        for neighbor in current.neighbors() {
            if board.owner_at(neighbor) == Some(owner) && group.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    group
}

/// Size of the group containing `start`
pub fn group_size(board: &Board, start: Hex, owner: Player) -> usize {
    find_group(board, start, owner).len()
}
