//! Server state management
//!
//! One shared game session plus the JSON views handed to the renderer.

use hexoust_core::{Game, GameConfig, GameResult, Hex, Player};
use serde::Serialize;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A stone in renderer format
#[derive(Clone, Debug, Serialize)]
pub struct StoneView {
    pub q: i32,
    pub r: i32,
    pub s: i64,
    pub player: Player,
}

/// Everything the renderer needs to redraw after a change
#[derive(Clone, Debug, Serialize)]
pub struct GameSnapshot {
    pub current_player: Player,
    pub extra_turn: bool,
    pub result: GameResult,
    pub game_over: bool,
    pub winner: Option<Player>,
    pub red_stones: usize,
    pub blue_stones: usize,
    pub stones: Vec<StoneView>,
}

impl GameSnapshot {
    pub fn of(game: &Game) -> Self {
        let board = game.board();
        let mut stones: Vec<(Hex, Player)> = board.stones().collect();
        stones.sort_by_key(|&(hex, _)| hex);

        Self {
            current_player: game.current_player(),
            extra_turn: game.extra_turn_pending(),
            result: game.result(),
            game_over: game.is_game_over(),
            winner: game.winner(),
            red_stones: board.stone_count(Player::Red),
            blue_stones: board.stone_count(Player::Blue),
            stones: stones
                .into_iter()
                .map(|(hex, player)| StoneView {
                    q: hex.q,
                    r: hex.r,
                    s: hex.s(),
                    player,
                })
                .collect(),
        }
    }
}

/// Server-wide shared state
pub struct ServerState {
    game: RwLock<Game>,
}

impl ServerState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: RwLock::new(Game::new(config)),
        }
    }

    // Moves commit atomically, so a poisoned lock still guards a consistent game
    pub fn game(&self) -> RwLockReadGuard<'_, Game> {
        self.game.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn game_mut(&self) -> RwLockWriteGuard<'_, Game> {
        self.game.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
