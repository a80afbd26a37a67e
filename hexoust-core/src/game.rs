//! Game state and turn order

use crate::board::{Board, Cell, Player};
use crate::capture::apply_capture;
use crate::config::GameConfig;
use crate::error::EngineError;
use crate::hex::Hex;
use crate::validator::validate_move;
use serde::{Deserialize, Serialize};

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    RedWins,
    BlueWins,
}

impl GameResult {
    fn win_for(player: Player) -> Self {
        match player {
            Player::Red => GameResult::RedWins,
            Player::Blue => GameResult::BlueWins,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Ongoing => None,
            GameResult::RedWins => Some(Player::Red),
            GameResult::BlueWins => Some(Player::Blue),
        }
    }
}

/// What happened to an attempted placement
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// Nothing changed
    Rejected { reason: EngineError },
    /// Stone placed and captures resolved
    Accepted {
        placed: Hex,
        player: Player,
        /// Removed opponent stones, ordered by (q, r)
        captured: Vec<Hex>,
        /// The same player moves again
        extra_turn: bool,
        winner: Option<Player>,
    },
}

impl MoveOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted { .. })
    }

    pub fn rejection(&self) -> Option<EngineError> {
        match self {
            MoveOutcome::Rejected { reason } => Some(*reason),
            MoveOutcome::Accepted { .. } => None,
        }
    }
}

// ============================================================================
// GAME
// ============================================================================

/// One game session. Every piece of turn state lives here, so separate
/// games never share anything.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,

    /// Player to move
    current_player: Player,

    /// Set by a capturing move; the mover keeps the turn
    extra_turn: bool,

    /// Per player: has had at least one stone on the board at some point
    had_stones: [bool; 2],

    result: GameResult,
}

impl Game {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(config.radius),
            config,
            current_player: Player::Red,
            extra_turn: false,
            had_stones: [false; 2],
            result: GameResult::Ongoing,
        }
    }

    /// Resume from an existing position. The board's radius wins over
    /// `config.radius`; players with stones on the board count as having
    /// had stones.
    pub fn from_position(config: GameConfig, board: Board, current_player: Player) -> Self {
        let mut game = Self {
            config: GameConfig {
                radius: board.radius(),
                ..config
            },
            board,
            current_player,
            extra_turn: false,
            had_stones: [false; 2],
            result: GameResult::Ongoing,
        };
        game.update_history();
        game
    }

    /// Back to the opening position with Red to move
    pub fn restart(&mut self) {
        self.board.clear();
        self.current_player = Player::Red;
        self.extra_turn = false;
        self.had_stones = [false; 2];
        self.result = GameResult::Ongoing;
        tracing::info!("game restarted");
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// True right after a capture, until the capturing player moves again
    pub fn extra_turn_pending(&self) -> bool {
        self.extra_turn
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_game_over(&self) -> bool {
        self.result != GameResult::Ongoing
    }

    pub fn winner(&self) -> Option<Player> {
        self.result.winner()
    }

    pub fn occupancy(&self, hex: Hex) -> Result<Cell, EngineError> {
        self.board.get(hex)
    }

    /// Whether the player to move may place at `hex`
    pub fn is_valid_move(&self, hex: Hex) -> bool {
        !self.is_game_over() && validate_move(&self.board, hex, self.current_player).is_ok()
    }

    // ========================================================================
    // MOVES
    // ========================================================================

    /// Place a stone for the player to move at the cell under a pixel
    pub fn attempt_click(&mut self, x: f64, y: f64) -> MoveOutcome {
        match self.config.layout.pixel_to_hex(x, y) {
            Some(hex) => self.attempt_move(hex),
            None if self.is_game_over() => reject(EngineError::InvalidState),
            None => reject(EngineError::OutOfBounds { hex: None }),
        }
    }

    /// Place a stone for the player to move.
    ///
    /// Either the placement, its captures and the turn update all happen,
    /// or nothing does.
    pub fn attempt_move(&mut self, hex: Hex) -> MoveOutcome {
        if self.is_game_over() {
            return reject(EngineError::InvalidState);
        }

        let mover = self.current_player;
        if let Err(reason) = validate_move(&self.board, hex, mover) {
            return reject(reason);
        }

        if let Err(reason) = self.board.place(hex, mover) {
            return reject(reason);
        }
        let captured = apply_capture(&mut self.board, hex, mover);

        self.update_history();

        let opponent = mover.opponent();
        if self.had_stones[opponent.index()] && self.board.stone_count(opponent) == 0 {
            self.result = GameResult::win_for(mover);
            self.extra_turn = false;
            tracing::info!("{} wins", mover);
            return MoveOutcome::Accepted {
                placed: hex,
                player: mover,
                captured,
                extra_turn: false,
                winner: Some(mover),
            };
        }

        self.extra_turn = !captured.is_empty();
        if !self.extra_turn {
            self.current_player = opponent;
        }

        MoveOutcome::Accepted {
            placed: hex,
            player: mover,
            captured,
            extra_turn: self.extra_turn,
            winner: None,
        }
    }

    /// Record who has had stones on the board
    fn update_history(&mut self) {
        for player in [Player::Red, Player::Blue] {
            if self.board.stone_count(player) > 0 {
                self.had_stones[player.index()] = true;
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

fn reject(reason: EngineError) -> MoveOutcome {
    tracing::debug!("move rejected: {}", reason);
    MoveOutcome::Rejected { reason }
}

// ============================================================================
// TESTS
// ============================================================================
