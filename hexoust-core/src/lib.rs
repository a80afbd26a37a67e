//! HexOust Core - Rules engine
//!
//! This crate provides the game logic for HexOust:
//! - Board geometry (hex grid with cube coordinates, pixel layout)
//! - Board occupancy and connected groups
//! - Group-size captures and placement legality
//! - Turn order, extra turns and the elimination win

pub mod board;
pub mod capture;
pub mod config;
pub mod error;
pub mod game;
pub mod group;
pub mod hex;
pub mod validator;

// Re-exports for convenient access
pub use board::{Board, Cell, Player, DEFAULT_RADIUS};
pub use capture::{apply_capture, would_capture};
pub use config::GameConfig;
pub use error::EngineError;
pub use game::{Game, GameResult, MoveOutcome};
pub use group::{find_group, group_size};
pub use hex::{Hex, Layout, Point, DIRECTIONS};
pub use validator::{is_valid_move, validate_move};
