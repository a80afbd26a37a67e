//! Board occupancy over a hexagonal region

use crate::error::EngineError;
use crate::hex::Hex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Board radius of the standard game
pub const DEFAULT_RADIUS: i32 = 6;

/// Player color. Red always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Red = 0,
    Blue = 1,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Red => f.write_str("Red"),
            Player::Blue => f.write_str("Blue"),
        }
    }
}

/// Content of a single cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    #[default]
    Empty,
    Stone(Player),
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Stone(player) => Some(player),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Stones on a hexagonal board of a given radius (clone to snapshot)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    radius: i32,
    /// Occupied cells only; a missing hex is empty
    stones: FxHashMap<Hex, Player>,
}

impl Board {
    pub fn new(radius: i32) -> Self {
        Self {
            radius,
            stones: FxHashMap::default(),
        }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Number of cells in the region: 3N^2 + 3N + 1, or 0 for a negative radius
    pub fn cell_count(&self) -> usize {
        usize::try_from(self.radius).map_or(0, |n| 3 * n * n + 3 * n + 1)
    }

    /// Check if a hex lies inside the region
    pub fn is_on_board(&self, hex: Hex) -> bool {
        hex.distance_to_center() <= i64::from(self.radius)
    }

    fn check_bounds(&self, hex: Hex) -> Result<(), EngineError> {
        if self.is_on_board(hex) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds { hex: Some(hex) })
        }
    }

    pub fn get(&self, hex: Hex) -> Result<Cell, EngineError> {
        self.check_bounds(hex)?;
        Ok(self.stones.get(&hex).map_or(Cell::Empty, |&p| Cell::Stone(p)))
    }

    /// Owner of the stone at `hex`; `None` when empty or off the board
    pub fn owner_at(&self, hex: Hex) -> Option<Player> {
        self.stones.get(&hex).copied()
    }

    /// Overwrite a cell. Occupancy rules are the caller's business.
    pub fn set(&mut self, hex: Hex, cell: Cell) -> Result<(), EngineError> {
        self.check_bounds(hex)?;
        match cell {
            Cell::Empty => {
                self.stones.remove(&hex);
            }
            Cell::Stone(player) => {
                self.stones.insert(hex, player);
            }
        }
        Ok(())
    }

    pub fn place(&mut self, hex: Hex, player: Player) -> Result<(), EngineError> {
        self.set(hex, Cell::Stone(player))
    }

    pub fn remove(&mut self, hex: Hex) -> Result<(), EngineError> {
        self.set(hex, Cell::Empty)
    }

    pub fn clear(&mut self) {
        self.stones.clear();
    }

    /// Independent copy for speculative placements
    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn stone_count(&self, player: Player) -> usize {
        self.stones.values().filter(|&&p| p == player).count()
    }

    /// Occupied cells in no particular order
    pub fn stones(&self) -> impl Iterator<Item = (Hex, Player)> + '_ {
        self.stones.iter().map(|(&hex, &player)| (hex, player))
    }

    /// Every on-board hex, ordered by q then r
    pub fn hexes(&self) -> impl Iterator<Item = Hex> {
        // Any negative radius enumerates nothing
        let n = self.radius.max(-1);
        (-n..=n).flat_map(move |q| {
            let lo = (-n).max((-n).saturating_sub(q));
            let hi = n.min(n.saturating_sub(q));
            (lo..=hi).map(move |r| Hex::new(q, r))
        })
    }

    /// Every on-board hex with its content, ordered by q then r
    pub fn occupancy(&self) -> impl Iterator<Item = (Hex, Cell)> + '_ {
        self.hexes().map(move |hex| {
            let cell = self.owner_at(hex).map_or(Cell::Empty, Cell::Stone);
            (hex, cell)
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_validity() {
        let board = Board::new(4);
        assert!(board.is_on_board(Hex::new(0, 0)));
        assert!(board.is_on_board(Hex::new(4, 0)));
        assert!(board.is_on_board(Hex::new(0, 4)));
        assert!(board.is_on_board(Hex::new(-4, 0)));
        assert!(board.is_on_board(Hex::new(4, -4)));
        assert!(!board.is_on_board(Hex::new(5, 0)));
        assert!(!board.is_on_board(Hex::new(3, 3))); // s = -6
    }

    #[test]
    fn test_extreme_coordinates_are_off_board() {
        let board = Board::new(i32::MAX);
        assert!(board.is_on_board(Hex::new(i32::MAX, -i32::MAX)));
        assert!(!board.is_on_board(Hex::new(i32::MIN, 0)));
        assert!(!board.is_on_board(Hex::new(0, i32::MIN)));
        assert!(!board.is_on_board(Hex::new(i32::MAX, i32::MAX)));

        let mut board = Board::default();
        let far = [
            Hex::new(i32::MIN, 0),
            Hex::new(i32::MIN, i32::MIN),
            Hex::new(i32::MAX, 1),
        ];
        for hex in far {
            assert_eq!(
                board.place(hex, Player::Red),
                Err(EngineError::OutOfBounds { hex: Some(hex) })
            );
        }
        assert!(board.is_empty());
    }

    #[test]
    fn test_degenerate_radius() {
        let board = Board::new(-1);
        assert_eq!(board.cell_count(), 0);
        assert_eq!(board.hexes().count(), 0);
        assert!(!board.is_on_board(Hex::ORIGIN));

        assert_eq!(Board::new(i32::MIN).hexes().count(), 0);
        assert_eq!(Board::new(i32::MIN).cell_count(), 0);

        let board = Board::new(0);
        assert_eq!(board.cell_count(), 1);
        assert_eq!(board.hexes().collect::<Vec<_>>(), vec![Hex::ORIGIN]);
    }

    #[test]
    fn test_cell_count_matches_enumeration() {
        for radius in 1..=8 {
            let board = Board::new(radius);
            let hexes: Vec<_> = board.hexes().collect();
            assert_eq!(hexes.len(), board.cell_count());
            assert!(hexes.iter().all(|&h| board.is_on_board(h)));
        }
        assert_eq!(Board::new(6).cell_count(), 127);
    }

    #[test]
    fn test_get_set() {
        let mut board = Board::default();
        let hex = Hex::new(2, -1);
        assert_eq!(board.get(hex), Ok(Cell::Empty));

        board.place(hex, Player::Red).unwrap();
        assert_eq!(board.get(hex), Ok(Cell::Stone(Player::Red)));

        // Overwrites without complaint
        board.place(hex, Player::Blue).unwrap();
        assert_eq!(board.get(hex), Ok(Cell::Stone(Player::Blue)));

        board.remove(hex).unwrap();
        assert_eq!(board.get(hex), Ok(Cell::Empty));
        assert!(board.is_empty());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board = Board::default();
        let hex = Hex::new(7, 0);
        assert_eq!(
            board.get(hex),
            Err(EngineError::OutOfBounds { hex: Some(hex) })
        );
        assert_eq!(
            board.set(hex, Cell::Stone(Player::Red)),
            Err(EngineError::OutOfBounds { hex: Some(hex) })
        );
        assert!(board.is_empty());
        assert_eq!(board.owner_at(hex), None);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut board = Board::default();
        board.place(Hex::new(0, 0), Player::Red).unwrap();

        let mut copy = board.snapshot();
        copy.place(Hex::new(1, 0), Player::Blue).unwrap();
        copy.remove(Hex::new(0, 0)).unwrap();

        assert_eq!(board.get(Hex::new(0, 0)), Ok(Cell::Stone(Player::Red)));
        assert_eq!(board.get(Hex::new(1, 0)), Ok(Cell::Empty));
    }

    #[test]
    fn test_clear_and_counts() {
        let mut board = Board::default();
        board.place(Hex::new(0, 0), Player::Red).unwrap();
        board.place(Hex::new(1, 0), Player::Red).unwrap();
        board.place(Hex::new(-1, 0), Player::Blue).unwrap();
        assert_eq!(board.stone_count(Player::Red), 2);
        assert_eq!(board.stone_count(Player::Blue), 1);

        let occupied = board.occupancy().filter(|(_, c)| !c.is_empty()).count();
        assert_eq!(occupied, 3);

        board.clear();
        assert!(board.is_empty());
        assert!(board.occupancy().all(|(_, c)| c == Cell::Empty));
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::Red.opponent(), Player::Blue);
        assert_eq!(Player::Blue.opponent(), Player::Red);
        assert_eq!(Player::Blue.index(), 1);
    }
}
