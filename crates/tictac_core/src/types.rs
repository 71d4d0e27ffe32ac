//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// Number of cells in a row, column or diagonal.
pub const BOARD_WIDTH: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (moves on odd turns).
    X,
    /// Player O (moves on even turns).
    O,
}

impl Player {
    /// Returns the player who moves on the given turn.
    ///
    /// Odd turns belong to X, even turns to O.
    #[instrument]
    pub fn for_turn(turn: u32) -> Self {
        if turn % 2 == 1 { Player::X } else { Player::O }
    }
}

/// Occupancy of a single cell.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum CellState {
    /// Nobody has played here yet.
    #[default]
    #[display(".")]
    Empty,
    /// Occupied by X.
    #[display("X")]
    PlayerX,
    /// Occupied by O.
    #[display("O")]
    PlayerO,
}

impl CellState {
    /// Returns true if nobody has played in this cell.
    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::PlayerX => Some(Player::X),
            CellState::PlayerO => Some(Player::O),
        }
    }
}

impl From<Player> for CellState {
    fn from(player: Player) -> Self {
        match player {
            Player::X => CellState::PlayerX,
            Player::O => CellState::PlayerO,
        }
    }
}

/// Lifecycle of a game.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum GameState {
    /// Created or reset, waiting for the first prompt.
    #[default]
    Start,
    /// Moves are being accepted.
    Running,
    /// Won or out of turns. Only `reset` leaves this state.
    Ended,
}

/// Textual form of each cell state when a board is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    /// Glyph for an empty cell.
    empty: String,
    /// Glyph for a cell held by X.
    x: String,
    /// Glyph for a cell held by O.
    o: String,
}

impl Glyphs {
    /// Creates a glyph set.
    pub fn new(empty: impl Into<String>, x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            empty: empty.into(),
            x: x.into(),
            o: o.into(),
        }
    }

    /// Returns the glyph for a cell.
    pub fn glyph(&self, cell: CellState) -> &str {
        match cell {
            CellState::Empty => &self.empty,
            CellState::PlayerX => &self.x,
            CellState::PlayerO => &self.o,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::new(
            CellState::Empty.to_string(),
            CellState::PlayerX.to_string(),
            CellState::PlayerO.to_string(),
        )
    }
}
