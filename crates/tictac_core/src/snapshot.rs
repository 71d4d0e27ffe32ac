//! Serializable snapshot of a game.

use super::types::{BOARD_SIZE, CellState, GameState, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Point-in-time copy of everything observable about a game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Turn number (1-based).
    turn: u32,
    /// Lifecycle state.
    state: GameState,
    /// Player expected to move next.
    active_player: Player,
    /// Player who made the latest move.
    last_player: Option<Player>,
    /// Cells in row-major order.
    cells: [CellState; BOARD_SIZE],
}

impl GameSnapshot {
    /// Creates a snapshot from its parts.
    pub fn new(
        turn: u32,
        state: GameState,
        active_player: Player,
        last_player: Option<Player>,
        cells: [CellState; BOARD_SIZE],
    ) -> Self {
        Self {
            turn,
            state,
            active_player,
            last_player,
            cells,
        }
    }

    /// Serializes the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
