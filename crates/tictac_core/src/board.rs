//! The 3x3 grid and its line queries.

use super::types::{BOARD_SIZE, BOARD_WIDTH, CellState, Glyphs, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Cells of the top-left to bottom-right diagonal.
pub const LEFT_DIAGONAL: [usize; BOARD_WIDTH] = [0, 4, 8];

/// Cells of the top-right to bottom-left diagonal.
pub const RIGHT_DIAGONAL: [usize; BOARD_WIDTH] = [2, 4, 6];

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major, so cell `i` sits at row `i / 3`, column `i % 3`.
/// A cell is written at most once: [`Board::update_cell`] refuses to touch an
/// occupied cell, so occupancy only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [CellState; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `player` in the cell at `index`.
    ///
    /// Returns `false` without touching the board when the index is out of
    /// range or the cell is already occupied.
    #[instrument(skip(self))]
    pub fn update_cell(&mut self, index: usize, player: Player) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => {
                *cell = player.into();
                true
            }
            Some(cell) => {
                debug!(occupant = %cell, "Cell already occupied");
                false
            }
            None => {
                debug!("Cell index out of range");
                false
            }
        }
    }

    /// Returns the cell at `index`, or `None` when out of range.
    pub fn cell(&self, index: usize) -> Option<CellState> {
        self.cells.get(index).copied()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[CellState; BOARD_SIZE] {
        &self.cells
    }

    /// Returns true once every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Iterates over the three rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(BOARD_WIDTH)
    }

    /// Returns the row containing `index`, in column order.
    ///
    /// Empty when `index` is off the board.
    #[instrument(skip(self))]
    pub fn row_values(&self, index: usize) -> Vec<CellState> {
        if index >= BOARD_SIZE {
            return Vec::new();
        }
        let offset = (index / BOARD_WIDTH) * BOARD_WIDTH;
        self.cells[offset..offset + BOARD_WIDTH].to_vec()
    }

    /// Returns the column containing `index`, in row order.
    ///
    /// Empty when `index` is off the board.
    #[instrument(skip(self))]
    pub fn column_values(&self, index: usize) -> Vec<CellState> {
        if index >= BOARD_SIZE {
            return Vec::new();
        }
        let column = index % BOARD_WIDTH;
        (0..BOARD_WIDTH)
            .map(|row| self.cells[column + row * BOARD_WIDTH])
            .collect()
    }

    /// Returns the cells of `diagonal` in order, provided `index` lies on it.
    ///
    /// A move off the diagonal cannot complete it, so the result is empty in
    /// that case.
    #[instrument(skip(self))]
    pub fn diagonal_values(&self, index: usize, diagonal: &[usize]) -> Vec<CellState> {
        if !diagonal.contains(&index) {
            return Vec::new();
        }
        diagonal.iter().filter_map(|&i| self.cell(i)).collect()
    }

    /// Returns the top-left to bottom-right diagonal if `index` is on it.
    pub fn left_diagonal_values(&self, index: usize) -> Vec<CellState> {
        self.diagonal_values(index, &LEFT_DIAGONAL)
    }

    /// Returns the top-right to bottom-left diagonal if `index` is on it.
    pub fn right_diagonal_values(&self, index: usize) -> Vec<CellState> {
        self.diagonal_values(index, &RIGHT_DIAGONAL)
    }

    /// Renders the board as three lines of `|`-separated glyphs.
    pub fn render(&self, glyphs: &Glyphs) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|&cell| glyphs.glyph(cell))
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(&Glyphs::default()))
    }
}
