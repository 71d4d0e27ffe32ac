//! Tic-tac-toe game logic.
//!
//! The crate holds the state machine and nothing else: no terminal, no
//! prompts. A front end feeds moves through [`Game`] and receives the board
//! after each accepted move through a [`BoardView`].
//!
//! # Example
//!
//! ```
//! use tictac_core::{Game, GameState, Player};
//!
//! let mut game = Game::new();
//! game.run();
//! for cell in [0, 3, 1, 4, 2] {
//!     assert!(game.play_turn(cell));
//! }
//! assert!(game.has_won(2));
//! assert_eq!(game.last_player(), Some(Player::X));
//! assert_eq!(game.state(), GameState::Ended);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod rules;
mod snapshot;
mod types;

pub use board::{Board, LEFT_DIAGONAL, RIGHT_DIAGONAL};
pub use error::MoveError;
pub use game::{BoardView, Game, Round, Silent, TURN_LIMIT};
pub use rules::{MIN_WIN_CHECK_TURN, is_line_valid};
pub use snapshot::GameSnapshot;
pub use types::{BOARD_SIZE, BOARD_WIDTH, CellState, GameState, Glyphs, Player};
