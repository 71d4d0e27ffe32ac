//! Turn-based game engine for tic-tac-toe.
//!
//! [`Game`] owns the board and a turn counter. The player to move is never
//! stored; it is derived from the counter's parity on demand, so it cannot
//! drift out of step with the turn.

use super::board::Board;
use super::error::MoveError;
use super::rules::{MIN_WIN_CHECK_TURN, is_line_valid};
use super::snapshot::GameSnapshot;
use super::types::{GameState, Player};
use std::ops::{Deref, DerefMut};
use tracing::{debug, info, instrument};

/// Maximum number of moves in one game.
pub const TURN_LIMIT: u32 = 9;

/// Receives the board after every accepted move.
pub trait BoardView {
    /// Called once per accepted move with the updated board.
    fn board_changed(&mut self, board: &Board);
}

/// View that ignores board updates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Silent;

impl BoardView for Silent {
    fn board_changed(&mut self, _board: &Board) {}
}

/// Tic-tac-toe game engine.
///
/// Lifecycle: `Start --run--> Running --(stop | turn limit | win)--> Ended`,
/// and `reset` returns any state to `Start` with a fresh board.
#[derive(Debug, Clone)]
pub struct Game<V = Silent> {
    state: GameState,
    turn: u32,
    board: Board,
    view: V,
}

impl Game {
    /// Creates a new game that renders nowhere.
    #[instrument]
    pub fn new() -> Self {
        Self::with_view(Silent)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: BoardView> Game<V> {
    /// Creates a new game that reports accepted moves to `view`.
    #[instrument(skip(view))]
    pub fn with_view(view: V) -> Self {
        Self {
            state: GameState::Start,
            turn: 1,
            board: Board::new(),
            view,
        }
    }

    /// Marks the game as running.
    #[instrument(skip(self), fields(from = %self.state))]
    pub fn run(&mut self) {
        self.state = GameState::Running;
    }

    /// Marks the game as ended.
    #[instrument(skip(self), fields(from = %self.state))]
    pub fn stop(&mut self) {
        self.state = GameState::Ended;
    }

    /// Discards the board and counters and starts over from `Start`.
    ///
    /// The view is kept.
    #[instrument(skip(self), fields(turn = self.turn, from = %self.state))]
    pub fn reset(&mut self) {
        self.state = GameState::Start;
        self.turn = 1;
        self.board = Board::new();
        info!("Game reset");
    }

    /// Returns true while moves are being accepted.
    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    /// Advances the turn counter, ending the game once the limit is passed.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn increment_turn(&mut self) {
        self.turn += 1;

        if self.turn > TURN_LIMIT {
            info!(turn = self.turn, "Turn limit reached");
            self.stop();
        }
    }

    /// Returns the player whose move is expected now.
    pub fn active_player(&self) -> Player {
        Player::for_turn(self.turn)
    }

    /// Returns the player who made the most recent move, if any.
    pub fn last_player(&self) -> Option<Player> {
        (self.turn > 1).then(|| Player::for_turn(self.turn - 1))
    }

    /// Plays the active player's mark at `cell_index`.
    ///
    /// Returns `false` and leaves the game untouched if the move is illegal.
    #[instrument(skip(self), fields(turn = self.turn, player = %self.active_player()))]
    pub fn play_turn(&mut self, cell_index: usize) -> bool {
        self.try_play_turn(cell_index).is_ok()
    }

    /// Like [`Game::play_turn`], reporting why a move was refused.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] or [`MoveError::Occupied`]; the game
    /// is unchanged in both cases.
    #[instrument(skip(self), fields(turn = self.turn, player = %self.active_player()))]
    pub fn try_play_turn(&mut self, cell_index: usize) -> Result<(), MoveError> {
        let player = self.active_player();

        if !self.board.update_cell(cell_index, player) {
            let error = match self.board.cell(cell_index) {
                Some(_) => MoveError::Occupied(cell_index),
                None => MoveError::OutOfRange(cell_index),
            };
            debug!(%error, "Move rejected");
            return Err(error);
        }

        debug!("Move accepted");
        self.view.board_changed(&self.board);
        self.increment_turn();
        Ok(())
    }

    /// Plays a move typed at the prompt.
    ///
    /// Input that does not parse as a cell index is rejected before the board
    /// is consulted. That includes an empty or blank line, which is never read
    /// as cell 0.
    #[instrument(skip(self))]
    pub fn play_input(&mut self, raw: &str) -> bool {
        self.try_play_input(raw).is_ok()
    }

    /// Like [`Game::play_input`], returning the cell that was played.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NotANumber`] for unparseable input, otherwise
    /// whatever [`Game::try_play_turn`] reports.
    #[instrument(skip(self))]
    pub fn try_play_input(&mut self, raw: &str) -> Result<usize, MoveError> {
        let trimmed = raw.trim();
        let cell_index = trimmed.parse::<usize>().map_err(|_| {
            debug!(input = trimmed, "Input is not a cell index");
            MoveError::NotANumber(trimmed.to_string())
        })?;
        self.try_play_turn(cell_index)?;
        Ok(cell_index)
    }

    /// Checks whether the move just played at `cell_index` won the game.
    ///
    /// Only the lines through `cell_index` are examined, and only for the
    /// player who just moved. Nothing is examined before the counter reaches
    /// [`MIN_WIN_CHECK_TURN`]. A win ends the game.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn has_won(&mut self, cell_index: usize) -> bool {
        if self.turn < MIN_WIN_CHECK_TURN {
            return false;
        }
        let Some(player) = self.last_player() else {
            return false;
        };

        let board = &self.board;
        let won = is_line_valid(&board.row_values(cell_index), player)
            || is_line_valid(&board.column_values(cell_index), player)
            || is_line_valid(&board.left_diagonal_values(cell_index), player)
            || is_line_valid(&board.right_diagonal_values(cell_index), player);

        if won {
            info!(%player, cell_index, "Player completed a line");
            self.stop();
        }

        won
    }

    /// Opens a round: runs the game and stops it again when the guard drops.
    ///
    /// Every exit from the round (a finished game, closed input, an error or
    /// a cancelled task) leaves the game `Ended`.
    #[instrument(skip(self))]
    pub fn begin_round(&mut self) -> Round<'_, V> {
        self.run();
        Round { game: self }
    }

    /// Returns the current turn number (1-based).
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Returns the board view mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Captures a serializable copy of the game.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(
            self.turn,
            self.state,
            self.active_player(),
            self.last_player(),
            *self.board.cells(),
        )
    }
}

/// A game borrowed for the duration of one round.
///
/// Created by [`Game::begin_round`]. Dereferences to the game.
#[derive(Debug)]
pub struct Round<'g, V: BoardView> {
    game: &'g mut Game<V>,
}

impl<V: BoardView> Deref for Round<'_, V> {
    type Target = Game<V>;

    fn deref(&self) -> &Self::Target {
        self.game
    }
}

impl<V: BoardView> DerefMut for Round<'_, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.game
    }
}

impl<V: BoardView> Drop for Round<'_, V> {
    fn drop(&mut self) {
        if self.game.is_running() {
            debug!(turn = self.game.turn, "Round left while running, stopping game");
            self.game.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellState;

    #[derive(Debug, Default)]
    struct Counting(usize);

    impl BoardView for Counting {
        fn board_changed(&mut self, _board: &Board) {
            self.0 += 1;
        }
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.state(), GameState::Start);
        assert_eq!(game.turn(), 1);
        assert_eq!(game.active_player(), Player::X);
        assert_eq!(game.last_player(), None);
        assert!(!game.is_running());
    }

    #[test]
    fn test_run_and_stop_are_idempotent() {
        let mut game = Game::new();
        game.run();
        game.run();
        assert!(game.is_running());
        game.stop();
        game.stop();
        assert_eq!(game.state(), GameState::Ended);
    }

    #[test]
    fn test_active_player_follows_turn() {
        let mut game = Game::new();
        game.play_turn(0);
        assert_eq!(game.active_player(), Player::O);
        assert_eq!(game.last_player(), Some(Player::X));
        game.play_turn(1);
        assert_eq!(game.active_player(), Player::X);
        assert_eq!(game.last_player(), Some(Player::O));
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = Game::with_view(Counting::default());
        assert!(game.play_turn(4));

        let before = game.board().clone();
        assert_eq!(game.try_play_turn(4), Err(MoveError::Occupied(4)));
        assert_eq!(game.try_play_turn(9), Err(MoveError::OutOfRange(9)));
        assert_eq!(game.board(), &before);
        assert_eq!(game.turn(), 2);
        assert_eq!(game.view().0, 1);
    }

    #[test]
    fn test_view_notified_per_accepted_move() {
        let mut game = Game::with_view(Counting::default());
        game.play_turn(0);
        game.play_turn(0);
        game.play_turn(8);
        assert_eq!(game.view().0, 2);
    }

    #[test]
    fn test_play_input_parses() {
        let mut game = Game::new();
        assert_eq!(game.try_play_input(" 3\n"), Ok(3));
        assert_eq!(
            game.try_play_input("three"),
            Err(MoveError::NotANumber("three".to_string()))
        );
        assert_eq!(game.try_play_input(""), Err(MoveError::NotANumber(String::new())));
        assert_eq!(
            game.try_play_input("  \n"),
            Err(MoveError::NotANumber(String::new()))
        );
        assert!(!game.play_input(""));
        assert!(game.board().cell(0).is_some_and(|c| c.is_empty()));
        assert!(!game.play_input("-1"));
        assert!(!game.play_input("1.5"));
        assert_eq!(game.turn(), 2);
    }

    #[test]
    fn test_has_won_ignored_before_min_turn() {
        let mut game = Game::new();
        for i in [0, 1, 2] {
            game.board.update_cell(i, Player::X);
        }
        for turn in 1..MIN_WIN_CHECK_TURN {
            game.turn = turn;
            for cell in 0..9 {
                assert!(!game.has_won(cell), "turn {turn}, cell {cell}");
            }
        }
        assert_ne!(game.state(), GameState::Ended);
    }

    #[test]
    fn test_has_won_uses_player_who_moved() {
        let mut game = Game::new();
        // X: 0, 1, 2 / O: 3, 4
        for cell in [0, 3, 1, 4] {
            assert!(game.play_turn(cell));
            assert!(!game.has_won(cell));
        }
        assert!(game.play_turn(2));
        assert_eq!(game.turn(), 6);
        assert_eq!(game.active_player(), Player::O);
        assert!(game.has_won(2));
        assert_eq!(game.state(), GameState::Ended);
    }

    #[test]
    fn test_has_won_only_checks_lines_through_cell() {
        let mut game = Game::new();
        for cell in [0, 3, 1, 4, 2] {
            game.play_turn(cell);
        }
        // 8 is not on the top row, and X holds nothing else through it.
        assert!(!game.has_won(8));
        assert!(game.has_won(1));
    }

    #[test]
    fn test_right_diagonal_win() {
        let mut game = Game::new();
        for cell in [2, 0, 4, 1, 6] {
            game.play_turn(cell);
        }
        assert!(game.has_won(6));
    }

    #[test]
    fn test_o_can_win() {
        let mut game = Game::new();
        // X: 0, 1, 6 / O: 4, 3, 5
        for cell in [0, 4, 1, 3, 6, 5] {
            assert!(game.play_turn(cell));
        }
        assert_eq!(game.last_player(), Some(Player::O));
        assert!(game.has_won(5));
    }

    #[test]
    fn test_increment_turn_stops_after_limit() {
        let mut game = Game::new();
        game.run();
        for _ in 1..TURN_LIMIT {
            game.increment_turn();
            assert!(game.is_running());
        }
        game.increment_turn();
        assert_eq!(game.turn(), TURN_LIMIT + 1);
        assert_eq!(game.state(), GameState::Ended);
    }

    #[test]
    fn test_reset_keeps_view() {
        let mut game = Game::with_view(Counting::default());
        game.run();
        game.play_turn(0);
        game.reset();
        assert_eq!(game.view().0, 1);
        assert_eq!(game.turn(), 1);
        assert_eq!(game.state(), GameState::Start);
        assert!(game.board().cells().iter().all(|&c| c == CellState::Empty));
    }

    #[test]
    fn test_round_guard_stops_on_drop() {
        let mut game = Game::new();
        {
            let mut round = game.begin_round();
            assert!(round.is_running());
            round.play_turn(4);
        }
        assert_eq!(game.state(), GameState::Ended);
        assert_eq!(game.turn(), 2);
    }

    #[test]
    fn test_snapshot() {
        let mut game = Game::new();
        game.run();
        game.play_turn(4);
        let snapshot = game.snapshot();
        assert_eq!(*snapshot.turn(), 2);
        assert_eq!(*snapshot.state(), GameState::Running);
        assert_eq!(*snapshot.active_player(), Player::O);
        assert_eq!(*snapshot.last_player(), Some(Player::X));
        assert_eq!(snapshot.cells()[4], CellState::PlayerX);
    }
}
