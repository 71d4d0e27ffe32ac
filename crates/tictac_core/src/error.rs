//! Reasons a move can be rejected.

/// Why a move was refused.
///
/// Rejection never disturbs the game. The boolean entry points on
/// [`Game`](crate::Game) collapse this to `false`; the `try_` variants hand it
/// back for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The input could not be read as a cell index.
    #[display("{:?} is not a cell index", _0)]
    NotANumber(#[error(not(source))] String),

    /// The index does not name a cell on the board.
    #[display("Cell {} is off the board (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// Somebody already played there.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),
}
