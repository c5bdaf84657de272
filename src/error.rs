//! Error type shared by the rules engine, the game controller and the AI.

use std::io;

use crate::game_repr::{Color, GameResult, Move};

/// Errors surfaced by the chess core.
///
/// `InvalidMove` is a contract violation on [`Position::apply`](crate::game_repr::Position::apply):
/// the move does not even fit the current board. `IllegalMove` is the normal
/// rejection of untrusted input (user text, network peers) that fails the
/// legal-move check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    #[error("invalid move {mv}: {reason}")]
    InvalidMove { mv: Move, reason: &'static str },

    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("invalid FEN string: {0}")]
    InvalidFen(String),

    #[error("corrupt position: {0}")]
    CorruptState(String),

    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("game is already over: {0:?}")]
    GameOver(GameResult),

    #[error("search requested for {expected:?} but {actual:?} is to move")]
    SideMismatch { expected: Color, actual: Color },

    #[error("no moves to undo")]
    NothingToUndo,

    /// Reading player input failed
    #[error("input error: {0}")]
    Io(String),
}

impl From<io::Error> for ChessError {
    fn from(err: io::Error) -> Self {
        ChessError::Io(err.to_string())
    }
}
