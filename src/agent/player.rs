//! Player trait for the entities that supply moves to a [`Game`](crate::game::Game).
//!
//! The trait focuses on **behavior** rather than construction: a human
//! reading from a terminal and an AI running a search need very different
//! setup, so each implementation provides its own constructor.
//!
//! # Synchronous Design
//!
//! `get_move()` is blocking. A human player blocks waiting for input, an AI
//! player blocks while its worker thread searches. The controller simply
//! calls `get_move()` and waits, which is all a turn-based game needs.

use crate::error::ChessError;
use crate::game_repr::{GameResult, Move, Position};

/// Trait for entities that can provide chess moves.
///
/// Only `get_move()` must be implemented; the notification hooks default to
/// doing nothing.
pub trait Player {
    /// Request the next move for the side to move of `pos`.
    ///
    /// `history` holds the keys of the game's earlier positions, as kept by
    /// [`Game::history_keys`](crate::game::Game::history_keys).
    ///
    /// - `Ok(Some(mv))`: a move for the caller to validate and play
    /// - `Ok(None)`: the player resigns or has no more input
    /// - `Err(_)`: the request was invalid (game over, wrong side) or the
    ///   player's input failed
    fn get_move(&mut self, pos: &Position, history: &[u64]) -> Result<Option<Move>, ChessError>;

    /// Notify this player that the opponent made a move.
    fn opponent_moved(&mut self, _mv: Move) {}

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {}

    /// Display name used in prompts and logs
    fn name(&self) -> &str {
        "Player"
    }
}
