//! Difficulty policies and the blocking `find_best_move` entry point.
//!
//! The three difficulty levels are three move-selection policies over the
//! same move generator and evaluator:
//! - **Easy**: a uniformly random legal move
//! - **Medium**: the best move after a single ply, no recursion
//! - **Hard**: full iterative deepening under the time budget
//!
//! `find_best_move` is synchronous and owns every board copy it searches.
//! Front ends that must stay responsive run it on a worker thread with
//! [`spawn_search`] and apply the returned move themselves.
//!
//! # Examples
//!
//! ```
//! use chess_core::agent::ai::{find_best_move, Difficulty};
//! use chess_core::config::SearchConfig;
//! use chess_core::game_repr::{Color, Position};
//!
//! let pos = Position::new();
//! let config = SearchConfig::new(Color::White, Difficulty::Medium);
//! let mv = find_best_move(&pos, &[], &config).unwrap();
//! assert!(pos.is_legal(&mv));
//! ```

use std::fmt;
use std::str::FromStr;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::agent::player::Player;
use crate::config::SearchConfig;
use crate::error::ChessError;
use crate::game_repr::{classify, Color, GameResult, Move, Position};
use super::alphabeta::Searcher;
use super::search::iterative_deepening;

/// AI strength, selecting the move-selection policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Random legal move
    Easy,
    /// Best move one ply deep
    #[default]
    Medium,
    /// Iterative deepening alpha-beta
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Time allowance used when the caller does not set one. Only Hard
    /// searches long enough for the clock to matter.
    pub fn default_time_budget(&self) -> Duration {
        match self {
            Difficulty::Easy | Difficulty::Medium => Duration::ZERO,
            Difficulty::Hard => Duration::from_secs(2),
        }
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown difficulty '{s}' (expected easy, medium or hard)"))
    }
}

/// Picks a move for the side to move of `pos`.
///
/// `history` holds the keys of the game's earlier positions (oldest first,
/// current excluded) so the search can see repetitions. Fails with
/// `SideMismatch` when `config.side` is not to move and with `GameOver` on a
/// finished game. A Hard search that runs out of time before completing
/// depth 1 still returns a legal move.
pub fn find_best_move(pos: &Position, history: &[u64], config: &SearchConfig) -> Result<Move, ChessError> {
    find_best_move_with_rng(pos, history, config, &mut rand::thread_rng())
}

/// [`find_best_move`] with a caller-provided random source for the Easy
/// policy, so tests can seed it
pub fn find_best_move_with_rng<R: Rng + ?Sized>(
    pos: &Position,
    history: &[u64],
    config: &SearchConfig,
    rng: &mut R,
) -> Result<Move, ChessError> {
    let side = pos.side_to_move();
    if config.side != side {
        return Err(ChessError::SideMismatch {
            expected: config.side,
            actual: side,
        });
    }

    let state = classify(pos, history);
    if state.is_over() {
        return Err(ChessError::GameOver(state));
    }

    debug!("{} policy choosing a move for {:?}", config.difficulty, side);
    let chosen = match config.difficulty {
        Difficulty::Easy => pos.legal_moves().choose(rng).copied(),
        Difficulty::Medium => Searcher::new(pos, history, None).search_root(1, None).map(|(mv, _)| mv),
        Difficulty::Hard => iterative_deepening(pos, history, config.time_budget, config.max_depth).best_move,
    };

    // Unreachable for an ongoing game, which always has a legal move
    chosen.ok_or(ChessError::GameOver(state))
}

/// Runs [`find_best_move`] on its own thread. The inputs are moved in, so
/// the caller's board is never touched while the search runs.
pub fn spawn_search(pos: Position, history: Vec<u64>, config: SearchConfig) -> JoinHandle<Result<Move, ChessError>> {
    thread::spawn(move || find_best_move(&pos, &history, &config))
}

/// Computer opponent running the difficulty policy on a worker thread
pub struct AiPlayer {
    config: SearchConfig,
    name: String,
}

impl AiPlayer {
    pub fn new(color: Color, difficulty: Difficulty) -> Self {
        Self::with_config(SearchConfig::new(color, difficulty))
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            name: format!("AI ({})", config.difficulty),
            config,
        }
    }
}

impl Player for AiPlayer {
    fn get_move(&mut self, pos: &Position, history: &[u64]) -> Result<Option<Move>, ChessError> {
        let handle = spawn_search(pos.clone(), history.to_vec(), self.config.clone());
        let mv = handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic))?;
        Ok(Some(mv))
    }

    fn game_ended(&mut self, result: GameResult) {
        debug!("{} ({:?}) saw the game end: {:?}", self.name, self.config.side, result);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
