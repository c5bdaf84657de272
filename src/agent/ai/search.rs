// Iterative Deepening Search
//
// Searches depth 1, 2, 3, ... until the time budget or the depth cap runs
// out. Only fully completed depths count: a depth cut short by the clock is
// discarded and the previous depth's move stands.

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::game_repr::{Move, Position};
use super::alphabeta::{is_mate_score, Searcher};

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` only when the position has no legal moves
    pub best_move: Option<Move>,
    /// Score of `best_move` from White's point of view
    pub score: i32,
    /// Deepest fully completed depth, 0 when the fallback move was used
    pub depth: u8,
    pub nodes: u64,
    pub elapsed: Duration,
}

impl SearchResult {
    fn empty() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            elapsed: Duration::ZERO,
        }
    }
}

/// Perform iterative deepening search to find the best move
///
/// # Arguments
/// * `pos` - Current position to search
/// * `history` - Keys of the earlier positions of the game, for repetitions
/// * `time_budget` - Wall-clock allowance; no new depth starts after it
/// * `max_depth` - Depth cap
///
/// If not even depth 1 completes, the first legal move in generation order
/// is returned so a move is always available.
pub fn iterative_deepening(pos: &Position, history: &[u64], time_budget: Duration, max_depth: u8) -> SearchResult {
    let start = Instant::now();
    let deadline = start.checked_add(time_budget);
    let mut searcher = Searcher::new(pos, history, deadline);
    let mut result = SearchResult::empty();

    let mut depth = 1;
    while depth <= max_depth && start.elapsed() < time_budget {
        match searcher.search_root(depth, result.best_move) {
            Some((mv, score)) => {
                result.best_move = Some(mv);
                result.score = score;
                result.depth = depth;
                debug!(
                    "depth {} score {} nodes {} time {:?} best {}",
                    depth,
                    score,
                    searcher.nodes(),
                    start.elapsed(),
                    mv
                );
                if is_mate_score(score) {
                    debug!("forced mate found at depth {}, stopping", depth);
                    break;
                }
            }
            None if searcher.is_aborted() => {
                debug!("depth {} aborted by the clock", depth);
                break;
            }
            // No legal moves at the root
            None => break,
        }
        depth += 1;
    }

    if result.best_move.is_none() {
        if let Some(&first) = pos.legal_moves().first() {
            warn!(
                "search completed no depth within {:?}, falling back to {}",
                time_budget, first
            );
            result.best_move = Some(first);
        }
    }

    result.nodes = searcher.nodes();
    result.elapsed = start.elapsed();
    if let Some(mv) = result.best_move {
        info!(
            "search: {} (score {}, depth {}, {} nodes, {:?})",
            mv, result.score, result.depth, result.nodes, result.elapsed
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::ai::alphabeta::MATE_SCORE;

    #[test]
    fn test_zero_budget_falls_back_to_first_move() {
        let pos = Position::new();
        let result = iterative_deepening(&pos, &[], Duration::ZERO, 10);
        assert_eq!(result.depth, 0);
        assert_eq!(result.best_move, pos.legal_moves().first().copied());
    }

    #[test]
    fn test_depth_cap_is_respected() {
        let pos = Position::new();
        let result = iterative_deepening(&pos, &[], Duration::from_secs(60), 2);
        assert_eq!(result.depth, 2);
        assert!(result.best_move.is_some());
        assert!(result.nodes > 20);
    }

    #[test]
    fn test_stops_once_mate_is_proven() {
        let pos = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
        let result = iterative_deepening(&pos, &[], Duration::from_secs(60), 20);
        assert_eq!(result.best_move.map(|m| m.to_uci()), Some("a1a8".to_string()));
        assert_eq!(result.score, MATE_SCORE - 1);
        assert!(result.depth < 20);
    }

    #[test]
    fn test_terminal_position_has_no_move() {
        let pos = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        let result = iterative_deepening(&pos, &[], Duration::from_secs(1), 3);
        assert_eq!(result.best_move, None);
    }
}
