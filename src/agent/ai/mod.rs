// AI Agent - Minimax with Alpha-Beta Pruning
//
// Classical chess AI: a static evaluator plus a depth-limited alpha-beta
// search driven by iterative deepening under a wall-clock budget. Three
// difficulty policies sit on top of it.
//
// Key features:
// - Deterministic for Medium and Hard (same position, same move)
// - Captures-first move ordering, previous best move searched first
// - Draw and mate detection inside the tree
// - Shorter mates preferred over longer ones

mod ai_player;
pub mod alphabeta;
pub mod evaluation;
pub mod move_ordering;
mod piece_square_tables;
mod search;

#[cfg(test)]
mod tests;

pub use ai_player::{find_best_move, find_best_move_with_rng, spawn_search, AiPlayer, Difficulty};
pub use alphabeta::{Searcher, MATE_SCORE};
pub use evaluation::{evaluate, piece_value};
pub use search::{iterative_deepening, SearchResult};
