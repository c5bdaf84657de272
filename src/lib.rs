//! Chess rules engine and computer opponent.
//!
//! - [`game_repr`]: board model, legal move generation, FEN, game-state
//!   classification and perft
//! - [`agent`]: players and the AI (evaluation, alpha-beta search,
//!   difficulty policies)
//! - [`game`]: the controller that owns a game's position and history

pub mod agent;
pub mod config;
pub mod error;
pub mod game;
pub mod game_repr;

pub use agent::ai::{find_best_move, Difficulty};
pub use config::{GameConfig, SearchConfig};
pub use error::ChessError;
pub use game::Game;
