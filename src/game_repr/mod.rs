mod castling;
mod fen;
mod game_state;
mod movegen;
mod moves;
mod perft;
mod piece;
mod position;
mod square;
mod zobrist;
pub mod bitboards;
pub mod piece_moves;

#[cfg(test)]
mod tests;

pub use castling::*;
pub use fen::*;
pub use game_state::*;
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use square::*;
