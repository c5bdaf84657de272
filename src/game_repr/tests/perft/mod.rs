use super::*;

// Reference counts from the chess programming wiki perft results page.
// Depths that take more than a second or two in debug builds are ignored;
// run them with `cargo test --release -- --ignored`.

mod complex_promotions;
mod endgame;
mod kiwipete;
mod middle_game;
mod starting_position;
mod symmetrical;
