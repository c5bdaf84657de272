use super::*;
use crate::error::ChessError;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create an empty board
pub fn empty_board() -> Position {
    Position::empty()
}

/// Parse algebraic square text
pub fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Helper function to place a piece
pub fn place_piece(pos: &mut Position, square: &str, color: Color, piece_type: Type) {
    pos.set_piece(sq(square), Some(Piece::new(color, piece_type)));
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.from == sq(from) && m.to == sq(to))
}

/// Helper function to count moves carrying a flag
pub fn count_move_type(moves: &[Move], flag: MoveFlag) -> usize {
    moves.iter().filter(|m| m.flag == flag).count()
}

pub fn count_promotions(moves: &[Move]) -> usize {
    moves.iter().filter(|m| m.is_promotion()).count()
}

/// Play a move given in UCI text, panicking if it is not legal
pub fn play(pos: &mut Position, uci: &str) -> UndoInfo {
    let mv = pos.parse_uci_move(uci).unwrap();
    pos.apply(mv).unwrap()
}

pub fn fen(text: &str) -> Position {
    Position::from_fen(text).unwrap()
}

// ==================== TEST MODULES ====================

mod checkmate;
mod en_passant;
mod fen_parsing;
mod perft;
mod stalemate;
