// Piece-square tables for positional evaluation
// All values in centipawns (100 = 1 pawn)
// Tables are from White's perspective, indexed by square (a1 = 0, h8 = 63)
// Black reads the table mirrored top to bottom

use crate::game_repr::{Color, Square, Type};

// Pawn position values - encourage advancement and central control
pub const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 1 (pawns never stand here)
     5, 10, 10,-20,-20, 10, 10,  5,  // Rank 2
     5, -5,-10,  0,  0,-10, -5,  5,  // Rank 3
     0,  0,  0, 20, 20,  0,  0,  0,  // Rank 4
     5,  5, 10, 25, 25, 10,  5,  5,  // Rank 5
    10, 10, 20, 30, 30, 20, 10, 10,  // Rank 6
    50, 50, 50, 50, 50, 50, 50, 50,  // Rank 7 (near promotion)
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 8
];

// Knight position values - prefer center squares
pub const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

// Bishop position values - prefer center and long diagonals
pub const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

// Rook position values - prefer 7th rank and center files
pub const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  5,  5,  0,  0,  0,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     5, 10, 10, 10, 10, 10, 10,  5,  // 7th rank
     0,  0,  0,  0,  0,  0,  0,  0,
];

// Queen position values - slight central preference
pub const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -10,  5,  5,  5,  5,  5,  0,-10,
      0,  0,  5,  5,  5,  5,  0, -5,
     -5,  0,  5,  5,  5,  5,  0, -5,
    -10,  0,  5,  5,  5,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

// King middlegame values - stay tucked behind the pawns
pub const KING_MIDDLEGAME_TABLE: [i32; 64] = [
     20, 30, 10,  0,  0, 10, 30, 20,  // Rank 1 (castled squares)
     20, 20,  0,  0,  0,  0, 20, 20,
    -10,-20,-20,-20,-20,-20,-20,-10,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
];

// King endgame values - walk to the center
pub const KING_ENDGAME_TABLE: [i32; 64] = [
    -50,-30,-30,-30,-30,-30,-30,-50,
    -30,-30,  0,  0,  0,  0,-30,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-20,-10,  0,  0,-10,-20,-30,
    -50,-40,-30,-20,-20,-30,-40,-50,
];

/// Table index for `square` as seen by `color`
#[inline]
fn table_index(square: Square, color: Color) -> usize {
    match color {
        Color::White => square.index(),
        // Vertical mirror: a8 reads a1, keeping the file
        Color::Black => square.index() ^ 56,
    }
}

/// Middlegame and endgame table values for a piece on `square`.
/// Only the king has distinct tables; every other kind returns the same
/// value twice.
pub fn pst_value(piece_type: Type, square: Square, color: Color) -> (i32, i32) {
    let idx = table_index(square, color);
    let value = match piece_type {
        Type::Pawn => PAWN_TABLE[idx],
        Type::Knight => KNIGHT_TABLE[idx],
        Type::Bishop => BISHOP_TABLE[idx],
        Type::Rook => ROOK_TABLE[idx],
        Type::Queen => QUEEN_TABLE[idx],
        Type::King => return (KING_MIDDLEGAME_TABLE[idx], KING_ENDGAME_TABLE[idx]),
    };
    (value, value)
}
