//! Pseudo-legal movement rules, one file per piece kind. Each generator
//! appends to a caller-owned buffer and never checks king safety.

pub mod bishop;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;

use super::bitboards::{squares, tables::*};
use super::{Move, MoveList, Piece, Position, Square, Type};

/// Squares a piece standing on `square` attacks given an occupancy.
/// Pawns report their diagonal captures only.
pub fn attacks_from(piece: Piece, square: Square, occupied: u64) -> u64 {
    match piece.piece_type {
        Type::Pawn => pawn_attacks(piece.color, square),
        Type::Knight => KNIGHT_ATTACKS[square.index()],
        Type::Bishop => bishop_attacks(square, occupied),
        Type::Rook => rook_attacks(square, occupied),
        Type::Queen => queen_attacks(square, occupied),
        Type::King => KING_ATTACKS[square.index()],
    }
}

impl Position {
    /// Pseudo-legal moves of whatever piece stands on `from`
    pub(crate) fn piece_moves_into(&self, from: Square, moves: &mut MoveList) {
        let Some(piece) = self.squares[from.index()] else {
            return;
        };
        match piece.piece_type {
            Type::Pawn => self.pawn_moves_into(from, piece, moves),
            Type::Knight => self.knight_moves_into(from, piece, moves),
            Type::Bishop => self.bishop_moves_into(from, piece, moves),
            Type::Rook => self.rook_moves_into(from, piece, moves),
            Type::Queen => self.queen_moves_into(from, piece, moves),
            Type::King => self.king_moves_into(from, piece, moves),
        }
    }

    /// One move per target bit, capturing whatever stands there
    #[inline]
    fn push_targets(&self, from: Square, piece: Piece, targets: u64, moves: &mut MoveList) {
        for to in squares(targets) {
            moves.push(Move::new(from, to, piece, self.squares[to.index()]));
        }
    }
}
