use crate::game_repr::bitboards::{squares, tables::pawn_attacks};
use crate::game_repr::{Color, Move, MoveFlag, MoveList, Piece, Position, Square, Type};

impl Position {
    /// Pushes, double pushes, captures, en passant and promotions
    pub(crate) fn pawn_moves_into(&self, from: Square, pawn: Piece, moves: &mut MoveList) {
        let color = pawn.color;
        let occupied = self.bitboards.all_occupied();
        let step: i8 = if color == Color::White { 1 } else { -1 };

        if let Some(one) = from.offset(0, step).filter(|sq| occupied & sq.bit() == 0) {
            push_pawn_move(Move::new(from, one, pawn, None), moves);

            if from.rank() == color.pawn_rank() {
                if let Some(two) = one.offset(0, step).filter(|sq| occupied & sq.bit() == 0) {
                    moves.push(Move::new(from, two, pawn, None).with_flag(MoveFlag::DoublePawnPush));
                }
            }
        }

        let attacks = pawn_attacks(color, from);
        let enemies = self.bitboards.occupied_by_color(color.opposite());
        for to in squares(attacks & enemies) {
            push_pawn_move(Move::new(from, to, pawn, self.squares[to.index()]), moves);
        }

        if let Some(target) = self.en_passant {
            if attacks & target.bit() != 0 {
                let victim = Piece::new(color.opposite(), Type::Pawn);
                let mv = Move::new(from, target, pawn, Some(victim)).with_flag(MoveFlag::EnPassant);
                // The captured pawn sits beside us, behind the target square
                if self.squares[mv.capture_square().index()] == Some(victim) {
                    moves.push(mv);
                }
            }
        }
    }
}

/// Expands a move onto the last rank into one move per promotion kind
#[inline]
fn push_pawn_move(mv: Move, moves: &mut MoveList) {
    if mv.to.rank() == mv.piece.color.promotion_rank() {
        for kind in Type::PROMOTIONS {
            moves.push(mv.with_promotion(kind));
        }
    } else {
        moves.push(mv);
    }
}
