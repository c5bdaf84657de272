use crate::game_repr::bitboards::{squares, tables::KING_ATTACKS};
use crate::game_repr::{CastleSide, Move, MoveFlag, MoveList, Piece, Position, Square, Type};

impl Position {
    /// King steps plus castling.
    ///
    /// Castling is offered when the right is still held, the rook stands on
    /// its home square, the squares between king and rook are empty, the
    /// king is not in check and does not cross or land on an attacked square.
    pub(crate) fn king_moves_into(&self, from: Square, king: Piece, moves: &mut MoveList) {
        let color = king.color;
        let friendly = self.bitboards.occupied_by_color(color);
        self.push_targets(from, king, KING_ATTACKS[from.index()] & !friendly, moves);

        let occupied = self.bitboards.all_occupied();
        let opponent = color.opposite();
        let mut in_check = None;

        for side in CastleSide::BOTH {
            if !self.castling.has(color, side) {
                continue;
            }
            let (king_from, king_to, rook_from, _) = side.squares(color);
            if from != king_from || self.squares[rook_from.index()] != Some(Piece::new(color, Type::Rook)) {
                continue;
            }
            if occupied & side.between_mask(color) != 0 {
                continue;
            }
            // Can't castle out of check
            if *in_check.get_or_insert_with(|| self.is_square_attacked(from, opponent)) {
                return;
            }
            if squares(side.transit_mask(color)).any(|sq| self.is_square_attacked(sq, opponent)) {
                continue;
            }
            let flag = match side {
                CastleSide::Kingside => MoveFlag::CastleKingside,
                CastleSide::Queenside => MoveFlag::CastleQueenside,
            };
            moves.push(Move::new(king_from, king_to, king, None).with_flag(flag));
        }
    }
}
