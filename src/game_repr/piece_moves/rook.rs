use crate::game_repr::bitboards::tables::rook_attacks;
use crate::game_repr::{MoveList, Piece, Position, Square};

impl Position {
    /// File and rank slides until the edge or the first piece
    pub(crate) fn rook_moves_into(&self, from: Square, rook: Piece, moves: &mut MoveList) {
        let occupied = self.bitboards.all_occupied();
        let friendly = self.bitboards.occupied_by_color(rook.color);
        let targets = rook_attacks(from, occupied) & !friendly;
        self.push_targets(from, rook, targets, moves);
    }
}
