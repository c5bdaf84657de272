use crate::game_repr::bitboards::tables::bishop_attacks;
use crate::game_repr::{MoveList, Piece, Position, Square};

impl Position {
    /// Diagonal slides until the edge or the first piece
    pub(crate) fn bishop_moves_into(&self, from: Square, bishop: Piece, moves: &mut MoveList) {
        let occupied = self.bitboards.all_occupied();
        let friendly = self.bitboards.occupied_by_color(bishop.color);
        let targets = bishop_attacks(from, occupied) & !friendly;
        self.push_targets(from, bishop, targets, moves);
    }
}
