use crate::game_repr::bitboards::tables::queen_attacks;
use crate::game_repr::{MoveList, Piece, Position, Square};

impl Position {
    pub(crate) fn queen_moves_into(&self, from: Square, queen: Piece, moves: &mut MoveList) {
        let occupied = self.bitboards.all_occupied();
        let friendly = self.bitboards.occupied_by_color(queen.color);
        let targets = queen_attacks(from, occupied) & !friendly;
        self.push_targets(from, queen, targets, moves);
    }
}
