use crate::game_repr::bitboards::tables::KNIGHT_ATTACKS;
use crate::game_repr::{MoveList, Piece, Position, Square};

impl Position {
    /// Generate knight moves into a provided buffer
    pub(crate) fn knight_moves_into(&self, from: Square, knight: Piece, moves: &mut MoveList) {
        // Friendly pieces block, enemy pieces are captured
        let friendly = self.bitboards.occupied_by_color(knight.color);
        let targets = KNIGHT_ATTACKS[from.index()] & !friendly;
        self.push_targets(from, knight, targets, moves);
    }
}
