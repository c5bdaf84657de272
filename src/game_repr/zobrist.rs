use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::bitboards::tables::pawn_attacks;
use super::bitboards::squares;
use super::{Color, Position, Type};

/// Zobrist hashing constants for chess positions
///
/// One random 64-bit number per piece-square combination, castling-rights
/// value, en passant file and side to move. XOR-ing the numbers for every
/// feature of a position yields a key that identifies the repetition tuple
/// (placement, side to move, castling rights, en passant) with negligible
/// collision probability.
struct ZobristKeys {
    /// [color][piece_type][square]
    pieces: [[[u64; 64]; 6]; 2],
    /// Indexed by the raw 4-bit castling value
    castling: [u64; 16],
    /// [file] - en passant file (0-7)
    en_passant: [u64; 8],
    /// Side to move (toggled in when it's black's turn)
    black_to_move: u64,
}

impl ZobristKeys {
    /// Fixed seed: keys are random but reproducible across runs
    fn generate() -> Self {
        let mut rng = StdRng::seed_from_u64(0x517cc1b727220a95);

        let mut pieces = [[[0u64; 64]; 6]; 2];
        for color in &mut pieces {
            for kind in color {
                for square in kind {
                    *square = rng.gen();
                }
            }
        }

        let mut castling = [0u64; 16];
        for key in &mut castling {
            *key = rng.gen();
        }

        let mut en_passant = [0u64; 8];
        for key in &mut en_passant {
            *key = rng.gen();
        }

        Self {
            pieces,
            castling,
            en_passant,
            black_to_move: rng.gen(),
        }
    }
}

static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::generate);

impl Position {
    /// Position key for repetition detection.
    ///
    /// The en passant file only counts when a pawn of the side to move could
    /// actually capture there, so positions that differ only by a dead
    /// en passant target repeat.
    pub fn zobrist_key(&self) -> u64 {
        let keys = &*ZOBRIST;
        let mut key = 0u64;

        for color in [Color::White, Color::Black] {
            for kind in Type::ALL {
                for sq in squares(self.bitboards.pieces_of_type(color, kind)) {
                    key ^= keys.pieces[color.index()][kind.index()][sq.index()];
                }
            }
        }

        key ^= keys.castling[self.castling.bits() as usize];

        if let Some(target) = self.en_passant {
            let us = self.side_to_move;
            let our_pawns = self.bitboards.pieces_of_type(us, Type::Pawn);
            if pawn_attacks(us.opposite(), target) & our_pawns != 0 {
                key ^= keys.en_passant[target.file() as usize];
            }
        }

        if self.side_to_move == Color::Black {
            key ^= keys.black_to_move;
        }

        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Square;

    #[test]
    fn test_same_position_same_key() {
        assert_eq!(Position::new().zobrist_key(), Position::new().zobrist_key());
    }

    #[test]
    fn test_side_to_move_changes_key() {
        let white = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let black = Position::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
        assert_ne!(white.zobrist_key(), black.zobrist_key());
    }

    #[test]
    fn test_castling_rights_change_key() {
        let all = Position::new();
        let mut fewer = Position::new();
        let mut rights = fewer.castling_rights();
        rights.remove_color(Color::White);
        fewer.set_castling_rights(rights);
        assert_ne!(all.zobrist_key(), fewer.zobrist_key());
    }

    #[test]
    fn test_dead_en_passant_target_ignored() {
        // After 1.e4 no black pawn can take on e3
        let with_ep =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").unwrap();
        let mut without_ep = with_ep.clone();
        without_ep.set_en_passant(None);
        assert_eq!(with_ep.zobrist_key(), without_ep.zobrist_key());
    }

    #[test]
    fn test_live_en_passant_target_counts() {
        let fen = "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3";
        let with_ep = Position::from_fen(fen).unwrap();
        let mut without_ep = with_ep.clone();
        without_ep.set_en_passant(None);
        assert_ne!(with_ep.zobrist_key(), without_ep.zobrist_key());
        assert_eq!(with_ep.en_passant(), Some("f6".parse::<Square>().unwrap()));
    }
}
