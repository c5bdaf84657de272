use super::{Color, Piece, Square, Type};

pub mod tables;
pub use tables::*;

/// Bitboard representation using 12 u64 values (6 piece types × 2 colors)
/// Each bit represents presence/absence of a piece on that square (0-63)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bitboards {
    /// Indexed by [color * 6 + piece_type]
    /// White: 0=Pawn, 1=Knight, 2=Bishop, 3=Rook, 4=Queen, 5=King
    /// Black: 6=Pawn, 7=Knight, 8=Bishop, 9=Rook, 10=Queen, 11=King
    pieces: [u64; 12],
}

impl Bitboards {
    pub fn empty() -> Self {
        Self { pieces: [0; 12] }
    }

    /// Get bitboard for a specific piece type and color
    #[inline(always)]
    pub fn pieces_of_type(&self, color: Color, piece_type: Type) -> u64 {
        self.pieces[piece_index(color, piece_type)]
    }

    /// Get bitboard for all pieces of a color
    #[inline(always)]
    pub fn occupied_by_color(&self, color: Color) -> u64 {
        let base = color.index() * 6;
        self.pieces[base]
            | self.pieces[base + 1]
            | self.pieces[base + 2]
            | self.pieces[base + 3]
            | self.pieces[base + 4]
            | self.pieces[base + 5]
    }

    /// Get bitboard for all occupied squares
    #[inline(always)]
    pub fn all_occupied(&self) -> u64 {
        self.occupied_by_color(Color::White) | self.occupied_by_color(Color::Black)
    }

    /// Both colors' pieces of one kind
    #[inline]
    pub fn pieces_of_kind(&self, piece_type: Type) -> u64 {
        self.pieces_of_type(Color::White, piece_type) | self.pieces_of_type(Color::Black, piece_type)
    }

    #[inline]
    pub fn add_piece(&mut self, piece: Piece, square: Square) {
        self.pieces[piece_index(piece.color, piece.piece_type)] |= square.bit();
    }

    #[inline]
    pub fn remove_piece(&mut self, piece: Piece, square: Square) {
        self.pieces[piece_index(piece.color, piece.piece_type)] &= !square.bit();
    }
}

/// Convert color and piece type to bitboard index
#[inline(always)]
fn piece_index(color: Color, piece_type: Type) -> usize {
    color.index() * 6 + piece_type.index()
}

/// Pop the least significant bit from a bitboard and return its square
#[inline(always)]
pub fn pop_lsb(bb: &mut u64) -> Square {
    let sq = bb.trailing_zeros() as usize;
    *bb &= *bb - 1;
    Square::from_index_unchecked(sq)
}

/// Index of the least significant bit (without modifying the bitboard)
#[inline(always)]
pub fn bitscan_forward(bb: u64) -> usize {
    bb.trailing_zeros() as usize
}

/// Index of the most significant bit
#[inline(always)]
pub fn bitscan_reverse(bb: u64) -> usize {
    63 - bb.leading_zeros() as usize
}

/// Iterate the squares of a bitboard from a1 upwards
pub fn squares(mut bb: u64) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || if bb == 0 { None } else { Some(pop_lsb(&mut bb)) })
}

pub const FILE_A: u64 = 0x0101010101010101;
pub const RANK_1: u64 = 0x00000000000000FF;
pub const RANK_8: u64 = 0xFF00000000000000;

/// All squares on a file (0 = a)
#[inline]
pub const fn file_mask(file: u8) -> u64 {
    FILE_A << file
}

/// All light squares (a1 is dark)
pub const LIGHT_SQUARES: u64 = 0x55AA55AA55AA55AA;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bitboards() {
        let bb = Bitboards::empty();
        assert_eq!(bb.all_occupied(), 0);
    }

    #[test]
    fn test_add_remove_piece() {
        let pawn = Piece::new(Color::White, Type::Pawn);
        let e2: Square = "e2".parse().unwrap();
        let mut bb = Bitboards::empty();
        bb.add_piece(pawn, e2);
        assert_eq!(bb.pieces_of_type(Color::White, Type::Pawn), e2.bit());
        bb.remove_piece(pawn, e2);
        assert_eq!(bb.all_occupied(), 0);
    }

    #[test]
    fn test_occupied_by_color() {
        let mut bb = Bitboards::empty();
        bb.add_piece(Piece::new(Color::White, Type::Pawn), Square::from_index_unchecked(8));
        bb.add_piece(Piece::new(Color::White, Type::Knight), Square::from_index_unchecked(16));
        bb.add_piece(Piece::new(Color::Black, Type::Pawn), Square::from_index_unchecked(48));

        assert_eq!(bb.occupied_by_color(Color::White), (1u64 << 8) | (1u64 << 16));
        assert_eq!(bb.occupied_by_color(Color::Black), 1u64 << 48);
    }

    #[test]
    fn test_pop_lsb() {
        let mut bb = 0b1010u64;
        assert_eq!(pop_lsb(&mut bb).index(), 1);
        assert_eq!(bb, 0b1000);
        assert_eq!(pop_lsb(&mut bb).index(), 3);
        assert_eq!(bb, 0);
    }

    #[test]
    fn test_light_squares_mask() {
        for sq in Square::iter() {
            assert_eq!(LIGHT_SQUARES & sq.bit() != 0, !sq.is_dark(), "square {}", sq);
        }
    }
}
