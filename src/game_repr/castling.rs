use std::fmt;

use super::{Color, Square};

/// Which side of the board a castle goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// (king from, king to, rook from, rook to) for the given color
    pub const fn squares(self, color: Color) -> (Square, Square, Square, Square) {
        match (color, self) {
            (Color::White, CastleSide::Kingside) => (Square::E1, Square::G1, Square::H1, Square::F1),
            (Color::White, CastleSide::Queenside) => (Square::E1, Square::C1, Square::A1, Square::D1),
            (Color::Black, CastleSide::Kingside) => (Square::E8, Square::G8, Square::H8, Square::F8),
            (Color::Black, CastleSide::Queenside) => (Square::E8, Square::C8, Square::A8, Square::D8),
        }
    }

    /// Squares that must be empty between king and rook
    pub const fn between_mask(self, color: Color) -> u64 {
        let mask: u64 = match self {
            CastleSide::Kingside => 0x60,
            CastleSide::Queenside => 0x0E,
        };
        match color {
            Color::White => mask,
            Color::Black => mask << 56,
        }
    }

    /// Squares the king passes through or lands on (excluding its start)
    pub const fn transit_mask(self, color: Color) -> u64 {
        let mask: u64 = match self {
            CastleSide::Kingside => 0x60,
            CastleSide::Queenside => 0x0C,
        };
        match color {
            Color::White => mask,
            Color::Black => mask << 56,
        }
    }
}

/// The four castling flags. A flag is cleared the first time its king or
/// rook leaves (or the rook is captured on) its home square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const WHITE_KINGSIDE: u8 = 1 << 0;
    pub const WHITE_QUEENSIDE: u8 = 1 << 1;
    pub const BLACK_KINGSIDE: u8 = 1 << 2;
    pub const BLACK_QUEENSIDE: u8 = 1 << 3;

    pub const fn none() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(0b1111)
    }

    #[inline]
    const fn flag(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => Self::WHITE_KINGSIDE,
            (Color::White, CastleSide::Queenside) => Self::WHITE_QUEENSIDE,
            (Color::Black, CastleSide::Kingside) => Self::BLACK_KINGSIDE,
            (Color::Black, CastleSide::Queenside) => Self::BLACK_QUEENSIDE,
        }
    }

    #[inline]
    pub fn has(&self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::flag(color, side) != 0
    }

    pub fn set(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::flag(color, side);
    }

    pub fn remove(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::flag(color, side);
    }

    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, CastleSide::Kingside);
        self.remove(color, CastleSide::Queenside);
    }

    /// Clears the flag tied to a rook home square; used for both the
    /// departure and the arrival square of every move
    pub fn touch(&mut self, square: Square) {
        match square {
            Square::H1 => self.remove(Color::White, CastleSide::Kingside),
            Square::A1 => self.remove(Color::White, CastleSide::Queenside),
            Square::H8 => self.remove(Color::Black, CastleSide::Kingside),
            Square::A8 => self.remove(Color::Black, CastleSide::Queenside),
            _ => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Raw 4-bit value, stable for hashing
    pub fn bits(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (flag, c) in [
            (Self::WHITE_KINGSIDE, 'K'),
            (Self::WHITE_QUEENSIDE, 'Q'),
            (Self::BLACK_KINGSIDE, 'k'),
            (Self::BLACK_QUEENSIDE, 'q'),
        ] {
            if self.0 & flag != 0 {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}
