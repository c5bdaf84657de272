use std::fmt;

use smallvec::SmallVec;

use super::{Piece, Square, Type};

/// Buffer used by the move generator; typical positions stay on the stack
pub type MoveList = SmallVec<[Move; 64]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveFlag {
    Normal,
    DoublePawnPush,
    EnPassant,
    CastleKingside,
    CastleQueenside,
}

/// A fully described move. Carries the moved and captured pieces so that
/// undo and move ordering never have to look at the board again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promotion: Option<Type>,
    pub flag: MoveFlag,
}

impl Move {
    pub fn new(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Move {
        Move {
            from,
            to,
            piece,
            captured,
            promotion: None,
            flag: MoveFlag::Normal,
        }
    }

    pub fn with_flag(mut self, flag: MoveFlag) -> Move {
        self.flag = flag;
        self
    }

    pub fn with_promotion(mut self, promotion: Type) -> Move {
        self.promotion = Some(promotion);
        self
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        matches!(self.flag, MoveFlag::CastleKingside | MoveFlag::CastleQueenside)
    }

    /// Pawn moves and captures reset the fifty-move clock
    #[inline]
    pub fn is_irreversible(&self) -> bool {
        self.is_capture() || self.piece.piece_type == Type::Pawn
    }

    /// Square of the captured piece; differs from `to` only for en passant
    pub fn capture_square(&self) -> Square {
        match self.flag {
            MoveFlag::EnPassant => Square::new(self.to.file(), self.from.rank()).unwrap_or(self.to),
            _ => self.to,
        }
    }

    /// Long algebraic text (`e2e4`, `e7e8q`, castling as `e1g1`)
    pub fn to_uci(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}
