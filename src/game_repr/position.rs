use std::fmt;

use super::bitboards::tables::*;
use super::bitboards::Bitboards;
use super::{CastleSide, CastlingRights, Color, Move, MoveFlag, Piece, Square, Type};
use crate::error::ChessError;

/*
 * MODULE IS RESPONSIBLE FOR
 * BOARD STATE, MAKE/UNMAKE AND ATTACK QUERIES
 */

const BACK_RANK: [Type; 8] = [
    Type::Rook,
    Type::Knight,
    Type::Bishop,
    Type::Queen,
    Type::King,
    Type::Bishop,
    Type::Knight,
    Type::Rook,
];

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Bitboard representation for fast attack queries
    pub(crate) bitboards: Bitboards,
    /// Mailbox representation for fast piece lookup (kept in sync with bitboards)
    pub(crate) squares: [Option<Piece>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    /// Square skipped by the last double pawn push, if any
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

/// Everything `make_move` overwrites, so `undo` can restore it exactly
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UndoInfo {
    mv: Move,
    castling: CastlingRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl UndoInfo {
    pub fn mv(&self) -> Move {
        self.mv
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Standard initial position
    pub fn new() -> Position {
        let mut pos = Position::empty();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            pos.put(Square::from_index_unchecked(file), Piece::new(Color::White, kind));
            pos.put(Square::from_index_unchecked(8 + file), Piece::new(Color::White, Type::Pawn));
            pos.put(Square::from_index_unchecked(48 + file), Piece::new(Color::Black, Type::Pawn));
            pos.put(Square::from_index_unchecked(56 + file), Piece::new(Color::Black, kind));
        }
        pos.castling = CastlingRights::all();
        pos
    }

    /// Board with no pieces, White to move and no castling rights
    pub fn empty() -> Position {
        Position {
            bitboards: Bitboards::empty(),
            squares: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn bitboards(&self) -> &Bitboards {
        &self.bitboards
    }

    /// Square of the king of `color`, `None` only on hand-built boards
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let kings = self.bitboards.pieces_of_type(color, Type::King);
        if kings == 0 {
            None
        } else {
            Square::from_index(kings.trailing_zeros() as usize)
        }
    }

    // ==================== SETUP ====================
    // Used when building positions by hand (tests, editors). No invariant
    // checks are made here; `from_fen` is the validated load path.

    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        if let Some(old) = self.squares[square.index()] {
            self.take(square, old);
        }
        if let Some(piece) = piece {
            self.put(square, piece);
        }
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.castling = rights;
    }

    pub fn set_en_passant(&mut self, square: Option<Square>) {
        self.en_passant = square;
    }

    pub fn set_clocks(&mut self, halfmove_clock: u32, fullmove_number: u32) {
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number.max(1);
    }

    #[inline(always)]
    fn put(&mut self, square: Square, piece: Piece) {
        self.squares[square.index()] = Some(piece);
        self.bitboards.add_piece(piece, square);
    }

    #[inline(always)]
    fn take(&mut self, square: Square, piece: Piece) {
        self.squares[square.index()] = None;
        self.bitboards.remove_piece(piece, square);
    }

    // ==================== MAKE / UNMAKE ====================

    /// Applies `mv` after checking that it fits the board.
    ///
    /// This is a contract check, not a legality check: it rejects moves that
    /// could not have come from this position's generator (wrong side, wrong
    /// piece, mismatched capture) and leaves the position untouched when it
    /// does. Whether the move leaves the king in check is the generator's
    /// concern; see [`Position::legal_moves`].
    pub fn apply(&mut self, mv: Move) -> Result<UndoInfo, ChessError> {
        self.check_fits(mv)?;
        Ok(self.make_move(mv))
    }

    fn check_fits(&self, mv: Move) -> Result<(), ChessError> {
        let fault = |reason| Err(ChessError::InvalidMove { mv, reason });
        let us = self.side_to_move;

        if mv.piece.color != us {
            return fault("wrong side to move");
        }
        match self.squares[mv.from.index()] {
            None => return fault("source square is empty"),
            Some(piece) if piece != mv.piece => return fault("source square holds a different piece"),
            Some(_) => {}
        }
        if mv.from == mv.to {
            return fault("source and destination are the same square");
        }
        if matches!(self.squares[mv.to.index()], Some(p) if p.color == us) {
            return fault("destination holds a piece of the moving side");
        }
        if let Some(captured) = mv.captured {
            if captured.color == us {
                return fault("captured piece belongs to the moving side");
            }
            if captured.piece_type == Type::King {
                return fault("kings cannot be captured");
            }
        }

        match mv.flag {
            MoveFlag::EnPassant => {
                if mv.piece.piece_type != Type::Pawn || self.en_passant != Some(mv.to) {
                    return fault("en passant without a matching target square");
                }
                if self.squares[mv.capture_square().index()] != mv.captured || mv.captured.is_none() {
                    return fault("no pawn to capture en passant");
                }
            }
            MoveFlag::CastleKingside | MoveFlag::CastleQueenside => {
                let side = if mv.flag == MoveFlag::CastleKingside {
                    CastleSide::Kingside
                } else {
                    CastleSide::Queenside
                };
                let (king_from, king_to, rook_from, _) = side.squares(us);
                if mv.piece.piece_type != Type::King
                    || mv.from != king_from
                    || mv.to != king_to
                    || mv.captured.is_some()
                {
                    return fault("castle flag on a non-castling move");
                }
                if !self.castling.has(us, side)
                    || self.squares[rook_from.index()] != Some(Piece::new(us, Type::Rook))
                {
                    return fault("castling right not available");
                }
                if self.bitboards.all_occupied() & side.between_mask(us) != 0 {
                    return fault("castling path is blocked");
                }
            }
            MoveFlag::Normal | MoveFlag::DoublePawnPush => {
                if self.squares[mv.to.index()] != mv.captured {
                    return fault("captured piece does not match the destination square");
                }
                if mv.piece.piece_type == Type::King
                    && (mv.from.file().abs_diff(mv.to.file()) > 1 || mv.from.rank().abs_diff(mv.to.rank()) > 1)
                {
                    return fault("king moves one square unless castling");
                }
            }
        }

        let reaches_last_rank =
            mv.piece.piece_type == Type::Pawn && mv.to.rank() == us.promotion_rank();
        match mv.promotion {
            Some(_) if !reaches_last_rank => return fault("promotion without reaching the last rank"),
            Some(Type::Pawn) | Some(Type::King) => return fault("invalid promotion piece"),
            None if reaches_last_rank => return fault("pawn must promote on the last rank"),
            _ => {}
        }
        Ok(())
    }

    /// Applies a move produced by this position's generator without
    /// re-validating it. Search and perft use this on their own copies.
    pub(crate) fn make_move(&mut self, mv: Move) -> UndoInfo {
        let undo = UndoInfo {
            mv,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        };
        let us = mv.piece.color;

        if let Some(captured) = mv.captured {
            self.take(mv.capture_square(), captured);
        }
        self.take(mv.from, mv.piece);
        let placed = match mv.promotion {
            Some(kind) => Piece::new(us, kind),
            None => mv.piece,
        };
        self.put(mv.to, placed);

        if let Some(side) = castle_side(mv.flag) {
            let (_, _, rook_from, rook_to) = side.squares(us);
            let rook = Piece::new(us, Type::Rook);
            self.take(rook_from, rook);
            self.put(rook_to, rook);
        }

        if mv.piece.piece_type == Type::King {
            self.castling.remove_color(us);
        }
        self.castling.touch(mv.from);
        self.castling.touch(mv.to);

        self.en_passant = match mv.flag {
            MoveFlag::DoublePawnPush => Square::from_index((mv.from.index() + mv.to.index()) / 2),
            _ => None,
        };

        if mv.is_irreversible() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if us == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = us.opposite();

        undo
    }

    /// Reverts the move recorded in `undo`. Tokens must be undone in the
    /// reverse order they were produced.
    pub fn undo(&mut self, undo: UndoInfo) {
        let mv = undo.mv;
        let us = mv.piece.color;

        if let Some(side) = castle_side(mv.flag) {
            let (_, _, rook_from, rook_to) = side.squares(us);
            let rook = Piece::new(us, Type::Rook);
            self.take(rook_to, rook);
            self.put(rook_from, rook);
        }

        let placed = match mv.promotion {
            Some(kind) => Piece::new(us, kind),
            None => mv.piece,
        };
        self.take(mv.to, placed);
        self.put(mv.from, mv.piece);
        if let Some(captured) = mv.captured {
            self.put(mv.capture_square(), captured);
        }

        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;
        self.side_to_move = us;
    }

    // ==================== ATTACKS ====================

    /// Checks if a square is under attack by any piece of the given color
    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        self.is_square_attacked_with(square, by_color, self.bitboards.all_occupied())
    }

    /// Attack test against an explicit occupancy, so callers can treat a
    /// square as vacated without touching the board
    pub(crate) fn is_square_attacked_with(&self, square: Square, by_color: Color, occupied: u64) -> bool {
        let bb = &self.bitboards;

        // A pawn of `by_color` attacks `square` exactly when a pawn of the
        // other color on `square` would attack the pawn
        if pawn_attacks(by_color.opposite(), square) & bb.pieces_of_type(by_color, Type::Pawn) != 0 {
            return true;
        }
        if KNIGHT_ATTACKS[square.index()] & bb.pieces_of_type(by_color, Type::Knight) != 0 {
            return true;
        }
        if KING_ATTACKS[square.index()] & bb.pieces_of_type(by_color, Type::King) != 0 {
            return true;
        }

        let queens = bb.pieces_of_type(by_color, Type::Queen);
        let diagonal = bb.pieces_of_type(by_color, Type::Bishop) | queens;
        if diagonal != 0 && bishop_attacks(square, occupied) & diagonal & occupied != 0 {
            return true;
        }
        let orthogonal = bb.pieces_of_type(by_color, Type::Rook) | queens;
        orthogonal != 0 && rook_attacks(square, occupied) & orthogonal & occupied != 0
    }

    /// Checks if the king of the given color is currently in check
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king, color.opposite()),
            None => false,
        }
    }

    /// Whether the side to move is in check
    #[inline]
    pub fn in_check(&self) -> bool {
        self.is_in_check(self.side_to_move)
    }
}

#[inline]
fn castle_side(flag: MoveFlag) -> Option<CastleSide> {
    match flag {
        MoveFlag::CastleKingside => Some(CastleSide::Kingside),
        MoveFlag::CastleQueenside => Some(CastleSide::Queenside),
        _ => None,
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let c = Square::new(file, rank)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', |p| p.to_char());
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_start_position_layout() {
        let pos = Position::new();
        assert_eq!(pos.piece_at(sq("e1")), Some(Piece::new(Color::White, Type::King)));
        assert_eq!(pos.piece_at(sq("d8")), Some(Piece::new(Color::Black, Type::Queen)));
        assert_eq!(pos.piece_at(sq("e4")), None);
        assert_eq!(pos.bitboards.all_occupied().count_ones(), 32);
        assert_eq!(pos.side_to_move(), Color::White);
        assert_eq!(pos.castling_rights(), CastlingRights::all());
    }

    #[test]
    fn test_apply_rejects_wrong_side_and_leaves_board() {
        let mut pos = Position::new();
        let before = pos.clone();
        let black_pawn = Piece::new(Color::Black, Type::Pawn);
        let mv = Move::new(sq("e7"), sq("e5"), black_pawn, None).with_flag(MoveFlag::DoublePawnPush);
        assert!(matches!(pos.apply(mv), Err(ChessError::InvalidMove { .. })));
        assert_eq!(pos, before);
    }

    #[test]
    fn test_apply_rejects_king_hop_without_castle_flag() {
        let mut pos = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
        let before = pos.clone();
        let king = Piece::new(Color::White, Type::King);
        let hop = Move::new(sq("e1"), sq("g1"), king, None);
        assert!(matches!(pos.apply(hop), Err(ChessError::InvalidMove { .. })));
        assert_eq!(pos, before);

        let castle = hop.with_flag(MoveFlag::CastleKingside);
        pos.apply(castle).unwrap();
        assert_eq!(pos.piece_at(sq("f1")), Some(Piece::new(Color::White, Type::Rook)));
    }

    #[test]
    fn test_apply_rejects_empty_source() {
        let mut pos = Position::new();
        let knight = Piece::new(Color::White, Type::Knight);
        let mv = Move::new(sq("d4"), sq("e6"), knight, None);
        assert!(pos.apply(mv).is_err());
    }

    #[test]
    fn test_double_push_sets_en_passant_target() {
        let mut pos = Position::new();
        let pawn = Piece::new(Color::White, Type::Pawn);
        let mv = Move::new(sq("e2"), sq("e4"), pawn, None).with_flag(MoveFlag::DoublePawnPush);
        let undo = pos.apply(mv).unwrap();
        assert_eq!(pos.en_passant(), Some(sq("e3")));
        assert_eq!(pos.side_to_move(), Color::Black);
        pos.undo(undo);
        assert_eq!(pos, Position::new());
    }

    #[test]
    fn test_square_attacked_by_slider_through_gap() {
        let mut pos = Position::empty();
        pos.set_piece(sq("a1"), Some(Piece::new(Color::Black, Type::Rook)));
        assert!(pos.is_square_attacked(sq("a8"), Color::Black));
        pos.set_piece(sq("a4"), Some(Piece::new(Color::White, Type::Pawn)));
        assert!(!pos.is_square_attacked(sq("a8"), Color::Black));
        assert!(pos.is_square_attacked(sq("a4"), Color::Black));
    }

    #[test]
    fn test_display_board() {
        let text = Position::new().to_string();
        assert!(text.starts_with("8  r n b q k b n r"));
        assert!(text.ends_with("   a b c d e f g h"));
    }
}
