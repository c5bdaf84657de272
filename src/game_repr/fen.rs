//! Forsyth-Edwards Notation load and save.
//!
//! Loading is the entry point for positions coming from outside the engine
//! (saved games, network peers), so it checks board invariants as well as
//! syntax: a malformed string is `InvalidFen`, a well-formed string that
//! describes an impossible board is `CorruptState`.

use super::bitboards::{RANK_1, RANK_8};
use super::{CastleSide, CastlingRights, Color, Piece, Position, Square, Type};
use crate::error::ChessError;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parses a FEN string. Only the placement field is required; missing
    /// trailing fields default to `w - - 0 1`.
    pub fn from_fen(fen: &str) -> Result<Position, ChessError> {
        let bad = |what: &str| ChessError::InvalidFen(format!("{what} in \"{fen}\""));
        let mut fields = fen.split_whitespace();

        let placement = fields.next().ok_or_else(|| bad("empty string"))?;
        let side = fields.next().unwrap_or("w");
        let castling = fields.next().unwrap_or("-");
        let en_passant = fields.next().unwrap_or("-");
        let halfmove = fields.next().unwrap_or("0");
        let fullmove = fields.next().unwrap_or("1");
        if fields.next().is_some() {
            return Err(bad("trailing fields"));
        }

        let mut pos = Position::empty();

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(bad("placement must have 8 ranks"));
        }
        for (i, rank_text) in ranks.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file = 0u8;
            for c in rank_text.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as u8;
                } else {
                    let piece = Piece::from_char(c).ok_or_else(|| bad("unknown piece letter"))?;
                    let square = Square::new(file, rank).ok_or_else(|| bad("rank overflows 8 files"))?;
                    pos.set_piece(square, Some(piece));
                    file += 1;
                }
                if file > 8 {
                    return Err(bad("rank overflows 8 files"));
                }
            }
            if file != 8 {
                return Err(bad("rank does not cover 8 files"));
            }
        }

        pos.side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(bad("side to move must be 'w' or 'b'")),
        };

        let mut rights = CastlingRights::none();
        if castling != "-" {
            for c in castling.chars() {
                match c {
                    'K' => rights.set(Color::White, CastleSide::Kingside),
                    'Q' => rights.set(Color::White, CastleSide::Queenside),
                    'k' => rights.set(Color::Black, CastleSide::Kingside),
                    'q' => rights.set(Color::Black, CastleSide::Queenside),
                    _ => return Err(bad("unknown castling flag")),
                }
            }
        }
        pos.castling = rights;

        pos.en_passant = match en_passant {
            "-" => None,
            text => Some(text.parse::<Square>().map_err(|_| bad("bad en passant square"))?),
        };

        pos.halfmove_clock = halfmove.parse().map_err(|_| bad("bad halfmove clock"))?;
        let fullmove: u32 = fullmove.parse().map_err(|_| bad("bad fullmove number"))?;
        pos.fullmove_number = fullmove.max(1);

        pos.validate()?;
        Ok(pos)
    }

    /// Checks the invariants every reachable position satisfies
    pub fn validate(&self) -> Result<(), ChessError> {
        let corrupt = |what: String| Err(ChessError::CorruptState(what));

        for color in [Color::White, Color::Black] {
            let kings = self.bitboards.pieces_of_type(color, Type::King).count_ones();
            if kings != 1 {
                return corrupt(format!("{color:?} has {kings} kings"));
            }
        }

        if self.bitboards.pieces_of_kind(Type::Pawn) & (RANK_1 | RANK_8) != 0 {
            return corrupt("pawn on the first or last rank".to_string());
        }

        for color in [Color::White, Color::Black] {
            for side in CastleSide::BOTH {
                if !self.castling.has(color, side) {
                    continue;
                }
                let (king_home, _, rook_home, _) = side.squares(color);
                if self.piece_at(king_home) != Some(Piece::new(color, Type::King))
                    || self.piece_at(rook_home) != Some(Piece::new(color, Type::Rook))
                {
                    return corrupt(format!("{color:?} {side:?} castling right without king and rook at home"));
                }
            }
        }

        if let Some(target) = self.en_passant {
            // The pawn that just double-pushed belongs to the side not to move
            let mover = self.side_to_move.opposite();
            let (target_rank, back) = match mover {
                Color::White => (2, -1),
                Color::Black => (5, 1),
            };
            let pushed = target.offset(0, -back);
            let origin = target.offset(0, back);
            let plausible = target.rank() == target_rank
                && self.piece_at(target).is_none()
                && origin.is_some_and(|sq| self.piece_at(sq).is_none())
                && pushed.and_then(|sq| self.piece_at(sq)) == Some(Piece::new(mover, Type::Pawn));
            if !plausible {
                return corrupt(format!("impossible en passant target {target}"));
            }
        }

        if self.is_in_check(self.side_to_move.opposite()) {
            return corrupt("side not to move is in check".to_string());
        }

        Ok(())
    }

    /// Converts the current position to FEN notation
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);

        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                match Square::new(file, rank).and_then(|sq| self.piece_at(sq)) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        let side = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let en_passant = self.en_passant.map_or_else(|| "-".to_string(), |sq| sq.to_string());
        fen.push_str(&format!(
            " {} {} {} {} {}",
            side, self.castling, en_passant, self.halfmove_clock, self.fullmove_number
        ));
        fen
    }
}
