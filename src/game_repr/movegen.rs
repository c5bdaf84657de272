use super::bitboards::squares;
use super::{Move, MoveList, Position, Square, Type};
use crate::error::ChessError;

impl Position {
    /// Generate all pseudo-legal moves for the side to move into a provided buffer.
    /// The buffer is cleared before adding moves.
    pub fn pseudo_legal_moves_into(&self, moves: &mut MoveList) {
        moves.clear();
        let us = self.side_to_move;

        for piece_type in Type::ALL {
            for from in squares(self.bitboards.pieces_of_type(us, piece_type)) {
                self.piece_moves_into(from, moves);
            }
        }
    }

    pub fn pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.pseudo_legal_moves_into(&mut moves);
        moves
    }

    /// Generate all legal moves for the side to move into a provided buffer.
    ///
    /// Order is deterministic: pieces by kind (pawns first), squares from a1
    /// upwards, then each piece's own target order.
    pub fn legal_moves_into(&self, moves: &mut MoveList) {
        self.pseudo_legal_moves_into(moves);
        let mut scratch = self.clone();
        moves.retain(|mv| scratch.leaves_king_safe(*mv));
    }

    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.legal_moves_into(&mut moves);
        moves
    }

    /// Cheaper than `legal_moves().is_empty()`: stops at the first legal move
    pub fn has_legal_moves(&self) -> bool {
        let moves = self.pseudo_legal_moves();
        let mut scratch = self.clone();
        moves.iter().any(|mv| scratch.leaves_king_safe(*mv))
    }

    /// Simulate-and-check: play the move, test the mover's king, take it back
    pub(crate) fn leaves_king_safe(&mut self, mv: Move) -> bool {
        let mover = mv.piece.color;
        let undo = self.make_move(mv);
        let safe = !self.is_in_check(mover);
        self.undo(undo);
        safe
    }

    /// Legal moves of the piece on `from`; empty for empty squares or the
    /// side not to move
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        let mut moves = self.legal_moves();
        moves.retain(|mv| mv.from == from);
        moves
    }

    /// Resolves a from/to pair (plus promotion kind) to the legal move it
    /// denotes. Castling is the king's two-square move.
    pub fn find_move(&self, from: Square, to: Square, promotion: Option<Type>) -> Option<Move> {
        self.legal_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
    }

    /// Membership test against the legal move list. Moves from untrusted
    /// sources must pass this before `apply`.
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.legal_moves().contains(mv)
    }

    /// Parses long algebraic text (`e2e4`, `e7e8q`) into a legal move
    pub fn parse_uci_move(&self, text: &str) -> Result<Move, ChessError> {
        let text = text.trim();
        let illegal = || ChessError::IllegalMove(text.to_string());

        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(illegal());
        }
        let from: Square = text[0..2].parse()?;
        let to: Square = text[2..4].parse()?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => match Type::from_char(c) {
                Some(kind) if Type::PROMOTIONS.contains(&kind) => Some(kind),
                _ => return Err(illegal()),
            },
        };

        self.find_move(from, to, promotion).ok_or_else(illegal)
    }
}
