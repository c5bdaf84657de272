use super::bitboards::{squares, LIGHT_SQUARES};
use super::{Color, Position, Type};

/// Half-moves without a pawn move or capture that end the game
pub const FIFTY_MOVE_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    FiftyMove,
    InsufficientMaterial,
    Repetition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl GameResult {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::Ongoing)
    }

    /// Winning side, `None` for draws and unfinished games
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::Checkmate { winner } => Some(*winner),
            _ => None,
        }
    }
}

/// Classifies `pos` given the keys of every earlier position of the game
/// (oldest first, current position excluded).
///
/// Checkmate and stalemate take precedence over the draw rules: a mating
/// move that also makes the hundredth quiet half-move is still mate.
pub fn classify(pos: &Position, history: &[u64]) -> GameResult {
    if !pos.has_legal_moves() {
        return if pos.in_check() {
            GameResult::Checkmate {
                winner: pos.side_to_move().opposite(),
            }
        } else {
            GameResult::Stalemate
        };
    }
    if pos.halfmove_clock() >= FIFTY_MOVE_LIMIT {
        return GameResult::Draw(DrawReason::FiftyMove);
    }
    if is_insufficient_material(pos) {
        return GameResult::Draw(DrawReason::InsufficientMaterial);
    }
    if repetition_count(pos, history) >= 3 {
        return GameResult::Draw(DrawReason::Repetition);
    }
    GameResult::Ongoing
}

/// How many times the current position has occurred, itself included.
///
/// Only the last `halfmove_clock` entries can match: any capture, pawn move
/// or castle changes the placement for good.
pub fn repetition_count(pos: &Position, history: &[u64]) -> usize {
    let key = pos.zobrist_key();
    let window = (pos.halfmove_clock() as usize).min(history.len());
    1 + history[history.len() - window..]
        .iter()
        .filter(|&&k| k == key)
        .count()
}

/// Neither side can force mate: bare kings, a single minor piece, or
/// bishops only with every bishop on the same square color.
pub fn is_insufficient_material(pos: &Position) -> bool {
    let bb = pos.bitboards();
    let heavy = bb.pieces_of_kind(Type::Pawn) | bb.pieces_of_kind(Type::Rook) | bb.pieces_of_kind(Type::Queen);
    if heavy != 0 {
        return false;
    }

    let knights = bb.pieces_of_kind(Type::Knight);
    let bishops = bb.pieces_of_kind(Type::Bishop);
    let minors = (knights | bishops).count_ones();

    match minors {
        0 | 1 => true,
        _ if knights != 0 => false,
        _ => {
            let on_light = squares(bishops).filter(|sq| LIGHT_SQUARES & sq.bit() != 0).count();
            on_light == 0 || on_light == bishops.count_ones() as usize
        }
    }
}

impl Position {
    pub fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_legal_moves()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && !self.has_legal_moves()
    }
}
