// Position evaluation function
// Returns score in centipawns, positive = good for White

use crate::game_repr::bitboards::{file_mask, squares, KING_ATTACKS};
use crate::game_repr::piece_moves::attacks_from;
use crate::game_repr::{Color, Piece, Position, Square, Type};
use super::piece_square_tables::pst_value;

// Material values in centipawns
pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 330;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;

// Phase values for game phase calculation (opening=256, endgame=0)
const KNIGHT_PHASE: i32 = 1;
const BISHOP_PHASE: i32 = 1;
const ROOK_PHASE: i32 = 2;
const QUEEN_PHASE: i32 = 4;
const TOTAL_PHASE: i32 = KNIGHT_PHASE * 4 + BISHOP_PHASE * 4 + ROOK_PHASE * 4 + QUEEN_PHASE * 2;

/// Tapered evaluation score with middlegame and endgame components
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaperedScore {
    pub mg: i32, // Middlegame score
    pub eg: i32, // Endgame score
}

impl TaperedScore {
    pub const fn new(mg: i32, eg: i32) -> Self {
        Self { mg, eg }
    }

    /// Interpolate between middlegame and endgame scores based on game phase
    /// phase: 0 (endgame) to 256 (opening)
    pub fn interpolate(&self, phase: i32) -> i32 {
        ((self.mg * phase) + (self.eg * (256 - phase))) / 256
    }

    pub fn add(&mut self, other: TaperedScore) {
        self.mg += other.mg;
        self.eg += other.eg;
    }

    pub fn sub(&mut self, other: TaperedScore) {
        self.mg -= other.mg;
        self.eg -= other.eg;
    }

    pub const fn scaled(self, factor: i32) -> TaperedScore {
        TaperedScore::new(self.mg * factor, self.eg * factor)
    }
}

// Pawn structure (tapered: mg/eg)
const DOUBLED_PAWN_PENALTY: TaperedScore = TaperedScore::new(15, 20);
const ISOLATED_PAWN_PENALTY: TaperedScore = TaperedScore::new(20, 25);
const PASSED_PAWN_BONUS: TaperedScore = TaperedScore::new(40, 70);

// King safety
const PAWN_SHIELD_BONUS: TaperedScore = TaperedScore::new(15, 5);
const OPEN_FILE_NEAR_KING: TaperedScore = TaperedScore::new(25, 5);
const SEMI_OPEN_FILE_NEAR_KING: TaperedScore = TaperedScore::new(12, 0);
const KING_ZONE_ATTACK: TaperedScore = TaperedScore::new(8, 2);

// Mobility bonuses per reachable square (mg/eg)
const KNIGHT_MOBILITY: TaperedScore = TaperedScore::new(4, 4);
const BISHOP_MOBILITY: TaperedScore = TaperedScore::new(5, 5);
const ROOK_MOBILITY: TaperedScore = TaperedScore::new(2, 4);
const QUEEN_MOBILITY: TaperedScore = TaperedScore::new(1, 2);
const KING_MOBILITY: TaperedScore = TaperedScore::new(0, 3);

const BISHOP_PAIR_BONUS: TaperedScore = TaperedScore::new(40, 50);

/// Material value for a piece type; the king is priceless and counts zero
pub fn piece_value(piece_type: Type) -> i32 {
    match piece_type {
        Type::Pawn => PAWN_VALUE,
        Type::Knight => KNIGHT_VALUE,
        Type::Bishop => BISHOP_VALUE,
        Type::Rook => ROOK_VALUE,
        Type::Queen => QUEEN_VALUE,
        Type::King => 0,
    }
}

/// Game phase from remaining non-pawn material.
/// Returns value from 0 (endgame) to 256 (opening)
pub fn game_phase(pos: &Position) -> i32 {
    let bb = pos.bitboards();
    let count = |kind| bb.pieces_of_kind(kind).count_ones() as i32;

    let phase = count(Type::Knight) * KNIGHT_PHASE
        + count(Type::Bishop) * BISHOP_PHASE
        + count(Type::Rook) * ROOK_PHASE
        + count(Type::Queen) * QUEEN_PHASE;

    // Promotions can push past the starting total
    ((phase * 256 + (TOTAL_PHASE / 2)) / TOTAL_PHASE).clamp(0, 256)
}

/// Sum of piece values, no positional terms
pub fn material(pos: &Position, color: Color) -> i32 {
    let bb = pos.bitboards();
    Type::ALL
        .iter()
        .map(|&kind| bb.pieces_of_type(color, kind).count_ones() as i32 * piece_value(kind))
        .sum()
}

/// Piece-square contribution for one side
fn evaluate_placement(pos: &Position, color: Color) -> TaperedScore {
    let bb = pos.bitboards();
    let mut score = TaperedScore::default();
    for kind in Type::ALL {
        for square in squares(bb.pieces_of_type(color, kind)) {
            let (mg, eg) = pst_value(kind, square, color);
            score.add(TaperedScore::new(mg, eg));
        }
    }
    score
}

/// Squares strictly ahead of `square` from `color`'s point of view
fn ranks_ahead(square: Square, color: Color) -> u64 {
    let rank = square.rank() as u32;
    match color {
        Color::White if rank < 7 => !0u64 << (8 * (rank + 1)),
        Color::Black if rank > 0 => (1u64 << (8 * rank)) - 1,
        _ => 0,
    }
}

/// `file` plus its neighbours
fn file_span(file: u8) -> u64 {
    let mut mask = file_mask(file);
    if file > 0 {
        mask |= file_mask(file - 1);
    }
    if file < 7 {
        mask |= file_mask(file + 1);
    }
    mask
}

/// Pawn shield, open files around the king and enemy pressure on the
/// squares next to it
fn evaluate_king_safety(pos: &Position, color: Color) -> TaperedScore {
    let Some(king_sq) = pos.king_square(color) else {
        return TaperedScore::default();
    };
    let bb = pos.bitboards();
    let own_pawns = bb.pieces_of_type(color, Type::Pawn);
    let enemy_pawns = bb.pieces_of_type(color.opposite(), Type::Pawn);
    let mut score = TaperedScore::default();

    // Own pawns up to two ranks in front of the king
    let shield_zone = file_span(king_sq.file()) & ranks_ahead(king_sq, color) & {
        let forward_two = match color {
            Color::White => king_sq.offset(0, 2),
            Color::Black => king_sq.offset(0, -2),
        };
        match forward_two {
            Some(limit) => !ranks_ahead(limit, color),
            None => !0,
        }
    };
    let shield = (own_pawns & shield_zone).count_ones() as i32;
    score.add(PAWN_SHIELD_BONUS.scaled(shield));

    let king_file = king_sq.file();
    for file in king_file.saturating_sub(1)..=(king_file + 1).min(7) {
        let mask = file_mask(file);
        if own_pawns & mask == 0 {
            if enemy_pawns & mask == 0 {
                score.sub(OPEN_FILE_NEAR_KING);
            } else {
                score.sub(SEMI_OPEN_FILE_NEAR_KING);
            }
        }
    }

    let zone = KING_ATTACKS[king_sq.index()] | king_sq.bit();
    let occupied = bb.all_occupied();
    let enemy = color.opposite();
    let mut attacked = 0;
    for kind in [Type::Pawn, Type::Knight, Type::Bishop, Type::Rook, Type::Queen] {
        for from in squares(bb.pieces_of_type(enemy, kind)) {
            attacked += (attacks_from(Piece::new(enemy, kind), from, occupied) & zone).count_ones() as i32;
        }
    }
    score.sub(KING_ZONE_ATTACK.scaled(attacked));

    score
}

/// Evaluate pawn structure (doubled, isolated, passed pawns)
fn evaluate_pawn_structure(pos: &Position, color: Color) -> TaperedScore {
    let bb = pos.bitboards();
    let own_pawns = bb.pieces_of_type(color, Type::Pawn);
    let enemy_pawns = bb.pieces_of_type(color.opposite(), Type::Pawn);
    let mut score = TaperedScore::default();

    for square in squares(own_pawns) {
        let file = square.file();
        let same_file = file_mask(file);

        if (own_pawns & same_file).count_ones() > 1 {
            score.sub(DOUBLED_PAWN_PENALTY);
        }

        let neighbours = file_span(file) & !same_file;
        if own_pawns & neighbours == 0 {
            score.sub(ISOLATED_PAWN_PENALTY);
        }

        if is_passed_pawn(square, color, enemy_pawns) {
            score.add(PASSED_PAWN_BONUS);
        }
    }

    score
}

/// No enemy pawn ahead on the same or an adjacent file
fn is_passed_pawn(square: Square, color: Color, enemy_pawns: u64) -> bool {
    enemy_pawns & file_span(square.file()) & ranks_ahead(square, color) == 0
}

/// Pseudo-legal reach of every piece: attacked squares not holding a
/// friendly piece. Pawns are covered by the tables.
fn evaluate_mobility(pos: &Position, color: Color) -> TaperedScore {
    let bb = pos.bitboards();
    let occupied = bb.all_occupied();
    let own = bb.occupied_by_color(color);
    let mut mobility = TaperedScore::default();

    for (kind, weight) in [
        (Type::Knight, KNIGHT_MOBILITY),
        (Type::Bishop, BISHOP_MOBILITY),
        (Type::Rook, ROOK_MOBILITY),
        (Type::Queen, QUEEN_MOBILITY),
        (Type::King, KING_MOBILITY),
    ] {
        let piece = Piece::new(color, kind);
        for square in squares(bb.pieces_of_type(color, kind)) {
            let reach = (attacks_from(piece, square, occupied) & !own).count_ones() as i32;
            mobility.add(weight.scaled(reach));
        }
    }

    mobility
}

fn evaluate_bishop_pair(pos: &Position, color: Color) -> TaperedScore {
    if pos.bitboards().pieces_of_type(color, Type::Bishop).count_ones() >= 2 {
        BISHOP_PAIR_BONUS
    } else {
        TaperedScore::default()
    }
}

/// Every tapered term for one side
fn evaluate_side(pos: &Position, color: Color) -> TaperedScore {
    let mut score = evaluate_placement(pos, color);
    score.add(evaluate_king_safety(pos, color));
    score.add(evaluate_pawn_structure(pos, color));
    score.add(evaluate_mobility(pos, color));
    score.add(evaluate_bishop_pair(pos, color));
    score
}

/// Static evaluation in centipawns, positive when White stands better.
///
/// Pure function of the board: the same position always yields the same
/// score, and the colour-mirrored position yields its negation.
pub fn evaluate(pos: &Position) -> i32 {
    let phase = game_phase(pos);

    let material_score = material(pos, Color::White) - material(pos, Color::Black);
    let white = evaluate_side(pos, Color::White).interpolate(phase);
    let black = evaluate_side(pos, Color::Black).interpolate(phase);

    material_score + white - black
}
