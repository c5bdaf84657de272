//! Precomputed attack tables, built at compile time from the movement
//! offsets of each piece kind.

use super::{bitscan_forward, bitscan_reverse};
use crate::game_repr::{Color, Square};

/// (rank delta, file delta) for the knight's jumps
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

/// (rank delta, file delta) for the king's steps
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// KNIGHT_ATTACKS[square] returns a bitboard of all squares a knight can attack from that square
pub static KNIGHT_ATTACKS: [u64; 64] = generate_leaper_attacks(&KNIGHT_OFFSETS);

/// KING_ATTACKS[square] returns a bitboard of all squares a king can attack from that square
pub static KING_ATTACKS: [u64; 64] = generate_leaper_attacks(&KING_OFFSETS);

/// PAWN_ATTACKS[color][square] returns a bitboard of squares a pawn can attack from that square
pub static PAWN_ATTACKS: [[u64; 64]; 2] = generate_pawn_attacks();

/// RAYS[direction][square] returns a bitboard of all squares in that direction from the square
pub static RAYS: [[u64; 64]; 8] = generate_rays();

// Direction indices, ordered to match DIRECTION_DELTAS
pub const NORTH: usize = 0;
pub const NORTH_EAST: usize = 1;
pub const EAST: usize = 2;
pub const SOUTH_EAST: usize = 3;
pub const SOUTH: usize = 4;
pub const SOUTH_WEST: usize = 5;
pub const WEST: usize = 6;
pub const NORTH_WEST: usize = 7;

pub const ORTHOGONAL: [usize; 4] = [NORTH, EAST, SOUTH, WEST];
pub const DIAGONAL: [usize; 4] = [NORTH_EAST, SOUTH_EAST, SOUTH_WEST, NORTH_WEST];

/// (rank delta, file delta) per direction index
const DIRECTION_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Rays pointing towards higher square indices scan forward for the first blocker
#[inline(always)]
const fn is_positive(direction: usize) -> bool {
    matches!(direction, NORTH | NORTH_EAST | EAST | NORTH_WEST)
}

const fn generate_leaper_attacks(offsets: &[(i8, i8); 8]) -> [u64; 64] {
    let mut attacks = [0u64; 64];
    let mut sq = 0;

    while sq < 64 {
        let rank = (sq / 8) as i8;
        let file = (sq % 8) as i8;
        let mut attack = 0u64;

        let mut i = 0;
        while i < 8 {
            let (dr, df) = offsets[i];
            let new_rank = rank + dr;
            let new_file = file + df;

            if new_rank >= 0 && new_rank < 8 && new_file >= 0 && new_file < 8 {
                attack |= 1u64 << (new_rank * 8 + new_file);
            }
            i += 1;
        }

        attacks[sq] = attack;
        sq += 1;
    }

    attacks
}

/// Index 0 = White, Index 1 = Black
const fn generate_pawn_attacks() -> [[u64; 64]; 2] {
    let mut attacks = [[0u64; 64]; 2];
    let mut sq = 0;

    while sq < 64 {
        let rank = sq / 8;
        let file = sq % 8;

        if rank < 7 {
            if file > 0 {
                attacks[0][sq] |= 1u64 << (sq + 7);
            }
            if file < 7 {
                attacks[0][sq] |= 1u64 << (sq + 9);
            }
        }
        if rank > 0 {
            if file > 0 {
                attacks[1][sq] |= 1u64 << (sq - 9);
            }
            if file < 7 {
                attacks[1][sq] |= 1u64 << (sq - 7);
            }
        }

        sq += 1;
    }

    attacks
}

const fn generate_rays() -> [[u64; 64]; 8] {
    let mut rays = [[0u64; 64]; 8];
    let mut dir = 0;

    while dir < 8 {
        let (dr, df) = DIRECTION_DELTAS[dir];
        let mut sq = 0;
        while sq < 64 {
            let mut r = (sq / 8) as i8 + dr;
            let mut f = (sq % 8) as i8 + df;
            while r >= 0 && r < 8 && f >= 0 && f < 8 {
                rays[dir][sq] |= 1u64 << (r * 8 + f);
                r += dr;
                f += df;
            }
            sq += 1;
        }
        dir += 1;
    }

    rays
}

/// Squares a pawn of `color` on `square` attacks
#[inline(always)]
pub fn pawn_attacks(color: Color, square: Square) -> u64 {
    PAWN_ATTACKS[color.index()][square.index()]
}

/// Squares reached along one ray, stopping at (and including) the first blocker
#[inline]
pub fn ray_attacks(direction: usize, square: Square, occupied: u64) -> u64 {
    let ray = RAYS[direction][square.index()];
    let blockers = ray & occupied;
    if blockers == 0 {
        return ray;
    }
    let blocker = if is_positive(direction) {
        bitscan_forward(blockers)
    } else {
        bitscan_reverse(blockers)
    };
    ray & !RAYS[direction][blocker]
}

/// First occupied square along a ray, if any
#[inline]
pub fn first_blocker(direction: usize, square: Square, occupied: u64) -> Option<Square> {
    let blockers = RAYS[direction][square.index()] & occupied;
    if blockers == 0 {
        return None;
    }
    let idx = if is_positive(direction) {
        bitscan_forward(blockers)
    } else {
        bitscan_reverse(blockers)
    };
    Square::from_index(idx)
}

pub fn bishop_attacks(square: Square, occupied: u64) -> u64 {
    DIAGONAL
        .iter()
        .fold(0, |acc, &dir| acc | ray_attacks(dir, square, occupied))
}

pub fn rook_attacks(square: Square, occupied: u64) -> u64 {
    ORTHOGONAL
        .iter()
        .fold(0, |acc, &dir| acc | ray_attacks(dir, square, occupied))
}

pub fn queen_attacks(square: Square, occupied: u64) -> u64 {
    bishop_attacks(square, occupied) | rook_attacks(square, occupied)
}
