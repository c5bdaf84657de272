// Move ordering: captures first, most valuable victim / least valuable attacker

use crate::game_repr::{Move, MoveList, Position, Type};
use super::evaluation::piece_value;

const CAPTURE_BASE: i32 = 10_000;
const PROMOTION_BASE: i32 = 9_000;

/// Ordering score for a move (higher = searched earlier).
/// Quiet moves all score zero and keep generation order.
pub fn score_move(mv: &Move) -> i32 {
    let mut score = 0;

    if let Some(victim) = mv.captured {
        // MVV-LVA: high victim value, low attacker value = good capture
        let attacker = match mv.piece.piece_type {
            Type::King => piece_value(Type::Queen) + 100,
            kind => piece_value(kind),
        };
        score += CAPTURE_BASE + piece_value(victim.piece_type) - attacker / 10;
    }

    if let Some(promotion) = mv.promotion {
        score += PROMOTION_BASE + piece_value(promotion) / 10;
    }

    score
}

/// Sorts `moves` in place, best first. The sort is stable, so equal
/// scores stay in generation order and the search stays deterministic.
/// `pv` (the previous iteration's best move) goes to the very front.
pub fn order_moves(moves: &mut MoveList, pv: Option<Move>) {
    moves.sort_by_key(|mv| std::cmp::Reverse(score_move(mv)));

    if let Some(pv) = pv {
        if let Some(idx) = moves.iter().position(|&mv| mv == pv) {
            moves[..=idx].rotate_right(1);
        }
    }
}

/// Legal moves of `pos` in search order
pub fn generate_ordered_moves(pos: &Position, pv: Option<Move>) -> MoveList {
    let mut moves = MoveList::new();
    pos.legal_moves_into(&mut moves);
    order_moves(&mut moves, pv);
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_moves_kept() {
        let pos = Position::new();
        assert_eq!(generate_ordered_moves(&pos, None).len(), 20);
    }

    #[test]
    fn test_quiet_moves_keep_generation_order() {
        let pos = Position::new();
        let generated = pos.legal_moves();
        let ordered = generate_ordered_moves(&pos, None);
        assert_eq!(generated, ordered);
    }

    #[test]
    fn test_captures_come_first() {
        let pos = Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/3qP3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 0 1").unwrap();
        let ordered = generate_ordered_moves(&pos, None);
        // Nxd4 takes the queen, Nxe5 only a pawn
        assert_eq!(ordered[0].to_uci(), "f3d4");
        assert_eq!(ordered[1].to_uci(), "f3e5");
        let first_quiet = ordered.iter().position(|m| !m.is_capture()).unwrap();
        assert_eq!(first_quiet, 2);
        assert!(ordered[..first_quiet].iter().all(|m| m.is_capture()));
        assert!(ordered[first_quiet..].iter().all(|m| !m.is_capture()));
    }

    #[test]
    fn test_pv_move_searched_first() {
        let pos = Position::new();
        let pv = pos.parse_uci_move("g1f3").unwrap();
        let ordered = generate_ordered_moves(&pos, Some(pv));
        assert_eq!(ordered[0], pv);
        assert_eq!(ordered.len(), 20);
    }
}
