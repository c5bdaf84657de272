use super::*;

// ==================== STALEMATE TESTS ====================

#[test]
fn test_king_in_corner_stalemate() {
    // The queen on b6 covers a7, b7 and b8
    let pos = fen("k7/8/1Q6/8/8/8/8/7K b - - 0 1");
    assert!(!pos.in_check());
    assert!(pos.legal_moves().is_empty());
    assert!(pos.is_stalemate());
    assert_eq!(classify(&pos, &[]), GameResult::Stalemate);
}

#[test]
fn test_blocked_pawn_stalemate() {
    // Black: king h8, pawn h7 blocked by the h6 pawn. White king f7 covers g8 and g7.
    let pos = fen("7k/5K1p/7P/8/8/8/8/8 b - - 0 1");
    assert!(pos.is_stalemate());
}

#[test]
fn test_not_stalemate_when_pawn_can_move() {
    let pos = fen("k7/8/1Q6/8/8/8/p7/7K b - - 0 1");
    assert!(!pos.is_stalemate());
    assert_eq!(pos.legal_moves().len(), 4);
}
