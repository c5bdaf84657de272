use super::*;

// ==================== CHECKMATE TESTS ====================

#[test]
fn test_fools_mate() {
    let mut pos = Position::new();
    for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        play(&mut pos, mv);
    }

    assert_eq!(pos.side_to_move(), Color::White);
    assert!(pos.legal_moves().is_empty());
    assert!(pos.is_checkmate());
    assert_eq!(classify(&pos, &[]), GameResult::Checkmate { winner: Color::Black });
}

#[test]
fn test_back_rank_mate() {
    let pos = fen("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    assert!(pos.is_checkmate());
    assert!(!pos.is_stalemate());
}

#[test]
fn test_smothered_mate() {
    let pos = fen("6rk/5Npp/8/8/8/8/8/6K1 b - - 0 1");
    assert!(pos.is_checkmate());
}

#[test]
fn test_check_with_escape_is_not_mate() {
    // The h7 pawn has been pushed, so the king has luft
    let pos = fen("3R2k1/5pp1/7p/8/8/8/8/6K1 b - - 0 1");
    assert!(pos.in_check());
    assert!(!pos.is_checkmate());
    assert!(has_move(&pos.legal_moves(), "g8", "h7"));
}

#[test]
fn test_check_resolved_by_capture_is_not_mate() {
    let pos = fen("3R2k1/5ppp/8/8/8/8/7K/3r4 b - - 0 1");
    assert!(!pos.is_checkmate());
    assert!(has_move(&pos.legal_moves(), "d1", "d8"));
}
