use super::*;

// ==================== EN PASSANT TESTS ====================

#[test]
fn test_white_en_passant_capture() {
    let mut pos = Position::new();
    for mv in ["e2e4", "a7a6", "e4e5", "d7d5"] {
        play(&mut pos, mv);
    }

    let moves = pos.legal_moves();
    assert_eq!(count_move_type(&moves, MoveFlag::EnPassant), 1);
    assert!(has_move(&moves, "e5", "d6"));

    play(&mut pos, "e5d6");
    assert_eq!(pos.piece_at(sq("d5")), None, "captured pawn is removed");
    assert_eq!(pos.piece_at(sq("d6")), Some(Piece::new(Color::White, Type::Pawn)));
    assert_eq!(pos.halfmove_clock(), 0);
}

#[test]
fn test_black_en_passant_capture() {
    let pos = fen("4k3/8/8/8/3Pp3/8/8/4K3 b - d3 0 1");
    let moves = pos.legal_moves();

    assert!(has_move(&moves, "e4", "d3"));
    let ep = moves.iter().find(|m| m.flag == MoveFlag::EnPassant).unwrap();
    assert_eq!(ep.captured, Some(Piece::new(Color::White, Type::Pawn)));
    assert_eq!(ep.capture_square(), sq("d4"));
}

#[test]
fn test_en_passant_expires_after_one_move() {
    let mut pos = Position::new();
    for mv in ["e2e4", "a7a6", "e4e5", "d7d5", "h2h3", "h7h6"] {
        play(&mut pos, mv);
    }
    assert_eq!(pos.en_passant(), None);
    assert_eq!(count_move_type(&pos.legal_moves(), MoveFlag::EnPassant), 0);
}

#[test]
fn test_en_passant_not_offered_on_single_push() {
    let mut pos = fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    play(&mut pos, "d7d6");
    play(&mut pos, "e1e2");
    assert_eq!(pos.en_passant(), None);
    play(&mut pos, "d6d5");
    assert_eq!(count_move_type(&pos.legal_moves(), MoveFlag::EnPassant), 0);
}

#[test]
fn test_en_passant_exposing_king_is_illegal() {
    // Taking on c6 would clear the fifth rank between the h5 rook and a5 king
    let pos = fen("8/8/8/KPp4r/8/8/8/4k3 w - c6 0 1");
    let moves = pos.legal_moves();
    assert_eq!(count_move_type(&moves, MoveFlag::EnPassant), 0);
    assert!(has_move(&moves, "b5", "b6"));
}

#[test]
fn test_en_passant_resolves_check() {
    // The e4 pawn gives check and can be captured en passant
    let pos = fen("8/8/8/3k4/3pP3/8/8/4K3 b - e3 0 1");
    assert!(pos.in_check());
    assert!(has_move(&pos.legal_moves(), "d4", "e3"));
}

#[test]
fn test_undo_en_passant_restores_pawn() {
    let mut pos = fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    let before = pos.clone();
    let undo = play(&mut pos, "e5d6");
    pos.undo(undo);
    assert_eq!(pos, before);
}
