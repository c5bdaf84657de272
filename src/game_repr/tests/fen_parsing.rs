// FEN Parsing Tests
//
// Loading a position is the boundary where outside data enters the engine,
// so these cover both the happy path and the two rejection classes.

use super::*;

// ==================== FEN PARSING TESTS ====================

#[test]
fn test_default_position_from_fen() {
    let pos = Position::default();

    assert_eq!(pos.piece_at(sq("a1")), Some(Piece::new(Color::White, Type::Rook)));
    assert_eq!(pos.piece_at(sq("e1")), Some(Piece::new(Color::White, Type::King)));
    assert_eq!(pos.piece_at(sq("e8")), Some(Piece::new(Color::Black, Type::King)));

    for file in 0..8 {
        let white = Square::new(file, 1).unwrap();
        let black = Square::new(file, 6).unwrap();
        assert_eq!(pos.piece_at(white), Some(Piece::new(Color::White, Type::Pawn)));
        assert_eq!(pos.piece_at(black), Some(Piece::new(Color::Black, Type::Pawn)));
    }
    assert_eq!(pos.to_fen(), START_FEN);
}

#[test]
fn test_custom_fen_position() {
    // Empty board except kings
    let pos = fen("4k3/8/8/8/8/8/8/4K3");

    assert_eq!(pos.piece_at(sq("e1")), Some(Piece::new(Color::White, Type::King)));
    assert_eq!(pos.piece_at(sq("e8")), Some(Piece::new(Color::Black, Type::King)));
    let occupied = Square::iter().filter(|s| pos.piece_at(*s).is_some()).count();
    assert_eq!(occupied, 2);
}

#[test]
fn test_all_fields_parsed() {
    let pos = fen("r3k2r/8/8/8/4Pp2/8/8/R3K2R b Kq e3 7 42");
    assert_eq!(pos.side_to_move(), Color::Black);
    assert_eq!(pos.castling_rights().to_string(), "Kq");
    assert_eq!(pos.en_passant(), Some(sq("e3")));
    assert_eq!(pos.halfmove_clock(), 7);
    assert_eq!(pos.fullmove_number(), 42);
}

#[test]
fn test_fen_round_trip_after_moves() {
    let mut pos = Position::new();
    for mv in ["e2e4", "c7c5", "g1f3", "d7d6", "e1e2"] {
        play(&mut pos, mv);
    }
    let text = pos.to_fen();
    assert_eq!(text, "rnbqkbnr/pp2pppp/3p4/2p5/4P3/5N2/PPPPKPPP/RNBQ1B1R b kq - 1 3");

    let reloaded = fen(&text);
    assert_eq!(reloaded, pos);
    assert_eq!(reloaded.legal_moves(), pos.legal_moves());
}

#[test]
fn test_rejects_bad_input() {
    assert!(matches!(Position::from_fen("not a fen"), Err(ChessError::InvalidFen(_))));
    assert!(matches!(
        Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra"),
        Err(ChessError::InvalidFen(_))
    ));
    assert!(matches!(
        Position::from_fen("4k3/8/8/8/8/8/8/8 w - - 0 1"),
        Err(ChessError::CorruptState(_))
    ));
}
