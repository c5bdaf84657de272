use super::*;

// ==================== ENDGAME PERFT TESTS ====================
// Position 3: rook and pawn ending, heavy on en passant discovered checks

const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

#[test]
fn test_perft_endgame_shallow() {
    let pos = fen(POSITION_3);
    assert_eq!(pos.perft(1), 14);
    assert_eq!(pos.perft(2), 191);
    assert_eq!(pos.perft(3), 2812);
}

#[test]
fn test_perft_endgame_depth_4() {
    assert_eq!(fen(POSITION_3).perft(4), 43238);
}

#[test]
#[ignore]
fn test_perft_endgame_depth_5() {
    assert_eq!(fen(POSITION_3).perft(5), 674624);
}
