use super::*;

// ==================== PROMOTION-HEAVY PERFT TESTS ====================
// Position 4: promotions with capture, castling rights for Black only

const POSITION_4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";

#[test]
fn test_perft_position_4_shallow() {
    let pos = fen(POSITION_4);
    assert_eq!(pos.perft(1), 6);
    assert_eq!(pos.perft(2), 264);
}

#[test]
fn test_perft_position_4_depth_3() {
    assert_eq!(fen(POSITION_4).perft(3), 9467);
}

#[test]
#[ignore]
fn test_perft_position_4_depth_4() {
    assert_eq!(fen(POSITION_4).perft(4), 422333);
}
