use super::*;

// ==================== MIDDLE GAME PERFT TESTS ====================
// Position 5: promotion by capture into a checking position

const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

#[test]
fn test_perft_position_5_shallow() {
    let pos = fen(POSITION_5);
    assert_eq!(pos.perft(1), 44);
    assert_eq!(pos.perft(2), 1486);
}

#[test]
fn test_perft_position_5_depth_3() {
    assert_eq!(fen(POSITION_5).perft(3), 62379);
}

#[test]
#[ignore]
fn test_perft_position_5_depth_4() {
    assert_eq!(fen(POSITION_5).perft(4), 2103487);
}
