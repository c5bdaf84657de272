use super::*;

// ==================== STARTING POSITION PERFT TESTS ====================

#[test]
fn test_perft_starting_position_shallow() {
    let pos = Position::new();
    assert_eq!(pos.perft(1), 20);
    assert_eq!(pos.perft(2), 400);
    assert_eq!(pos.perft(3), 8902);
}

#[test]
fn test_perft_starting_position_depth_4() {
    assert_eq!(Position::new().perft(4), 197281);
}

#[test]
#[ignore]
fn test_perft_starting_position_depth_5() {
    assert_eq!(Position::new().perft(5), 4865609);
}

#[test]
fn test_divide_sums_to_perft() {
    let pos = Position::new();
    let divide = pos.divide(3);
    assert_eq!(divide.len(), 20);
    assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 8902);
    assert!(divide.iter().any(|(mv, n)| mv == "e2e4" && *n == 600));
}
