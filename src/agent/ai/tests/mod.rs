
use crate::game_repr::Position;

pub(super) fn pos(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

/// Same position with colours swapped and the board flipped top to bottom
pub(super) fn mirror(fen: &str) -> Position {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let swap_case = |s: &str| -> String {
        s.chars()
            .map(|c| if c.is_ascii_uppercase() { c.to_ascii_lowercase() } else { c.to_ascii_uppercase() })
            .collect()
    };

    let placement = fields[0].split('/').rev().map(swap_case).collect::<Vec<_>>().join("/");
    let side = if fields.get(1) == Some(&"b") { "w" } else { "b" };
    let castling = fields.get(2).map_or("-".to_string(), |c| if *c == "-" { "-".to_string() } else { swap_case(c) });
    let en_passant = match fields.get(3) {
        Some(ep) if *ep != "-" => {
            let file = &ep[..1];
            let rank = if &ep[1..] == "3" { "6" } else { "3" };
            format!("{file}{rank}")
        }
        _ => "-".to_string(),
    };
    let clocks = fields.get(4..).map_or(String::new(), |rest| rest.join(" "));

    pos(format!("{placement} {side} {castling} {en_passant} {clocks}").trim())
}
