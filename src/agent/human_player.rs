//! Human player that types moves in UCI long algebraic notation.
//!
//! `HumanPlayer` reads one line per attempt from any [`BufRead`] and writes
//! prompts to any [`Write`], so the same code drives a terminal and the
//! tests. Every line is checked against the legal moves of the current
//! position; anything else is reported and the player is asked again.
//!
//! Besides moves (`e2e4`, `e7e8q`, castling as `e1g1`) the player accepts:
//! - `moves`: list the legal moves
//! - `resign` or `quit`: give up (end of input does the same)

use std::io::{self, BufRead, Write};

use log::warn;

use crate::agent::player::Player;
use crate::error::ChessError;
use crate::game_repr::{Move, Position};

pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
    name: String,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W, name: impl Into<String>) -> Self {
        Self {
            input,
            output,
            name: name.into(),
        }
    }

    /// Prompts until a legal move, a resignation or end of input
    fn read_move(&mut self, pos: &Position) -> io::Result<Option<Move>> {
        loop {
            write!(self.output, "{} ({:?}) > ", self.name, pos.side_to_move())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let text = line.trim();
            match text {
                "" => continue,
                "resign" | "quit" => return Ok(None),
                "moves" => {
                    let moves: Vec<String> = pos.legal_moves().iter().map(Move::to_uci).collect();
                    writeln!(self.output, "{}", moves.join(" "))?;
                    continue;
                }
                _ => {}
            }

            match pos.parse_uci_move(text) {
                Ok(mv) => return Ok(Some(mv)),
                Err(err) => {
                    warn!("ignoring input {text:?}: {err}");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn get_move(&mut self, pos: &Position, _history: &[u64]) -> Result<Option<Move>, ChessError> {
        Ok(self.read_move(pos)?)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
