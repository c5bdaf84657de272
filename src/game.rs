//! Game controller.
//!
//! [`Game`] owns the authoritative position of one game together with
//! everything the rules need beyond a single board: the moves played, the
//! undo stack and the keys of every earlier position for repetition.
//! Moves coming from players are untrusted and are checked against the
//! legal move list before they touch the board.
//!
//! A game is persisted as its starting FEN plus the UCI move list and
//! restored with [`Game::replay`].

use std::fmt;

use log::{info, trace};

use crate::error::ChessError;
use crate::game_repr::{classify, GameResult, Move, Position, UndoInfo, START_FEN};

#[derive(Debug, Clone)]
pub struct Game {
    start_fen: String,
    position: Position,
    undo_stack: Vec<UndoInfo>,
    /// Keys of the positions before each move, oldest first
    history: Vec<u64>,
}

impl Game {
    /// A game from the standard starting position
    pub fn new() -> Self {
        Self::from_position(Position::new(), START_FEN.to_string())
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let position = Position::from_fen(fen)?;
        let start_fen = position.to_fen();
        Ok(Self::from_position(position, start_fen))
    }

    fn from_position(position: Position, start_fen: String) -> Self {
        Self {
            start_fen,
            position,
            undo_stack: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Rebuilds a game from its starting FEN and UCI move list, the form
    /// produced by [`Game::start_fen`] and [`Game::move_list`]
    pub fn replay<I, S>(fen: &str, moves: I) -> Result<Self, ChessError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut game = Self::from_fen(fen)?;
        for text in moves {
            game.play_uci(text.as_ref())?;
        }
        Ok(game)
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn start_fen(&self) -> &str {
        &self.start_fen
    }

    /// Keys of every position before the current one, the form
    /// [`classify`] and the search expect
    pub fn history_keys(&self) -> &[u64] {
        &self.history
    }

    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.undo_stack.iter().map(UndoInfo::mv)
    }

    /// Moves played so far in UCI notation
    pub fn move_list(&self) -> Vec<String> {
        self.moves().map(|mv| mv.to_uci()).collect()
    }

    pub fn result(&self) -> GameResult {
        classify(&self.position, &self.history)
    }

    pub fn is_over(&self) -> bool {
        self.result().is_over()
    }

    /// Plays `mv` if it is legal in the current position.
    ///
    /// Fails with `GameOver` once the game has ended and with `IllegalMove`
    /// for anything outside the legal move list; the game is unchanged in
    /// both cases. Returns the result after the move.
    pub fn play(&mut self, mv: Move) -> Result<GameResult, ChessError> {
        let before = self.result();
        if before.is_over() {
            return Err(ChessError::GameOver(before));
        }
        if !self.position.is_legal(&mv) {
            return Err(ChessError::IllegalMove(mv.to_uci()));
        }

        let key = self.position.zobrist_key();
        let undo = self.position.apply(mv)?;
        self.history.push(key);
        self.undo_stack.push(undo);
        trace!("{:?} played {}", self.position.side_to_move().opposite(), mv);

        let result = self.result();
        if result.is_over() {
            info!("game over after {} moves: {:?}", self.undo_stack.len(), result);
        }
        Ok(result)
    }

    /// Parses `text` against the legal moves and plays it. A finished game
    /// reports `GameOver` whatever the text.
    pub fn play_uci(&mut self, text: &str) -> Result<GameResult, ChessError> {
        let before = self.result();
        if before.is_over() {
            return Err(ChessError::GameOver(before));
        }
        let mv = self.position.parse_uci_move(text)?;
        self.play(mv)
    }

    /// Takes back the last move
    pub fn undo(&mut self) -> Result<Move, ChessError> {
        let undo = self.undo_stack.pop().ok_or(ChessError::NothingToUndo)?;
        self.history.pop();
        self.position.undo(undo);
        trace!("took back {}", undo.mv());
        Ok(undo.mv())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.position)?;
        write!(f, "{}", self.position.to_fen())
    }
}
