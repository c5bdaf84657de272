// Minimax search with alpha-beta pruning
//
// Scores are absolute: positive favours White, White maximizes and Black
// minimizes. The searcher owns its copy of the position and walks the tree
// with make/undo, pushing every visited position key onto the repetition
// history so draws by repetition are seen inside the tree too.

use std::time::Instant;

use crate::game_repr::{
    is_insufficient_material, repetition_count, Color, Move, MoveList, Position, FIFTY_MOVE_LIMIT,
};
use super::evaluation::evaluate;
use super::move_ordering::{generate_ordered_moves, order_moves};

/// Checkmate score; a mate found `ply` half-moves from the root scores
/// `MATE_SCORE - ply` so shorter mates are preferred
pub const MATE_SCORE: i32 = 30_000;

/// Bound larger than any reachable score
pub const INFINITY: i32 = MATE_SCORE + 1_000;

/// Any score beyond this is a forced mate
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 1_000;

pub const DRAW_SCORE: i32 = 0;

/// Nodes between two looks at the clock
const TIME_CHECK_INTERVAL: u64 = 1024;

pub fn is_mate_score(score: i32) -> bool {
    score.abs() >= MATE_THRESHOLD
}

/// Depth-limited tree search over a private copy of a position.
///
/// A search that runs past its deadline stops at the next clock check and
/// every function on the path returns `None`; the partial result of that
/// depth must be thrown away.
pub struct Searcher {
    pos: Position,
    history: Vec<u64>,
    deadline: Option<Instant>,
    nodes: u64,
    aborted: bool,
}

impl Searcher {
    /// `history` holds the keys of the game's earlier positions, oldest
    /// first, current position excluded.
    pub fn new(pos: &Position, history: &[u64], deadline: Option<Instant>) -> Self {
        Self {
            pos: pos.clone(),
            history: history.to_vec(),
            deadline,
            nodes: 0,
            aborted: false,
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    fn out_of_time(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Score of a finished game at this node, `None` while play goes on.
    /// Mate favours the side that is not to move.
    fn terminal_score(&self, has_moves: bool, ply: i32) -> Option<i32> {
        if !has_moves {
            if !self.pos.in_check() {
                return Some(DRAW_SCORE);
            }
            let mate = MATE_SCORE - ply;
            return Some(match self.pos.side_to_move() {
                Color::White => -mate,
                Color::Black => mate,
            });
        }

        if self.pos.halfmove_clock() >= FIFTY_MOVE_LIMIT
            || is_insufficient_material(&self.pos)
            || repetition_count(&self.pos, &self.history) >= 3
        {
            return Some(DRAW_SCORE);
        }
        None
    }

    /// Alpha-beta over `depth` more plies. Returns `None` once the deadline
    /// has passed.
    pub fn alpha_beta(&mut self, depth: u8, ply: i32, mut alpha: i32, mut beta: i32, maximizing: bool) -> Option<i32> {
        self.nodes += 1;
        if self.nodes % TIME_CHECK_INTERVAL == 0 && self.out_of_time() {
            self.aborted = true;
        }
        if self.aborted {
            return None;
        }

        if depth == 0 {
            let has_moves = self.pos.has_legal_moves();
            return Some(self.terminal_score(has_moves, ply).unwrap_or_else(|| evaluate(&self.pos)));
        }

        let mut moves = MoveList::new();
        self.pos.legal_moves_into(&mut moves);
        if let Some(score) = self.terminal_score(!moves.is_empty(), ply) {
            return Some(score);
        }
        order_moves(&mut moves, None);

        let key = self.pos.zobrist_key();
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for mv in moves {
            let score = self.search_child(key, mv, |s| s.alpha_beta(depth - 1, ply + 1, alpha, beta, !maximizing))?;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if alpha >= beta {
                break;
            }
        }

        Some(best)
    }

    /// Plain minimax without pruning or deadline. Returns the same value as
    /// a full-window `alpha_beta`, at a much higher node count.
    pub fn minimax(&mut self, depth: u8, ply: i32, maximizing: bool) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            let has_moves = self.pos.has_legal_moves();
            return self.terminal_score(has_moves, ply).unwrap_or_else(|| evaluate(&self.pos));
        }

        let moves = self.pos.legal_moves();
        if let Some(score) = self.terminal_score(!moves.is_empty(), ply) {
            return score;
        }

        let key = self.pos.zobrist_key();
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        for mv in moves {
            self.history.push(key);
            let undo = self.pos.make_move(mv);
            let score = self.minimax(depth - 1, ply + 1, !maximizing);
            self.pos.undo(undo);
            self.history.pop();

            best = if maximizing { best.max(score) } else { best.min(score) };
        }
        best
    }

    /// Plays `mv`, runs `search` on the child and takes the move back
    fn search_child<F>(&mut self, key: u64, mv: Move, search: F) -> Option<i32>
    where
        F: FnOnce(&mut Self) -> Option<i32>,
    {
        self.history.push(key);
        let undo = self.pos.make_move(mv);
        let score = search(self);
        self.pos.undo(undo);
        self.history.pop();
        score
    }

    /// Best root move at `depth` with its score, `None` if the position has
    /// no legal moves or the deadline passed before the depth completed.
    ///
    /// `pv` is searched first. Among equal scores the first move searched
    /// wins.
    pub fn search_root(&mut self, depth: u8, pv: Option<Move>) -> Option<(Move, i32)> {
        let moves = generate_ordered_moves(&self.pos, pv);
        let maximizing = self.pos.side_to_move() == Color::White;
        let key = self.pos.zobrist_key();
        let child_depth = depth.max(1) - 1;

        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best: Option<(Move, i32)> = None;

        for mv in moves {
            let score = self.search_child(key, mv, |s| s.alpha_beta(child_depth, 1, alpha, beta, !maximizing))?;

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((mv, score));
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
        }

        best
    }

    /// Root move chosen by unpruned minimax, same tie rule as `search_root`
    pub fn minimax_root(&mut self, depth: u8) -> Option<(Move, i32)> {
        let moves = generate_ordered_moves(&self.pos, None);
        let maximizing = self.pos.side_to_move() == Color::White;
        let key = self.pos.zobrist_key();
        let child_depth = depth.max(1) - 1;

        let mut best: Option<(Move, i32)> = None;
        for mv in moves {
            self.history.push(key);
            let undo = self.pos.make_move(mv);
            let score = self.minimax(child_depth, 1, !maximizing);
            self.pos.undo(undo);
            self.history.pop();

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((mv, score));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searcher(fen: &str) -> Searcher {
        Searcher::new(&Position::from_fen(fen).unwrap(), &[], None)
    }

    #[test]
    fn test_finds_mate_in_one() {
        // Ra8 is mate
        let mut s = searcher("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        let (mv, score) = s.search_root(2, None).unwrap();
        assert_eq!(mv.to_uci(), "a1a8");
        assert_eq!(score, MATE_SCORE - 1);
        assert!(is_mate_score(score));
    }

    #[test]
    fn test_black_mate_scores_negative() {
        let mut s = searcher("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1");
        let (mv, score) = s.search_root(2, None).unwrap();
        assert_eq!(mv.to_uci(), "a8a1");
        assert_eq!(score, -(MATE_SCORE - 1));
    }

    #[test]
    fn test_stalemate_scores_zero() {
        let mut s = searcher("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert_eq!(s.alpha_beta(3, 0, -INFINITY, INFINITY, false), Some(DRAW_SCORE));
    }

    #[test]
    fn test_no_root_move_when_mated() {
        let mut s = searcher("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert_eq!(s.search_root(3, None), None);
    }

    #[test]
    fn test_expired_deadline_aborts() {
        let pos = Position::new();
        let mut s = Searcher::new(&pos, &[], Some(Instant::now()));
        // Deep enough to pass at least one clock check
        assert_eq!(s.search_root(5, None), None);
        assert!(s.is_aborted());
        // The position is restored after unwinding
        assert_eq!(s.position(), &pos);
    }

    #[test]
    fn test_pruning_matches_minimax() {
        for fen in [
            "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
            "4k3/8/8/3q4/8/2N5/8/4K3 w - - 0 1",
            "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1",
        ] {
            let mut pruned = searcher(fen);
            let mut full = searcher(fen);
            let (_, ab) = pruned.search_root(3, None).unwrap();
            let (_, mm) = full.minimax_root(3).unwrap();
            assert_eq!(ab, mm, "{fen}");
            assert!(pruned.nodes() <= full.nodes());
        }
    }
}
