use super::{MoveList, Position};

impl Position {
    /// Perft (Performance Test) - counts leaf nodes of the legal move tree.
    /// Used to validate move generation against published counts.
    pub fn perft(&self, depth: u32) -> u64 {
        let mut pos = self.clone();
        pos.perft_inner(depth)
    }

    fn perft_inner(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut moves = MoveList::new();
        self.legal_moves_into(&mut moves);

        // Bulk counting at the frontier
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for &mv in &moves {
            let undo = self.make_move(mv);
            nodes += self.perft_inner(depth - 1);
            self.undo(undo);
        }
        nodes
    }

    /// Divide - perft count below each root move, sorted by move text.
    /// Handy for bisecting a mismatch against another engine.
    pub fn divide(&self, depth: u32) -> Vec<(String, u64)> {
        let mut pos = self.clone();
        let mut counts: Vec<(String, u64)> = self
            .legal_moves()
            .into_iter()
            .map(|mv| {
                let undo = pos.make_move(mv);
                let count = pos.perft_inner(depth.saturating_sub(1));
                pos.undo(undo);
                (mv.to_uci(), count)
            })
            .collect();
        counts.sort();
        counts
    }
}
