//! Internal search functions.

use crate::MAX_SCORE;
use outflank_othello::{Board, LocationList};

/// An exhaustive search over one board, which is mutated in place and restored
/// after every child so that memory stays proportional to the depth.
#[derive(Clone, Debug)]
pub struct Search {
    board: Board,
    nodes: u64,
}

impl Search {
    pub fn new(board: Board) -> Self {
        Self { board, nodes: 0 }
    }

    /// The board at the root. Always the original board between calls.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Nodes visited by every search run so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Fail-soft alpha-beta negamax, searching to the end of the game.
    ///
    /// Returns the exact score when it lies strictly inside `(alpha, beta)`; otherwise a
    /// bound on the wrong side of the window (an upper bound at or below `alpha`, a lower
    /// bound at or above `beta`). Scores are from the side to move's perspective.
    /// `passed_prev` records that the previous ply was a pass, so that a second pass ends
    /// the game.
    pub fn alpha_beta(&mut self, mut alpha: i8, beta: i8, passed_prev: bool) -> i8 {
        self.nodes += 1;

        let mut best = -MAX_SCORE;
        let mut found_move = false;

        for loc in LocationList::from(self.board.empty_squares()) {
            let flips = self.board.flips(loc);
            if flips.is_empty() {
                continue;
            }

            found_move = true;
            self.board = self.board.apply_move(flips, loc);
            let score = -self.alpha_beta(-beta, -alpha, false);
            self.board = self.board.undo_move(flips, loc);

            best = best.max(score);

            // Fail high: this line is so good for me my opponent won't allow it.
            if best >= beta {
                return best;
            }

            alpha = alpha.max(best);
        }

        if found_move {
            return best;
        }

        // Both players pass: game ends
        if passed_prev {
            return self.board.score();
        }

        // I pass, but my opponent may have moves
        self.board = self.board.apply_pass();
        let score = -self.alpha_beta(-beta, -alpha, true);
        self.board = self.board.undo_pass();
        score
    }
}
