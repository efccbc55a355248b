//! Exact Othello solving.
//!
//! Every entry point searches to the end of the game: there is no depth limit, move
//! ordering, or transposition table, only alpha-beta bounds. Scores use the
//! "empties to the winner" convention of [`Board::score`], from the side to move's
//! perspective, and lie in `[-64, 64]`.

pub mod search;

pub use search::Search;

use log::{debug, trace};
use outflank_othello::{Board, NUM_SPACES};
use rayon::prelude::*;

/// Maximum achievable score.
pub const MAX_SCORE: i8 = NUM_SPACES as i8;

/// A position to solve, with the search window to solve it in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Problem {
    pub board: Board,
    pub alpha: i8,
    pub beta: i8,
}

/// The result of solving one [`Problem`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Solution {
    pub score: i8,
    pub nodes: u64,
}

impl Problem {
    /// Bounds must satisfy `-64 <= alpha < beta <= 64`.
    pub fn new(board: Board, alpha: i8, beta: i8) -> Self {
        debug_assert!(-MAX_SCORE <= alpha && alpha < beta && beta <= MAX_SCORE);
        Self { board, alpha, beta }
    }

    /// Solve for the exact score, with the full window.
    pub fn exact(board: Board) -> Self {
        Self::new(board, -MAX_SCORE, MAX_SCORE)
    }
}

/// Solve a single problem, reporting the search effort alongside the score.
pub fn solve(problem: Problem) -> Solution {
    let mut search = Search::new(problem.board);
    let score = search.alpha_beta(problem.alpha, problem.beta, false);

    trace!(
        "solved {} empties in [{}, {}]: {} ({} nodes)",
        problem.board.count_empties(),
        problem.alpha,
        problem.beta,
        score,
        search.nodes()
    );

    Solution {
        score,
        nodes: search.nodes(),
    }
}

/// Window search. The result is exact when strictly inside `(alpha, beta)` and a
/// fail-soft bound otherwise.
pub fn solve_window(board: Board, alpha: i8, beta: i8) -> i8 {
    solve(Problem::new(board, alpha, beta)).score
}

/// Solve the game, trying to determine the exact score.
/// Takes longer, but can be valuable for debugging or winning by a margin.
pub fn solve_exact(board: Board) -> i8 {
    solve_window(board, -MAX_SCORE, MAX_SCORE)
}

/// Solve the game, caring only about solving for a win, loss, or draw.
/// Faster, but only the sign of the result is meaningful.
pub fn solve_win_loss_draw(board: Board) -> i8 {
    solve_window(board, -1, 1)
}

/// Solve many independent problems in parallel, yielding a [`Solution`] per problem
/// in input order. Each problem runs on its own board; nothing is shared between them.
pub fn solve_par_iter(
    problems: &[Problem],
) -> impl IndexedParallelIterator<Item = Solution> + '_ {
    debug!(
        "solving {} problems on {} threads",
        problems.len(),
        rayon::current_num_threads()
    );

    problems.par_iter().map(|&problem| solve(problem))
}

/// Solve many independent problems in parallel, returning scores in input order.
pub fn solve_batch(problems: &[Problem]) -> Vec<i8> {
    solve_par_iter(problems)
        .map(|solution| solution.score)
        .collect()
}
