//! End-to-end checks of the solver against a pruning-free minimax on endgame positions.

use outflank_othello::{Board, Position};
use outflank_solver::{Problem, Solution, MAX_SCORE};
use rayon::iter::ParallelIterator;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};

/// Plain negamax over the whole tree, copying the board at every node.
fn minimax(board: Board, passed: bool) -> i8 {
    let moves = board.get_moves();
    if moves.is_empty() {
        if passed {
            return board.score();
        }
        return -minimax(board.apply_pass(), true);
    }

    moves
        .map(|loc| -minimax(board.apply_move(board.flips(loc), loc), false))
        .max()
        .unwrap()
}

/// Play random moves from the opening until `empties` squares remain.
/// Returns None if the game ends first.
fn random_endgame(rng: &mut StdRng, empties: u8) -> Option<Board> {
    let mut board = Board::new();

    while board.count_empties() > empties {
        match board.get_moves().choose(rng) {
            Some(loc) => board = board.apply_move(board.flips(loc), loc),
            None if board.is_game_over() => return None,
            None => board = board.apply_pass(),
        }
    }

    Some(board)
}

fn random_endgames(seed: u64, count: usize, empties: std::ops::RangeInclusive<u8>) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut boards = Vec::with_capacity(count);

    while boards.len() < count {
        let target = rng.gen_range(empties.clone());
        if let Some(board) = random_endgame(&mut rng, target) {
            boards.push(board);
        }
    }

    boards
}

#[test]
fn exact_matches_minimax() {
    for board in random_endgames(1, 40, 1..=8) {
        let score = outflank_solver::solve_exact(board);
        assert_eq!(score, minimax(board, false), "\n{}", board);
        assert!((-MAX_SCORE..=MAX_SCORE).contains(&score));
    }
}

#[test]
fn win_loss_draw_matches_sign() {
    for board in random_endgames(2, 30, 4..=9) {
        let exact = outflank_solver::solve_exact(board);
        let wld = outflank_solver::solve_win_loss_draw(board);
        assert_eq!(wld.signum(), exact.signum(), "\n{}", board);
    }
}

#[test]
fn window_results_are_fail_soft_bounds() {
    let mut rng = StdRng::seed_from_u64(3);

    for board in random_endgames(4, 30, 4..=9) {
        let exact = outflank_solver::solve_exact(board);
        let alpha = rng.gen_range(-MAX_SCORE..MAX_SCORE);
        let beta = rng.gen_range(alpha + 1..=MAX_SCORE);
        let score = outflank_solver::solve_window(board, alpha, beta);

        if score <= alpha {
            assert!(exact <= score, "fail low {} above exact {}", score, exact);
        } else if score >= beta {
            assert!(exact >= score, "fail high {} below exact {}", score, exact);
        } else {
            assert_eq!(score, exact);
        }
    }
}

#[test]
fn forced_pass_negates_swapped_value() {
    let mut checked = 0;

    for board in random_endgames(5, 400, 1..=10) {
        if board.has_moves() {
            continue;
        }

        let swapped = board.swap_players();
        assert_eq!(
            outflank_solver::solve_exact(board),
            -outflank_solver::solve_exact(swapped),
            "\n{}",
            board
        );
        checked += 1;
    }

    assert!(checked > 0);
}

#[test]
fn batch_preserves_input_order() {
    let boards = random_endgames(6, 24, 2..=8);
    let problems: Vec<Problem> = boards.iter().map(|&board| Problem::exact(board)).collect();
    let expected: Vec<i8> = boards
        .iter()
        .map(|&board| outflank_solver::solve_exact(board))
        .collect();

    assert_eq!(outflank_solver::solve_batch(&problems), expected);
    assert!(outflank_solver::solve_batch(&[]).is_empty());
}

#[test]
fn parallel_solutions_match_single_solves() {
    let problems: Vec<Problem> = random_endgames(8, 16, 2..=8)
        .into_iter()
        .map(Problem::exact)
        .collect();
    let expected: Vec<Solution> = problems
        .iter()
        .map(|&problem| outflank_solver::solve(problem))
        .collect();

    let solutions: Vec<Solution> = outflank_solver::solve_par_iter(&problems).collect();
    assert_eq!(solutions, expected);
    assert!(solutions.iter().all(|solution| solution.nodes >= 1));
}

#[test]
fn solve_reports_nodes() {
    let board = random_endgames(7, 1, 6..=6)[0];
    let solution = outflank_solver::solve(Problem::exact(board));
    assert_eq!(solution.score, minimax(board, false));
    assert!(solution.nodes > 1);
}

#[test]
fn parsed_positions() {
    // Black holds everything except G8 (White) and an empty H8: Black takes H8 and wins 64-0.
    let black_to_move: Position = format!("{}O- X", "X".repeat(62)).parse().unwrap();
    assert_eq!(outflank_solver::solve_exact(black_to_move.board), 64);

    // White to move cannot play H8, so passes; Black then takes it.
    let white_to_move: Position = format!("{}O- O", "X".repeat(62)).parse().unwrap();
    assert_eq!(outflank_solver::solve_exact(white_to_move.board), -64);

    // Full board, 33 against 31.
    let full: Position = format!("{}{} X", "X".repeat(33), "O".repeat(31))
        .parse()
        .unwrap();
    assert_eq!(outflank_solver::solve_exact(full.board), 2);
    assert_eq!(outflank_solver::solve_exact(full.board.swap_players()), -2);
}
