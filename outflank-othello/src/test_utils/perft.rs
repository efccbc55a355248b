//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for tuning the flip engine and checking move application.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::board::Board;
use crate::location::LocationList;

/// Count the leaves `depth` plies below the opening. A forced pass counts as a ply,
/// and a finished game is a leaf wherever it occurs.
pub fn run_perft(depth: u64) -> u64 {
    let mut perft = Perft {
        board: Board::new(),
    };
    perft.leaves_below(depth, false)
}

/// Walks the tree with a single board, applying and undoing moves in place.
struct Perft {
    board: Board,
}

impl Perft {
    fn leaves_below(&mut self, depth: u64, passed: bool) -> u64 {
        // Leaf node for this depth
        if depth == 0 {
            return 1;
        }

        let mut leaves = 0;
        let mut found_move = false;

        for loc in LocationList::from(self.board.empty_squares()) {
            let flips = self.board.flips(loc);
            if flips.is_empty() {
                continue;
            }

            found_move = true;
            self.board = self.board.apply_move(flips, loc);
            leaves += self.leaves_below(depth - 1, false);
            self.board = self.board.undo_move(flips, loc);
        }

        if found_move {
            return leaves;
        }

        // Both players passed: game is over
        if passed {
            return 1;
        }

        self.board = self.board.apply_pass();
        leaves = self.leaves_below(depth - 1, true);
        self.board = self.board.undo_pass();
        leaves
    }
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
fn perft_07() {
    assert_eq!(run_perft(7), 55092);
}

#[test]
fn perft_08() {
    assert_eq!(run_perft(8), 390216);
}

// Passing moves begin here.
#[test]
#[ignore]
fn perft_09() {
    assert_eq!(run_perft(9), 3005288);
}

#[test]
#[ignore]
fn perft_10() {
    assert_eq!(run_perft(10), 24571284);
}
