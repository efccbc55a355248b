//! The reversible board model driven by the search engine.
//!
//! A [`Board`] is always seen from the side to move: `me` holds that player's discs
//! and `op` the opponent's. Moves and passes hand the turn over by swapping the two,
//! and every mutation has an exact inverse so that a search can reuse one board
//! across sibling nodes instead of copying it.

use crate::bitboard::{Bitboard, BLACK_START, WHITE_START};
use crate::location::{Location, LocationList};
use crate::{flip, utils, NUM_SPACES};
use std::fmt;

/// A pair of disjoint bitboards storing the complete game state.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    /// Discs of the side to move.
    pub me: Bitboard,
    /// Discs of the side not to move.
    pub op: Bitboard,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The Othello starting position, Black to move.
    pub const fn new() -> Self {
        Self {
            me: BLACK_START,
            op: WHITE_START,
        }
    }

    /// Build a board from the side to move's discs and the opponent's discs.
    /// The two must not overlap; this is only checked in debug builds.
    #[inline]
    pub fn from_bitboards(me: Bitboard, op: Bitboard) -> Self {
        debug_assert!((me & op).is_empty(), "overlapping occupancy");
        Self { me, op }
    }

    /// Get a mask indicating where the occupied spaces are.
    #[inline]
    pub fn occupied_mask(self) -> Bitboard {
        self.me | self.op
    }

    /// Get a mask indicating where the empty spaces are.
    #[inline]
    pub fn empty_squares(self) -> Bitboard {
        !self.occupied_mask()
    }

    #[inline]
    pub fn count_empties(self) -> u8 {
        self.occupied_mask().count_empty()
    }

    /// Score a finished game from the side to move's perspective, with every empty
    /// square credited to the winner: `64 - 2 * loser_discs`, negated on a loss.
    ///
    /// Only meaningful when neither side has a legal move.
    #[inline]
    pub fn score(self) -> i8 {
        let me = self.me.count_occupied() as i8;
        let op = self.op.count_occupied() as i8;

        if me == op {
            0
        } else if me > op {
            NUM_SPACES as i8 - 2 * op
        } else {
            -(NUM_SPACES as i8 - 2 * me)
        }
    }

    /// The opponent discs flipped by playing at `loc`. Empty means the move is illegal.
    /// `loc` should be an empty square.
    #[inline]
    pub fn flips(self, loc: Location) -> Bitboard {
        flip::flip(self.me, self.op, loc.to_index())
    }

    /// Get a mask of the legal moves for the side to move.
    // Parallel-prefix smear of our discs through opponent runs, one axis at a time.
    // Adapted from Sam Blazes' Coin, released under the Apache 2.0 license:
    // https://github.com/Tenebryo/coin/blob/master/bitboard/src/find_moves_fast.rs
    pub fn get_moves(self) -> LocationList {
        // Shifts for each direction pair: E/W, N/S, and the two diagonals.
        // The first direction is handled by SHL, the second by SHR.
        const SHIFTS: [u32; 4] = [1, 8, 7, 9];

        // Mask to clip off the invalid wraparound pieces on the edge.
        const EDGE_MASK: u64 = 0x7E7E7E7E7E7E7E7E;

        let me = self.me.bits();
        let op = self.op.bits();
        let op_inner = op & EDGE_MASK;
        let masks = [op_inner, op, op_inner, op_inner];

        let mut captures = 0;
        for (&shift, &mask) in SHIFTS.iter().zip(masks.iter()) {
            // Accumulated mask when shifting along each direction.
            let mut mask_l = mask & (mask << shift);
            let mut mask_r = mask & (mask >> shift);

            // Smear our pieces in each direction while masking invalid flips.
            let mut flip_l = me | (mask & (me << shift));
            flip_l |= mask_l & (flip_l << (2 * shift));
            mask_l &= mask_l << (2 * shift);
            flip_l |= mask_l & (flip_l << (4 * shift));

            let mut flip_r = me | (mask & (me >> shift));
            flip_r |= mask_r & (flip_r >> (2 * shift));
            mask_r &= mask_r >> (2 * shift);
            flip_r |= mask_r & (flip_r >> (4 * shift));

            // One extra shift past the smeared runs lands on candidate moves.
            captures |= ((flip_l & mask) << shift) | ((flip_r & mask) >> shift);
        }

        LocationList::from(self.empty_squares() & Bitboard::new(captures))
    }

    /// Returns whether the side to move has any legal move.
    #[inline]
    pub fn has_moves(self) -> bool {
        !self.get_moves().is_empty()
    }

    /// Returns whether neither side can move, so the game is over.
    pub fn is_game_over(self) -> bool {
        !self.has_moves() && !self.apply_pass().has_moves()
    }

    /// Place a disc at `loc`, flipping `flips`, and hand the turn to the opponent.
    /// `flips` must be [`Board::flips`] of the same board and location.
    #[inline]
    pub fn apply_move(self, flips: Bitboard, loc: Location) -> Self {
        let placed: Bitboard = loc.into();
        let next = Self {
            me: self.op ^ flips,
            op: (self.me ^ flips) | placed,
        };
        debug_assert!((next.me & next.op).is_empty(), "overlapping occupancy");
        next
    }

    /// Exactly reverse [`Board::apply_move`] called with the same `flips` and `loc`.
    #[inline]
    pub fn undo_move(self, flips: Bitboard, loc: Location) -> Self {
        let placed: Bitboard = loc.into();
        let prev = Self {
            me: self.op ^ flips ^ placed,
            op: self.me ^ flips,
        };
        debug_assert!((prev.me & prev.op).is_empty(), "overlapping occupancy");
        prev
    }

    /// Hand the turn to the opponent without placing a disc.
    #[inline]
    pub fn apply_pass(self) -> Self {
        self.swap_players()
    }

    /// Reverse [`Board::apply_pass`].
    #[inline]
    pub fn undo_pass(self) -> Self {
        self.swap_players()
    }

    /// View the same discs from the other player's side.
    #[inline]
    pub fn swap_players(self) -> Self {
        Self {
            me: self.op,
            op: self.me,
        }
    }
}

/// Render the grid with `#` for the side to move and `O` for the opponent.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !(self.me & self.op).is_empty() {
            return Err(fmt::Error);
        }

        let (me, op) = (self.me.bits(), self.op.bits());
        utils::format_grid(f, |index| match ((me >> index) & 1, (op >> index) & 1) {
            (1, _) => '#',
            (_, 1) => 'O',
            _ => '.',
        })
    }
}
