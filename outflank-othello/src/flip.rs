//! Flip computation: which opponent discs a placement captures.
//!
//! Each of the four axes (vertical, horizontal, and the two diagonals) is handled in
//! constant time with a pair of ray masks, one for the squares below the placed disc
//! and one for the squares above it. No per-square loop is involved.
//!
//! The lower ray is scanned by isolating the highest non-opponent square on it, since
//! that is the square nearest the placement. The upper ray is scanned by adding one to
//! a mask where every square except non-opponent ray squares is set: the carry runs
//! through the placement and the contiguous opponent discs, and stops at the nearest
//! non-opponent ray square. Either way, the bracketing square only counts if it is ours.

use crate::bitboard::{self, Bitboard};

/// Opponent discs on the A and H files are excluded on the horizontal and diagonal
/// axes, so a ray can never wrap from one row onto the next.
const INNER_FILES: u64 = 0x7E7E7E7E7E7E7E7E;

/// Rays toward lower indices, anchored so that bit 63 is the placed disc.
/// Shifted right by `63 - pos` before use.
const LOWER_RAYS: [u64; 4] = [
    0x0080808080808080, // vertical
    0x7F00000000000000, // horizontal
    0x0102040810204000, // diagonal with step 7
    0x0040201008040201, // diagonal with step 9
];

/// Rays toward higher indices, anchored so that bit 0 is the placed disc.
/// Shifted left by `pos` before use.
const UPPER_RAYS: [u64; 4] = [
    0x0101010101010100, // vertical
    0x00000000000000FE, // horizontal
    0x0002040810204080, // diagonal with step 7
    0x8040201008040200, // diagonal with step 9
];

/// Compute the opponent discs flipped if the active player places a disc at square `pos`.
///
/// The result is always a subset of `opponent`; an empty result means the move is illegal.
/// `pos` must be in `0..64` and should be empty; the result for an occupied square
/// is meaningless.
#[inline]
pub fn flip(active: Bitboard, opponent: Bitboard, pos: u8) -> Bitboard {
    debug_assert!(pos < 64);
    let (active, opponent, pos) = (active.bits(), opponent.bits(), u32::from(pos));

    let flipped = flip_axis(active, opponent, pos, 0)
        | flip_axis(active, opponent & INNER_FILES, pos, 1)
        | flip_axis(active, opponent & INNER_FILES, pos, 2)
        | flip_axis(active, opponent & INNER_FILES, pos, 3);

    Bitboard::new(flipped)
}

/// Flips along both directions of a single axis.
/// `opponent` must already be masked for the axis.
#[inline(always)]
fn flip_axis(active: u64, opponent: u64, pos: u32, axis: usize) -> u64 {
    // Toward lower indices: the nearest non-opponent square is the highest one.
    let mask = LOWER_RAYS[axis] >> (63 - pos);
    let outflank = bitboard::isolate_msb(!opponent & mask) & active;
    let mut flipped = (outflank.wrapping_neg() << 1) & mask;

    // Toward higher indices: the carry of +1 stops at the nearest non-opponent square.
    let mask = UPPER_RAYS[axis] << pos;
    let outflank = mask & (opponent | !mask).wrapping_add(1) & active;
    flipped |= outflank.wrapping_sub((outflank != 0) as u64) & mask;

    flipped
}
