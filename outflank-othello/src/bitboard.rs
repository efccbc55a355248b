//! Low-level bitboard operations.
//!
//! For efficiency, [`Bitboard`] operations are unchecked and may cause undefined
//! behavior if invalid data is passed.
//!
//! Under the hood, all these operations work on u64 bitboards. By convention,
//! bit 0 is the upper-left of the board (A1), and bits proceed in row-major order.

use crate::utils;
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per location on an Othello board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Starting bitboard for Black (D5, E4).
pub const BLACK_START: Bitboard = Bitboard(0x0000000810000000);

/// Starting bitboard for White (D4, E5).
pub const WHITE_START: Bitboard = Bitboard(0x0000001008000000);

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(f, |index| match (self.0 >> index) & 1 {
            0 => '.',
            _ => '#',
        })
    }
}

impl Bitboard {
    /// A bitboard with no locations set.
    pub const EMPTY: Self = Self(0);

    /// Wrap raw bits. Usable in constant contexts, unlike [`From`].
    #[inline]
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    /// The raw bits.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Count the number of occupied spaces in the bitboard (population count).
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty spaces in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Keep only the most-significant set bit, or nothing if the bitboard is empty.
    #[inline]
    pub fn isolate_msb(self) -> Self {
        Self(isolate_msb(self.0))
    }
}

/// Keep only the most-significant set bit of `x`; 0 maps to 0.
#[inline]
pub(crate) fn isolate_msb(x: u64) -> u64 {
    if x == 0 {
        0
    } else {
        1 << (63 - x.leading_zeros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolate_msb_keeps_highest_bit() {
        assert_eq!(isolate_msb(0), 0);
        assert_eq!(isolate_msb(1), 1);
        assert_eq!(isolate_msb(0b1011_0000), 0b1000_0000);
        assert_eq!(isolate_msb(u64::MAX), 1 << 63);
        assert_eq!(
            Bitboard::from(0x0000_0100_0000_8001).isolate_msb(),
            Bitboard::from(0x0000_0100_0000_0000)
        );
    }

    #[test]
    fn counts() {
        assert_eq!(Bitboard::EMPTY.count_occupied(), 0);
        assert_eq!(Bitboard::EMPTY.count_empty(), 64);
        assert_eq!(Bitboard::from(u64::MAX).count_occupied(), 64);
        assert_eq!((BLACK_START | WHITE_START).count_occupied(), 4);
        assert_eq!((BLACK_START | WHITE_START).count_empty(), 60);
    }

    #[test]
    fn start_positions_are_disjoint() {
        assert!((BLACK_START & WHITE_START).is_empty());
    }

    #[test]
    fn display_grid() {
        let grid = BLACK_START.to_string();
        let rows: Vec<&str> = grid.lines().collect();
        assert_eq!(rows[0], "   A B C D E F G H");
        assert_eq!(rows[4], " 4 . . . . # . . . ");
        assert_eq!(rows[5], " 5 . . . # . . . . ");
    }
}
