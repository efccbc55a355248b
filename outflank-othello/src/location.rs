//! Code for working with [`Location`]s on the Othello board.

use crate::bitboard::Bitboard;
use crate::{EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

/// A location on the Othello board, stored as a one-hot [`Bitboard`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Into)]
pub struct Location(Bitboard);

/// A list of locations on the Othello board, which can be iterated to retrieve them
/// in ascending square index order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, From, Into)]
pub struct LocationList(Bitboard);

impl Location {
    /// Convert from a one-hot [`Bitboard`] without checking this invariant.
    /// Results in inconsistent state if `bitboard` does not have exactly one location set.
    #[inline]
    pub fn from_onehot_unchecked(bitboard: Bitboard) -> Self {
        Self(bitboard)
    }

    /// Convert from a row-major square index in `0..64`.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        debug_assert!((index as usize) < NUM_SPACES);
        Self(Bitboard::new(1 << index))
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> u8 {
        self.0.bits().trailing_zeros() as u8
    }

    /// Convert from zero-based row and column coordinates.
    pub fn from_coords(row: usize, col: usize) -> Self {
        assert!(row < EDGE_LENGTH && col < EDGE_LENGTH);
        Self::from_index((row * EDGE_LENGTH + col) as u8)
    }

    /// Get the zero-based row and column coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        let index = self.to_index() as usize;
        (index / EDGE_LENGTH, index % EDGE_LENGTH)
    }
}

/// Convert this [`Location`] into string notation ("A4").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_coords();
        let row_str = "12345678".chars().nth(row).ok_or(fmt::Error)?;
        let col_str = "ABCDEFGH".chars().nth(col).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

impl LocationList {
    /// Returns whether `loc` is in this list.
    pub fn contains(self, loc: Location) -> bool {
        !(loc.0 & self.0).is_empty()
    }

    /// Returns whether the list has no locations left.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from a 1-indexed string notation ("A4").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if !(1..=EDGE_LENGTH).contains(&row) || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Ok(Self::from_coords(row - 1, col))
    }
}

impl ExactSizeIterator for LocationList {}

impl Iterator for LocationList {
    type Item = Location;

    #[inline]
    fn next(&mut self) -> Option<Location> {
        if self.is_empty() {
            return None;
        }

        let bits = self.0.bits();
        let next_move = Bitboard::new(bits & bits.wrapping_neg());
        self.0 ^= next_move;

        Some(Location::from_onehot_unchecked(next_move))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_occupied() as usize;
        (len, Some(len))
    }
}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
