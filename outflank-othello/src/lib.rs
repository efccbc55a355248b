//! `outflank-othello` is the bitboard game engine underneath the `outflank` exact solver.
//!
//! This package implements the board at two levels of abstraction:
//!
//!  - [`bitboard`] and [`flip`] contain the raw, unchecked operations on 64-bit masks.
//!    These are fast, but may result in inconsistent state if their contracts are not manually checked.
//!  - [`Board`] implements the reversible game logic (move application, passes, scoring)
//!    that the search engine drives in place.
//!
//! [`Position`] decodes and encodes the textual board notation used by problem files.
//!
//! Squares are addressed 0-63 in row-major order: bit `i` is row `i / 8`, column `i % 8`,
//! so A1 is bit 0 and H8 is bit 63.

pub mod bitboard;
pub mod flip;
pub mod test_utils;

mod board;
mod location;
mod position;
mod utils;

pub use bitboard::Bitboard;
pub use board::*;
pub use location::*;
pub use position::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
