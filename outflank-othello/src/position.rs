//! Textual position notation used by problem files.
//!
//! A position is 64 cell characters in row-major order from A1 to H8 (`X` for Black,
//! `O` for White, `-` or `.` for empty), a space, and the side to move (`X` or `O`):
//!
//! ```text
//! ---------------------------OX------XO--------------------------- X
//! ```

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::NUM_SPACES;
use derive_more::{Display, Error};
use std::fmt;
use std::str::FromStr;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl Player {
    /// The character marking this player's discs and turn.
    pub fn symbol(self) -> char {
        match self {
            Player::Black => 'X',
            Player::White => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid player string")]
pub struct ParsePlayerError;

/// Accepts the disc symbol (`X`/`O`) or the player name (`Black`/`White`).
impl FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x" | "black" => Ok(Player::Black),
            "o" | "white" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}

#[derive(Debug, Display, Error, PartialEq)]
pub enum ParsePositionError {
    #[display(fmt = "expected {} board cells, found {}", NUM_SPACES, _0)]
    WrongLength(#[error(not(source))] usize),
    #[display(fmt = "invalid cell {:?} at square {}", _0, _1)]
    InvalidCell(#[error(not(source))] char, #[error(not(source))] usize),
    #[display(fmt = "missing space between board and side to move")]
    MissingSeparator,
    #[display(fmt = "invalid side to move")]
    InvalidPlayer,
}

impl From<ParsePlayerError> for ParsePositionError {
    fn from(_: ParsePlayerError) -> Self {
        ParsePositionError::InvalidPlayer
    }
}

/// A board together with the color of the side to move.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Position {
    /// Seen from the side to move.
    pub board: Board,
    pub to_move: Player,
}

impl Position {
    /// Build a position from color bitboards.
    pub fn from_colors(black: Bitboard, white: Bitboard, to_move: Player) -> Self {
        let board = match to_move {
            Player::Black => Board::from_bitboards(black, white),
            Player::White => Board::from_bitboards(white, black),
        };
        Self { board, to_move }
    }

    /// Get the (black, white) bitboards.
    pub fn colors(self) -> (Bitboard, Bitboard) {
        match self.to_move {
            Player::Black => (self.board.me, self.board.op),
            Player::White => (self.board.op, self.board.me),
        }
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let cells = s.chars().take_while(|c| !c.is_whitespace()).count();
        if cells != NUM_SPACES {
            return Err(ParsePositionError::WrongLength(cells));
        }

        let (mut black, mut white) = (0u64, 0u64);
        for (index, cell) in s.chars().take(NUM_SPACES).enumerate() {
            match cell {
                'X' | 'x' => black |= 1 << index,
                'O' | 'o' => white |= 1 << index,
                '-' | '.' => {}
                _ => return Err(ParsePositionError::InvalidCell(cell, index)),
            }
        }

        // Cells are ASCII once validated, so byte and char offsets agree.
        let side = s[NUM_SPACES..]
            .strip_prefix(' ')
            .ok_or(ParsePositionError::MissingSeparator)?;
        let to_move: Player = side.parse()?;

        Ok(Self::from_colors(
            Bitboard::new(black),
            Bitboard::new(white),
            to_move,
        ))
    }
}

/// Canonical notation, with `-` for empty cells.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (black, white) = self.colors();
        let cells: String = (0..NUM_SPACES)
            .map(|index| {
                let bit = 1u64 << index;
                if black.bits() & bit != 0 {
                    'X'
                } else if white.bits() & bit != 0 {
                    'O'
                } else {
                    '-'
                }
            })
            .collect();

        write!(f, "{} {}", cells, self.to_move.symbol())
    }
}
