//! Loading problem files.
//!
//! A problem file holds a count `N`, then `N` positions, one per line. Each position may
//! be followed by a reference score (say, from another solver) to check against:
//!
//! ```text
//! 2
//! XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXO- X 64
//! XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXO- O
//! ```

use derive_more::{Display, Error};
use itertools::Itertools;
use log::warn;
use outflank_othello::{ParsePositionError, Position};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// One line of a problem file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProblemEntry {
    pub position: Position,
    pub reference: Option<i32>,
}

#[derive(Debug, Display, Error)]
pub enum LoadProblemsError {
    #[display(fmt = "cannot read problem file: {}", _0)]
    Io(io::Error),
    #[display(fmt = "problem file is empty")]
    MissingCount,
    #[display(fmt = "invalid problem count {:?}", _0)]
    InvalidCount(#[error(not(source))] String),
    #[display(fmt = "line {}: {}", line, source)]
    InvalidPosition {
        line: usize,
        source: ParsePositionError,
    },
    #[display(fmt = "line {}: invalid reference score {:?}", line, value)]
    InvalidReference { line: usize, value: String },
    #[display(fmt = "line {}: unexpected trailing text", line)]
    TrailingText { line: usize },
    #[display(fmt = "expected {} problems, found {}", expected, found)]
    TooFewProblems { expected: usize, found: usize },
}

impl From<io::Error> for LoadProblemsError {
    fn from(err: io::Error) -> Self {
        LoadProblemsError::Io(err)
    }
}

/// Load all of the [`ProblemEntry`]s in the file at `path`.
pub fn load_problems(path: &Path) -> Result<Vec<ProblemEntry>, LoadProblemsError> {
    let file = File::open(path)?;
    read_problems(BufReader::new(file))
}

/// Read a count-prefixed list of problems. Blank lines are skipped, and anything
/// after the announced count is ignored with a warning.
///
/// The count is the first whitespace-separated token, so `1 <position>` on a single
/// line is accepted.
pub fn read_problems<R: BufRead>(reader: R) -> Result<Vec<ProblemEntry>, LoadProblemsError> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(index, line)| line.map(|text| (index + 1, text)))
        .filter(|line| match line {
            Ok((_, text)) => !text.trim().is_empty(),
            Err(_) => true,
        });

    // The count is the first token; the first problem may follow it on the same line.
    let (count_line, first_text) = lines.next().ok_or(LoadProblemsError::MissingCount)??;
    let first_text = first_text.trim_start();
    let split = first_text
        .find(char::is_whitespace)
        .unwrap_or(first_text.len());
    let (count, rest) = first_text.split_at(split);
    let count: usize = count
        .parse()
        .map_err(|_| LoadProblemsError::InvalidCount(count.to_string()))?;

    let mut pending = Some((count_line, rest.to_string()))
        .filter(|(_, rest)| !rest.trim().is_empty());
    let mut entries = Vec::with_capacity(count.min(1 << 16));
    while entries.len() < count {
        let (line, text) = match pending.take().map(Ok).or_else(|| lines.next()) {
            Some(line) => line?,
            None => {
                return Err(LoadProblemsError::TooFewProblems {
                    expected: count,
                    found: entries.len(),
                })
            }
        };
        entries.push(parse_entry(line, &text)?);
    }

    let extra = lines.count() + pending.map_or(0, |_| 1);
    if extra > 0 {
        warn!("ignoring {} lines after the {} announced problems", extra, count);
    }

    Ok(entries)
}

fn parse_entry(line: usize, text: &str) -> Result<ProblemEntry, LoadProblemsError> {
    let mut tokens = text.split_whitespace();

    // The board and the side to move are separate tokens; rejoin them for the parser.
    let position = tokens.by_ref().take(2).join(" ");
    let position: Position = position
        .parse()
        .map_err(|source| LoadProblemsError::InvalidPosition { line, source })?;

    let reference = match tokens.next() {
        None => None,
        Some(value) => Some(value.parse().map_err(|_| {
            LoadProblemsError::InvalidReference {
                line,
                value: value.to_string(),
            }
        })?),
    };

    if tokens.next().is_some() {
        return Err(LoadProblemsError::TrailingText { line });
    }

    Ok(ProblemEntry {
        position,
        reference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use outflank_othello::{Board, Player};
    use std::io::Cursor;

    const OPENING: &str =
        "---------------------------OX------XO--------------------------- X";

    fn read(text: &str) -> Result<Vec<ProblemEntry>, LoadProblemsError> {
        read_problems(Cursor::new(text))
    }

    #[test]
    fn reads_positions_and_references() {
        let text = format!("2\n{}\n\n{} -3\nextra\n", OPENING, OPENING.replace(" X", " O"));
        let entries = read(&text).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].position.board, Board::new());
        assert_eq!(entries[0].reference, None);
        assert_eq!(entries[1].position.to_move, Player::White);
        assert_eq!(entries[1].reference, Some(-3));
    }

    #[test]
    fn count_errors() {
        assert!(matches!(read(""), Err(LoadProblemsError::MissingCount)));
        assert!(matches!(read("\n  \n"), Err(LoadProblemsError::MissingCount)));
        assert!(matches!(
            read("two\n"),
            Err(LoadProblemsError::InvalidCount(count)) if count == "two"
        ));
        assert!(matches!(
            read(&format!("3\n{}\n", OPENING)),
            Err(LoadProblemsError::TooFewProblems {
                expected: 3,
                found: 1
            })
        ));
        assert!(read("0\n").unwrap().is_empty());
    }

    #[test]
    fn line_errors() {
        assert!(matches!(
            read("1\nXO X\n"),
            Err(LoadProblemsError::InvalidPosition {
                line: 2,
                source: ParsePositionError::WrongLength(2)
            })
        ));
        assert!(matches!(
            read(&format!("1\n\n{} nine\n", OPENING)),
            Err(LoadProblemsError::InvalidReference { line: 3, .. })
        ));
        assert!(matches!(
            read(&format!("1\n{} 1 2\n", OPENING)),
            Err(LoadProblemsError::TrailingText { line: 2 })
        ));
    }

    #[test]
    fn count_shares_a_line_with_the_first_problem() {
        let entries = read(&format!("2 {} 7\n{}\n", OPENING, OPENING)).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].position.board, Board::new());
        assert_eq!(entries[0].reference, Some(7));
        assert_eq!(entries[1].reference, None);

        assert!(matches!(
            read(&format!("1 {} nine\n", OPENING)),
            Err(LoadProblemsError::InvalidReference { line: 1, .. })
        ));
        assert!(read(&format!("0 {}\n", OPENING)).unwrap().is_empty());
        assert!(matches!(
            read("  3\n"),
            Err(LoadProblemsError::TooFewProblems {
                expected: 3,
                found: 0
            })
        ));
    }

    #[test]
    fn error_messages() {
        let err = read("1\nXO X\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: expected 64 board cells, found 2");
    }
}
