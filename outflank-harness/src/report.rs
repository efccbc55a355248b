//! Writing result files and summarising a run.

use crate::problems::ProblemEntry;
use std::io::{self, Write};

/// Write the problem count, then one line per problem in input order:
/// `<position> <score>`, or `<position> <reference> <score>` when a reference was given.
pub fn write_results<W: Write>(
    mut writer: W,
    entries: &[ProblemEntry],
    scores: &[i8],
) -> io::Result<()> {
    assert_eq!(entries.len(), scores.len());

    writeln!(writer, "{}", entries.len())?;
    for (entry, score) in entries.iter().zip(scores) {
        match entry.reference {
            Some(reference) => writeln!(writer, "{} {} {}", entry.position, reference, score)?,
            None => writeln!(writer, "{} {}", entry.position, score)?,
        }
    }

    writer.flush()
}

/// Sum of `|reference - score|` over the problems that carry a reference,
/// or None if none of them do.
pub fn reference_diff(entries: &[ProblemEntry], scores: &[i8]) -> Option<u64> {
    entries
        .iter()
        .zip(scores)
        .filter_map(|(entry, &score)| entry.reference.map(|r| i64::from(r) - i64::from(score)))
        .map(i64::unsigned_abs)
        .fold(None, |total, diff| Some(total.unwrap_or(0) + diff))
}
