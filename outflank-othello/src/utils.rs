//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};

/// Format one character per square into a labelled grid, rank 1 at the top.
/// `cell` receives square indices 0 through 63 in row-major order.
pub fn format_grid<F: Fn(usize) -> char>(f: &mut Formatter, cell: F) -> fmt::Result {
    write!(f, "   A B C D E F G H")?;

    for row in 0..EDGE_LENGTH {
        write!(f, "\n {} ", row + 1)?;
        for col in 0..EDGE_LENGTH {
            write!(f, "{} ", cell(row * EDGE_LENGTH + col))?;
        }
    }

    Ok(())
}
