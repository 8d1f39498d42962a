//! Errors that may be encountered when reading a sudoku from a string
use crate::positions::{block, col, row};

#[cfg(doc)]
use crate::Sudoku;

/// An invalid cell entry encountered during parsing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InvalidEntry {
    /// Cell number goes from 0..=80, 0..=8 for the first row, 9..=17 for the 2nd and so on
    pub cell: u8,
    /// The parsed invalid char
    pub ch: char,
}

impl InvalidEntry {
    /// Row index from 0..=8, topmost row is 0
    #[inline]
    pub fn row(self) -> u8 {
        row(self.cell)
    }
    /// Column index from 0..=8, leftmost col is 0
    #[inline]
    pub fn col(self) -> u8 {
        col(self.cell)
    }
    /// Block index from 0..=8, numbering from left to right, top to bottom. Example: top band is 0, 1, 2
    #[inline]
    pub fn block(self) -> u8 {
        block(self.cell)
    }
}

/// A structure representing an error caused when parsing the sudoku
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// Accepted values are digits 1..=9 and '.' for blank cells
    #[error("cell {} contains invalid character '{}'", .0.cell, .0.ch)]
    InvalidEntry(InvalidEntry),
    /// Returns number of cells supplied
    #[error("grid contains {0} cells instead of required 81")]
    NotEnoughCells(u8),
    /// Returned if >=82 cell values are supplied
    #[error("grid contains more than 81 cells")]
    TooManyCells,
}

/// Error for [`Sudoku::from_bytes`]
#[derive(Debug, thiserror::Error)]
#[error("byte array contains entries >9")]
pub struct FromBytesError(pub(crate) ());
