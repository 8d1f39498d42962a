use std::str::FromStr;
use std::{fmt, iter, slice};

use crate::consts::{BLANK, N_CELLS};
use crate::errors::{FromBytesError, InvalidEntry, ParseError};
use crate::solver;

/// The main structure exposing all the functionality of the library
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Sudoku([u8; N_CELLS]);

/// Iterator over the cells of a [`Sudoku`], blank cells are `None`
pub type Iter<'a> = iter::Map<slice::Iter<'a, u8>, fn(&u8) -> Option<u8>>;

impl Sudoku {
    /// Creates a sudoku from a byte array. Digits must be in the range of
    /// `0..=9`, where `0` stands for a blank cell.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Sudoku, FromBytesError> {
        if bytes.iter().any(|&byte| byte > 9) {
            return Err(FromBytesError(()));
        }
        Ok(Sudoku(bytes))
    }

    /// Returns the cell values of the sudoku, `0` standing for a blank cell.
    pub fn to_bytes(&self) -> [u8; 81] {
        self.0
    }

    /// Try to find a solution to the sudoku and fill it in. Return true if a solution was found.
    ///
    /// The sudoku is left unchanged when no solution exists. A pre-existing
    /// conflict among the givens is not detected upfront, it merely causes the
    /// search to run out of candidates and report failure.
    pub fn solve(&mut self) -> bool {
        match self.clone().solve_one() {
            Some(solution) => {
                *self = solution;
                true
            }
            None => false,
        }
    }

    /// Find the first solution to the sudoku under row-major cell order with
    /// candidate digits tried in ascending order. If multiple solutions exist,
    /// the others are never visited. Return `None` if no solution exists.
    pub fn solve_one(mut self) -> Option<Sudoku> {
        if solver::solve_grid(&mut self.0) {
            Some(self)
        } else {
            None
        }
    }

    /// Check whether the sudoku is fully filled and every row, column and
    /// block contains each digit exactly once.
    pub fn is_solved(&self) -> bool {
        use crate::positions::CELLS_BY_HOUSE;
        CELLS_BY_HOUSE.iter().all(|house| {
            let mut seen = [false; 9];
            house
                .iter()
                .map(|&cell| self.0[cell as usize])
                .all(|digit| {
                    digit != BLANK && !std::mem::replace(&mut seen[digit as usize - 1], true)
                })
        })
    }

    /// Returns an iterator over the sudoku's cells, going from left to right, top to bottom
    pub fn iter(&self) -> Iter {
        self.0.iter().map(num_to_opt)
    }

    /// Returns the sudoku as an 81-character line, blank cells rendered as `'.'`.
    pub fn to_str_line(&self) -> String {
        self.0.iter().map(|&num| cell_to_char(num)).collect()
    }
}

fn num_to_opt(num: &u8) -> Option<u8> {
    if *num == BLANK {
        None
    } else {
        Some(*num)
    }
}

fn cell_to_char(num: u8) -> char {
    match num {
        BLANK => '.',
        1..=9 => (b'0' + num) as char,
        _ => unreachable!(),
    }
}

impl FromStr for Sudoku {
    type Err = ParseError;

    /// Reads a sudoku from any text whose non-whitespace characters are 81
    /// cell tokens, digits `'1'..='9'` or `'.'` for a blank cell. Both the
    /// unbroken 81-character line and a block of 9 rows parse fine.
    ///
    /// No consistency check among the givens is performed.
    fn from_str(s: &str) -> Result<Sudoku, ParseError> {
        let mut grid = [BLANK; N_CELLS];
        let mut n_cells: u8 = 0;

        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            if n_cells as usize == N_CELLS {
                return Err(ParseError::TooManyCells);
            }
            match ch {
                '1'..='9' => grid[n_cells as usize] = ch as u8 - b'0',
                '.' => {}
                _ => {
                    return Err(ParseError::InvalidEntry(InvalidEntry { cell: n_cells, ch }));
                }
            }
            n_cells += 1;
        }

        if (n_cells as usize) < N_CELLS {
            return Err(ParseError::NotEnoughCells(n_cells));
        }
        Ok(Sudoku(grid))
    }
}

impl fmt::Display for Sudoku {
    /// Writes the grid as 9 newline-terminated rows of 9 characters each,
    /// with no separators between cells.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.0.chunks(9) {
            for &num in row {
                write!(f, "{}", cell_to_char(num))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_str_line())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Sudoku;
    use serde::de::{self, Deserialize, Deserializer, Visitor};
    use serde::ser::{Serialize, Serializer};
    use std::convert::TryInto;
    use std::fmt;

    impl Serialize for Sudoku {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.to_str_line())
            } else {
                serializer.serialize_bytes(&self.to_bytes())
            }
        }
    }

    struct SudokuVisitor;

    impl<'de> Visitor<'de> for SudokuVisitor {
        type Value = Sudoku;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a sudoku grid as an 81-character string or 81 bytes")
        }

        fn visit_str<E: de::Error>(self, s: &str) -> Result<Sudoku, E> {
            s.parse().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, bytes: &[u8]) -> Result<Sudoku, E> {
            let bytes: [u8; 81] = bytes
                .try_into()
                .map_err(|_| de::Error::invalid_length(bytes.len(), &self))?;
            Sudoku::from_bytes(bytes).map_err(de::Error::custom)
        }
    }

    impl<'de> Deserialize<'de> for Sudoku {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Sudoku, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(SudokuVisitor)
            } else {
                deserializer.deserialize_bytes(SudokuVisitor)
            }
        }
    }
}
