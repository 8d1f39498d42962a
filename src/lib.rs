#![warn(missing_docs)]
//! The sudoku-solver library
//!
//! ## Overview
//!
//! sudoku-solver completes standard 9x9 sudokus by exhaustive backtracking
//! search. It visits cells in row-major order, tries candidate digits in
//! ascending order and undoes a placement as soon as it leads nowhere, so
//! the first solution found for a given grid is always the same one.
//!
//! ## Example
//!
//! ```
//! use sudoku_solver::Sudoku;
//!
//! let grid = "\
//! 53..7....
//! 6..195...
//! .98....6.
//! 8...6...3
//! 4..8.3..1
//! 7...2...6
//! .6....28.
//! ...419..5
//! ....8..79";
//!
//! // Grids can be parsed from an 81-character line or from 9 rows of 9,
//! // with '.' marking blank cells. Whitespace between cells is ignored.
//! let mut sudoku: Sudoku = grid.parse().unwrap();
//!
//! // Solve, then print the completed grid as 9 rows of 9
//! if sudoku.solve() {
//!     print!("{}", sudoku);
//! }
//! ```

mod consts;
mod errors;
mod positions;
mod solver;
mod sudoku;

pub use crate::errors::{FromBytesError, InvalidEntry, ParseError};
pub use crate::sudoku::{Iter, Sudoku};
