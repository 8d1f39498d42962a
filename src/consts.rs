// Crate-wide constants

pub(crate) const N_CELLS: usize = 81;

/// Cell value representing a blank (unfilled) cell.
pub(crate) const BLANK: u8 = 0;
