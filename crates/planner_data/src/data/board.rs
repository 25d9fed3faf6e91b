use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the square board.
pub const BOARD_SIZE: i32 = 10;
/// Number of grid slots on the board.
pub const CELL_COUNT: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

/// Unique, monotonically increasing id handed out per placement event.
pub type PlacementId = u64;

/// A board coordinate. Signed so that neighbourhood rings can step off the edge
/// before being filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline(always)]
    #[must_use]
    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Row-major slot index, or `None` when off-board.
    #[inline(always)]
    #[must_use]
    pub fn index(self) -> Option<usize> {
        if self.in_bounds() {
            Some((self.row * BOARD_SIZE + self.col) as usize)
        } else {
            None
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Self {
        let index = index as i32;
        Self {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
