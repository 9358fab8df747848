use serde::{Deserialize, Serialize};

/// One-based coordinate of a site on a square grid.
///
/// Rows count from the top: `row == 1` is the row connected to the virtual
/// top sentinel and `row == n` the row connected to the virtual bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Site {
    /// One-based row index in `[1, n]`.
    pub row: u32,
    /// One-based column index in `[1, n]`.
    pub col: u32,
}

impl Site {
    /// Creates a site from one-based row and column indices.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}
