//! Win detection.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three cells that win the match when one side claims all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([usize; 3]);

impl WinningLine {
    /// The line's cells in ascending order.
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    /// True if `cell` is part of this line.
    pub fn contains(&self, cell: usize) -> bool {
        self.0.contains(&cell)
    }

    /// True if every cell of the line appears in `history`.
    pub fn is_claimed_by(&self, history: &[usize]) -> bool {
        self.0.iter().all(|cell| history.contains(cell))
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{},{},{}", a, b, c)
    }
}

/// Every winning line, in the order they are checked.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([0, 1, 2]),
    WinningLine([3, 4, 5]),
    WinningLine([6, 7, 8]),
    // Columns
    WinningLine([0, 3, 6]),
    WinningLine([1, 4, 7]),
    WinningLine([2, 5, 8]),
    // Diagonals
    WinningLine([0, 4, 8]),
    WinningLine([2, 4, 6]),
];

/// Returns the first line fully contained in `history`.
///
/// Lines are scanned in [`WINNING_LINES`] order, so when a history completes
/// two lines at once the earlier one is reported.
#[instrument]
pub fn check_win(history: &[usize]) -> Option<WinningLine> {
    // Fewer than three cells can never cover a line.
    if history.len() < 3 {
        return None;
    }

    WINNING_LINES
        .iter()
        .copied()
        .find(|line| line.is_claimed_by(history))
}
