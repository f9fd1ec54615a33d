//! Named board cells.
//!
//! The engine speaks in raw indices (0-8, row-major) because that is what a
//! UI hands over. `Cell` gives those indices names so front ends can accept
//! "center" as well as "4".

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Cell {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Cell {
    /// Label for display and parsing.
    pub fn label(&self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// Board index of this cell (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Cell for a board index, `None` outside 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Parses an index ("4") or a label ("center", "top-left").
    ///
    /// Labels match case-insensitively and must be complete, so "top" is
    /// rejected rather than silently picking the first top cell.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let wanted = s.to_lowercase().replace([' ', '_'], "-");
        Self::iter().find(|cell| cell.label().to_lowercase() == wanted)
    }
}

impl From<Cell> for usize {
    fn from(cell: Cell) -> Self {
        cell.index()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_row_major() {
        for (expected, cell) in Cell::iter().enumerate() {
            assert_eq!(cell.index(), expected);
            assert_eq!(Cell::from_index(expected), Some(cell));
        }
        assert_eq!(Cell::from_index(9), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(Cell::from_label_or_number("0"), Some(Cell::TopLeft));
        assert_eq!(Cell::from_label_or_number(" 8 "), Some(Cell::BottomRight));
        assert_eq!(Cell::from_label_or_number("9"), None);
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(Cell::from_label_or_number("center"), Some(Cell::Center));
        assert_eq!(Cell::from_label_or_number("Top Left"), Some(Cell::TopLeft));
        assert_eq!(
            Cell::from_label_or_number("bottom_center"),
            Some(Cell::BottomCenter)
        );
        assert_eq!(Cell::from_label_or_number("top"), None);
    }
}
