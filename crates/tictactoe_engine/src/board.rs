//! Board occupancy.
//!
//! The board only knows whether a cell is taken. Which marker sits there is
//! recorded in the owning [`Player`](crate::Player)'s history.

use crate::error::{EngineError, EngineErrorKind, EngineResult};
use crate::types::CELL_COUNT;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// 3x3 occupancy board, row-major (0-8).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    occupied: [bool; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether a cell is taken.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `cell` is not in 0-8.
    #[instrument(skip(self))]
    pub fn is_occupied(&self, cell: usize) -> EngineResult<bool> {
        self.occupied
            .get(cell)
            .copied()
            .ok_or_else(|| EngineError::new(EngineErrorKind::OutOfRange(cell)))
    }

    /// Marks a cell as taken.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `cell` is not in 0-8 and `AlreadyOccupied` if
    /// the cell is taken. Callers check [`Board::is_occupied`] first.
    #[instrument(skip(self))]
    pub fn occupy(&mut self, cell: usize) -> EngineResult<()> {
        if self.is_occupied(cell)? {
            return Err(EngineError::new(EngineErrorKind::AlreadyOccupied(cell)));
        }
        self.occupied[cell] = true;
        trace!(cell, "Cell occupied");
        Ok(())
    }

    /// True when every cell is taken.
    pub fn is_full(&self) -> bool {
        self.occupied.iter().all(|&taken| taken)
    }

    /// True when no cell is taken.
    pub fn is_empty(&self) -> bool {
        !self.occupied.iter().any(|&taken| taken)
    }

    /// Number of taken cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied.iter().filter(|&&taken| taken).count()
    }

    /// Free cells in ascending order.
    pub fn available_cells(&self) -> Vec<usize> {
        self.occupied
            .iter()
            .enumerate()
            .filter(|(_, taken)| !**taken)
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Frees every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.occupied = [false; CELL_COUNT];
    }
}
