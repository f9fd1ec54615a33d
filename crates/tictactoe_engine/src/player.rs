//! One side of a match: its marker, the cells it claimed, and its score.

use crate::types::Marker;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A side's state across one or more matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    marker: Marker,
    name: Option<String>,
    history: Vec<usize>,
    score: u32,
}

impl Player {
    /// Creates an anonymous player with the given marker.
    pub fn new(marker: Marker) -> Self {
        Self {
            marker,
            name: None,
            history: Vec::new(),
            score: 0,
        }
    }

    /// Creates a named player.
    pub fn named(marker: Marker, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(marker)
        }
    }

    /// The player's marker.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub(crate) fn set_marker(&mut self, marker: Marker) {
        self.marker = marker;
    }

    /// Display name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// `@name` handle, falling back to the marker for anonymous players.
    pub fn handle(&self) -> String {
        match &self.name {
            Some(name) => format!("@{}", name),
            None => format!("@{}", self.marker),
        }
    }

    /// Appends a claimed cell.
    ///
    /// Performs no validation: the caller has already checked that the cell
    /// is free and the board is not full.
    #[instrument(skip(self), fields(marker = %self.marker))]
    pub fn record_move(&mut self, cell: usize) {
        self.history.push(cell);
    }

    /// Number of cells claimed this match.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Claimed cells in play order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Forgets this match's moves. The score is kept.
    #[instrument(skip(self), fields(marker = %self.marker))]
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Wins across all matches this session.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn award_win(&mut self) {
        self.score += 1;
        debug!(marker = %self.marker, score = self.score, "Score incremented");
    }
}
