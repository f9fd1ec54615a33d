//! Engine error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// A board query or mutation used an index outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// A move named a cell index outside 0-8.
    #[display("Invalid cell {} (must be 0-8)", _0)]
    InvalidCell(usize),

    /// The board was asked to occupy a cell that is already taken.
    #[display("Cell {} is already occupied", _0)]
    AlreadyOccupied(usize),

    /// A cell was requested from a full board.
    #[display("No available cells")]
    NoAvailableCells,

    /// Markers can only be reassigned before the first move.
    #[display("Markers cannot change once a match has started")]
    MarkersLocked,
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// Error kind.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> EngineErrorKind {
        self.kind
    }
}

impl From<EngineErrorKind> for EngineError {
    #[track_caller]
    fn from(kind: EngineErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result alias used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;
