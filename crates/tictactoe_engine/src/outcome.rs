//! Values the match controller hands back to its UI.

use crate::rules::WinningLine;
use crate::types::Seat;
use serde::{Deserialize, Serialize};

/// Phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchState {
    /// Player one may move.
    AwaitingPlayerOneMove,
    /// Player two may move.
    AwaitingPlayerTwoMove,
    /// Player one completed a line.
    PlayerOneWon,
    /// Player two completed a line.
    PlayerTwoWon,
    /// The board filled up with no line completed.
    Draw,
}

impl MatchState {
    /// State waiting on `seat`.
    pub fn awaiting(seat: Seat) -> Self {
        match seat {
            Seat::One => MatchState::AwaitingPlayerOneMove,
            Seat::Two => MatchState::AwaitingPlayerTwoMove,
        }
    }

    /// State recording a win for `seat`.
    pub fn won_by(seat: Seat) -> Self {
        match seat {
            Seat::One => MatchState::PlayerOneWon,
            Seat::Two => MatchState::PlayerTwoWon,
        }
    }

    /// Seat whose turn it is, `None` once the match is over.
    pub fn to_move(&self) -> Option<Seat> {
        match self {
            MatchState::AwaitingPlayerOneMove => Some(Seat::One),
            MatchState::AwaitingPlayerTwoMove => Some(Seat::Two),
            _ => None,
        }
    }

    /// Winning seat, if any.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            MatchState::PlayerOneWon => Some(Seat::One),
            MatchState::PlayerTwoWon => Some(Seat::Two),
            _ => None,
        }
    }

    /// True for the won and drawn states.
    pub fn is_terminal(&self) -> bool {
        self.to_move().is_none()
    }
}

/// Why a move was turned away without touching state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum RejectReason {
    /// The cell is already claimed.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),
    /// Every cell is claimed.
    #[display("The board is full")]
    BoardFull,
    /// The submitting seat is not the one to move.
    #[display("It is not {}'s turn", _0)]
    WrongTurn(Seat),
    /// The match already has a winner or is drawn.
    #[display("The match is over")]
    MatchOver,
}

/// Result of submitting a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum MoveResult {
    /// Nothing changed.
    Rejected {
        /// Why the move was refused.
        reason: RejectReason,
    },
    /// The move was applied and the turn passed.
    Advanced {
        /// Seat that moves next.
        turn_now_on: Seat,
    },
    /// The move completed a line.
    Won {
        /// Seat that completed the line.
        winner: Seat,
        /// The completed line.
        line: WinningLine,
    },
    /// The move filled the board without completing a line.
    Draw,
}

impl MoveResult {
    /// True if the move was applied.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveResult::Rejected { .. })
    }
}

/// Snapshot of the match verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct ResultSnapshot {
    /// Player one has won this match.
    pub player_one_won: bool,
    /// Player two has won this match.
    pub player_two_won: bool,
    /// The match is drawn.
    pub is_draw: bool,
    /// Line to highlight, if a side won.
    pub winning_line: Option<WinningLine>,
}
