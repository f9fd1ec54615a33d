//! Tic-tac-toe match engine.
//!
//! Pure game state and rules with no rendering or I/O:
//!
//! - **Board**: which of the 9 cells are taken
//! - **Player**: marker, claimed cells and running score
//! - **Rules**: win and draw detection over move histories
//! - **MatchController**: turn order, validation, verdicts, restart
//! - **Opponent**: pluggable computer players
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{MatchController, MatchState, MoveResult, Seat};
//!
//! let mut controller = MatchController::new();
//! for cell in [0, 3, 1, 4] {
//!     controller.submit_move(cell)?;
//! }
//! let result = controller.submit_move(2)?;
//! assert!(matches!(result, MoveResult::Won { winner: Seat::One, .. }));
//! assert_eq!(controller.state(), MatchState::PlayerOneWon);
//! assert_eq!(controller.score(Seat::One), 1);
//! # Ok::<(), tictactoe_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod controller;
mod error;
pub mod invariants;
mod opponent;
mod outcome;
mod player;
pub mod rules;
mod types;

pub use board::Board;
pub use cell::Cell;
pub use controller::MatchController;
pub use error::{EngineError, EngineErrorKind, EngineResult};
pub use opponent::{Opponent, RandomOpponent};
pub use outcome::{MatchState, MoveResult, RejectReason, ResultSnapshot};
pub use player::Player;
pub use rules::{WINNING_LINES, WinningLine, check_draw, check_win};
pub use types::{CELL_COUNT, Marker, Seat};
