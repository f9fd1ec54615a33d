//! Occupancy invariant: the board holds exactly the cells the players claimed.

use super::Invariant;
use crate::MatchController;
use crate::types::Seat;

/// Invariant: occupied cells, history entries and the move counter agree.
pub struct OccupancyMatchesHistoryInvariant;

impl Invariant<MatchController> for OccupancyMatchesHistoryInvariant {
    fn holds(controller: &MatchController) -> bool {
        let board = controller.board();
        let claimed = controller.player(Seat::One).move_count()
            + controller.player(Seat::Two).move_count();

        if claimed != board.occupied_count() || claimed != controller.moves_played() {
            return false;
        }

        [Seat::One, Seat::Two].iter().all(|&seat| {
            controller
                .player(seat)
                .history()
                .iter()
                .all(|&cell| board.is_occupied(cell).unwrap_or(false))
        })
    }

    fn description() -> &'static str {
        "Occupied cells match the claimed cells and the move count"
    }
}
