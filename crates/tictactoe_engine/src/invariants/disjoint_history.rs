//! Disjoint history invariant: no cell is claimed twice.

use super::Invariant;
use crate::MatchController;
use crate::types::{CELL_COUNT, Seat};

/// Invariant: each cell appears at most once across both histories.
pub struct DisjointHistoryInvariant;

impl Invariant<MatchController> for DisjointHistoryInvariant {
    fn holds(controller: &MatchController) -> bool {
        let mut seen = [false; CELL_COUNT];
        for seat in [Seat::One, Seat::Two] {
            for &cell in controller.player(seat).history() {
                match seen.get_mut(cell) {
                    Some(slot) if !*slot => *slot = true,
                    _ => return false,
                }
            }
        }
        true
    }

    fn description() -> &'static str {
        "No cell is claimed by more than one move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_for_legal_play() {
        let mut controller = MatchController::new();
        for cell in [0, 1, 2, 3] {
            controller.submit_move(cell).unwrap();
        }
        assert!(DisjointHistoryInvariant::holds(&controller));
    }

    #[test]
    fn test_detects_repeated_cell() {
        let mut controller = MatchController::new();
        controller.submit_move(5).unwrap();
        controller.player_one.record_move(5);
        assert!(!DisjointHistoryInvariant::holds(&controller));
    }
}
