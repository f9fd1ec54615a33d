//! Alternating turn invariant: the seats take turns, starter first.

use super::Invariant;
use crate::MatchController;

/// Invariant: the starting seat has made as many moves as the other seat,
/// or exactly one more.
///
/// While the match is running, the seat to move must be the one that keeps
/// the counts in that shape.
pub struct AlternatingTurnInvariant;

impl Invariant<MatchController> for AlternatingTurnInvariant {
    fn holds(controller: &MatchController) -> bool {
        let starter = controller.starting_seat();
        let first = controller.player(starter).move_count();
        let second = controller.player(starter.opponent()).move_count();

        if first != second && first != second + 1 {
            return false;
        }

        match controller.state().to_move() {
            Some(seat) if first == second => seat == starter,
            Some(seat) => seat == starter.opponent(),
            None => true,
        }
    }

    fn description() -> &'static str {
        "Seats alternate turns, starting seat first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Marker, Seat};

    #[test]
    fn test_holds_for_new_match() {
        assert!(AlternatingTurnInvariant::holds(&MatchController::new()));
    }

    #[test]
    fn test_holds_when_player_two_starts() {
        let mut controller = MatchController::new();
        controller.assign_markers(Marker::O).unwrap();
        assert_eq!(controller.starting_seat(), Seat::Two);
        controller.submit_move(0).unwrap();
        assert!(AlternatingTurnInvariant::holds(&controller));
        assert_eq!(controller.state().to_move(), Some(Seat::One));
    }

    #[test]
    fn test_detects_double_move() {
        let mut controller = MatchController::new();
        controller.submit_move(0).unwrap();
        controller.player_one.record_move(1);
        assert!(!AlternatingTurnInvariant::holds(&controller));
    }
}
