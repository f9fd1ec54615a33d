//! Text rendering of the board and scores.

use tictactoe_engine::{MatchController, Seat};

/// Formats the board with free cells shown by index.
///
/// Cells of a winning line are wrapped in brackets.
pub fn board(controller: &MatchController) -> String {
    let line = controller.winning_line();
    let mut result = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let cell = row * 3 + col;
            let symbol = match controller.marker_at(cell) {
                Some(marker) => marker.to_string(),
                None => cell.to_string(),
            };
            if line.is_some_and(|l| l.contains(cell)) {
                result.push_str(&format!("[{}]", symbol));
            } else {
                result.push_str(&format!(" {} ", symbol));
            }
            if col < 2 {
                result.push('|');
            }
        }
        if row < 2 {
            result.push_str("\n---+---+---\n");
        }
    }
    result
}

/// One-line scoreboard.
pub fn scores(controller: &MatchController) -> String {
    let one = controller.player(Seat::One);
    let two = controller.player(Seat::Two);
    format!(
        "{} ({}) {} - {} {} ({})",
        one.handle(),
        one.marker(),
        one.score(),
        two.score(),
        two.handle(),
        two.marker()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_shows_indices() {
        let controller = MatchController::new();
        assert_eq!(
            board(&controller),
            " 0 | 1 | 2 \n---+---+---\n 3 | 4 | 5 \n---+---+---\n 6 | 7 | 8 "
        );
    }

    #[test]
    fn test_winning_line_is_bracketed() {
        let mut controller = MatchController::new();
        for cell in [0, 3, 1, 4, 2] {
            controller.submit_move(cell).unwrap();
        }
        let text = board(&controller);
        assert!(text.starts_with("[X]|[X]|[X]"));
        assert!(text.contains(" O | O | 5 "));
    }

    #[test]
    fn test_scores() {
        let controller = MatchController::named("ada", "grace");
        assert_eq!(scores(&controller), "@ada (X) 0 - 0 @grace (O)");
    }
}
