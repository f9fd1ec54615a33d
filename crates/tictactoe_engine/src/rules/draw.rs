//! Draw detection.

use crate::board::Board;
use tracing::instrument;

/// A match is drawn when the board is full and nobody completed a line.
#[instrument(skip(board), fields(full = board.is_full()))]
pub fn check_draw(board: &Board, win_found: bool) -> bool {
    board.is_full() && !win_found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_board() -> Board {
        let mut board = Board::new();
        for cell in 0..9 {
            board.occupy(cell).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_is_not_draw() {
        assert!(!check_draw(&Board::new(), false));
    }

    #[test]
    fn test_partial_board_is_not_draw() {
        let mut board = Board::new();
        board.occupy(4).unwrap();
        assert!(!check_draw(&board, false));
    }

    #[test]
    fn test_full_board_without_win_is_draw() {
        assert!(check_draw(&full_board(), false));
    }

    #[test]
    fn test_full_board_with_win_is_not_draw() {
        assert!(!check_draw(&full_board(), true));
    }
}
