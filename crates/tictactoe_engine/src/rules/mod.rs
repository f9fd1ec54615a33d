//! Game rules for tic-tac-toe.
//!
//! Pure functions over move histories and board occupancy. Rules hold no
//! state so the match controller can call them after every move without
//! caring how the board is stored.

pub mod draw;
pub mod win;

pub use draw::check_draw;
pub use win::{WINNING_LINES, WinningLine, check_win};
