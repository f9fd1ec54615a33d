//! Core domain types shared across the engine.

use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Symbol identifying a side.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Marker {
    /// Marker X (moves first).
    X,
    /// Marker O.
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn other(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// One of the two sides of a match, independent of the marker it plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    /// The first registered side.
    #[strum(to_string = "Player one")]
    One,
    /// The second registered side.
    #[strum(to_string = "Player two")]
    Two,
}

impl Seat {
    /// Returns the opposing seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_marker_other() {
        assert_eq!(Marker::X.other(), Marker::O);
        assert_eq!(Marker::O.other(), Marker::X);
    }

    #[test]
    fn test_marker_parse_case_insensitive() {
        assert_eq!(Marker::from_str("x").unwrap(), Marker::X);
        assert_eq!(Marker::from_str("O").unwrap(), Marker::O);
        assert!(Marker::from_str("z").is_err());
    }

    #[test]
    fn test_seat_opponent() {
        assert_eq!(Seat::One.opponent(), Seat::Two);
        assert_eq!(Seat::Two.opponent().opponent(), Seat::Two);
    }

    #[test]
    fn test_seat_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Seat::One).unwrap(), "\"one\"");
    }
}
