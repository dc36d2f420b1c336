//! Stage-dependent weights for the heuristic evaluation
//!
//! The game is split into three stages by the fraction of empty squares.
//! Early on mobility matters most since disks keep changing hands; towards
//! the end disk count and stable disks dominate.

use crate::board::{Board, TOTAL_CELLS};

/// Game phase, derived from the fraction of empty squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// More than 3/4 of the board empty
    Opening,
    /// Between 1/4 (exclusive) and 3/4 (inclusive) empty
    Midgame,
    /// At most 1/4 empty
    Endgame,
}

impl Stage {
    /// Stage for a given number of empty squares.
    ///
    /// Compared in integers so the 0.25 and 0.75 boundaries are exact:
    /// exactly 16 empty squares is already the endgame.
    pub fn from_empty_count(empty: u32) -> Self {
        let empty4 = empty as usize * 4;
        if empty4 > TOTAL_CELLS * 3 {
            Stage::Opening
        } else if empty4 > TOTAL_CELLS {
            Stage::Midgame
        } else {
            Stage::Endgame
        }
    }

    #[inline]
    pub fn of(board: &Board) -> Self {
        Self::from_empty_count(board.empty_count())
    }

    pub fn weights(self) -> Weights {
        match self {
            Stage::Opening => Weights::OPENING,
            Stage::Midgame => Weights::MIDGAME,
            Stage::Endgame => Weights::ENDGAME,
        }
    }
}

/// Multipliers for the five evaluation terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub mobility: i32,
    pub parity: i32,
    pub corner: i32,
    pub corner_closeness: i32,
    pub stability: i32,
}

impl Weights {
    pub const OPENING: Weights = Weights {
        mobility: 10,
        parity: 5,
        corner: 100,
        corner_closeness: 100,
        stability: 15,
    };

    pub const MIDGAME: Weights = Weights {
        mobility: 5,
        parity: 10,
        corner: 80,
        corner_closeness: 80,
        stability: 20,
    };

    pub const ENDGAME: Weights = Weights {
        mobility: 1,
        parity: 25,
        corner: 50,
        corner_closeness: 50,
        stability: 30,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_brackets() {
        assert_eq!(Stage::from_empty_count(60), Stage::Opening);
        assert_eq!(Stage::from_empty_count(49), Stage::Opening);
        assert_eq!(Stage::from_empty_count(48), Stage::Midgame);
        assert_eq!(Stage::from_empty_count(17), Stage::Midgame);
        assert_eq!(Stage::from_empty_count(16), Stage::Endgame);
        assert_eq!(Stage::from_empty_count(0), Stage::Endgame);
    }

    #[test]
    fn test_initial_board_is_opening() {
        assert_eq!(Stage::of(&Board::initial()), Stage::Opening);
        assert_eq!(Stage::of(&Board::initial()).weights(), Weights::OPENING);
    }

    #[test]
    fn test_weights_table() {
        assert_eq!(Stage::Midgame.weights().parity, 10);
        assert_eq!(Stage::Endgame.weights().stability, 30);
        assert_eq!(Stage::Endgame.weights().mobility, 1);
    }
}
