//! Raw disk-difference evaluation

use crate::board::{Board, Player};

use super::Evaluator;

/// Sum of all cell values (Black +1, White -1), signed towards the
/// perspective player. Cheap baseline for the staged heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskDifference;

impl Evaluator for DiskDifference {
    #[inline]
    fn evaluate(&self, board: &Board, perspective: Player) -> i32 {
        board.material() * perspective.sign()
    }
}
