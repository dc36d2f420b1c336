//! Evaluation module for Othello positions
//!
//! Evaluators score a board from a fixed perspective: positive values
//! favour the perspective player. Two are provided:
//! - [`StagedHeuristic`]: mobility, parity, corners, corner closeness and
//!   stability, weighted by game stage
//! - [`DiskDifference`]: plain disk count difference

pub mod heuristic;
pub mod material;
pub mod weights;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};

pub use heuristic::{Breakdown, StagedHeuristic};
pub use material::DiskDifference;
pub use weights::{Stage, Weights};

/// Static position evaluation.
pub trait Evaluator: Send + Sync {
    /// Score `board` from `perspective`'s point of view.
    fn evaluate(&self, board: &Board, perspective: Player) -> i32;
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    #[inline]
    fn evaluate(&self, board: &Board, perspective: Player) -> i32 {
        (**self).evaluate(board, perspective)
    }
}

/// Evaluator selectable from configuration or the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EvaluatorKind {
    #[default]
    Staged,
    DiskDifference,
}

impl Evaluator for EvaluatorKind {
    fn evaluate(&self, board: &Board, perspective: Player) -> i32 {
        match self {
            EvaluatorKind::Staged => StagedHeuristic.evaluate(board, perspective),
            EvaluatorKind::DiskDifference => DiskDifference.evaluate(board, perspective),
        }
    }
}

/// Evaluate with the staged heuristic.
#[must_use]
pub fn evaluate(board: &Board, perspective: Player) -> i32 {
    StagedHeuristic.evaluate(board, perspective)
}
