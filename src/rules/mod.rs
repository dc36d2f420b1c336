//! Game rules for Othello
//!
//! This module implements the rule set:
//! - Legal move generation (a move must flip at least one disk)
//! - Move application with flipping
//! - End-of-game detection and final scoring

pub mod flip;
pub mod legal;
pub mod outcome;

// Re-exports for convenient access
pub use flip::{apply_move, flipped_cells, make_move};
pub use legal::{flips_in_direction, has_legal_move, is_legal_move, legal_moves};
pub use outcome::{is_game_over, outcome, Outcome};
