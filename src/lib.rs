//! Othello AI engine
//!
//! An 8x8 Othello (Reversi) implementation with a fixed-depth alpha-beta AI:
//! - Black (+1) moves first, White is -1
//! - A move must bracket at least one straight run of opponent disks
//! - A side without a legal move passes; the game ends when neither can move
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, players, coordinates
//! - [`rules`]: Legal moves, flipping, game end
//! - [`eval`]: Stage-weighted heuristic and disk-difference evaluators
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: AI engine wrapping search with configuration and timing
//! - [`players`], [`simulate`]: Baseline opponents and match series
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use othello::{apply_move, legal_moves, AIEngine, Board, EngineConfig, Player};
//!
//! let mut board = othello::initial_board();
//! assert_eq!(legal_moves(&board, Player::Black).len(), 4);
//!
//! let mut engine = AIEngine::with_config(EngineConfig { depth: 3, ..EngineConfig::default() });
//!
//! // AI plays Black
//! if let Some(pos) = engine.best_move(&board, Player::Black) {
//!     board = apply_move(&board, pos, Player::Black);
//!     println!("AI plays at {pos}");
//! }
//! assert_eq!(board.count(Player::Black), 4);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod players;
pub mod rules;
pub mod search;
pub mod simulate;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{AIEngine, MoveResult};
pub use error::{Error, Result};
pub use eval::{Evaluator, EvaluatorKind};
pub use rules::{apply_move, flips_in_direction, is_game_over, legal_moves, outcome, Outcome};

/// Standard starting position: four disks in the centre, Black to move.
#[must_use]
pub fn initial_board() -> Board {
    Board::initial()
}
