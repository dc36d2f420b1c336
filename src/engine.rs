//! Main AI engine
//!
//! Wraps the alpha-beta [`Searcher`] with a configuration, timing and
//! logging. Every decision is reported at `debug` level with the chosen
//! move, its score, the nodes visited and the elapsed time.
//!
//! # Example
//!
//! ```
//! use othello::{AIEngine, Board, EngineConfig, Player};
//!
//! // Use smaller depth for faster example
//! let config = EngineConfig { depth: 2, ..EngineConfig::default() };
//! let mut engine = AIEngine::with_config(config);
//! let board = Board::initial();
//!
//! let result = engine.get_move_with_stats(&board, Player::Black);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Player, Pos};
use crate::config::EngineConfig;
use crate::eval::EvaluatorKind;
use crate::search::{SearchResult, Searcher};

/// Result of a move search with timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, `None` when the side to move must pass
    pub best_move: Option<Pos>,
    /// Score of the position after the move, from the mover's view
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            nodes: result.stats.nodes,
            time_ms,
        }
    }
}

/// AI player for Othello.
///
/// # Example
///
/// ```
/// use othello::{AIEngine, Board, Player};
///
/// let mut engine = AIEngine::new();
/// engine.set_depth(2);
///
/// if let Some(mv) = engine.best_move(&Board::initial(), Player::Black) {
///     println!("Play at {mv}");
/// }
/// ```
pub struct AIEngine {
    searcher: Searcher<EvaluatorKind>,
    config: EngineConfig,
}

impl AIEngine {
    /// Create an engine with the default configuration: depth 5, one
    /// thread, staged heuristic.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine from a configuration.
    ///
    /// The configuration is expected to be validated; a zero thread count
    /// is treated as one.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::with_threads(config.evaluator, config.threads),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn depth(&self) -> u8 {
        self.config.depth
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }

    /// Best move for `player`, or `None` if it has to pass.
    #[must_use]
    pub fn best_move(&mut self, board: &Board, player: Player) -> Option<Pos> {
        self.get_move_with_stats(board, player).best_move
    }

    /// Run a full search and return the move with its statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, player: Player) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(board, player, self.config.depth);
        let time_ms = start.elapsed().as_millis() as u64;

        let move_result = MoveResult::from_search(result, time_ms);
        match move_result.best_move {
            Some(mv) => debug!(
                player = player.name(),
                %mv,
                score = move_result.score,
                depth = move_result.depth,
                nodes = move_result.nodes,
                time_ms,
                "AI move chosen"
            ),
            None => debug!(player = player.name(), "AI has no legal move"),
        }
        move_result
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
