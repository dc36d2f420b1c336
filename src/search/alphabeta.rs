//! Fixed-depth minimax with alpha-beta pruning
//!
//! This module implements the core search algorithm for the Othello AI.
//! It is a plain minimax (not negamax): the evaluator always scores from
//! the root player's perspective, the root player maximizes and the
//! opponent minimizes.
//!
//! # Features
//!
//! - Alpha-beta pruning with a running root alpha across siblings
//! - Moves explored in row-major order, first-found move wins ties
//! - A side without legal moves is a leaf (no pass nodes)
//! - Optional root-parallel search over scoped threads with results
//!   identical to the sequential search
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Player};
//! use othello::eval::StagedHeuristic;
//! use othello::search::Searcher;
//!
//! let mut searcher = Searcher::new(StagedHeuristic);
//! let board = Board::initial();
//!
//! let result = searcher.search(&board, Player::Black, 2);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {best_move}");
//! }
//! ```

use crate::board::{Board, Player, Pos};
use crate::eval::Evaluator;
use crate::rules::{apply_move, legal_moves};

/// Infinity score for alpha-beta bounds. Evaluations stay far inside it.
pub const INF: i32 = i32::MAX;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root children included
    pub nodes: u64,
    /// Leaf evaluations
    pub evaluations: u64,
    /// Sibling loops cut short by `beta <= alpha`
    pub cutoffs: u64,
}

impl SearchStats {
    /// Merge another stats into this one (for combining worker stats)
    fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.evaluations += other.evaluations;
        self.cutoffs += other.cutoffs;
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when the side to move has no legal move
    pub best_move: Option<Pos>,
    /// Score of the position after the best move, from the mover's view
    pub score: i32,
    /// Plies searched below each root move
    pub depth: u8,
    /// Search diagnostics
    pub stats: SearchStats,
}

// =============================================================================
// Worker: one recursive search, owns its counters
// =============================================================================

struct Worker<'a, E: Evaluator> {
    evaluator: &'a E,
    maximizer: Player,
    stats: SearchStats,
}

impl<'a, E: Evaluator> Worker<'a, E> {
    fn new(evaluator: &'a E, maximizer: Player) -> Self {
        Self {
            evaluator,
            maximizer,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    fn leaf(&mut self, board: &Board) -> i32 {
        self.stats.evaluations += 1;
        self.evaluator.evaluate(board, self.maximizer)
    }

    /// Minimax with alpha-beta pruning (fail-soft).
    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        player: Player,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            return self.leaf(board);
        }
        let moves = legal_moves(board, player);
        if moves.is_empty() {
            return self.leaf(board);
        }

        if player == self.maximizer {
            let mut best = -INF;
            for mv in moves {
                let child = apply_move(board, mv, player);
                let score = self.minimax(&child, depth - 1, player.opponent(), alpha, beta);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for mv in moves {
                let child = apply_move(board, mv, player);
                let score = self.minimax(&child, depth - 1, player.opponent(), alpha, beta);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }
}

/// Unpruned minimax, the reference the pruned search must agree with.
///
/// Scores from `maximizer`'s perspective with the same leaf rules as
/// [`Searcher::minimax`].
pub fn minimax_full<E: Evaluator>(
    evaluator: &E,
    board: &Board,
    depth: u8,
    player: Player,
    maximizer: Player,
) -> i32 {
    if depth == 0 {
        return evaluator.evaluate(board, maximizer);
    }
    let moves = legal_moves(board, player);
    if moves.is_empty() {
        return evaluator.evaluate(board, maximizer);
    }

    let scores = moves.into_iter().map(|mv| {
        let child = apply_move(board, mv, player);
        minimax_full(evaluator, &child, depth - 1, player.opponent(), maximizer)
    });
    if player == maximizer {
        scores.max().unwrap_or(-INF)
    } else {
        scores.min().unwrap_or(INF)
    }
}

/// Alpha-beta search engine.
///
/// Stateless between searches apart from the statistics of the last one.
/// With more than one thread the root moves are shared out between scoped
/// worker threads, each searching its subtrees with a full window.
pub struct Searcher<E: Evaluator> {
    evaluator: E,
    num_threads: usize,
    last_stats: SearchStats,
}

impl<E: Evaluator> Searcher<E> {
    /// Create a single-threaded searcher.
    #[must_use]
    pub fn new(evaluator: E) -> Self {
        Self::with_threads(evaluator, 1)
    }

    /// Create a searcher that splits root moves over `num_threads` threads.
    #[must_use]
    pub fn with_threads(evaluator: E, num_threads: usize) -> Self {
        Self {
            evaluator,
            num_threads: num_threads.max(1),
            last_stats: SearchStats::default(),
        }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Statistics of the most recent search.
    pub fn last_stats(&self) -> &SearchStats {
        &self.last_stats
    }

    /// Best move for `player`, or `None` if it has no legal move.
    #[must_use]
    pub fn best_move(&mut self, board: &Board, player: Player, depth: u8) -> Option<Pos> {
        self.search(board, player, depth).best_move
    }

    /// Score every root move with `minimax` at `depth` and keep the
    /// first strictly best one.
    #[must_use]
    pub fn search(&mut self, board: &Board, player: Player, depth: u8) -> SearchResult {
        let moves = legal_moves(board, player);

        let result = if self.num_threads > 1 && moves.len() > 1 {
            self.search_parallel(board, player, depth, &moves)
        } else {
            self.search_sequential(board, player, depth, &moves)
        };

        self.last_stats = result.stats.clone();
        result
    }

    /// Minimax value of `board` with `player` to move, scored for
    /// `maximizer`. Total over every reachable board.
    #[must_use]
    pub fn minimax(
        &self,
        board: &Board,
        depth: u8,
        player: Player,
        maximizer: Player,
        alpha: i32,
        beta: i32,
    ) -> i32 {
        Worker::new(&self.evaluator, maximizer).minimax(board, depth, player, alpha, beta)
    }

    fn search_sequential(
        &self,
        board: &Board,
        player: Player,
        depth: u8,
        moves: &[Pos],
    ) -> SearchResult {
        let mut worker = Worker::new(&self.evaluator, player);
        let mut best_move = None;
        let mut best_score = -INF;
        let mut alpha = -INF;

        for &mv in moves {
            let child = apply_move(board, mv, player);
            let score = worker.minimax(&child, depth, player.opponent(), alpha, INF);
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_score);
        }

        SearchResult {
            best_move,
            score: best_score,
            depth,
            stats: worker.stats,
        }
    }

    /// Root moves are dealt round-robin to the workers. Scores come back
    /// exact (full window), so picking the first strictly best in scan
    /// order selects the same move as the sequential search.
    fn search_parallel(
        &self,
        board: &Board,
        player: Player,
        depth: u8,
        moves: &[Pos],
    ) -> SearchResult {
        let num_threads = self.num_threads.min(moves.len());
        let evaluator = &self.evaluator;

        let per_worker: Vec<(Vec<(usize, i32)>, SearchStats)> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..num_threads)
                .map(|thread_id| {
                    scope.spawn(move || {
                        let mut worker = Worker::new(evaluator, player);
                        let scores: Vec<(usize, i32)> = moves
                            .iter()
                            .enumerate()
                            .skip(thread_id)
                            .step_by(num_threads)
                            .map(|(idx, &mv)| {
                                let child = apply_move(board, mv, player);
                                let score =
                                    worker.minimax(&child, depth, player.opponent(), -INF, INF);
                                (idx, score)
                            })
                            .collect();
                        (scores, worker.stats)
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(result) => result,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        });

        let mut scores = vec![-INF; moves.len()];
        let mut stats = SearchStats::default();
        for (worker_scores, worker_stats) in &per_worker {
            stats.merge(worker_stats);
            for &(idx, score) in worker_scores {
                scores[idx] = score;
            }
        }

        let mut best_move = None;
        let mut best_score = -INF;
        for (&mv, &score) in moves.iter().zip(&scores) {
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        SearchResult {
            best_move,
            score: best_score,
            depth,
            stats,
        }
    }
}
