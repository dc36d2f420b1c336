//! Search module for the Othello AI
//!
//! Contains:
//! - Fixed-depth minimax with alpha-beta pruning
//! - Root-parallel search over scoped threads
//! - An unpruned reference minimax for equivalence checks

pub mod alphabeta;

pub use alphabeta::{minimax_full, SearchResult, SearchStats, Searcher, INF};
