//! Move pickers: anything that can choose a move for a side
//!
//! The AI engine and a uniformly random baseline both implement
//! [`MovePicker`], so drivers can pit any two against each other.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Player, Pos};
use crate::engine::AIEngine;
use crate::rules::legal_moves;

/// Chooses moves for one side of a game.
pub trait MovePicker {
    /// Pick a legal move for `player`, or `None` to pass when it has none.
    fn pick_move(&mut self, board: &Board, player: Player) -> Option<Pos>;

    /// Short label for logs and reports.
    fn name(&self) -> &str;
}

impl MovePicker for AIEngine {
    fn pick_move(&mut self, board: &Board, player: Player) -> Option<Pos> {
        self.best_move(board, player)
    }

    fn name(&self) -> &str {
        "AI"
    }
}

/// Plays a uniformly random legal move.
///
/// Useful as a baseline: any real engine should easily beat it.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    /// Random player seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible random player.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePicker for RandomPlayer {
    fn pick_move(&mut self, board: &Board, player: Player) -> Option<Pos> {
        legal_moves(board, player).choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    #[test]
    fn test_random_move_is_legal() {
        let mut player = RandomPlayer::with_seed(7);
        let board = Board::initial();
        for _ in 0..20 {
            let mv = player.pick_move(&board, Player::Black).unwrap();
            assert!(legal_moves(&board, Player::Black).contains(&mv));
        }
    }

    #[test]
    fn test_random_passes_without_moves() {
        let mut player = RandomPlayer::with_seed(7);
        assert_eq!(player.pick_move(&Board::empty(), Player::White), None);
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::initial();
        let mut a = RandomPlayer::with_seed(42);
        let mut b = RandomPlayer::with_seed(42);
        for _ in 0..10 {
            assert_eq!(
                a.pick_move(&board, Player::White),
                b.pick_move(&board, Player::White)
            );
        }
    }

    #[test]
    fn test_engine_as_picker() {
        let mut engine = AIEngine::with_config(EngineConfig {
            depth: 1,
            ..EngineConfig::default()
        });
        let picker: &mut dyn MovePicker = &mut engine;
        assert_eq!(picker.name(), "AI");
        assert!(picker.pick_move(&Board::initial(), Player::Black).is_some());
    }
}
