//! End-of-game detection and final scoring

use crate::board::{Board, Player};

use super::legal::has_legal_move;

/// Final result of a game, decided by disk count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// The game ends when neither side has a legal move.
pub fn is_game_over(board: &Board) -> bool {
    !has_legal_move(board, Player::Black) && !has_legal_move(board, Player::White)
}

/// Compare disk counts. Meaningful once `is_game_over` holds, but
/// callable at any point.
pub fn outcome(board: &Board) -> Outcome {
    let black = board.count(Player::Black);
    let white = board.count(Player::White);
    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Outcome::Win(Player::Black),
        std::cmp::Ordering::Less => Outcome::Win(Player::White),
        std::cmp::Ordering::Equal => Outcome::Draw,
    }
}
