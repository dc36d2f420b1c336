//! Staged heuristic evaluation for Othello positions
//!
//! The score combines five terms, each a difference between the
//! perspective player ("max") and the opponent ("min"):
//! - Mobility: number of legal moves
//! - Parity: number of disks
//! - Corners: corners owned
//! - Corner closeness: disks next to corners that are still open
//! - Stability: disks no single line can flip
//!
//! Weights depend on the game stage, see [`Stage`].

use crate::board::{Board, Cell, Player, Pos, CORNERS, DIRECTIONS};
use crate::rules::legal_moves;

use super::weights::{Stage, Weights};
use super::Evaluator;

/// The three squares touching each corner, in `CORNERS` order.
const CORNER_NEIGHBOURS: [[Pos; 3]; 4] = [
    [Pos { col: 0, row: 1 }, Pos { col: 1, row: 0 }, Pos { col: 1, row: 1 }],
    [Pos { col: 6, row: 0 }, Pos { col: 7, row: 1 }, Pos { col: 6, row: 1 }],
    [Pos { col: 0, row: 6 }, Pos { col: 1, row: 7 }, Pos { col: 1, row: 6 }],
    [Pos { col: 6, row: 7 }, Pos { col: 7, row: 6 }, Pos { col: 6, row: 6 }],
];

/// Five-term evaluator with weights chosen by game stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct StagedHeuristic;

/// Per-term breakdown, already multiplied by the stage weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakdown {
    pub stage: Stage,
    pub mobility: i32,
    pub parity: i32,
    pub corners: i32,
    pub corner_closeness: i32,
    pub stability: i32,
}

impl Breakdown {
    pub fn total(&self) -> i32 {
        self.mobility + self.parity + self.corners + self.corner_closeness + self.stability
    }
}

impl StagedHeuristic {
    /// Evaluate each term separately. Positive terms favour `perspective`.
    pub fn breakdown(&self, board: &Board, perspective: Player) -> Breakdown {
        let max = perspective;
        let min = perspective.opponent();
        let stage = Stage::of(board);
        let w: Weights = stage.weights();

        let mobility = legal_moves(board, max).len() as i32 - legal_moves(board, min).len() as i32;
        let parity = board.count(max) as i32 - board.count(min) as i32;
        let corners = corners_owned(board, max) - corners_owned(board, min);
        // Inverted: closeness counts against the side holding it
        let closeness = corner_closeness(board, min) - corner_closeness(board, max);
        let stability = stable_disc_count(board, max) - stable_disc_count(board, min);

        Breakdown {
            stage,
            mobility: mobility * w.mobility,
            parity: parity * w.parity,
            corners: corners * w.corner,
            corner_closeness: closeness * w.corner_closeness,
            stability: stability * w.stability,
        }
    }
}

impl Evaluator for StagedHeuristic {
    fn evaluate(&self, board: &Board, perspective: Player) -> i32 {
        self.breakdown(board, perspective).total()
    }
}

/// Number of the four corners holding `player`'s disks
pub fn corners_owned(board: &Board, player: Player) -> i32 {
    CORNERS.iter().filter(|&&c| board.get(c) == player).count() as i32
}

/// Corner-closeness tally for `player`.
///
/// Only corners that are empty or already held by `player` are inspected.
/// Each neighbouring square adds 1 if `player` owns it and subtracts 1 if
/// the opponent does.
pub fn corner_closeness(board: &Board, player: Player) -> i32 {
    let mut closeness = 0;

    for (corner, neighbours) in CORNERS.iter().zip(CORNER_NEIGHBOURS.iter()) {
        let cell = board.get(*corner);
        if cell != Cell::Empty && cell != player {
            continue;
        }
        for &pos in neighbours {
            match board.get(pos).owner() {
                Some(owner) if owner == player => closeness += 1,
                Some(_) => closeness -= 1,
                None => {}
            }
        }
    }

    closeness
}

/// Simplified stability: along every direction, scanning outward from
/// `pos` passes only `player`'s own disks before reaching an empty square
/// or the edge. Combined multi-line flips are not considered.
pub fn is_stable_disc(board: &Board, pos: Pos, player: Player) -> bool {
    DIRECTIONS
        .iter()
        .all(|&dir| is_stable_direction(board, pos, dir, player))
}

fn is_stable_direction(board: &Board, pos: Pos, dir: (i8, i8), player: Player) -> bool {
    let mut cur = pos.step(dir);
    while let Some(p) = cur {
        match board.get(p).owner() {
            Some(owner) if owner == player => cur = p.step(dir),
            Some(_) => return false,
            None => return true,
        }
    }
    true
}

/// Number of `player`'s disks passing [`is_stable_disc`]
pub fn stable_disc_count(board: &Board, player: Player) -> i32 {
    board
        .cells()
        .filter(|&(pos, cell)| cell == player && is_stable_disc(board, pos, player))
        .count() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_initial_position_is_balanced() {
        let board = Board::initial();
        let eval = StagedHeuristic;
        assert_eq!(eval.evaluate(&board, Player::Black), 0);
        assert_eq!(eval.evaluate(&board, Player::White), 0);
    }

    #[test]
    fn test_perspective_symmetry() {
        let board = crate::rules::apply_move(&Board::initial(), Pos::new(4, 2), Player::Black);
        let eval = StagedHeuristic;
        assert_eq!(
            eval.evaluate(&board, Player::Black),
            -eval.evaluate(&board, Player::White)
        );
    }

    #[test]
    fn test_opening_move_breakdown() {
        // After Black e3: Black 4 disks, White 1
        let board = crate::rules::apply_move(&Board::initial(), Pos::new(4, 2), Player::Black);
        let b = StagedHeuristic.breakdown(&board, Player::Black);

        assert_eq!(b.stage, Stage::Opening);
        assert_eq!(b.parity, 3 * 5);
        assert_eq!(b.corners, 0);
        assert_eq!(b.corner_closeness, 0);
        let black_moves = legal_moves(&board, Player::Black).len() as i32;
        let white_moves = legal_moves(&board, Player::White).len() as i32;
        assert_eq!(b.mobility, (black_moves - white_moves) * 10);
    }

    #[test]
    fn test_corner_term() {
        let board = parse(
            "X......O
             ........
             ........
             ...XO...
             ...OX...
             ........
             ........
             X.......",
        );
        assert_eq!(corners_owned(&board, Player::Black), 2);
        assert_eq!(corners_owned(&board, Player::White), 1);
        let b = StagedHeuristic.breakdown(&board, Player::Black);
        assert_eq!(b.corners, 100);
    }

    #[test]
    fn test_corner_closeness_counts_open_corners_only() {
        // Black on b2 next to an empty a1; White on g2 next to its own h1
        let board = parse(
            ".......O
             .X....O.
             ........
             ........
             ........
             ........
             ........
             ........",
        );
        assert_eq!(corner_closeness(&board, Player::Black), 1);
        // White: b2 costs 1 at a1, g2 earns 1 at h1
        assert_eq!(corner_closeness(&board, Player::White), 0);
    }

    #[test]
    fn test_corner_closeness_sign_is_inverted() {
        // Black hugging an empty corner is penalised
        let board = parse(
            "........
             .X......
             ........
             ...XO...
             ...OX...
             ........
             ........
             ........",
        );
        let b = StagedHeuristic.breakdown(&board, Player::Black);
        assert_eq!(b.corner_closeness, (-1 - 1) * 100);
    }

    #[test]
    fn test_stability_simplified() {
        // Full first row of Black: every row disk sees only Black or edge
        // horizontally; downwards the squares are empty
        let board = parse(
            "XXXXXXXX
             ........
             ........
             ........
             ........
             ........
             ........
             ........",
        );
        assert_eq!(stable_disc_count(&board, Player::Black), 8);

        let threatened = parse(
            "XXXXXXXX
             .O......
             ........
             ........
             ........
             ........
             ........
             ........",
        );
        // a1 (diagonal), b1 (down) and c1 (diagonal) now see a White disk
        assert_eq!(stable_disc_count(&threatened, Player::Black), 5);
        assert!(!is_stable_disc(&threatened, Pos::new(0, 0), Player::Black));
        assert!(is_stable_disc(&threatened, Pos::new(3, 0), Player::Black));
        // The White disk sees Black disks above it
        assert_eq!(stable_disc_count(&threatened, Player::White), 0);
    }

    #[test]
    fn test_endgame_weights_at_sixteen_empty() {
        // 48 disks, 16 empty: stage is exactly 0.25
        let mut board = Board::empty();
        for idx in 0..48 {
            board.set(Pos::from_index(idx), Cell::Black);
        }
        let b = StagedHeuristic.breakdown(&board, Player::Black);
        assert_eq!(b.stage, Stage::Endgame);
        assert_eq!(b.parity, 48 * 25);
    }
}
