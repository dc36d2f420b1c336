//! Move application with disk flipping

use crate::board::{Board, Cell, Player, Pos, DIRECTIONS};

use super::legal::flips_in_direction;

/// Opponent disks that a move by `player` at `pos` would flip.
///
/// Returns an empty vector when `pos` is occupied or the move brackets
/// nothing. Positions are grouped by direction, nearest first.
pub fn flipped_cells(board: &Board, pos: Pos, player: Player) -> Vec<Pos> {
    let mut flipped = Vec::new();
    if !board.is_empty(pos) {
        return flipped;
    }

    for &dir in &DIRECTIONS {
        if !flips_in_direction(board, pos, dir, player) {
            continue;
        }
        // flips_in_direction guarantees the walk ends on our own disk
        let mut cur = pos.step(dir);
        while let Some(p) = cur {
            if board.get(p) == player {
                break;
            }
            flipped.push(p);
            cur = p.step(dir);
        }
    }

    flipped
}

/// Play a move in place.
///
/// Returns the number of flipped disks. A move on an occupied square, or
/// one that flips nothing, leaves the board untouched and returns 0.
pub fn make_move(board: &mut Board, pos: Pos, player: Player) -> usize {
    let flipped = flipped_cells(board, pos, player);
    if flipped.is_empty() {
        return 0;
    }

    let disk = Cell::from(player);
    for &p in &flipped {
        board.set(p, disk);
    }
    board.set(pos, disk);
    flipped.len()
}

/// Board after `player` moves at `pos`. An illegal move yields an
/// unchanged copy.
#[must_use]
pub fn apply_move(board: &Board, pos: Pos, player: Player) -> Board {
    let mut next = *board;
    make_move(&mut next, pos, player);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::legal_moves;
    use proptest::prelude::*;

    #[test]
    fn test_apply_opening_move() {
        let board = Board::initial();
        let next = apply_move(&board, Pos::new(2, 3), Player::White);

        assert_eq!(next.get(Pos::new(2, 3)), Cell::White);
        assert_eq!(next.get(Pos::new(3, 3)), Cell::White);
        assert_eq!(next.count(Player::White), 4);
        assert_eq!(next.count(Player::Black), 1);
    }

    #[test]
    fn test_apply_does_not_touch_input() {
        let board = Board::initial();
        let _ = apply_move(&board, Pos::new(4, 2), Player::Black);
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn test_flipped_cells_opening() {
        let board = Board::initial();
        assert_eq!(
            flipped_cells(&board, Pos::new(4, 2), Player::Black),
            vec![Pos::new(4, 3)]
        );
    }

    #[test]
    fn test_illegal_move_is_noop() {
        let board = Board::initial();
        // Empty but flips nothing
        assert_eq!(apply_move(&board, Pos::new(0, 0), Player::Black), board);
        // Occupied
        assert_eq!(apply_move(&board, Pos::new(3, 3), Player::White), board);

        let mut in_place = board;
        assert_eq!(make_move(&mut in_place, Pos::new(0, 0), Player::Black), 0);
        assert_eq!(in_place, board);
    }

    #[test]
    fn test_multi_direction_flip() {
        // Black at a1 brackets along the row and the diagonal
        let board: Board = "
            .OOX....
            .O......
            ..X.....
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();

        let next = apply_move(&board, Pos::new(0, 0), Player::Black);
        assert_eq!(next.count(Player::Black), 6);
        // b2 sits on the diagonal, b1..c1 on the row
        for p in [Pos::new(1, 0), Pos::new(2, 0), Pos::new(1, 1)] {
            assert_eq!(next.get(p), Cell::Black);
        }
        assert_eq!(next.count(Player::White), 0);
    }

    #[test]
    fn test_only_bracketed_run_flips() {
        // The run towards the edge has no closing disk and must stay White
        let board: Board = "
            ........
            ........
            ........
            OOO.OX..
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();

        let next = apply_move(&board, Pos::new(3, 3), Player::Black);
        assert_eq!(next.get(Pos::new(4, 3)), Cell::Black);
        for col in 0..3 {
            assert_eq!(next.get(Pos::new(col, 3)), Cell::White);
        }
    }

    #[test]
    fn test_every_legal_move_flips() {
        let board = Board::initial();
        for player in [Player::Black, Player::White] {
            for pos in legal_moves(&board, player) {
                let next = apply_move(&board, pos, player);
                assert!(next.count(player) > board.count(player) + 1);
                assert_eq!(next.disk_count(), board.disk_count() + 1);
            }
        }
    }

    /// Random reachable position: each choice picks among the legal moves,
    /// passing when stuck.
    fn reachable(choices: &[usize]) -> (Board, Player) {
        let mut board = Board::initial();
        let mut player = Player::Black;
        for &choice in choices {
            let moves = legal_moves(&board, player);
            if !moves.is_empty() {
                board = apply_move(&board, moves[choice % moves.len()], player);
            }
            player = player.opponent();
        }
        (board, player)
    }

    proptest! {
        #[test]
        fn prop_legal_moves_are_sound(choices in prop::collection::vec(0usize..32, 0..60)) {
            let (board, player) = reachable(&choices);
            let moves = legal_moves(&board, player);
            for (pos, _) in board.cells() {
                let flips = !flipped_cells(&board, pos, player).is_empty();
                prop_assert_eq!(moves.contains(&pos), flips);
            }
        }

        #[test]
        fn prop_move_conserves_disks(choices in prop::collection::vec(0usize..32, 0..60)) {
            let (board, player) = reachable(&choices);
            for pos in legal_moves(&board, player) {
                let flipped = flipped_cells(&board, pos, player).len() as u32;
                let next = apply_move(&board, pos, player);
                prop_assert_eq!(next.disk_count(), board.disk_count() + 1);
                prop_assert_eq!(next.count(player), board.count(player) + flipped + 1);
                prop_assert_eq!(next.count(player.opponent()), board.count(player.opponent()) - flipped);
            }
        }

        #[test]
        fn prop_illegal_move_is_identity(
            choices in prop::collection::vec(0usize..32, 0..60),
            idx in 0usize..64,
        ) {
            let (board, player) = reachable(&choices);
            let pos = Pos::from_index(idx);
            if !legal_moves(&board, player).contains(&pos) {
                prop_assert_eq!(apply_move(&board, pos, player), board);
            }
        }
    }
}
