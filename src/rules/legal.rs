//! Legal move generation
//!
//! A move is legal when it lands on an empty square and brackets at least
//! one run of opponent disks between itself and one of the mover's disks.

use crate::board::{Board, Player, Pos, BOARD_SIZE, DIRECTIONS};

/// Check whether placing `player` at `pos` would flip disks along `dir`.
///
/// The first step must land on an opponent disk. The scan then continues
/// until it meets one of `player`'s disks (flippable), an empty square or
/// the edge of the board (not flippable). `pos` itself is not inspected.
///
/// # Arguments
/// * `board` - Current board state
/// * `pos` - Candidate square
/// * `dir` - Unit vector (dcol, drow)
/// * `player` - Side making the move
pub fn flips_in_direction(board: &Board, pos: Pos, dir: (i8, i8), player: Player) -> bool {
    let opponent = player.opponent();

    let Some(mut cur) = pos.step(dir) else {
        return false;
    };
    if board.get(cur) != opponent {
        return false;
    }

    while let Some(next) = cur.step(dir) {
        let cell = board.get(next);
        if cell == player {
            return true;
        }
        if cell.is_empty() {
            return false;
        }
        cur = next;
    }
    false
}

/// Check if `player` may move at `pos`.
#[inline]
pub fn is_legal_move(board: &Board, pos: Pos, player: Player) -> bool {
    board.is_empty(pos)
        && DIRECTIONS
            .iter()
            .any(|&dir| flips_in_direction(board, pos, dir, player))
}

/// All legal moves for `player`, in row-major order (top to bottom,
/// left to right). Search relies on this order for tie-breaking.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Pos> {
    let mut moves = Vec::with_capacity(16);
    for row in 0..BOARD_SIZE as u8 {
        for col in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(col, row);
            if is_legal_move(board, pos, player) {
                moves.push(pos);
            }
        }
    }
    moves
}

/// Whether `player` has at least one legal move. Stops at the first hit.
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    board
        .cells()
        .any(|(pos, _)| is_legal_move(board, pos, player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_initial_moves_black() {
        let board = Board::initial();
        let moves = legal_moves(&board, Player::Black);
        assert_eq!(
            moves,
            vec![
                Pos::new(4, 2),
                Pos::new(5, 3),
                Pos::new(2, 4),
                Pos::new(3, 5),
            ]
        );
    }

    #[test]
    fn test_initial_moves_white() {
        let board = Board::initial();
        let moves = legal_moves(&board, Player::White);
        assert_eq!(
            moves,
            vec![
                Pos::new(3, 2),
                Pos::new(2, 3),
                Pos::new(5, 4),
                Pos::new(4, 5),
            ]
        );
    }

    #[test]
    fn test_moves_are_row_major() {
        let board = Board::initial();
        let moves = legal_moves(&board, Player::Black);
        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted);
    }

    #[test]
    fn test_flip_requires_adjacent_opponent() {
        let board = Board::initial();
        // d4 is Black, e4 is White
        assert!(!flips_in_direction(&board, Pos::new(2, 3), (1, 0), Player::Black));
        assert!(flips_in_direction(&board, Pos::new(2, 3), (1, 0), Player::White));
        // d5 is White, e5 is Black
        assert!(flips_in_direction(&board, Pos::new(2, 4), (1, 0), Player::Black));
        assert!(!flips_in_direction(&board, Pos::new(2, 4), (1, 0), Player::White));
    }

    #[test]
    fn test_flip_off_board_first_step() {
        let board = Board::initial();
        assert!(!flips_in_direction(&board, Pos::new(0, 0), (-1, -1), Player::Black));
    }

    #[test]
    fn test_flip_gap_invalidates_direction() {
        // X O . X on the first row: the empty gap breaks the bracket
        let board: Board = "
            .O.X....
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        assert!(!flips_in_direction(&board, Pos::new(0, 0), (1, 0), Player::Black));

        let mut closed = board;
        closed.set(Pos::new(2, 0), Cell::White);
        assert!(flips_in_direction(&closed, Pos::new(0, 0), (1, 0), Player::Black));
    }

    #[test]
    fn test_flip_runs_off_board() {
        let board: Board = "
            .OOOOOOO
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        assert!(!flips_in_direction(&board, Pos::new(0, 0), (1, 0), Player::Black));
        assert!(legal_moves(&board, Player::Black).is_empty());
    }

    #[test]
    fn test_occupied_square_is_never_legal() {
        let board = Board::initial();
        assert!(!is_legal_move(&board, Pos::new(3, 3), Player::Black));
        assert!(!is_legal_move(&board, Pos::new(3, 3), Player::White));
    }

    #[test]
    fn test_has_legal_move() {
        assert!(has_legal_move(&Board::initial(), Player::Black));
        assert!(!has_legal_move(&Board::empty(), Player::Black));
    }
}
