use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Player::White.opponent(), Player::Black);
    assert_eq!(-Player::Black, Player::White);
}

#[test]
fn test_player_sign_matches_cell_value() {
    assert_eq!(Player::Black.sign(), Cell::from(Player::Black).value());
    assert_eq!(Player::White.sign(), Cell::from(Player::White).value());
    assert_eq!(Cell::Empty.value(), 0);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(2, 3);
    assert_eq!(pos.col, 2);
    assert_eq!(pos.row, 3);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(2, 3);
    assert_eq!(pos.to_index(), 3 * 8 + 2);
    assert_eq!(Pos::from_index(26), pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(8, 0));
    assert!(!Pos::is_valid(0, 8));
    assert_eq!(Pos::try_new(8, 0), None);
    assert_eq!(Pos::try_new(3, 4), Some(Pos::new(3, 4)));
}

#[test]
fn test_pos_step() {
    assert_eq!(Pos::new(0, 0).step((-1, 0)), None);
    assert_eq!(Pos::new(0, 0).step((1, 1)), Some(Pos::new(1, 1)));
    assert_eq!(Pos::new(7, 7).step((0, 1)), None);
}

#[test]
fn test_pos_ordering_is_row_major() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(1, 0);
    let pos3 = Pos::new(0, 1);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
}

#[test]
fn test_pos_display() {
    assert_eq!(Pos::new(0, 0).to_string(), "a1");
    assert_eq!(Pos::new(3, 2).to_string(), "d3");
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 8);
    assert_eq!(TOTAL_CELLS, 64);
    assert_eq!(DIRECTIONS.len(), 8);
    assert!(!DIRECTIONS.contains(&(0, 0)));
}

#[test]
fn test_initial_board() {
    let board = Board::initial();
    assert_eq!(board.get(Pos::new(3, 3)), Cell::Black);
    assert_eq!(board.get(Pos::new(4, 4)), Cell::Black);
    assert_eq!(board.get(Pos::new(4, 3)), Cell::White);
    assert_eq!(board.get(Pos::new(3, 4)), Cell::White);
    assert_eq!(board.count(Player::Black), 2);
    assert_eq!(board.count(Player::White), 2);
    assert_eq!(board.disk_count(), 4);
    assert_eq!(board.empty_count(), 60);

    let occupied: Vec<Pos> = board
        .cells()
        .filter(|(_, cell)| !cell.is_empty())
        .map(|(pos, _)| pos)
        .collect();
    assert!(occupied.iter().all(|p| (3..=4).contains(&p.col) && (3..=4).contains(&p.row)));
}

#[test]
fn test_board_is_value_type() {
    let original = Board::initial();
    let mut copy = original;
    copy.set(Pos::new(0, 0), Cell::White);

    assert_eq!(original.get(Pos::new(0, 0)), Cell::Empty);
    assert_ne!(original, copy);
    assert_eq!(original, Board::initial());
}

#[test]
fn test_board_parse_roundtrip() {
    let board = Board::initial();
    let parsed: Board = board.to_string().parse().unwrap();
    assert_eq!(parsed, board);
}

#[test]
fn test_board_parse_errors() {
    assert!(matches!(
        "XO".parse::<Board>(),
        Err(crate::Error::InvalidBoardLength { got: 2, .. })
    ));

    let bad = format!("{}?", ".".repeat(63));
    assert!(matches!(
        bad.parse::<Board>(),
        Err(crate::Error::InvalidCellCharacter { character: '?', position: 63 })
    ));
}

#[test]
fn test_material() {
    let board = Board::initial();
    assert_eq!(board.material(), 0);

    let mut board = Board::empty();
    board.set(Pos::new(0, 0), Cell::Black);
    assert_eq!(board.material(), 1);
}
