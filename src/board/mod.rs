//! Board representation for Othello

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// The 8 unit vectors scanned outward from a cell, as (dcol, drow).
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The four corner cells.
pub const CORNERS: [Pos; 4] = [
    Pos { col: 0, row: 0 },
    Pos { col: 7, row: 0 },
    Pos { col: 0, row: 7 },
    Pos { col: 7, row: 7 },
];

/// Side to move. Black moves first and counts as +1, White as -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// +1 for Black, -1 for White
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Player::Black => 1,
            Player::White => -1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }
}

impl std::ops::Neg for Player {
    type Output = Player;

    fn neg(self) -> Player {
        self.opponent()
    }
}

/// Occupancy of a single square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Numeric value of the cell: 0, +1 or -1
    #[inline]
    pub fn value(self) -> i32 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => -1,
        }
    }

    /// Owner of the disk, `None` for an empty square
    #[inline]
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    #[inline]
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl PartialEq<Player> for Cell {
    #[inline]
    fn eq(&self, other: &Player) -> bool {
        *self == Cell::from(*other)
    }
}

/// Square on the board, addressed as (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub col: u8,
    pub row: u8,
}

impl Pos {
    #[inline]
    pub fn new(col: u8, row: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { col, row }
    }

    /// Checked constructor for untrusted input such as pointer coordinates
    #[inline]
    pub fn try_new(col: i32, row: i32) -> Option<Self> {
        Self::is_valid(col, row).then(|| Self::new(col as u8, row as u8))
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            col: (idx % BOARD_SIZE) as u8,
            row: (idx / BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(col: i32, row: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Neighbouring square one step along `dir`, or `None` off the board
    #[inline]
    pub fn step(self, (dc, dr): (i8, i8)) -> Option<Pos> {
        Pos::try_new(self.col as i32 + dc as i32, self.row as i32 + dr as i32)
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// Row-major: the same order legal moves are generated in.
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
