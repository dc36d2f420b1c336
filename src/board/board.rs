//! Board structure: a plain 8x8 grid copied by value

use std::fmt;
use std::str::FromStr;

use super::{Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS};
use crate::error::Error;

/// Game board.
///
/// A `Copy` value type: exploring a hypothetical move means copying the
/// board and mutating the copy, so no two search branches ever share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Cells indexed `[row][col]`
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Empty board with no disks
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard opening: Black on d4/e5, White on e4/d5
    pub fn initial() -> Self {
        let mut board = Self::empty();
        let start = (BOARD_SIZE / 2 - 1) as u8;
        board.set(Pos::new(start, start), Cell::Black);
        board.set(Pos::new(start + 1, start + 1), Cell::Black);
        board.set(Pos::new(start + 1, start), Cell::White);
        board.set(Pos::new(start, start + 1), Cell::White);
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    #[inline]
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// All squares with their contents, in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        (0..TOTAL_CELLS).map(|idx| {
            let pos = Pos::from_index(idx);
            (pos, self.get(pos))
        })
    }

    /// Number of disks owned by `player`
    pub fn count(&self, player: Player) -> u32 {
        self.cells().filter(|&(_, cell)| cell == player).count() as u32
    }

    pub fn empty_count(&self) -> u32 {
        self.cells().filter(|(_, cell)| cell.is_empty()).count() as u32
    }

    /// Total disks on board
    pub fn disk_count(&self) -> u32 {
        TOTAL_CELLS as u32 - self.empty_count()
    }

    /// Sum of all cell values (Black +1, White -1)
    pub fn material(&self) -> i32 {
        self.cells().map(|(_, cell)| cell.value()).sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

/// Rows top to bottom, `X` Black, `O` White, `.` empty
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let symbol = match self.get(Pos::new(col, row)) {
                    Cell::Empty => '.',
                    Cell::Black => 'X',
                    Cell::White => 'O',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the `Display` format. Whitespace is ignored.
impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != TOTAL_CELLS {
            return Err(Error::InvalidBoardLength {
                expected: TOTAL_CELLS,
                got: symbols.len(),
            });
        }

        let mut board = Board::empty();
        for (idx, &symbol) in symbols.iter().enumerate() {
            let cell = match symbol {
                '.' | '-' => Cell::Empty,
                'X' | 'x' | 'B' | 'b' => Cell::Black,
                'O' | 'o' | 'W' | 'w' => Cell::White,
                other => {
                    return Err(Error::InvalidCellCharacter {
                        character: other,
                        position: idx,
                    })
                }
            };
            board.set(Pos::from_index(idx), cell);
        }
        Ok(board)
    }
}
