//! The 3×3 board, stored as one occupancy `BitBoard` per mark.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{Cell, Mark, MoveError};
use crate::config::{BOARD_SIZE, WIN_LINE_MASKS};

type BB = BitBoard<u16, BOARD_SIZE>;

/// Board snapshot owned by the driver. Cells are set once and only cleared
/// by [`Board::clear`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    x: BB,
    o: BB,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            x: BB::new(),
            o: BB::new(),
        }
    }

    /// Build a board from a grid of cells, indexed `[row][col]`.
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Board::new();
        for (r, row) in cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let idx = 1u16 << (r * BOARD_SIZE + c);
                match cell {
                    Cell::X => board.x = board.x | BB::from_raw(idx),
                    Cell::O => board.o = board.o | BB::from_raw(idx),
                    Cell::Empty => {}
                }
            }
        }
        board
    }

    /// Export the board as a grid of cells, indexed `[row][col]`.
    pub fn cells(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        core::array::from_fn(|r| core::array::from_fn(|c| self.cell_unchecked(r, c)))
    }

    fn cell_unchecked(&self, row: usize, col: usize) -> Cell {
        if self.x.get(row, col).unwrap_or(false) {
            Cell::X
        } else if self.o.get(row, col).unwrap_or(false) {
            Cell::O
        } else {
            Cell::Empty
        }
    }

    /// Cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        let is_x = self.x.get(row, col)?;
        let is_o = self.o.get(row, col)?;
        Ok(match (is_x, is_o) {
            (true, _) => Cell::X,
            (_, true) => Cell::O,
            _ => Cell::Empty,
        })
    }

    /// Place `mark` at (row, col). Rejects off-board coordinates and
    /// occupied cells; never overwrites.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), MoveError> {
        if !self.get(row, col)?.is_empty() {
            return Err(MoveError::Occupied { row, col });
        }
        match mark {
            Mark::X => self.x.set(row, col)?,
            Mark::O => self.o.set(row, col)?,
        }
        Ok(())
    }

    /// Copy of this board with `mark` placed at (row, col).
    pub fn with_move(&self, row: usize, col: usize, mark: Mark) -> Result<Board, MoveError> {
        let mut next = *self;
        next.place(row, col, mark)?;
        Ok(next)
    }

    /// Remove every mark.
    pub fn clear(&mut self) {
        self.x.clear_all();
        self.o.clear_all();
    }

    /// Occupancy of a single mark.
    pub fn marks(&self, mark: Mark) -> BB {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Occupancy of both marks.
    pub fn occupied(&self) -> BB {
        self.x | self.o
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> {
        (!self.occupied()).iter_set_bits()
    }

    pub fn empty_count(&self) -> usize {
        BOARD_SIZE * BOARD_SIZE - self.occupied().count_ones()
    }

    /// Returns `true` when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// Returns `true` when `mark` holds any complete row, column or diagonal.
    pub fn has_line(&self, mark: Mark) -> bool {
        let marks = self.marks(mark);
        WIN_LINE_MASKS
            .iter()
            .any(|&line| marks.contains(&BB::from_raw(line)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {}  ", (b'A' + c as u8) as char)?;
        }
        writeln!(f)?;
        for r in 0..BOARD_SIZE {
            write!(f, "{} ", r + 1)?;
            for c in 0..BOARD_SIZE {
                let ch = match self.cell_unchecked(r, c) {
                    Cell::X => 'X',
                    Cell::O => 'O',
                    Cell::Empty => ' ',
                };
                write!(f, " {} ", ch)?;
                if c + 1 < BOARD_SIZE {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if r + 1 < BOARD_SIZE {
                writeln!(f, "  ---+---+---")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board {{ x: {:?}, o: {:?} }}", self.x, self.o)
    }
}
