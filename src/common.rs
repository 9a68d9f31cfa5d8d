//! Common types for Tic Tac Toe: marks, cells and move errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// One of the two symbols a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Contents of a single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// The mark occupying this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// Errors returned when a move cannot be made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinates outside the 0..3 range.
    OutOfBounds { row: usize, col: usize },
    /// The target cell already holds a mark.
    Occupied { row: usize, col: usize },
    /// The computer opponent was asked to move on a full board.
    NoEmptyCell,
    /// The round has finished and must be reset before further moves.
    GameOver,
    /// A human move arrived while the computer is due, or vice versa.
    NotYourTurn,
    /// The player stopped providing moves (input closed or quit).
    Abandoned,
}

impl From<BitBoardError> for MoveError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => MoveError::OutOfBounds { row, col },
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is off the board", row, col)
            }
            MoveError::Occupied { row, col } => {
                write!(f, "Cell ({}, {}) is already taken", row, col)
            }
            MoveError::NoEmptyCell => write!(f, "No empty cell left to play"),
            MoveError::GameOver => write!(f, "The round is over"),
            MoveError::NotYourTurn => write!(f, "It is not your turn"),
            MoveError::Abandoned => write!(f, "Player abandoned the game"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
