use super::{Cell, Letter};
use std::fmt;

/// Orientation of a word on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// The perpendicular direction
    pub fn cross(self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }

    /// (row, col) step for one position along this direction
    pub fn delta(self) -> (usize, usize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
        }
    }

    pub fn both() -> [Direction; 2] {
        [Direction::Horizontal, Direction::Vertical]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "H"),
            Direction::Vertical => write!(f, "V"),
        }
    }
}

/// A tile newly placed on the board in this move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedTile {
    pub row: usize,
    pub col: usize,
    pub letter: Letter,
    pub is_blank: bool,
}

impl PlacedTile {
    pub fn new(row: usize, col: usize, letter: Letter, is_blank: bool) -> PlacedTile {
        PlacedTile {
            row,
            col,
            letter,
            is_blank,
        }
    }

    /// The board cell this tile turns into.
    pub fn cell(&self) -> Cell {
        Cell::occupied(self.letter, self.is_blank)
    }

    /// Base value of the tile; blanks are worth 0.
    pub fn points(&self) -> u32 {
        self.cell().points()
    }
}
