use super::Letter;
use crate::error::Error;
use std::convert::TryFrom;
use std::fmt;

/// A square on the board that is either empty, holds a letter tile,
/// or holds a blank standing in for a letter.
///
/// In string form a regular tile is an uppercase letter, a blank is the
/// lowercase letter it represents, and an empty square is `.` (a space is
/// accepted when parsing).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Letter(Letter),
    BlankAs(Letter),
}

impl Cell {
    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The letter shown on the square, also for a blank.
    pub fn letter(&self) -> Option<Letter> {
        match self {
            Cell::Empty => None,
            Cell::Letter(letter) | Cell::BlankAs(letter) => Some(*letter),
        }
    }

    /// Check if the cell holds a blank.
    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::BlankAs(_))
    }

    /// Base value of the tile in the cell. Blanks and empty cells are worth 0.
    pub fn points(&self) -> u32 {
        match self {
            Cell::Letter(letter) => letter.points(),
            Cell::Empty | Cell::BlankAs(_) => 0,
        }
    }

    /// Cell holding `letter`, as a blank if `is_blank`.
    pub fn occupied(letter: Letter, is_blank: bool) -> Cell {
        if is_blank {
            Cell::BlankAs(letter)
        } else {
            Cell::Letter(letter)
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Letter(letter) => letter.as_char(),
            Cell::BlankAs(letter) => letter.as_char().to_ascii_lowercase(),
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '.' | ' ' => Ok(Cell::Empty),
            'A'..='Z' => Letter::try_from(ch).map(Cell::Letter),
            'a'..='z' => Letter::try_from(ch).map(Cell::BlankAs),
            _ => Err(Error::InvalidLetter(ch)),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
