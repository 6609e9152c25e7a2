use crate::board::N;
use crate::Error;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

const Q: usize = 1 + N / 2;

const DEFAULT_QUARTER_BOARD: [&str; Q] = [
    "3w -- -- 2l -- -- -- 3w",
    "-- 2w -- -- -- 3l -- --",
    "-- -- 2w -- -- -- 2l --",
    "2l -- -- 2w -- -- -- 2l",
    "-- -- -- -- 2w -- -- --",
    "-- 3l -- -- -- 3l -- --",
    "-- -- 2l -- -- -- 2l --",
    "3w -- -- 2l -- -- -- ss",
];

/// The bonus of a single square on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bonus {
    #[default]
    Normal,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    /// The centre square. Scores as a double word.
    Start,
}

use Bonus::{DoubleLetter, DoubleWord, Normal, Start, TripleLetter, TripleWord};

impl Bonus {
    /// Multiplier applied to a newly placed letter on this square.
    pub fn letter_multiplier(self) -> u32 {
        match self {
            DoubleLetter => 2,
            TripleLetter => 3,
            Normal | DoubleWord | TripleWord | Start => 1,
        }
    }

    /// Multiplier applied to a word when a new tile lands on this square.
    pub fn word_multiplier(self) -> u32 {
        match self {
            DoubleWord | Start => 2,
            TripleWord => 3,
            Normal | DoubleLetter | TripleLetter => 1,
        }
    }

    /// True for the word bonus squares.
    pub fn is_word_bonus(self) -> bool {
        self.word_multiplier() > 1
    }
}

impl fmt::Display for Bonus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Normal => "--",
            Start => "ss",
            DoubleLetter => "2l",
            TripleLetter => "3l",
            DoubleWord => "2w",
            TripleWord => "3w",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Bonus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--" => Ok(Normal),
            "ss" => Ok(Start),
            "2l" => Ok(DoubleLetter),
            "3l" => Ok(TripleLetter),
            "2w" => Ok(DoubleWord),
            "3w" => Ok(TripleWord),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

type Inner = [[Bonus; N]; N];

/// Bonus grid of 15x15 squares.
///
/// A bonus square has a 2x or 3x letter bonus, or a 2x or 3x word bonus.
/// The center square at (7,7) is the "start" square, and must be used in the first turn.
/// The grid is fixed once the board is created.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid(Inner);

impl Deref for Grid {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Default for Grid {
    /// The standard Scrabble layout.
    /// ## Example
    /// ```
    /// # use scrabble_solver::{Bonus, Grid};
    /// let grid = Grid::default();
    /// assert_eq!(grid[7][7], Bonus::Start);
    /// assert_eq!(grid[0][0], Bonus::TripleWord);
    /// ```
    fn default() -> Grid {
        Grid::expand_quarter_board(&DEFAULT_QUARTER_BOARD)
    }
}

impl Grid {
    /// Create a new empty grid 15x15 cells with no bonus.
    fn empty() -> Grid {
        Grid([[Normal; N]; N])
    }

    /// Create a symmetrical board by mirroring a quarter board
    /// horizontally and vertically
    fn expand_quarter_board(qb: &[&str; Q]) -> Grid {
        let mut board = Grid::empty();
        for (i, row) in qb.iter().enumerate() {
            for (j, c) in row.split(' ').enumerate() {
                // the quarter board is a constant, every token is valid
                let val = c.parse().unwrap_or_default();
                board.0[i][j] = val;
                board.0[N - i - 1][j] = val;
                board.0[i][N - j - 1] = val;
                board.0[N - i - 1][N - j - 1] = val;
            }
        }
        board
    }

    /// Bonus at `row`, `col`.
    /// ## Errors
    /// If the position is outside the grid.
    pub fn bonus_at(&self, row: usize, col: usize) -> Result<Bonus, Error> {
        if row < N && col < N {
            Ok(self.0[row][col])
        } else {
            Err(Error::OutOfBounds { row, col })
        }
    }

    /// Get board cells as a vec of 15 strings
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|row| {
                row.iter()
                    .map(Bonus::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
    }

    /// Create a `Grid` from strings
    /// Parameter `grid` must have 15 rows, each row consisting of 15 elements joined by spaces.
    ///
    /// ## Errors
    /// If `grid` has wrong dimensions, or elements can not be parsed as a `Bonus`.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Grid, Error};
    /// let grid = Grid::default();
    /// let copy = Grid::from_strings(&grid.to_strings())?;
    /// assert_eq!(grid, copy);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Grid, Error> {
        if grid.len() != N {
            return Err(Error::InvalidRowCount(grid.len()));
        }
        let mut board = Grid::empty();
        for (i, row) in grid.iter().enumerate() {
            let cells: Vec<&str> = row.as_ref().split_whitespace().collect();
            if cells.len() != N {
                return Err(Error::InvalidRowLength(
                    String::from(row.as_ref()),
                    cells.len(),
                ));
            }
            for (j, &cell) in cells.iter().enumerate() {
                board.0[i][j] = cell.parse()?;
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    pub use super::*;

    #[test]
    fn test_grid_from_array() -> Result<(), Error> {
        let grid = Grid::default();
        let grid_as_strings = grid.to_strings();
        assert_eq!(Grid::from_strings(&grid_as_strings)?, grid);
        Ok(())
    }

    #[test]
    fn test_standard_layout() {
        let grid = Grid::default();
        assert_eq!(
            grid.to_strings()[7],
            "3w -- -- 2l -- -- -- ss -- -- -- 2l -- -- 3w"
        );
        assert_eq!(
            grid.to_strings()[1],
            "-- 2w -- -- -- 3l -- -- -- 3l -- -- -- 2w --"
        );
        let count = |bonus: Bonus| grid.iter().flatten().filter(|&&b| b == bonus).count();
        assert_eq!(count(TripleWord), 8);
        assert_eq!(count(DoubleWord), 16);
        assert_eq!(count(TripleLetter), 12);
        assert_eq!(count(DoubleLetter), 24);
        assert_eq!(count(Start), 1);
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(Start.word_multiplier(), 2);
        assert_eq!(Start.letter_multiplier(), 1);
        assert_eq!(TripleLetter.letter_multiplier(), 3);
        assert_eq!(TripleWord.word_multiplier(), 3);
        assert!(!DoubleLetter.is_word_bonus());
    }

    #[test]
    fn test_bonus_out_of_bounds() {
        let grid = Grid::default();
        assert!(matches!(
            grid.bonus_at(15, 0),
            Err(Error::OutOfBounds { row: 15, col: 0 })
        ));
    }

    #[test]
    #[should_panic(expected = "GridParseError")]
    fn test_parse_error() {
        let _bonus: Bonus = "4w".parse().unwrap();
    }
}
