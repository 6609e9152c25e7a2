use crate::grid::{Bonus, Grid};
use crate::moves::Move;
use crate::tiles::{Cell, Direction, Letter, PlacedTile, Tile};
use crate::Error;
use std::convert::TryFrom;
use std::fmt;

/// Width and height of the board
pub const N: usize = 15;
/// The start square (row, col); the first move must cover it.
pub const CENTER: (usize, usize) = (7, 7);

type State = [[Cell; N]; N];

/// A contiguous run of occupied cells, read from the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSpan {
    /// Row of the first letter
    pub row: usize,
    /// Column of the first letter
    pub col: usize,
    pub direction: Direction,
    /// The letters, blanks shown as the letter they represent
    pub word: String,
}

impl WordSpan {
    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Board positions covered by the word, in reading order
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        let (dr, dc) = self.direction.delta();
        let (row, col) = (self.row, self.col);
        (0..self.len()).map(move |i| (row + i * dr, col + i * dc))
    }
}

/// Display the board state as 15 lines of 15 squares.
/// Empty squares show as ".", blanks as lowercase letters.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

/// Represents the state of a Scrabble board.
/// * A grid of 15x15 squares with possible letter/word bonus,
/// * The tiles placed on it in earlier turns.
///
/// The board is only changed by [`play_move`](Board::play_move); search and
/// validation work on borrowed boards and scratch copies.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Board {
    grid: Grid,
    cells: State,
}

impl Board {
    /// Create a new empty board with the standard bonus layout.
    #[must_use]
    pub fn new() -> Board {
        Board::default()
    }

    /// Parse board state from a list of strings.
    /// The list must contain 15 rows of 15 characters.
    /// Uppercase letters are regular tiles, lowercase letters are blanks,
    /// `.` or space is an empty square.
    /// ## Errors
    /// If the list of strings has wrong dimensions or cannot be parsed as rows.
    ///
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Board, Error};
    /// let mut state = vec!["..............."; 15];
    /// state[7] = ".......CAt.....";
    /// let board = Board::default().with_state_from_strings(&state)?;
    /// assert!(board.is_occupied(7, 9));
    /// assert!(!board.is_first_move());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn state_from_strings<S: AsRef<str>>(rows: &[S]) -> Result<State, Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut state = [[Cell::Empty; N]; N];
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let cells = row
                .chars()
                .map(Cell::try_from)
                .collect::<Result<Vec<Cell>, Error>>()?;
            if cells.len() != N {
                return Err(Error::InvalidRowLength(String::from(row), cells.len()));
            }
            state[i].copy_from_slice(&cells);
        }
        Ok(state)
    }

    /// Set board state from list of strings
    pub fn set_state_from_strings<S: AsRef<str>>(&mut self, rows: &[S]) -> Result<(), Error> {
        self.cells = Board::state_from_strings(rows)?;
        Ok(())
    }

    /// Set board state from list of strings, and return the modified board.
    pub fn with_state_from_strings<S: AsRef<str>>(mut self, rows: &[S]) -> Result<Board, Error> {
        self.set_state_from_strings(rows)?;
        Ok(self)
    }

    /// Set a custom bonus grid, see [`Grid::from_strings`].
    pub fn set_grid_from_strings<S: AsRef<str>>(&mut self, grid: &[S]) -> Result<(), Error> {
        self.grid = Grid::from_strings(grid)?;
        Ok(())
    }

    /// Set a custom bonus grid, and return the modified board.
    pub fn with_grid_from_strings<S: AsRef<str>>(mut self, grid: &[S]) -> Result<Board, Error> {
        self.set_grid_from_strings(grid)?;
        Ok(self)
    }

    /// The board state as 15 strings of 15 characters.
    pub fn to_strings(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().map(Cell::as_char).collect())
            .collect()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell at `row`, `col`.
    /// ## Errors
    /// If the position is outside the board.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, Error> {
        self.get(row, col).ok_or(Error::OutOfBounds { row, col })
    }

    /// Check if the cell at `row`, `col` is empty.
    /// ## Errors
    /// If the position is outside the board.
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, Error> {
        self.cell_at(row, col).map(|cell| cell.is_empty())
    }

    /// Bonus of the square at `row`, `col`.
    /// ## Errors
    /// If the position is outside the board.
    pub fn bonus_at(&self, row: usize, col: usize) -> Result<Bonus, Error> {
        self.grid.bonus_at(row, col)
    }

    /// Cell at `row`, `col`, `None` outside the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < N && col < N {
            Some(self.cells[row][col])
        } else {
            None
        }
    }

    /// Check if a square is occupied. Positions outside the board are never occupied.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get(row, col).map_or(false, |cell| !cell.is_empty())
    }

    /// In-bounds orthogonal neighbours of a square.
    pub fn neighbours(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        let up = row.checked_sub(1).map(|r| (r, col));
        let down = Some((row + 1, col)).filter(|&(r, _)| r < N);
        let left = col.checked_sub(1).map(|c| (row, c));
        let right = Some((row, col + 1)).filter(|&(_, c)| c < N);
        up.into_iter().chain(down).chain(left).chain(right)
    }

    /// Check if any orthogonal neighbour of the square is occupied.
    pub fn has_adjacent_tile(&self, row: usize, col: usize) -> bool {
        Board::neighbours(row, col).any(|(r, c)| self.is_occupied(r, c))
    }

    /// Number of occupied squares
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Check if no tile has been played yet.
    pub fn is_first_move(&self) -> bool {
        self.cells.iter().flatten().all(Cell::is_empty)
    }

    /// Letters of all tiles on the board, blanks included as the letter they show.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.cells.iter().flatten().filter_map(Cell::letter)
    }

    /// The tiles on the board as they came from a rack: a blank is a blank.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells
            .iter()
            .flatten()
            .filter_map(|cell| match cell {
                Cell::Empty => None,
                Cell::Letter(letter) => Some(Tile::Letter(*letter)),
                Cell::BlankAs(_) => Some(Tile::Blank),
            })
    }

    /// Cells on the board that hold a blank
    pub fn blank_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_blank()).count()
    }

    /// Commit the new tiles of `mv` to the board.
    /// ## Errors
    /// If a tile falls outside the board or on an occupied square.
    /// The board is left unchanged on error.
    pub fn play_move(&mut self, mv: &Move) -> Result<(), Error> {
        self.place_tiles(&mv.tiles)
    }

    /// Place `tiles` on empty squares.
    /// ## Errors
    /// [`TileReplaceError`](Error::TileReplaceError) when a square is already taken
    /// (also by an earlier tile of the same list), or
    /// [`OutOfBounds`](Error::OutOfBounds). The board is left unchanged on error.
    /// ## Examples
    /// ```
    /// # use std::convert::TryFrom;
    /// use scrabble_solver::{Board, Error, Letter, PlacedTile};
    /// let mut board = Board::default();
    /// let a = Letter::try_from('A')?;
    /// board.place_tiles(&[PlacedTile::new(7, 7, a, false)])?;
    /// assert!(board.place_tiles(&[PlacedTile::new(7, 7, a, false)]).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn place_tiles(&mut self, tiles: &[PlacedTile]) -> Result<(), Error> {
        let mut next = self.cells;
        for tile in tiles {
            let (row, col) = (tile.row, tile.col);
            if row >= N || col >= N {
                return Err(Error::OutOfBounds { row, col });
            }
            if !next[row][col].is_empty() {
                return Err(Error::TileReplaceError { row, col });
            }
            next[row][col] = tile.cell();
        }
        self.cells = next;
        Ok(())
    }

    /// A scratch copy of the board with `tiles` applied.
    /// Tiles outside the board are skipped; the copy is for trying out placements.
    pub fn with_tiles(&self, tiles: &[PlacedTile]) -> Board {
        let mut scratch = self.clone();
        for tile in tiles.iter().filter(|t| t.row < N && t.col < N) {
            scratch.cells[tile.row][tile.col] = tile.cell();
        }
        scratch
    }

    /// Step one square from `row`, `col` along `direction`, forward or backward.
    fn step(row: usize, col: usize, direction: Direction, forward: bool) -> Option<(usize, usize)> {
        let (dr, dc) = direction.delta();
        let (r, c) = if forward {
            (row + dr, col + dc)
        } else {
            (row.checked_sub(dr)?, col.checked_sub(dc)?)
        };
        if r < N && c < N {
            Some((r, c))
        } else {
            None
        }
    }

    /// Extract the word running through `row`, `col` in `direction`.
    ///
    /// Walks back while the previous square is occupied, then reads forward
    /// while squares remain occupied. Returns `None` for an empty square; a
    /// lone tile gives a span of length 1.
    pub fn word_at(&self, row: usize, col: usize, direction: Direction) -> Option<WordSpan> {
        if !self.is_occupied(row, col) {
            return None;
        }
        let (mut r, mut c) = (row, col);
        while let Some((pr, pc)) = Board::step(r, c, direction, false) {
            if !self.is_occupied(pr, pc) {
                break;
            }
            r = pr;
            c = pc;
        }
        let (start_row, start_col) = (r, c);
        let mut word = String::new();
        let mut pos = Some((r, c));
        while let Some((r, c)) = pos {
            match self.cells[r][c].letter() {
                Some(letter) => word.push(letter.as_char()),
                None => break,
            }
            pos = Board::step(r, c, direction, true);
        }
        Some(WordSpan {
            row: start_row,
            col: start_col,
            direction,
            word,
        })
    }

    /// Letters on the board directly before and after `row`, `col` in `direction`,
    /// up to the first empty square each way.
    pub fn letters_around(&self, row: usize, col: usize, direction: Direction) -> Vec<Letter> {
        let mut letters = Vec::new();
        for &forward in &[false, true] {
            let mut pos = Board::step(row, col, direction, forward);
            while let Some((r, c)) = pos {
                match self.cells[r][c].letter() {
                    Some(letter) => letters.push(letter),
                    None => break,
                }
                pos = Board::step(r, c, direction, forward);
            }
        }
        letters
    }

    /// All words of two or more letters currently on the board.
    pub fn words(&self) -> Vec<WordSpan> {
        let mut words = Vec::new();
        for direction in Direction::both().iter().copied() {
            for row in 0..N {
                for col in 0..N {
                    let starts_word = self.is_occupied(row, col)
                        && Board::step(row, col, direction, false)
                            .map_or(true, |(r, c)| !self.is_occupied(r, c));
                    if !starts_word {
                        continue;
                    }
                    if let Some(span) = self.word_at(row, col, direction) {
                        if span.len() > 1 {
                            words.push(span);
                        }
                    }
                }
            }
        }
        words
    }
}
