//! Placement validation and word extraction.
//!
//! [`Placer`] fits a candidate word around an anchor for the bots;
//! [`validate_submission`] checks an arbitrary set of tiles put down by a player.
use crate::board::{Board, CENTER, N};
use crate::dictionary::Dictionary;
use crate::moves::Move;
use crate::score::{self, WordScore};
use crate::tiles::{Direction, Letter, PlacedTile, Rack, RackCounts};
use crate::Error;
use log::trace;
use thiserror::Error;

/// The placement rule a submission breaks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("no tiles placed")]
    NoTiles,
    #[error("tiles are not in one row or column")]
    NotInLine,
    #[error("gap between tiles at row:{row}, col:{col}")]
    Gap { row: usize, col: usize },
    #[error("two tiles on row:{row}, col:{col}")]
    DuplicateCell { row: usize, col: usize },
    #[error("square row:{row}, col:{col} is already occupied")]
    CellOccupied { row: usize, col: usize },
    #[error("first word must cover the center square")]
    MissesCenter,
    #[error("first word must use at least 2 tiles")]
    TooFewTiles,
    #[error("word must connect to tiles on the board")]
    NotConnected,
    #[error("\"{0}\" is not a valid word")]
    UnknownWord(String),
    #[error("rack holds no tile for '{0}'")]
    RackMissing(Letter),
}

impl From<PlacementError> for Error {
    fn from(err: PlacementError) -> Self {
        Error::InvalidPlacement(err)
    }
}

/// Fits candidate words onto a board for one rack.
///
/// The board and rack are only read; every trial placement is checked on a
/// scratch copy of the board.
#[derive(Debug, Clone)]
pub struct Placer<'a> {
    board: &'a Board,
    dictionary: &'a Dictionary,
    counts: RackCounts,
    is_first_move: bool,
}

impl<'a> Placer<'a> {
    pub fn new(
        board: &'a Board,
        dictionary: &'a Dictionary,
        rack: &Rack,
        is_first_move: bool,
    ) -> Placer<'a> {
        Placer {
            board,
            dictionary,
            counts: rack.counts(),
            is_first_move,
        }
    }

    /// Try to place `word` in `direction` so that it covers `row`, `col`.
    ///
    /// Every offset of the word around the square is tried in turn; the first
    /// one that passes all placement rules is returned as a scored [`Move`].
    pub fn try_place(&self, word: &str, row: usize, col: usize, direction: Direction) -> Option<Move> {
        let letters: Vec<Letter> = word.bytes().map(Letter::from_ascii).collect::<Option<_>>()?;
        (0..letters.len()).find_map(|offset| self.try_offset(&letters, row, col, direction, offset))
    }

    fn try_offset(
        &self,
        letters: &[Letter],
        row: usize,
        col: usize,
        direction: Direction,
        offset: usize,
    ) -> Option<Move> {
        let (dr, dc) = direction.delta();
        let len = letters.len();
        // bounds
        let start_row = row.checked_sub(offset * dr)?;
        let start_col = col.checked_sub(offset * dc)?;
        if start_row + (len - 1) * dr >= N || start_col + (len - 1) * dc >= N {
            return None;
        }
        let position = |i: usize| (start_row + i * dr, start_col + i * dc);

        // cell compatibility
        let mut reuses_tile = false;
        for (i, &letter) in letters.iter().enumerate() {
            let (r, c) = position(i);
            if let Some(existing) = self.board.get(r, c).and_then(|cell| cell.letter()) {
                if existing != letter {
                    return None;
                }
                reuses_tile = true;
            }
        }

        // rack sufficiency
        let mut counts = self.counts;
        let mut tiles = Vec::with_capacity(len);
        for (i, &letter) in letters.iter().enumerate() {
            let (r, c) = position(i);
            if self.board.is_occupied(r, c) {
                continue;
            }
            let is_blank = counts.take(letter)?;
            tiles.push(PlacedTile::new(r, c, letter, is_blank));
        }

        if tiles.is_empty() {
            return None;
        }

        if self.is_first_move {
            let covers_center = (0..len).any(|i| position(i) == CENTER);
            if !covers_center || tiles.len() < 2 {
                return None;
            }
        } else if !reuses_tile && !tiles.iter().any(|t| self.board.has_adjacent_tile(t.row, t.col)) {
            return None;
        }

        // cross-validation on a scratch board
        let after = self.board.with_tiles(&tiles);
        // a single tile is named the way a submitted one is
        let direction = if tiles.len() == 1 {
            score::main_direction(&after, &tiles)
        } else {
            direction
        };
        let words = score::formed_words(&after, &tiles, direction);
        if let Some(bad) = words.iter().find(|w| !self.dictionary.contains(&w.word)) {
            trace!("reject {} at ({},{}) {}: {}", word_of(letters), row, col, direction, bad.word);
            return None;
        }
        let main = after.word_at(tiles[0].row, tiles[0].col, direction)?;
        let score = words
            .iter()
            .map(|span| score::score_span(&after, span, &tiles).score)
            .sum::<u32>()
            + score::bingo_bonus(tiles.len());
        Some(Move {
            word: main.word,
            row: main.row,
            col: main.col,
            direction,
            tiles,
            score,
            strategic_value: 0,
        })
    }
}

fn word_of(letters: &[Letter]) -> String {
    letters.iter().map(|l| l.as_char()).collect()
}

/// A validated player placement: the move and its per-word breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub mv: Move,
    pub words: Vec<WordScore>,
}

/// Validate tiles put down by a player, the way a human turn is checked:
/// in one line without gaps, supplied by the rack, covering the center on the
/// first move or touching existing tiles later, and forming only valid words.
/// ## Errors
/// [`Error::InvalidPlacement`] naming the broken rule, or
/// [`Error::OutOfBounds`] for a tile outside the board.
/// ## Examples
/// ```
/// # use std::convert::TryFrom;
/// use scrabble_solver::{validate_submission, Board, Dictionary, Error, Letter, PlacedTile, Rack};
/// let board = Board::default();
/// let dictionary = Dictionary::from_words(&["HI"])?;
/// let rack = Rack::try_from("HIXXXXX")?;
/// let tiles = [
///     PlacedTile::new(7, 7, Letter::try_from('H')?, false),
///     PlacedTile::new(7, 8, Letter::try_from('I')?, false),
/// ];
/// let submission = validate_submission(&board, &tiles, &rack, &dictionary, true)?;
/// assert_eq!(submission.mv.word, "HI");
/// assert_eq!(submission.mv.score, 10);
/// # Ok::<(), Error>(())
/// ```
pub fn validate_submission(
    board: &Board,
    tiles: &[PlacedTile],
    rack: &Rack,
    dictionary: &Dictionary,
    is_first_move: bool,
) -> Result<Submission, Error> {
    if tiles.is_empty() {
        return Err(PlacementError::NoTiles.into());
    }
    for (i, tile) in tiles.iter().enumerate() {
        let (row, col) = (tile.row, tile.col);
        if !board.is_empty(row, col)? {
            return Err(PlacementError::CellOccupied { row, col }.into());
        }
        if tiles[..i].iter().any(|t| t.row == row && t.col == col) {
            return Err(PlacementError::DuplicateCell { row, col }.into());
        }
    }

    let same_row = tiles.iter().all(|t| t.row == tiles[0].row);
    let same_col = tiles.iter().all(|t| t.col == tiles[0].col);
    if !same_row && !same_col {
        return Err(PlacementError::NotInLine.into());
    }

    let after = board.with_tiles(tiles);
    let direction = score::main_direction(&after, tiles);
    let (first, last) = match direction {
        Direction::Horizontal => (
            tiles.iter().map(|t| t.col).min(),
            tiles.iter().map(|t| t.col).max(),
        ),
        Direction::Vertical => (
            tiles.iter().map(|t| t.row).min(),
            tiles.iter().map(|t| t.row).max(),
        ),
    };
    if let (Some(first), Some(last)) = (first, last) {
        for i in first..=last {
            let (row, col) = match direction {
                Direction::Horizontal => (tiles[0].row, i),
                Direction::Vertical => (i, tiles[0].col),
            };
            if !after.is_occupied(row, col) {
                return Err(PlacementError::Gap { row, col }.into());
            }
        }
    }

    let mut counts = rack.counts();
    for tile in tiles {
        if !counts.take_tile(tile.letter, tile.is_blank) {
            return Err(PlacementError::RackMissing(tile.letter).into());
        }
    }

    if is_first_move {
        if !tiles.iter().any(|t| (t.row, t.col) == CENTER) {
            return Err(PlacementError::MissesCenter.into());
        }
        if tiles.len() < 2 {
            return Err(PlacementError::TooFewTiles.into());
        }
    } else if !tiles.iter().any(|t| board.has_adjacent_tile(t.row, t.col)) {
        return Err(PlacementError::NotConnected.into());
    }

    let spans = score::formed_words(&after, tiles, direction);
    if let Some(bad) = spans.iter().find(|w| !dictionary.contains(&w.word)) {
        return Err(PlacementError::UnknownWord(bad.word.clone()).into());
    }
    let words: Vec<WordScore> = spans
        .iter()
        .map(|span| score::score_span(&after, span, tiles))
        .collect();
    let main = spans
        .first()
        .cloned()
        .or_else(|| after.word_at(tiles[0].row, tiles[0].col, direction))
        .ok_or(PlacementError::NoTiles)?;
    let score = words.iter().map(|w| w.score).sum::<u32>() + score::bingo_bonus(tiles.len());
    Ok(Submission {
        mv: Move {
            word: main.word,
            row: main.row,
            col: main.col,
            direction: main.direction,
            tiles: tiles.to_vec(),
            score,
            strategic_value: 0,
        },
        words,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    type Result<T> = std::result::Result<T, Error>;

    fn tiles_for(word: &str, row: usize, col: usize, direction: Direction) -> Vec<PlacedTile> {
        let (dr, dc) = direction.delta();
        word.chars()
            .enumerate()
            .map(|(i, ch)| {
                let letter = Letter::try_from(ch).unwrap();
                PlacedTile::new(row + i * dr, col + i * dc, letter, ch.is_ascii_lowercase())
            })
            .collect()
    }

    fn board_with_cat() -> Board {
        let mut board = Board::default();
        board
            .place_tiles(&tiles_for("CAT", 7, 7, Direction::Horizontal))
            .unwrap();
        board
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_words(&["CAT", "CATS", "AT", "TA", "SAT", "ACT", "TO", "AS"]).unwrap()
    }

    #[test]
    fn test_first_move() -> Result<()> {
        let board = Board::default();
        let dictionary = dictionary();
        let rack = Rack::try_from("CAT____")?;
        let placer = Placer::new(&board, &dictionary, &rack, true);
        let mv = placer.try_place("CAT", 7, 7, Direction::Horizontal).unwrap();
        assert_eq!(mv.word, "CAT");
        assert_eq!(mv.score, 10);
        assert_eq!(mv.tiles.len(), 3);
        assert!(mv.tiles.iter().all(|t| !t.is_blank));
        assert!(mv.tiles.iter().any(|t| (t.row, t.col) == CENTER));
        Ok(())
    }

    #[test]
    fn test_first_move_uses_blank() -> Result<()> {
        let board = Board::default();
        let dictionary = dictionary();
        let rack = Rack::try_from("CA_")?;
        let placer = Placer::new(&board, &dictionary, &rack, true);
        let mv = placer.try_place("CAT", 7, 7, Direction::Vertical).unwrap();
        let blanks: Vec<bool> = mv.tiles.iter().map(|t| t.is_blank).collect();
        assert_eq!(blanks, vec![false, false, true]);
        assert_eq!(mv.score, 8);
        Ok(())
    }

    #[test]
    fn test_hook() -> Result<()> {
        let board = board_with_cat();
        let dictionary = dictionary();
        let rack = Rack::try_from("S")?;
        let placer = Placer::new(&board, &dictionary, &rack, false);
        let mv = placer.try_place("CATS", 7, 10, Direction::Horizontal).unwrap();
        assert_eq!(mv.word, "CATS");
        assert_eq!((mv.row, mv.col), (7, 7));
        assert_eq!(mv.tiles, vec![PlacedTile::new(7, 10, Letter::try_from('S')?, false)]);
        assert_eq!(mv.score, 6);
        Ok(())
    }

    #[test]
    fn test_single_tile_names_main_word() -> Result<()> {
        // an S at (7,10) makes CATS across and SO down
        let mut board = board_with_cat();
        board.place_tiles(&tiles_for("O", 8, 10, Direction::Horizontal))?;
        let dictionary = Dictionary::from_words(&["CAT", "CATS", "SO"])?;
        let rack = Rack::try_from("S")?;
        let placer = Placer::new(&board, &dictionary, &rack, false);
        let mv = placer.try_place("SO", 7, 10, Direction::Vertical).unwrap();
        assert_eq!(mv.word, "CATS");
        assert_eq!((mv.row, mv.col, mv.direction), (7, 7, Direction::Horizontal));
        assert_eq!(mv.score, 6 + 2);
        let submission = validate_submission(&board, &mv.tiles, &rack, &dictionary, false)?;
        assert_eq!(submission.mv, mv);
        Ok(())
    }

    #[test]
    fn test_rejections() -> Result<()> {
        let board = board_with_cat();
        let dictionary = dictionary();
        let rack = Rack::try_from("SOT")?;
        let placer = Placer::new(&board, &dictionary, &rack, false);
        // conflicts with the C on the board at every offset covering (7,7)
        assert!(placer.try_place("DOG", 7, 7, Direction::Horizontal).is_none());
        // not connected
        assert!(placer.try_place("TO", 0, 0, Direction::Horizontal).is_none());
        // off the board
        assert!(placer.try_place("TO", 7, 14, Direction::Horizontal).is_none());
        // forms the invalid cross word "CS"
        assert!(placer.try_place("SO", 8, 7, Direction::Horizontal).is_none());
        Ok(())
    }

    #[test]
    fn test_first_move_needs_two_tiles() -> Result<()> {
        let board = Board::default();
        let dictionary = Dictionary::permissive();
        let rack = Rack::try_from("A")?;
        let placer = Placer::new(&board, &dictionary, &rack, true);
        assert!(placer.try_place("A", 7, 7, Direction::Horizontal).is_none());
        Ok(())
    }

    #[test]
    fn test_submission() -> Result<()> {
        let board = board_with_cat();
        let dictionary = dictionary();
        let rack = Rack::try_from("OS")?;
        // T of CAT plus O below makes "TO"
        let tiles = tiles_for("O", 8, 9, Direction::Vertical);
        let submission = validate_submission(&board, &tiles, &rack, &dictionary, false)?;
        assert_eq!(submission.mv.word, "TO");
        assert_eq!(submission.mv.direction, Direction::Vertical);
        assert_eq!(submission.words.len(), 1);
        assert_eq!(submission.mv.score, 2);
        Ok(())
    }

    #[test]
    #[should_panic(expected = "MissesCenter")]
    fn test_submission_off_center() {
        let board = Board::default();
        let rack = Rack::try_from("CAT").unwrap();
        let tiles = tiles_for("CAT", 0, 0, Direction::Horizontal);
        validate_submission(&board, &tiles, &rack, &dictionary(), true).unwrap();
    }

    #[test]
    #[should_panic(expected = "NotInLine")]
    fn test_submission_not_in_line() {
        let board = Board::default();
        let rack = Rack::try_from("AT").unwrap();
        let mut tiles = tiles_for("AT", 7, 7, Direction::Horizontal);
        tiles[1].row = 8;
        validate_submission(&board, &tiles, &rack, &dictionary(), true).unwrap();
    }

    #[test]
    #[should_panic(expected = "Gap { row: 7, col: 8 }")]
    fn test_submission_gap() {
        let board = Board::default();
        let rack = Rack::try_from("AT").unwrap();
        let mut tiles = tiles_for("AT", 7, 7, Direction::Horizontal);
        tiles[1].col = 9;
        validate_submission(&board, &tiles, &rack, &dictionary(), true).unwrap();
    }

    #[test]
    #[should_panic(expected = "RackMissing")]
    fn test_submission_rack_missing() {
        let board = Board::default();
        let rack = Rack::try_from("A_").unwrap();
        // a T is played as a regular tile, but the rack only has a blank
        let tiles = tiles_for("AT", 7, 7, Direction::Horizontal);
        validate_submission(&board, &tiles, &rack, &dictionary(), true).unwrap();
    }

    #[test]
    #[should_panic(expected = "UnknownWord(\"CATO\")")]
    fn test_submission_unknown_word() {
        let board = board_with_cat();
        let rack = Rack::try_from("O").unwrap();
        let tiles = tiles_for("O", 7, 10, Direction::Horizontal);
        validate_submission(&board, &tiles, &rack, &dictionary(), false).unwrap();
    }

    #[test]
    #[should_panic(expected = "CellOccupied")]
    fn test_submission_occupied() {
        let board = board_with_cat();
        let rack = Rack::try_from("O").unwrap();
        let tiles = tiles_for("O", 7, 7, Direction::Horizontal);
        validate_submission(&board, &tiles, &rack, &dictionary(), false).unwrap();
    }

    #[test]
    #[should_panic(expected = "NotConnected")]
    fn test_submission_not_connected() {
        let board = board_with_cat();
        let rack = Rack::try_from("AT").unwrap();
        let tiles = tiles_for("AT", 0, 0, Direction::Horizontal);
        validate_submission(&board, &tiles, &rack, &dictionary(), false).unwrap();
    }
}
