//! Scoring of placements against the bonus grid.
use crate::board::{Board, WordSpan};
use crate::grid::Bonus;
use crate::tiles::{Direction, Letter, PlacedTile, RACK_SIZE};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Flat bonus for placing all 7 rack tiles in one move
pub const BINGO_BONUS: u32 = 50;

/// Score contribution of one letter of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterScore {
    pub letter: Letter,
    /// Value of the tile; 0 for a blank
    pub base_value: u32,
    /// Value after the letter bonus, if the tile is new
    pub score: u32,
    pub is_new: bool,
}

/// Score of one word formed by a move, with its breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordScore {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub score: u32,
    pub word_multiplier: u32,
    pub has_double_word: bool,
    pub has_triple_word: bool,
    pub letters: Vec<LetterScore>,
}

/// The direction of the main word of a placement.
///
/// Tiles sharing a row are horizontal, sharing a column vertical. A single
/// tile takes the direction in which it forms a word, horizontal first.
pub fn main_direction(after: &Board, tiles: &[PlacedTile]) -> Direction {
    match tiles {
        [first, second, ..] if first.row != second.row => Direction::Vertical,
        [_, _, ..] => Direction::Horizontal,
        [tile] => {
            let forms_word = |dir| {
                after
                    .word_at(tile.row, tile.col, dir)
                    .map_or(false, |span| span.len() > 1)
            };
            if !forms_word(Direction::Horizontal) && forms_word(Direction::Vertical) {
                Direction::Vertical
            } else {
                Direction::Horizontal
            }
        }
        [] => Direction::Horizontal,
    }
}

/// All words of two or more letters formed by `tiles` on `after`, the board
/// with the tiles applied: the main word(s) first, then one perpendicular word
/// per tile where it forms one.
pub fn formed_words(after: &Board, tiles: &[PlacedTile], direction: Direction) -> Vec<WordSpan> {
    let mut words: Vec<WordSpan> = Vec::new();
    for tile in tiles {
        if let Some(span) = after.word_at(tile.row, tile.col, direction) {
            if span.len() > 1 && !words.iter().any(|w| w.row == span.row && w.col == span.col) {
                words.push(span);
            }
        }
    }
    for tile in tiles {
        if let Some(span) = after.word_at(tile.row, tile.col, direction.cross()) {
            if span.len() > 1 {
                words.push(span);
            }
        }
    }
    words
}

fn is_new(tiles: &[PlacedTile], row: usize, col: usize) -> bool {
    tiles.iter().any(|t| t.row == row && t.col == col)
}

/// Score one word on `after`; bonuses only count under newly placed tiles.
pub fn score_span(after: &Board, span: &WordSpan, tiles: &[PlacedTile]) -> WordScore {
    let grid = after.grid();
    let mut letters = Vec::with_capacity(span.len());
    let mut word_multiplier = 1;
    let mut has_double_word = false;
    let mut has_triple_word = false;
    let mut sum = 0;
    for (row, col) in span.positions() {
        let cell = after.get(row, col).unwrap_or_default();
        let base_value = cell.points();
        let new = is_new(tiles, row, col);
        let mut score = base_value;
        if new {
            let bonus = grid[row][col];
            score *= bonus.letter_multiplier();
            word_multiplier *= bonus.word_multiplier();
            match bonus {
                Bonus::DoubleWord | Bonus::Start => has_double_word = true,
                Bonus::TripleWord => has_triple_word = true,
                _ => {}
            }
        }
        sum += score;
        if let Some(letter) = cell.letter() {
            letters.push(LetterScore {
                letter,
                base_value,
                score,
                is_new: new,
            });
        }
    }
    WordScore {
        word: span.word.clone(),
        row: span.row,
        col: span.col,
        direction: span.direction,
        score: sum * word_multiplier,
        word_multiplier,
        has_double_word,
        has_triple_word,
        letters,
    }
}

/// Score every word formed by placing `tiles` on `board`.
/// `board` is the board before the move; it is not changed.
pub fn score_words(board: &Board, tiles: &[PlacedTile]) -> Vec<WordScore> {
    let after = board.with_tiles(tiles);
    let direction = main_direction(&after, tiles);
    formed_words(&after, tiles, direction)
        .iter()
        .map(|span| score_span(&after, span, tiles))
        .collect()
}

/// Total score of placing `tiles` on `board`: the sum of all words formed,
/// plus [`BINGO_BONUS`] when exactly 7 tiles are placed.
/// ## Example
/// ```
/// # use std::convert::TryFrom;
/// use scrabble_solver::{score_move, Board, Error, Letter, PlacedTile};
/// let board = Board::default();
/// let tiles: Vec<PlacedTile> = "CAT"
///     .chars()
///     .enumerate()
///     .map(|(i, ch)| Ok(PlacedTile::new(7, 7 + i, Letter::try_from(ch)?, false)))
///     .collect::<Result<_, Error>>()?;
/// // the start square doubles the word
/// assert_eq!(score_move(&board, &tiles), 10);
/// # Ok::<(), Error>(())
/// ```
pub fn score_move(board: &Board, tiles: &[PlacedTile]) -> u32 {
    let words: u32 = score_words(board, tiles).iter().map(|w| w.score).sum();
    words + bingo_bonus(tiles.len())
}

pub fn bingo_bonus(tiles_used: usize) -> u32 {
    if tiles_used == RACK_SIZE {
        BINGO_BONUS
    } else {
        0
    }
}
