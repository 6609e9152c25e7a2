use crate::tiles::{Direction, PlacedTile};
use std::fmt;

/// A candidate or committed placement.
///
/// `tiles` holds exactly the tiles newly placed in this move, never squares
/// that were occupied before. `word` is the full main word as read from the
/// board after the tiles are placed, including letters already on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub word: String,
    /// Start of the main word
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub tiles: Vec<PlacedTile>,
    /// Raw score, bingo bonus included
    pub score: u32,
    /// Strategic adjustment to the score; 0 for tiers that do not evaluate moves
    pub strategic_value: i32,
}

impl Move {
    /// Number of tiles taken from the rack
    pub fn tiles_used(&self) -> usize {
        self.tiles.len()
    }

    /// Check if all 7 rack tiles are used.
    pub fn is_bingo(&self) -> bool {
        self.tiles.len() == crate::tiles::RACK_SIZE
    }

    /// Score plus strategic adjustment
    pub fn ranking_value(&self) -> i64 {
        self.score as i64 + self.strategic_value as i64
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} at ({},{}) {} for {} points",
            self.word, self.row, self.col, self.direction, self.score
        )
    }
}
