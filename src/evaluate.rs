//! Strategic adjustment of a move's raw score.
use crate::board::{Board, N};
use crate::grid::Bonus;
use crate::moves::Move;

/// Bonus per tile taken from the rack
const PER_TILE: i32 = 2;
/// Bonus for a bingo, on top of the 50 in the raw score
const BINGO: i32 = 25;
/// Penalty per open triple word square next to a new tile
const OPENS_TRIPLE_WORD: i32 = -5;
/// Bonus per new tile on a triple word square
const TAKES_TRIPLE_WORD: i32 = 10;
/// Penalty per 'S' tile spent
const SPENDS_S: i32 = -3;
/// Raw score from which spending an 'S' is not penalized
const S_WORTH_IT: u32 = 30;

/// Strategic value of `mv` on `board`, the board before the move.
///
/// Rewards rack turnover and bingos, penalizes triple word squares the move
/// leaves open next to its tiles, rewards triple word squares it takes, and
/// charges for an 'S' spent on a low scoring move.
pub fn strategic_value(board: &Board, mv: &Move) -> i32 {
    let grid = board.grid();
    let mut value = PER_TILE * mv.tiles.len() as i32;
    if mv.is_bingo() {
        value += BINGO;
    }
    let is_new = |r: usize, c: usize| mv.tiles.iter().any(|t| t.row == r && t.col == c);
    for tile in &mv.tiles {
        if grid[tile.row][tile.col] == Bonus::TripleWord {
            value += TAKES_TRIPLE_WORD;
        }
        for r in tile.row.saturating_sub(1)..(tile.row + 2).min(N) {
            for c in tile.col.saturating_sub(1)..(tile.col + 2).min(N) {
                if (r, c) == (tile.row, tile.col) {
                    continue;
                }
                if grid[r][c] == Bonus::TripleWord && !board.is_occupied(r, c) && !is_new(r, c) {
                    value += OPENS_TRIPLE_WORD;
                }
            }
        }
        if !tile.is_blank && tile.letter.as_char() == 'S' && mv.score < S_WORTH_IT {
            value += SPENDS_S;
        }
    }
    value
}
