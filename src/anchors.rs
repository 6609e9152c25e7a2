//! Anchor squares: where a new word can touch the board.
use crate::board::{Board, CENTER, N};
use crate::grid::Bonus;
use rand::seq::SliceRandom;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Squares within this distance can be reached by a word through the anchor.
const REACH: usize = 7;

/// An empty square eligible to start or cross a new word this turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub row: usize,
    pub col: usize,
    /// Higher is explored first when anchors are ordered by priority
    pub priority: f32,
}

impl Anchor {
    pub fn new(row: usize, col: usize) -> Anchor {
        Anchor {
            row,
            col,
            priority: 0.0,
        }
    }
}

/// How a tier walks the anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AnchorOrder {
    /// Random order, for variety
    Shuffled,
    /// By the bonus on the anchor square itself
    ByBonus,
    /// By [`anchor_priority`]: own bonus plus nearby open premium squares
    ByPriority,
}

/// Find all anchors on `board`.
///
/// On the first move the center square is the only anchor. Later, every empty
/// square with an occupied orthogonal neighbour is one, in row-major order.
pub fn find_anchors(board: &Board, is_first_move: bool) -> Vec<Anchor> {
    if is_first_move {
        return vec![Anchor::new(CENTER.0, CENTER.1)];
    }
    let mut anchors = Vec::new();
    for row in 0..N {
        for col in 0..N {
            if !board.is_occupied(row, col) && board.has_adjacent_tile(row, col) {
                anchors.push(Anchor::new(row, col));
            }
        }
    }
    anchors
}

/// Value of the bonus on a square, for a quick anchor ranking.
pub fn bonus_value(bonus: Bonus) -> f32 {
    match bonus {
        Bonus::TripleWord => 10.0,
        Bonus::DoubleWord | Bonus::Start => 6.0,
        Bonus::TripleLetter => 4.0,
        Bonus::DoubleLetter => 2.0,
        Bonus::Normal => 0.0,
    }
}

fn own_weight(bonus: Bonus) -> f32 {
    match bonus {
        Bonus::TripleWord => 50.0,
        Bonus::DoubleWord | Bonus::Start => 25.0,
        Bonus::TripleLetter => 15.0,
        Bonus::DoubleLetter => 8.0,
        Bonus::Normal => 0.0,
    }
}

fn nearby_weight(bonus: Bonus) -> f32 {
    match bonus {
        Bonus::TripleWord => 10.0,
        Bonus::DoubleWord | Bonus::Start => 5.0,
        Bonus::TripleLetter => 3.0,
        _ => 0.0,
    }
}

/// Priority of the anchor at `row`, `col`: the bonus on the square itself, plus
/// for every still-empty premium square within reach a weight that decays with
/// the Manhattan distance, `weight * (8 - d) / 8`.
pub fn anchor_priority(board: &Board, row: usize, col: usize) -> f32 {
    let grid = board.grid();
    let mut priority = own_weight(grid[row][col]);
    let rows = row.saturating_sub(REACH)..(row + REACH + 1).min(N);
    for r in rows {
        let cols = col.saturating_sub(REACH)..(col + REACH + 1).min(N);
        for c in cols {
            if board.is_occupied(r, c) {
                continue;
            }
            let distance = r.max(row) - r.min(row) + c.max(col) - c.min(col);
            if distance > REACH {
                continue;
            }
            let factor = (REACH + 1 - distance) as f32 / (REACH + 1) as f32;
            priority += nearby_weight(grid[r][c]) * factor;
        }
    }
    priority
}

/// Put `anchors` in the order a tier explores them. Ties keep row-major order.
pub fn order_anchors<R: Rng>(anchors: &mut Vec<Anchor>, board: &Board, order: AnchorOrder, rng: &mut R) {
    match order {
        AnchorOrder::Shuffled => anchors.shuffle(rng),
        AnchorOrder::ByBonus => {
            for anchor in anchors.iter_mut() {
                anchor.priority = bonus_value(board.grid()[anchor.row][anchor.col]);
            }
            sort_by_priority(anchors);
        }
        AnchorOrder::ByPriority => {
            for anchor in anchors.iter_mut() {
                anchor.priority = anchor_priority(board, anchor.row, anchor.col);
            }
            sort_by_priority(anchors);
        }
    }
}

fn sort_by_priority(anchors: &mut [Anchor]) {
    anchors.sort_by(|a, b| b.priority.partial_cmp(&a.priority).unwrap_or(Ordering::Equal));
}
