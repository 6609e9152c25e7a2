use crate::board::Board;
use crate::tiles::{Rack, Tile};
use crate::tilesets::TileSet;
use crate::Error;
use log::debug;
use multiset::HashMultiSet;
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::{Deref, Sub};

/// Keeps track of the undrawn tiles
#[derive(Debug, Clone)]
pub struct TileBag(HashMultiSet<Tile>);

impl Deref for TileBag {
    type Target = HashMultiSet<Tile>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Sub for TileBag {
    type Output = Self;
    fn sub(self, other: Self) -> Self::Output {
        Self(self.0 - other.0)
    }
}

impl TileBag {
    /// An empty bag
    pub fn new() -> Self {
        Self(HashMultiSet::new())
    }

    /// A full bag: the regulation 100 tiles, blanks included.
    pub fn standard() -> Self {
        let mut bag = HashMultiSet::new();
        for (tile, count) in TileSet::standard().tiles() {
            if count > 0 {
                bag.insert_times(tile, count as usize);
            }
        }
        Self(bag)
    }

    /// The tiles nobody has seen yet: the full bag minus the tiles on `board`
    /// and on `rack`. A blank on the board counts as a blank, not as its letter.
    pub fn remaining(board: &Board, rack: &Rack) -> Self {
        let used: Vec<Tile> = board.tiles().chain(rack.iter().copied()).collect();
        TileBag::standard() - TileBag::from(used)
    }

    /// Take up to `n` random tiles out of the bag.
    pub fn draw<R: Rng>(&mut self, n: usize, rng: &mut R) -> Vec<Tile> {
        let all: Vec<Tile> = self
            .0
            .distinct_elements()
            .flat_map(|&tile| std::iter::repeat(tile).take(self.0.count_of(&tile)))
            .collect();
        let drawn: Vec<Tile> = all.choose_multiple(rng, n).copied().collect();
        for tile in &drawn {
            self.0.remove(tile);
        }
        drawn
    }

    /// Top `rack` up to 7 tiles. Returns the number of tiles drawn, fewer
    /// when the bag runs out.
    pub fn refill<R: Rng>(&mut self, rack: &mut Rack, rng: &mut R) -> Result<usize, Error> {
        let drawn = self.draw(rack.free(), rng);
        for &tile in &drawn {
            rack.push(tile)?;
        }
        debug!("drew {} tiles, {} left in the bag", drawn.len(), self.0.len());
        Ok(drawn.len())
    }
}

impl Default for TileBag {
    fn default() -> Self {
        TileBag::standard()
    }
}

impl<T> From<T> for TileBag
where
    T: AsRef<[Tile]>,
{
    fn from(tiles: T) -> Self {
        let mut bag = HashMultiSet::new();
        for &tile in tiles.as_ref() {
            bag.insert(tile);
        }
        Self(bag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::Letter;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::convert::TryFrom;

    type Result<T> = std::result::Result<T, Error>;

    #[test]
    fn test_standard_bag() -> Result<()> {
        let bag = TileBag::standard();
        assert_eq!(bag.len(), 100);
        assert_eq!(bag.count_of(&Tile::Blank), 2);
        assert_eq!(bag.count_of(&Tile::Letter(Letter::try_from('E')?)), 12);
        assert_eq!(bag.count_of(&Tile::Letter(Letter::try_from('Z')?)), 1);
        Ok(())
    }

    #[test]
    fn test_refill() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(11);
        let mut bag = TileBag::standard();
        let mut rack = Rack::try_from("AB")?;
        assert_eq!(bag.refill(&mut rack, &mut rng)?, 5);
        assert_eq!(rack.len(), 7);
        assert_eq!(bag.len(), 95);
        assert_eq!(bag.refill(&mut rack, &mut rng)?, 0);
        Ok(())
    }

    #[test]
    fn test_draw_empties_bag() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut bag = TileBag::from(vec![Tile::Blank, Tile::Blank]);
        let drawn = bag.draw(7, &mut rng);
        assert_eq!(drawn, vec![Tile::Blank, Tile::Blank]);
        assert!(bag.is_empty());
    }

    #[test]
    fn test_remaining() -> Result<()> {
        let mut state = vec!["..............."; 15];
        state[7] = ".......QuAIL...";
        let board = Board::default().with_state_from_strings(&state)?;
        let rack = Rack::try_from("EEE_")?;
        let full = TileBag::standard();
        let remaining = TileBag::remaining(&board, &rack);
        assert_eq!(remaining.len(), 100 - 5 - 4);
        let q = Tile::Letter(Letter::try_from('Q')?);
        let u = Tile::Letter(Letter::try_from('U')?);
        let e = Tile::Letter(Letter::try_from('E')?);
        assert_eq!(remaining.count_of(&q), 0);
        // the u on the board is a blank
        assert_eq!(remaining.count_of(&u), full.count_of(&u));
        assert_eq!(remaining.count_of(&Tile::Blank), 0);
        assert_eq!(remaining.count_of(&e), 9);
        Ok(())
    }
}
