use super::{Letter, Tile, RACK_SIZE};
use crate::error::Error;
use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use tinyvec::ArrayVec;

/// A snapshot of the tiles a player holds: at most 7, order irrelevant.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Rack(ArrayVec<[Tile; RACK_SIZE]>);

impl Deref for Rack {
    type Target = [Tile];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Rack {
    pub fn new() -> Rack {
        Rack::default()
    }

    /// Add a tile to the rack.
    /// ## Errors
    /// If the rack is already full.
    pub fn push(&mut self, tile: Tile) -> Result<(), Error> {
        if self.0.len() == RACK_SIZE {
            return Err(Error::RackTooLarge(RACK_SIZE + 1));
        }
        self.0.push(tile);
        Ok(())
    }

    /// Remove one copy of `tile`, returns false if the rack has none.
    pub fn remove(&mut self, tile: Tile) -> bool {
        match self.0.iter().position(|&t| t == tile) {
            Some(pos) => {
                self.0.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Number of free places on the rack
    pub fn free(&self) -> usize {
        RACK_SIZE - self.0.len()
    }

    /// Per-letter counts of the rack, for formability tests.
    pub fn counts(&self) -> RackCounts {
        RackCounts::from(self)
    }
}

impl TryFrom<&str> for Rack {
    type Error = Error;

    /// Parse a rack snapshot. Whitespace is ignored, `_` or `*` is a blank.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let tiles = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Tile::try_from)
            .collect::<Result<Vec<Tile>, Error>>()?;
        if tiles.len() > RACK_SIZE {
            return Err(Error::RackTooLarge(tiles.len()));
        }
        Ok(Rack(tiles.into_iter().collect()))
    }
}

impl FromStr for Rack {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rack::try_from(s)
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for tile in self.iter() {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}

/// A rack as a multiset: count per letter plus the number of blanks.
///
/// Consuming a letter takes the exact letter when available, and only
/// falls back to a blank when it is not.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RackCounts {
    letters: [u8; 26],
    blanks: u8,
}

impl From<&Rack> for RackCounts {
    fn from(rack: &Rack) -> Self {
        let mut counts = RackCounts::default();
        for tile in rack.iter() {
            match tile {
                Tile::Letter(letter) => counts.letters[letter.index()] += 1,
                Tile::Blank => counts.blanks += 1,
            }
        }
        counts
    }
}

impl RackCounts {
    /// Number of copies of `letter`, blanks not included.
    pub fn count(&self, letter: Letter) -> u8 {
        self.letters[letter.index()]
    }

    pub fn blanks(&self) -> u8 {
        self.blanks
    }

    /// Total number of tiles left.
    pub fn len(&self) -> usize {
        self.letters.iter().map(|&n| n as usize).sum::<usize>() + self.blanks as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if `letter` can still be supplied, by itself or by a blank.
    pub fn has(&self, letter: Letter) -> bool {
        self.letters[letter.index()] > 0 || self.blanks > 0
    }

    /// Consume one tile for `letter`.
    /// Returns `Some(is_blank)` for the tile used, `None` if nothing fits.
    pub fn take(&mut self, letter: Letter) -> Option<bool> {
        let n = &mut self.letters[letter.index()];
        if *n > 0 {
            *n -= 1;
            Some(false)
        } else if self.blanks > 0 {
            self.blanks -= 1;
            Some(true)
        } else {
            None
        }
    }

    /// Consume the exact tile: a blank if `is_blank`, else the letter itself.
    /// Returns false if the rack does not hold it.
    pub fn take_tile(&mut self, letter: Letter, is_blank: bool) -> bool {
        let n = if is_blank {
            &mut self.blanks
        } else {
            &mut self.letters[letter.index()]
        };
        if *n == 0 {
            return false;
        }
        *n -= 1;
        true
    }

    /// Undo a `take`.
    pub fn give_back(&mut self, letter: Letter, is_blank: bool) {
        if is_blank {
            self.blanks += 1;
        } else {
            self.letters[letter.index()] += 1;
        }
    }

    /// Add board letters as borrowed members of the rack.
    pub fn extend_with<I: IntoIterator<Item = Letter>>(&mut self, letters: I) {
        for letter in letters {
            let n = &mut self.letters[letter.index()];
            *n = n.saturating_add(1);
        }
    }

    /// Check if every letter of `word` can be supplied, each tile used once.
    /// ## Example
    /// ```
    /// # use std::convert::TryFrom;
    /// # use scrabble_solver::{Rack, Error};
    /// let counts = Rack::try_from("CAT_")?.counts();
    /// assert!(counts.can_form("CART"));
    /// assert!(!counts.can_form("CARTS"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn can_form(&self, word: &str) -> bool {
        let mut counts = *self;
        word.bytes().all(|b| match Letter::from_ascii(b) {
            Some(letter) => counts.take(letter).is_some(),
            None => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Result<T> = std::result::Result<T, Error>;

    #[test]
    fn test_rack_parse() -> Result<()> {
        let rack = Rack::try_from("ca t__")?;
        assert_eq!(rack.len(), 5);
        assert_eq!(rack.to_string(), "CAT__");
        assert_eq!(rack.free(), 2);
        Ok(())
    }

    #[test]
    #[should_panic(expected = "RackTooLarge(8)")]
    fn test_rack_too_large() {
        Rack::try_from("ABCDEFGH").unwrap();
    }

    #[test]
    #[should_panic(expected = "InvalidRackToken('3')")]
    fn test_rack_invalid_token() {
        Rack::try_from("AB3").unwrap();
    }

    #[test]
    fn test_push_remove() -> Result<()> {
        let mut rack = Rack::try_from("ABCDEF")?;
        rack.push(Tile::Blank)?;
        assert!(rack.push(Tile::Blank).is_err());
        assert!(rack.remove(Tile::Blank));
        assert!(!rack.remove(Tile::Blank));
        Ok(())
    }

    #[test]
    fn test_exact_letter_before_blank() -> Result<()> {
        let mut counts = Rack::try_from("A_")?.counts();
        let a = Letter::try_from('A')?;
        assert_eq!(counts.take(a), Some(false));
        assert_eq!(counts.take(a), Some(true));
        assert_eq!(counts.take(a), None);
        counts.give_back(a, true);
        assert_eq!(counts.blanks(), 1);
        Ok(())
    }

    #[test]
    fn test_can_form() -> Result<()> {
        let counts = Rack::try_from("EEL")?.counts();
        assert!(counts.can_form("LEE"));
        assert!(!counts.can_form("EEEL"));
        let counts = Rack::try_from("QI__")?.counts();
        assert!(counts.can_form("QUIZ"));
        assert!(!counts.can_form("QUIZZ"));
        assert!(!counts.can_form("QI1"));
        Ok(())
    }

    #[test]
    fn test_extend_with_board_letters() -> Result<()> {
        let mut counts = Rack::try_from("AT")?.counts();
        assert!(!counts.can_form("CAT"));
        counts.extend_with(crate::tiles::encode("C")?);
        assert!(counts.can_form("CAT"));
        Ok(())
    }
}
