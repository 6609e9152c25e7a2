use crate::error::Error;
use crate::tilesets::TileSet;
use std::convert::TryFrom;
use std::fmt;

/// A letter `A`..`Z`, as printed on a tile or represented by a blank.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Letter(u8);

impl Default for Letter {
    fn default() -> Self {
        Letter(b'A')
    }
}

impl Letter {
    /// Letter from an ascii byte, either case.
    pub fn from_ascii(byte: u8) -> Option<Letter> {
        let upper = byte.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(Letter(upper))
        } else {
            None
        }
    }

    /// Letter for alphabet index 0..26.
    pub(crate) fn from_index(index: usize) -> Letter {
        debug_assert!(index < 26);
        Letter(b'A' + index as u8)
    }

    /// Iterate over `A`..`Z`
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..26).map(Letter::from_index)
    }

    /// Position in the alphabet, 0 for `A`.
    pub fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    /// Label 1..=26, used by the prefix trie.
    pub fn label(self) -> u8 {
        self.0 - b'A' + 1
    }

    /// The uppercase character.
    pub fn as_char(self) -> char {
        self.0 as char
    }

    /// Base value of the letter tile.
    /// ## Example
    /// ```
    /// # use std::convert::TryFrom;
    /// # use scrabble_solver::{Letter, Error};
    /// assert_eq!(Letter::try_from('q')?.points(), 10);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn points(self) -> u32 {
        TileSet::standard().points(self)
    }
}

impl TryFrom<char> for Letter {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        if ch.is_ascii() {
            if let Some(letter) = Letter::from_ascii(ch as u8) {
                return Ok(letter);
            }
        }
        Err(Error::InvalidLetter(ch))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
