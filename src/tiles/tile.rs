use super::Letter;
use crate::error::Error;
use std::convert::TryFrom;
use std::fmt;

/// A tile on the rack or in the bag: either a regular letter or a blank.
///
/// A blank has no letter of its own; it is assigned one when placed and
/// always scores 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    Letter(Letter),
    #[default]
    Blank,
}

impl Tile {
    /// Check if tile is a blank
    pub fn is_blank(&self) -> bool {
        matches!(self, Tile::Blank)
    }

    /// The letter of a regular tile
    pub fn letter(&self) -> Option<Letter> {
        match self {
            Tile::Letter(letter) => Some(*letter),
            Tile::Blank => None,
        }
    }
}

/// Parse a rack token. Letters in either case, `_` or `*` for a blank.
impl TryFrom<char> for Tile {
    type Error = Error;
    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '_' | '*' => Ok(Tile::Blank),
            _ => Letter::try_from(ch)
                .map(Tile::Letter)
                .map_err(|_| Error::InvalidRackToken(ch)),
        }
    }
}

impl From<Letter> for Tile {
    fn from(letter: Letter) -> Self {
        Tile::Letter(letter)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Tile::Letter(letter) => write!(f, "{}", letter),
            Tile::Blank => write!(f, "_"),
        }
    }
}
