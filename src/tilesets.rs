use crate::tiles::{Letter, Tile};

/// letter, count, points
type TileInfo = (char, u32, u32);

/// The regulation English distribution: 98 letters and 2 blanks.
const TILESET: [TileInfo; 27] = [
    ('A', 9, 1),
    ('B', 2, 3),
    ('C', 2, 3),
    ('D', 4, 2),
    ('E', 12, 1),
    ('F', 2, 4),
    ('G', 3, 2),
    ('H', 2, 4),
    ('I', 9, 1),
    ('J', 1, 8),
    ('K', 1, 5),
    ('L', 4, 1),
    ('M', 2, 3),
    ('N', 6, 1),
    ('O', 8, 1),
    ('P', 2, 3),
    ('Q', 1, 10),
    ('R', 6, 1),
    ('S', 4, 1),
    ('T', 6, 1),
    ('U', 4, 1),
    ('V', 2, 4),
    ('W', 2, 4),
    ('X', 1, 8),
    ('Y', 2, 4),
    ('Z', 1, 10),
    ('_', 2, 0),
];

/// Index of the blank in `TILESET`
const BLANK_INDEX: usize = 26;

/// The tile distribution of the game: how many of each tile exist, and what each is worth.
#[derive(Debug, Clone, Copy, Default)]
pub struct TileSet;

impl TileSet {
    /// Return the standard tileset.
    pub fn standard() -> TileSet {
        TileSet
    }

    /// Points for a letter tile
    pub fn points(&self, letter: Letter) -> u32 {
        TILESET[letter.index()].2
    }

    /// Points for a rack tile; a blank is worth nothing
    pub fn tile_points(&self, tile: Tile) -> u32 {
        match tile {
            Tile::Letter(letter) => self.points(letter),
            Tile::Blank => 0,
        }
    }

    /// Return the number of copies of `tile` in a full bag
    pub fn count(&self, tile: Tile) -> u32 {
        match tile {
            Tile::Letter(letter) => TILESET[letter.index()].1,
            Tile::Blank => TILESET[BLANK_INDEX].1,
        }
    }

    /// Iterate over all tiles with their count in a full bag
    pub fn tiles(&self) -> impl Iterator<Item = (Tile, u32)> + '_ {
        Letter::all()
            .map(Tile::Letter)
            .chain(std::iter::once(Tile::Blank))
            .map(move |tile| (tile, self.count(tile)))
    }

    /// Total number of tiles in a full bag
    pub fn total(&self) -> u32 {
        TILESET.iter().map(|&(_, count, _)| count).sum()
    }
}
