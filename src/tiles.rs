//! Basic types for working with Scrabble tiles.
mod cell;
mod codec;
mod letter;
mod placed;
mod rack;
mod tile;

/// Maximum number of tiles on a rack
pub const RACK_SIZE: usize = 7;
pub use cell::Cell;
pub use codec::{decode, encode};
pub use letter::Letter;
pub use placed::{Direction, PlacedTile};
pub use rack::{Rack, RackCounts};
pub use tile::Tile;
