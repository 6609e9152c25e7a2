use crate::placement::PlacementError;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading the dictionary file
    #[error("Dictionary \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// A dictionary line holds something other than the letters a..z
    #[error("Malformed dictionary line {line}: \"{word}\"")]
    MalformedDictionary { line: usize, word: String },

    /// The dictionary contains no words at all
    #[error("Dictionary is empty")]
    EmptyDictionary,

    /// Error deserializing a bincoded dictionary
    #[cfg(feature = "bincode")]
    #[error("Dictionary {0} could not be (de)serialized")]
    DictionaryDeserializeError(String),

    /// The rack holds more than 7 tiles
    #[error("Rack holds {0} tiles, at most 7 allowed")]
    RackTooLarge(usize),

    /// Token can not be used as rack tile
    #[error("Invalid rack token '{0}'")]
    InvalidRackToken(char),

    /// Character is not a letter `A`..`Z`
    #[error("Invalid letter '{0}'")]
    InvalidLetter(char),

    /// Access outside the 15x15 board
    #[error("Position row={row}, col={col} is outside the board")]
    OutOfBounds { row: usize, col: usize },

    /// Error parsing board state or grid from strings
    #[error("Invalid number of rows {0} (expect 15)")]
    InvalidRowCount(usize),

    /// Parsing a row on the board needs 15 cells
    #[error("Invalid row \"{0}\": length {1}, expect 15")]
    InvalidRowLength(String, usize),

    /// Error parsing bonus cell
    #[error("Invalid grid bonus cell: \"{0}\"")]
    GridParseError(String),

    /// Attempt to replace a tile already on the board
    #[error("Attempt to replace tile at row:{row}, col:{col}")]
    TileReplaceError { row: usize, col: usize },

    /// Difficulty name other than easy, medium, hard or expert
    #[error("Unknown difficulty \"{0}\"")]
    UnknownDifficulty(String),

    /// A submitted placement breaks one of the placement rules
    #[error("Invalid placement: {0}")]
    InvalidPlacement(PlacementError),
}
