use super::Letter;
use crate::error::Error;
use std::convert::TryFrom;

/// Encode a word, and return its letters.
/// Lowercase input is normalized to uppercase.
/// ## Errors
/// An error is returned if the word holds anything but the letters a..z.
/// ## Examples
/// ```
/// use scrabble_solver::{encode, decode, Error};
/// let letters = encode("Quiz")?;
/// assert_eq!(letters.len(), 4);
/// assert_eq!(decode(&letters), "QUIZ");
/// # Ok::<(), Error>(())
/// ```
pub fn encode(word: &str) -> Result<Vec<Letter>, Error> {
    word.chars().map(Letter::try_from).collect()
}

/// Decode letters to an uppercase string.
pub fn decode(letters: &[Letter]) -> String {
    letters.iter().map(|letter| letter.as_char()).collect()
}
