//! The lexicon: word membership and the derived [`PrefixSet`].
mod prefixes;
mod trievec;

pub use self::prefixes::{Formable, PrefixSet};
use self::trievec::TrieVec;
use crate::labelset::Label;
use crate::tiles::Letter;
use crate::Error;
use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// An immutable set of uppercase words, loaded once per game.
///
/// Membership tests go through a hash set. The words are also kept sorted,
/// for a deterministic full scan, and as a [`PrefixSet`] for rack-constrained
/// enumeration.
///
/// A *permissive* dictionary accepts every word; it is the degraded mode for
/// games that play without validation.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dictionary {
    words: Vec<String>,
    index: HashSet<String>,
    prefixes: PrefixSet,
    /// Path of the wordfile used to build the dictionary.
    /// Empty if the dictionary is not built from a file.
    wordfile: String,
    permissive: bool,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.permissive {
            write!(f, "<Dictionary: permissive, {} words>", self.len())
        } else {
            write!(
                f,
                "<Dictionary: {} words, {} prefix nodes from '{}'>",
                self.len(),
                self.prefixes.node_count(),
                self.wordfile
            )
        }
    }
}

/// Normalize one line of a word list: trimmed and uppercased.
/// Returns `Ok(None)` for a blank line.
fn normalize(line: &str, lineno: usize) -> Result<Option<String>, Error> {
    let word = line.trim().to_uppercase();
    if word.is_empty() {
        return Ok(None);
    }
    if !word.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(Error::MalformedDictionary { line: lineno, word });
    }
    Ok(Some(word))
}

impl Dictionary {
    /// Build a dictionary from normalized words.
    fn build(words: Vec<String>) -> Result<Dictionary, Error> {
        let mut trie = TrieVec::new();
        let mut duplicates = 0;
        for word in &words {
            let labels: Vec<Label> = word
                .bytes()
                .filter_map(Letter::from_ascii)
                .map(Letter::label)
                .collect();
            if !trie.insert(labels) {
                duplicates += 1;
            }
        }
        if duplicates > 0 {
            warn!("dictionary: skipped {} duplicate words", duplicates);
        }
        let index: HashSet<String> = words.into_iter().collect();
        if index.is_empty() {
            return Err(Error::EmptyDictionary);
        }
        let mut words: Vec<String> = index.iter().cloned().collect();
        words.sort_unstable();
        let prefixes = PrefixSet::from(&trie);
        debug!("dictionary: {} words, {} nodes", words.len(), prefixes.node_count());
        Ok(Dictionary {
            words,
            index,
            prefixes,
            wordfile: String::new(),
            permissive: false,
        })
    }

    /// Read the dictionary from `reader`: one word per line, case-insensitive,
    /// blank lines ignored.
    /// ## Errors
    /// - If a line holds anything but the letters a..z.
    /// - If there are no words at all.
    pub fn from_reader<R: BufRead>(reader: R, path: &str) -> Result<Dictionary, Error> {
        let mut words = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| Error::ReadError {
                path: String::from(path),
                source,
            })?;
            if let Some(word) = normalize(&line, i + 1)? {
                words.push(word);
            }
        }
        Dictionary::build(words)
    }

    /// Read the dictionary from a file. The file must be encoded in utf-8 and
    /// have one word per line.
    /// ## Errors
    /// Fails if the file can not be read, or holds a malformed word.
    /// ## Examples
    /// ```no_run
    /// # use scrabble_solver::{Dictionary, Error};
    /// let dictionary = Dictionary::from_file("words.txt")?;
    /// assert!(dictionary.contains("AARDVARK"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_file(wordfile: &str) -> Result<Dictionary, Error> {
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut dictionary = Dictionary::from_reader(BufReader::new(file), wordfile)?;
        dictionary.wordfile = String::from(wordfile);
        Ok(dictionary)
    }

    /// Build a dictionary from a list of words.
    /// ## Errors
    /// If a word holds anything but the letters a..z, or the list is empty.
    /// ## Example
    /// ```
    /// # use scrabble_solver::{Dictionary, Error};
    /// let dictionary = Dictionary::from_words(&["cat", "Cats"])?;
    /// assert!(dictionary.contains("CATS"));
    /// assert!(dictionary.contains("cat"));
    /// assert!(!dictionary.contains("DOG"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Dictionary, Error> {
        let mut normalized = Vec::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            if let Some(word) = normalize(word.as_ref(), i + 1)? {
                normalized.push(word);
            }
        }
        Dictionary::build(normalized)
    }

    /// A dictionary that accepts any word. It holds no words to generate
    /// candidates from.
    pub fn permissive() -> Dictionary {
        Dictionary {
            permissive: true,
            ..Dictionary::default()
        }
    }

    /// Keep the words, but stop validating: every word is accepted.
    pub fn without_validation(mut self) -> Dictionary {
        self.permissive = true;
        self
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the dictionary from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Dictionary, Error> {
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut dictionary: Dictionary = bincode::deserialize_from(reader)
            .map_err(|_| Error::DictionaryDeserializeError(String::from(wordfile)))?;
        dictionary.wordfile = String::from(wordfile);
        Ok(dictionary)
    }

    #[cfg(feature = "bincode")]
    /// Serialize the dictionary to a bincoded file.
    /// ## Errors
    /// If the file can not be created or written.
    pub fn serialize_to(&self, wordfile: &str) -> Result<(), Error> {
        use std::io::BufWriter;
        let file = File::create(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::DictionaryDeserializeError(String::from(wordfile)))
    }

    /// Check if `word` is a valid word. Case-insensitive.
    /// Always true for a permissive dictionary.
    pub fn contains(&self, word: &str) -> bool {
        if self.permissive {
            return true;
        }
        if word.bytes().any(|b| b.is_ascii_lowercase()) {
            self.index.contains(&word.to_ascii_uppercase())
        } else {
            self.index.contains(word)
        }
    }

    pub fn is_permissive(&self) -> bool {
        self.permissive
    }

    /// Iterate over the words in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn prefixes(&self) -> &PrefixSet {
        &self.prefixes
    }

    pub fn wordfile(&self) -> &str {
        &self.wordfile
    }
}
