//! Candidate words: what a rack can spell, before any board position is tried.
//!
//! Everything here is a pure function of the rack and the dictionary (plus
//! the board for hook plays); the random source only changes the order.
use crate::board::{Board, N};
use crate::deadline::Deadline;
use crate::dictionary::Dictionary;
use crate::tiles::{Direction, Letter, Rack, RackCounts};
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Common short words the easiest tier plays from
const EASY_WORDS: &str = include_str!("candidates/easy.txt");
/// A larger everyday vocabulary for the medium tier
const MEDIUM_WORDS: &str = include_str!("candidates/medium.txt");

/// Words scanned between two clock reads in a full dictionary scan
const SCAN_POLL: u32 = 1024;
/// Words yielded between two clock reads in a prefix walk
const WALK_POLL: u32 = 64;

/// Quick value of a word before it is placed: tile values, 2 per letter,
/// and 50 more for a 7 letter word.
/// ## Example
/// ```
/// use scrabble_solver::estimate_word_value;
/// assert_eq!(estimate_word_value("CAT"), 5 + 6);
/// ```
pub fn estimate_word_value(word: &str) -> u32 {
    let points: u32 = word
        .bytes()
        .filter_map(Letter::from_ascii)
        .map(Letter::points)
        .sum();
    let len = word.len() as u32;
    points + 2 * len + if len == 7 { 50 } else { 0 }
}

/// Sort by estimated value, highest first; equal values keep their order.
pub fn sort_by_estimate(words: &mut [String]) {
    words.sort_by_key(|word| std::cmp::Reverse(estimate_word_value(word)));
}

fn curated<'a>(list: &'a str, counts: &'a RackCounts, dictionary: &'a Dictionary) -> impl Iterator<Item = &'a str> {
    list.split_whitespace()
        .filter(move |word| counts.can_form(word) && dictionary.contains(word))
}

/// Two-letter words made of two different rack tiles, blanks excluded.
fn rack_pairs(rack: &Rack, dictionary: &Dictionary) -> Vec<String> {
    let letters: Vec<Letter> = rack.iter().filter_map(|tile| tile.letter()).collect();
    let mut pairs = Vec::new();
    for (i, a) in letters.iter().enumerate() {
        for (j, b) in letters.iter().enumerate() {
            if i == j {
                continue;
            }
            let pair: String = [a.as_char(), b.as_char()].iter().collect();
            if dictionary.contains(&pair) && !pairs.contains(&pair) {
                pairs.push(pair);
            }
        }
    }
    pairs
}

fn push_unique(words: &mut Vec<String>, extra: Vec<String>) {
    for word in extra {
        if !words.contains(&word) {
            words.push(word);
        }
    }
}

/// Easy pool: the short common words the rack can spell, plus two-letter
/// combinations of rack tiles, shuffled.
pub fn curated_easy<R: Rng>(rack: &Rack, dictionary: &Dictionary, rng: &mut R) -> Vec<String> {
    let counts = rack.counts();
    let mut words: Vec<String> = curated(EASY_WORDS, &counts, dictionary)
        .map(String::from)
        .collect();
    push_unique(&mut words, rack_pairs(rack, dictionary));
    words.shuffle(rng);
    words
}

/// Medium pool: the larger vocabulary, long words (6+) first, then 4 to 5
/// letters, then 3 or less; each group shuffled.
pub fn curated_medium<R: Rng>(rack: &Rack, dictionary: &Dictionary, rng: &mut R) -> Vec<String> {
    let counts = rack.counts();
    let mut short = Vec::new();
    let mut medium = Vec::new();
    let mut long = Vec::new();
    for word in curated(MEDIUM_WORDS, &counts, dictionary) {
        match word.len() {
            0..=3 => short.push(String::from(word)),
            4..=5 => medium.push(String::from(word)),
            _ => long.push(String::from(word)),
        }
    }
    push_unique(&mut short, rack_pairs(rack, dictionary));
    long.shuffle(rng);
    medium.shuffle(rng);
    short.shuffle(rng);
    long.into_iter().chain(medium).chain(short).collect()
}

/// Scan the whole dictionary for words the rack can spell.
///
/// Words shorter than 2 or longer than the rack are skipped, and a word is
/// only tested in full when the rack can supply its first two letters. The
/// result is sorted by [`estimate_word_value`] and cut to `cap` words. The
/// scan stops early when `deadline` passes `fraction` of its budget.
pub fn dictionary_scan(
    dictionary: &Dictionary,
    counts: &RackCounts,
    cap: usize,
    deadline: &Deadline,
    fraction: f32,
) -> Vec<String> {
    let max_len = counts.len();
    let mut words = Vec::new();
    for (i, word) in dictionary.iter().enumerate() {
        if i as u32 % SCAN_POLL == SCAN_POLL - 1 && deadline.past(fraction) {
            debug!("dictionary scan stopped after {} words", i);
            break;
        }
        if word.len() < 2 || word.len() > max_len {
            continue;
        }
        if counts.can_form(&word[..2]) && counts.can_form(word) {
            words.push(String::from(word));
        }
    }
    sort_by_estimate(&mut words);
    words.truncate(cap);
    words
}

/// Words the rack can spell, found by walking the prefix trie, so whole
/// branches the rack cannot follow are never visited.
/// Sorted by [`estimate_word_value`] and cut to `cap` words. The walk stops
/// early once `deadline` is spent.
pub fn prefix_walk(dictionary: &Dictionary, counts: &RackCounts, cap: usize, deadline: &Deadline) -> Vec<String> {
    let mut words = Vec::new();
    for (i, word) in dictionary.prefixes().formable(*counts).enumerate() {
        if i as u32 % WALK_POLL == WALK_POLL - 1 && deadline.past(1.0) {
            debug!("prefix walk stopped after {} words", i);
            break;
        }
        words.push(word);
    }
    sort_by_estimate(&mut words);
    words.truncate(cap);
    words
}

/// A one-letter extension of a word on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookPlay {
    /// The extended word
    pub word: String,
    /// Square where the new letter goes
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

/// Extend every word on the board by one letter at either end, when the
/// square there is free, the rack (or a blank) has the letter, and the result
/// is a word. Stops early once `deadline` is spent.
pub fn hook_plays(board: &Board, counts: &RackCounts, dictionary: &Dictionary, deadline: &Deadline) -> Vec<HookPlay> {
    let mut hooks = Vec::new();
    for span in board.words() {
        if deadline.past(1.0) {
            debug!("hook search stopped at {}", span.word);
            break;
        }
        let (dr, dc) = span.direction.delta();
        let len = span.len();
        let before = match (span.row.checked_sub(dr), span.col.checked_sub(dc)) {
            (Some(r), Some(c)) => Some((r, c)),
            _ => None,
        };
        let after = Some((span.row + len * dr, span.col + len * dc)).filter(|&(r, c)| r < N && c < N);
        for letter in Letter::all().filter(|&letter| counts.has(letter)) {
            let ch = letter.as_char();
            if let Some((row, col)) = before.filter(|&(r, c)| !board.is_occupied(r, c)) {
                let word = format!("{}{}", ch, span.word);
                if dictionary.contains(&word) {
                    hooks.push(HookPlay {
                        word,
                        row,
                        col,
                        direction: span.direction,
                    });
                }
            }
            if let Some((row, col)) = after.filter(|&(r, c)| !board.is_occupied(r, c)) {
                let word = format!("{}{}", span.word, ch);
                if dictionary.contains(&word) {
                    hooks.push(HookPlay {
                        word,
                        row,
                        col,
                        direction: span.direction,
                    });
                }
            }
        }
    }
    trace!("{} hook plays", hooks.len());
    hooks
}

/// Fallback pool: words spelled by the rack together with `board_letters`,
/// which only count for formability. Sorted by estimate, top `cap`.
pub fn with_board_letters(
    dictionary: &Dictionary,
    counts: &RackCounts,
    board_letters: &[Letter],
    cap: usize,
    deadline: &Deadline,
) -> Vec<String> {
    let mut extended = *counts;
    extended.extend_with(board_letters.iter().copied());
    let mut words = prefix_walk(dictionary, &extended, usize::MAX, deadline);
    // keep words that need at least one rack tile
    words.retain(|word| !only_board_letters(word, board_letters));
    words.truncate(cap);
    words
}

fn only_board_letters(word: &str, board_letters: &[Letter]) -> bool {
    let mut board = RackCounts::default();
    board.extend_with(board_letters.iter().copied());
    board.can_form(word)
}

/// Remove duplicate words, keeping the first occurrence.
pub fn dedup(words: &mut Vec<String>) {
    let mut seen = HashSet::new();
    words.retain(|word| seen.insert(word.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::encode;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::convert::TryFrom;
    use std::time::Duration;

    type Result<T> = std::result::Result<T, crate::Error>;

    const WORDS: &[&str] = &[
        "A", "AT", "TA", "CAT", "ACT", "CATS", "CAST", "SCAT", "TACT", "OX", "AX", "TAX", "ZOO",
        "QUIZ", "BAT", "TAB",
    ];

    fn dictionary() -> Dictionary {
        Dictionary::from_words(WORDS).unwrap()
    }

    fn deadline() -> Deadline {
        Deadline::new(Duration::from_secs(60), 16)
    }

    #[test]
    fn test_estimate() {
        assert_eq!(estimate_word_value("QUIZ"), 10 + 1 + 1 + 10 + 8);
        assert_eq!(estimate_word_value("SEATING"), 7 + 14 + 50);
        let mut words = vec!["AT".to_string(), "QUIZ".to_string(), "CAT".to_string()];
        sort_by_estimate(&mut words);
        assert_eq!(words, vec!["QUIZ", "CAT", "AT"]);
    }

    #[test]
    fn test_scan_and_walk_agree() {
        let dictionary = dictionary();
        for rack in &["CATS", "TAX_", "Z_O", "BCDFGHJ", "__"] {
            let counts = Rack::try_from(*rack).unwrap().counts();
            let mut scanned = dictionary_scan(&dictionary, &counts, usize::MAX, &deadline(), 1.0);
            let mut walked = prefix_walk(&dictionary, &counts, usize::MAX, &deadline());
            scanned.sort();
            walked.sort();
            assert_eq!(scanned, walked, "rack {}", rack);
        }
    }

    #[test]
    fn test_scan_is_capped_and_sorted() {
        let dictionary = dictionary();
        let counts = Rack::try_from("CATS__").unwrap().counts();
        let words = dictionary_scan(&dictionary, &counts, 3, &deadline(), 1.0);
        assert_eq!(words.len(), 3);
        assert!(words
            .windows(2)
            .all(|w| estimate_word_value(&w[0]) >= estimate_word_value(&w[1])));
        assert!(!words.contains(&"A".to_string()));
    }

    #[test]
    fn test_no_formable_words() {
        let dictionary = dictionary();
        let counts = Rack::try_from("BCDFGHJ").unwrap().counts();
        assert!(prefix_walk(&dictionary, &counts, 200, &deadline()).is_empty());
    }

    #[test]
    fn test_curated_pools() {
        let dictionary = Dictionary::permissive();
        let mut rng = StdRng::seed_from_u64(7);
        let rack = Rack::try_from("CATDOGS").unwrap();
        let easy = curated_easy(&rack, &dictionary, &mut rng);
        assert!(easy.contains(&"CAT".to_string()));
        assert!(easy.contains(&"DOG".to_string()));
        let counts = rack.counts();
        assert!(easy.iter().all(|w| counts.can_form(w)));

        let medium = curated_medium(&rack, &dictionary, &mut rng);
        assert!(medium.iter().all(|w| counts.can_form(w)));
        let first_short = medium.iter().position(|w| w.len() <= 3);
        let last_long = medium.iter().rposition(|w| w.len() >= 4);
        if let (Some(short), Some(long)) = (first_short, last_long) {
            assert!(long < short);
        }
    }

    #[test]
    fn test_curated_respects_dictionary() {
        let dictionary = Dictionary::from_words(&["CAT", "TA"]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let rack = Rack::try_from("CATDOGS").unwrap();
        let mut easy = curated_easy(&rack, &dictionary, &mut rng);
        easy.sort();
        assert_eq!(easy, vec!["CAT", "TA"]);
    }

    #[test]
    fn test_hook_plays() -> Result<()> {
        let mut state = vec!["..............."; 15];
        state[7] = ".......CAT.....";
        let board = Board::default().with_state_from_strings(&state)?;
        let dictionary = dictionary();
        let counts = Rack::try_from("S")?.counts();
        let hooks = hook_plays(&board, &counts, &dictionary, &deadline());
        assert_eq!(
            hooks,
            vec![
                HookPlay {
                    word: "SCAT".to_string(),
                    row: 7,
                    col: 6,
                    direction: Direction::Horizontal
                },
                HookPlay {
                    word: "CATS".to_string(),
                    row: 7,
                    col: 10,
                    direction: Direction::Horizontal
                }
            ]
        );
        let counts = Rack::try_from("_")?.counts();
        let words: Vec<String> = hook_plays(&board, &counts, &dictionary, &deadline())
            .into_iter()
            .map(|h| h.word)
            .collect();
        assert_eq!(words, vec!["SCAT", "CATS"]);
        Ok(())
    }

    #[test]
    fn test_with_board_letters() -> Result<()> {
        let dictionary = dictionary();
        let counts = Rack::try_from("AT")?.counts();
        let words = with_board_letters(&dictionary, &counts, &encode("CS")?, 20, &deadline());
        assert!(words.contains(&"CATS".to_string()));
        assert!(words.contains(&"AT".to_string()));
        Ok(())
    }

    #[test]
    fn test_spent_deadline_stops_generation() -> Result<()> {
        let mut state = vec!["..............."; 15];
        state[7] = ".......CAT.....";
        let board = Board::default().with_state_from_strings(&state)?;
        let dictionary = dictionary();
        let counts = Rack::try_from("S_")?.counts();
        let spent = Deadline::new(Duration::from_millis(0), 1);
        assert!(hook_plays(&board, &counts, &dictionary, &spent).is_empty());
        assert_eq!(hook_plays(&board, &counts, &dictionary, &deadline()).len(), 2);
        Ok(())
    }
}
