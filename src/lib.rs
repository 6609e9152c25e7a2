//! A Scrabble move finder for Rust.
//! <br>
//! This crate finds, validates and scores moves in a game of Scrabble. Four
//! bot difficulties share one search; they differ in where their candidate
//! words come from, how they walk the board, how they rank what they find,
//! and how much time they get.
//! It can use the `rayon` crate to run the searches of several bots in parallel.
//!
//! # How to use `scrabble_solver`
//! Load a dictionary, describe the board and the rack, and ask for a move.
//! The dictionary must be in utf-8 and contain one word per line; case does
//! not matter. A search never fails: when no move is found within the time
//! budget the result is `None`, and the player passes.
//!
//! # Basic usage
//!  ```
//! # use std::convert::TryFrom;
//! use scrabble_solver::{find_move, Board, Dictionary, Rack};
//!
//! let dictionary = Dictionary::from_words(&["rust", "rest", "ruts"])?;
//! let mut board = Board::default();
//! let rack = Rack::try_from("rusta")?;
//! let mv = find_move(&rack, &board, &dictionary, board.is_first_move(), 1000).unwrap();
//! println!("{}", mv);
//! board.play_move(&mv)?;
//! assert_eq!(board.occupied_count(), 4);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # Difficulties
//! A [`Bot`] plays at one [`Difficulty`], configured with a [`SearchConfig`]:
//! ```
//! # use std::convert::TryFrom;
//! use scrabble_solver::{Board, Bot, Dictionary, Difficulty, Rack, SearchConfig};
//!
//! let dictionary = Dictionary::from_words(&["at", "ta", "tab", "bat"])?;
//! let config = SearchConfig::new(Difficulty::Easy).with_seed(42).with_time_budget_ms(500);
//! let mut bot = Bot::with_config(config);
//! let mv = bot.find_move(&Rack::try_from("abt")?, &Board::default(), &dictionary, true);
//! assert!(mv.is_some());
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # Human moves
//! [`validate_submission`] checks tiles put down by a player, and returns the
//! move with a score for every word it forms.
mod board;
mod deadline;
mod dictionary;
mod error;
mod grid;
mod labelset;
mod moves;
mod tilebag;
mod tiles;
mod tilesets;

pub mod anchors;
pub mod calibrate;
pub mod candidates;
pub mod config;
pub mod evaluate;
pub mod placement;
pub mod score;
pub mod search;
pub mod strategy;

pub use board::{Board, WordSpan, CENTER, N};
pub use calibrate::{calibrate, PerformanceProfile, PerformanceTier};
pub use candidates::estimate_word_value;
pub use config::SearchConfig;
pub use deadline::Deadline;
pub use dictionary::{Dictionary, Formable, PrefixSet};
pub use error::Error;
pub use grid::{Bonus, Grid};
pub use moves::Move;
pub use placement::{validate_submission, PlacementError, Submission};
pub use score::{score_move, score_words, LetterScore, WordScore, BINGO_BONUS};
pub use search::{find_move, find_moves_parallel, Bot, Phase, SearchRequest};
pub use strategy::{Difficulty, Profile, Strategy};
pub use tilebag::TileBag;
pub use tiles::{decode, encode, Cell, Direction, Letter, PlacedTile, Rack, RackCounts, Tile, RACK_SIZE};
pub use tilesets::TileSet;
