//! Difficulty tiers, as configurations of one [`Strategy`].
use crate::anchors::AnchorOrder;
use crate::board::Board;
use crate::candidates::{self, HookPlay};
use crate::deadline::Deadline;
use crate::dictionary::Dictionary;
use crate::evaluate;
use crate::moves::Move;
use crate::tiles::Rack;
use crate::Error;
use log::debug;
use rand::rngs::StdRng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Skill tier of a bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub fn all() -> [Difficulty; 4] {
        [
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Difficulty {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(Error::UnknownDifficulty(String::from(s))),
        }
    }
}

/// A word to try on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// Try at every anchor, in both directions
    Word(String),
    /// Only at the hook square, along the extended word
    Hook(HookPlay),
}

impl Candidate {
    pub fn word(&self) -> &str {
        match self {
            Candidate::Word(word) => word,
            Candidate::Hook(hook) => &hook.word,
        }
    }
}

/// How placements are enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOrder {
    /// For each anchor and direction, the first candidate that fits
    AnchorFirst,
    /// For each candidate, every anchor and direction
    WordFirst,
}

/// The seam between the search and a tier: where candidates come from, how
/// anchors are ordered, how moves are ranked, and how much time it gets.
pub trait Strategy {
    fn difficulty(&self) -> Difficulty;

    /// Nominal wall-clock budget for one search
    fn time_budget(&self) -> Duration;

    fn anchor_order(&self) -> AnchorOrder;

    fn search_order(&self) -> SearchOrder;

    /// Stop enumerating once this many moves are found
    fn max_candidates(&self) -> Option<usize>;

    /// Share of the budget after which no new placements are tried
    fn placement_fraction(&self) -> f32 {
        1.0
    }

    /// The candidate pool for `rack`, most promising first.
    fn generate_candidates(
        &self,
        board: &Board,
        rack: &Rack,
        dictionary: &Dictionary,
        deadline: &Deadline,
        rng: &mut StdRng,
    ) -> Vec<Candidate>;

    /// Adjustment added to the raw score for ranking
    fn evaluate(&self, board: &Board, mv: &Move) -> i32;

    /// Ranking key: higher is better
    fn ranking_key(&self, mv: &Move) -> i64 {
        mv.ranking_value()
    }
}

/// Where a tier draws its candidate words from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    /// Short common words and two-letter rack combinations
    EasyList,
    /// Everyday vocabulary, longest words first
    MediumList,
    /// Full dictionary scan, best estimates first
    Scan,
    /// Prefix trie walk plus hook plays, best estimates first
    PrefixWalk,
}

/// One of the four tier configurations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    difficulty: Difficulty,
    budget: Duration,
    source: Source,
    pool_cap: usize,
    anchor_order: AnchorOrder,
    search_order: SearchOrder,
    max_candidates: Option<usize>,
    /// Share of the budget candidate generation may use
    generation_fraction: f32,
    placement_fraction: f32,
}

impl Profile {
    pub fn new(difficulty: Difficulty) -> Profile {
        match difficulty {
            Difficulty::Easy => Profile {
                difficulty,
                budget: Duration::from_secs(15),
                source: Source::EasyList,
                pool_cap: usize::MAX,
                anchor_order: AnchorOrder::Shuffled,
                search_order: SearchOrder::AnchorFirst,
                max_candidates: Some(3),
                generation_fraction: 1.0,
                placement_fraction: 1.0,
            },
            Difficulty::Medium => Profile {
                difficulty,
                budget: Duration::from_secs(15),
                source: Source::MediumList,
                pool_cap: usize::MAX,
                anchor_order: AnchorOrder::Shuffled,
                search_order: SearchOrder::AnchorFirst,
                max_candidates: Some(8),
                generation_fraction: 1.0,
                placement_fraction: 1.0,
            },
            Difficulty::Hard => Profile {
                difficulty,
                budget: Duration::from_secs(20),
                source: Source::Scan,
                pool_cap: 100,
                anchor_order: AnchorOrder::ByBonus,
                search_order: SearchOrder::WordFirst,
                max_candidates: Some(30),
                generation_fraction: 0.4,
                placement_fraction: 1.0,
            },
            Difficulty::Expert => Profile {
                difficulty,
                budget: Duration::from_secs(25),
                source: Source::PrefixWalk,
                pool_cap: 200,
                anchor_order: AnchorOrder::ByPriority,
                search_order: SearchOrder::WordFirst,
                max_candidates: None,
                generation_fraction: 1.0,
                placement_fraction: 0.8,
            },
        }
    }
}

impl Strategy for Profile {
    fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    fn time_budget(&self) -> Duration {
        self.budget
    }

    fn anchor_order(&self) -> AnchorOrder {
        self.anchor_order
    }

    fn search_order(&self) -> SearchOrder {
        self.search_order
    }

    fn max_candidates(&self) -> Option<usize> {
        self.max_candidates
    }

    fn placement_fraction(&self) -> f32 {
        self.placement_fraction
    }

    fn generate_candidates(
        &self,
        board: &Board,
        rack: &Rack,
        dictionary: &Dictionary,
        deadline: &Deadline,
        rng: &mut StdRng,
    ) -> Vec<Candidate> {
        let counts = rack.counts();
        let words = match self.source {
            Source::EasyList => candidates::curated_easy(rack, dictionary, rng),
            Source::MediumList => candidates::curated_medium(rack, dictionary, rng),
            Source::Scan => candidates::dictionary_scan(
                dictionary,
                &counts,
                self.pool_cap,
                deadline,
                self.generation_fraction,
            ),
            Source::PrefixWalk => {
                let mut words = candidates::prefix_walk(dictionary, &counts, self.pool_cap, deadline);
                candidates::dedup(&mut words);
                let hooks = candidates::hook_plays(board, &counts, dictionary, deadline);
                debug!("{}: {} words, {} hooks", self.difficulty, words.len(), hooks.len());
                return hooks
                    .into_iter()
                    .map(Candidate::Hook)
                    .chain(words.into_iter().map(Candidate::Word))
                    .collect();
            }
        };
        debug!("{}: {} candidate words", self.difficulty, words.len());
        words.into_iter().map(Candidate::Word).collect()
    }

    fn evaluate(&self, board: &Board, mv: &Move) -> i32 {
        match self.difficulty {
            Difficulty::Medium => 2 * mv.tiles.len() as i32,
            Difficulty::Expert => evaluate::strategic_value(board, mv),
            Difficulty::Easy | Difficulty::Hard => 0,
        }
    }
}
