//! The move search: anchors, candidates, placements, ranking.
use crate::anchors::{self, Anchor};
use crate::board::Board;
use crate::candidates;
use crate::config::SearchConfig;
use crate::deadline::Deadline;
use crate::dictionary::Dictionary;
use crate::moves::Move;
use crate::placement::Placer;
use crate::strategy::{Candidate, Difficulty, Profile, SearchOrder, Strategy};
use crate::tiles::{Direction, Rack};
use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::time::Duration;

/// Words tried per anchor and direction on the fallback path
const FALLBACK_POOL: usize = 20;

/// Where a search is. Every search runs from `Idle` to `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    EnumeratingAnchors,
    GeneratingCandidates,
    ValidatingPlacements,
    Ranking,
    Done,
}

/// A computer player of one difficulty.
///
/// # Example
/// ```
/// use scrabble_solver::{Board, Bot, Dictionary, Difficulty, Rack, SearchConfig};
/// use std::convert::TryFrom;
///
/// let dictionary = Dictionary::from_words(&["CAT", "ACT", "AT", "TA"])?;
/// let config = SearchConfig::new(Difficulty::Expert).with_seed(1).with_time_budget_ms(1000);
/// let mut bot = Bot::with_config(config);
/// let rack = Rack::try_from("CATXYZQ")?;
/// let mv = bot.find_move(&rack, &Board::default(), &dictionary, true).unwrap();
/// assert!(mv.word == "CAT" || mv.word == "ACT");
/// assert_eq!(mv.score, 10);
/// # Ok::<(), scrabble_solver::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Bot {
    config: SearchConfig,
    profile: Profile,
    rng: StdRng,
    phase: Phase,
}

impl Bot {
    pub fn new(difficulty: Difficulty) -> Bot {
        Bot::with_config(SearchConfig::new(difficulty))
    }

    pub fn with_config(config: SearchConfig) -> Bot {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Bot {
            profile: Profile::new(config.difficulty),
            config,
            rng,
            phase: Phase::Idle,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// Phase of the current or last search
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Best move for `rack` on `board`, or `None` to pass.
    pub fn find_move(
        &mut self,
        rack: &Rack,
        board: &Board,
        dictionary: &Dictionary,
        is_first_move: bool,
    ) -> Option<Move> {
        self.find_moves(rack, board, dictionary, is_first_move)
            .into_iter()
            .next()
    }

    /// All moves found within the budget, best first.
    pub fn find_moves(
        &mut self,
        rack: &Rack,
        board: &Board,
        dictionary: &Dictionary,
        is_first_move: bool,
    ) -> Vec<Move> {
        let budget = self.config.effective_budget();
        let interval = self.config.poll_interval;
        let mut deadline = Deadline::new(budget, interval);
        let mut placement = Deadline::new(self.placement_budget(budget), interval);
        let difficulty = self.difficulty();

        self.set_phase(Phase::EnumeratingAnchors);
        let mut anchors = anchors::find_anchors(board, is_first_move);
        anchors::order_anchors(&mut anchors, board, self.profile.anchor_order(), &mut self.rng);
        trace!("{} anchors: {:?}", anchors.len(), anchors);

        self.set_phase(Phase::GeneratingCandidates);
        let pool = self
            .profile
            .generate_candidates(board, rack, dictionary, &deadline, &mut self.rng);

        self.set_phase(Phase::ValidatingPlacements);
        let placer = Placer::new(board, dictionary, rack, is_first_move);
        let mut found = Found::new(self.profile.max_candidates());
        match self.profile.search_order() {
            SearchOrder::AnchorFirst => anchor_first(&placer, &anchors, &pool, &mut placement, &mut found),
            SearchOrder::WordFirst => word_first(&placer, &anchors, &pool, &mut placement, &mut found),
        }

        if found.moves.is_empty() && !deadline.expired() {
            warn!("{}: no move from {} candidates, trying board letters", difficulty, pool.len());
            fallback(&placer, board, rack, dictionary, &anchors, &mut deadline, &mut found);
        }
        if deadline.expired() {
            debug!("{}: time budget of {:?} spent", difficulty, budget);
        }

        self.set_phase(Phase::Ranking);
        let mut moves = found.moves;
        for mv in moves.iter_mut() {
            mv.strategic_value = self.profile.evaluate(board, mv);
        }
        let profile = self.profile;
        moves.sort_by_key(|mv| Reverse((profile.ranking_key(mv), mv.score)));

        match moves.first() {
            Some(best) => info!(
                "{}: {} moves from {} candidates in {:?}, best {} ({:+})",
                difficulty,
                moves.len(),
                pool.len(),
                deadline.elapsed(),
                best,
                best.strategic_value
            ),
            None => info!(
                "{}: no move from {} candidates in {:?}, pass",
                difficulty,
                pool.len(),
                deadline.elapsed()
            ),
        }
        self.set_phase(Phase::Done);
        moves
    }

    /// Share of `budget` spent trying placements; the rest is left for ranking.
    fn placement_budget(&self, budget: Duration) -> Duration {
        budget.mul_f32(self.profile.placement_fraction())
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!("{}: {:?} -> {:?}", self.config.difficulty, self.phase, phase);
        self.phase = phase;
    }
}

/// Moves collected so far, without repeats.
struct Found {
    moves: Vec<Move>,
    seen: HashSet<(usize, usize, Direction, String)>,
    limit: Option<usize>,
}

impl Found {
    fn new(limit: Option<usize>) -> Found {
        Found {
            moves: Vec::new(),
            seen: HashSet::new(),
            limit,
        }
    }

    fn add(&mut self, mv: Move) {
        if self.seen.insert((mv.row, mv.col, mv.direction, mv.word.clone())) {
            trace!("found {}", mv);
            self.moves.push(mv);
        }
    }

    fn is_full(&self) -> bool {
        self.limit.map_or(false, |limit| self.moves.len() >= limit)
    }
}

/// For every anchor and direction, the first word of the pool that fits.
fn anchor_first(
    placer: &Placer,
    anchors: &[Anchor],
    pool: &[Candidate],
    deadline: &mut Deadline,
    found: &mut Found,
) {
    for anchor in anchors {
        for &direction in Direction::both().iter() {
            for candidate in pool {
                if deadline.poll() {
                    return;
                }
                if let Some(mv) = try_candidate(placer, candidate, anchor, direction) {
                    found.add(mv);
                    break;
                }
            }
            if found.is_full() {
                return;
            }
        }
    }
}

/// For every word of the pool, every anchor and direction.
fn word_first(
    placer: &Placer,
    anchors: &[Anchor],
    pool: &[Candidate],
    deadline: &mut Deadline,
    found: &mut Found,
) {
    for candidate in pool {
        if let Candidate::Hook(hook) = candidate {
            if deadline.poll() {
                return;
            }
            if let Some(mv) = placer.try_place(&hook.word, hook.row, hook.col, hook.direction) {
                found.add(mv);
            }
        } else {
            for anchor in anchors {
                for &direction in Direction::both().iter() {
                    if deadline.poll() {
                        return;
                    }
                    if let Some(mv) = try_candidate(placer, candidate, anchor, direction) {
                        found.add(mv);
                    }
                }
            }
        }
        if found.is_full() {
            return;
        }
    }
}

fn try_candidate(placer: &Placer, candidate: &Candidate, anchor: &Anchor, direction: Direction) -> Option<Move> {
    match candidate {
        Candidate::Word(word) => placer.try_place(word, anchor.row, anchor.col, direction),
        Candidate::Hook(hook) if (hook.row, hook.col, hook.direction) == (anchor.row, anchor.col, direction) => {
            placer.try_place(&hook.word, hook.row, hook.col, hook.direction)
        }
        Candidate::Hook(_) => None,
    }
}

/// Words that need letters on the board: at every anchor the letters around it
/// in a direction extend the rack, for formability only.
fn fallback(
    placer: &Placer,
    board: &Board,
    rack: &Rack,
    dictionary: &Dictionary,
    anchors: &[Anchor],
    deadline: &mut Deadline,
    found: &mut Found,
) {
    let counts = rack.counts();
    for anchor in anchors {
        for &direction in Direction::both().iter() {
            if deadline.expired() {
                return;
            }
            let around = board.letters_around(anchor.row, anchor.col, direction);
            let words = candidates::with_board_letters(dictionary, &counts, &around, FALLBACK_POOL, deadline);
            for word in &words {
                if deadline.poll() {
                    return;
                }
                if let Some(mv) = placer.try_place(word, anchor.row, anchor.col, direction) {
                    found.add(mv);
                }
            }
            if found.is_full() {
                return;
            }
        }
    }
}

/// Best move for `rack` on `board` within `time_budget_ms`, searched at the
/// expert tier. `None` means pass.
///
/// # Example
/// ```
/// use scrabble_solver::{find_move, Board, Dictionary, Rack};
/// use std::convert::TryFrom;
///
/// let dictionary = Dictionary::from_words(&["CAT"])?;
/// let rack = Rack::try_from("CAT____")?;
/// let mv = find_move(&rack, &Board::default(), &dictionary, true, 2000).unwrap();
/// assert_eq!((mv.word.as_str(), mv.score, mv.tiles.len()), ("CAT", 10, 3));
/// # Ok::<(), scrabble_solver::Error>(())
/// ```
pub fn find_move(
    rack: &Rack,
    board: &Board,
    dictionary: &Dictionary,
    is_first_move: bool,
    time_budget_ms: u32,
) -> Option<Move> {
    let config = SearchConfig::new(Difficulty::Expert).with_time_budget_ms(time_budget_ms);
    Bot::with_config(config).find_move(rack, board, dictionary, is_first_move)
}

/// One independent search, as run by [`find_moves_parallel`].
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub config: SearchConfig,
    pub rack: Rack,
    pub board: Board,
    pub is_first_move: bool,
}

/// Run independent searches that share one dictionary, one per request.
/// Results are in request order.
pub fn find_moves_parallel(requests: &[SearchRequest], dictionary: &Dictionary) -> Vec<Option<Move>> {
    let search = |request: &SearchRequest| {
        Bot::with_config(request.config.clone()).find_move(
            &request.rack,
            &request.board,
            dictionary,
            request.is_first_move,
        )
    };
    #[cfg(feature = "rayon")]
    {
        requests.par_iter().map(search).collect()
    }
    #[cfg(not(feature = "rayon"))]
    {
        requests.iter().map(search).collect()
    }
}
