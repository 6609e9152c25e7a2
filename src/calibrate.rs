//! A short benchmark that scales search budgets to the machine.
use crate::dictionary::Dictionary;
use crate::tiles::{Letter, RackCounts};
use log::info;
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

const ITERATIONS: usize = 5000;
/// Time the benchmark takes on a reference machine
const BASELINE: Duration = Duration::from_millis(50);

const RACKS: [&str; 4] = ["SCRABLE", "TESTING", "WORDSAE", "QUIZXJK"];
const WORDS: [&str; 12] = [
    "THE", "AND", "SCRABBLE", "TESTING", "WORD", "QUIZ", "ABLE", "BEST", "CARE", "DONE", "EACH",
    "FAST",
];

/// Speed class of a machine, from its performance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceTier {
    Fast,
    Good,
    Average,
    Slow,
    VerySlow,
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PerformanceTier::Fast => "Fast",
            PerformanceTier::Good => "Good",
            PerformanceTier::Average => "Average",
            PerformanceTier::Slow => "Slow",
            PerformanceTier::VerySlow => "Very Slow",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of [`calibrate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceProfile {
    /// Baseline time over measured time: 1.0 or more is a reference machine
    pub performance_score: f64,
    pub time_multiplier: f32,
    pub is_low_end: bool,
    pub elapsed: Duration,
}

impl PerformanceProfile {
    /// Profile for a measured benchmark time.
    pub fn from_elapsed(elapsed: Duration) -> PerformanceProfile {
        let seconds = elapsed.as_secs_f64().max(f64::EPSILON);
        let performance_score = BASELINE.as_secs_f64() / seconds;
        let (time_multiplier, is_low_end) = if performance_score < 0.25 {
            (3.0, true)
        } else if performance_score < 0.5 {
            (2.0, true)
        } else if performance_score < 0.75 {
            (1.5, false)
        } else if performance_score < 1.0 {
            (1.2, false)
        } else {
            (1.0, false)
        };
        PerformanceProfile {
            performance_score,
            time_multiplier,
            is_low_end,
            elapsed,
        }
    }

    pub fn tier(&self) -> PerformanceTier {
        match self.time_multiplier {
            m if m >= 3.0 => PerformanceTier::VerySlow,
            m if m >= 2.0 => PerformanceTier::Slow,
            m if m >= 1.5 => PerformanceTier::Average,
            m if m >= 1.2 => PerformanceTier::Good,
            _ => PerformanceTier::Fast,
        }
    }

    /// `base` scaled by the time multiplier
    pub fn adjusted_budget(&self, base: Duration) -> Duration {
        base.mul_f32(self.time_multiplier)
    }
}

/// Time the operations a bot repeats most, lookups and rack bookkeeping,
/// and derive a time multiplier from it.
pub fn calibrate(dictionary: &Dictionary) -> PerformanceProfile {
    let start = Instant::now();
    for i in 0..ITERATIONS {
        let rack = RACKS[i % RACKS.len()];
        let word = WORDS[i % WORDS.len()];

        black_box(dictionary.contains(word));
        black_box(dictionary.contains(&word.to_lowercase()));

        let mut counts = RackCounts::default();
        counts.extend_with(rack.bytes().filter_map(Letter::from_ascii));
        for letter in word.bytes().filter_map(Letter::from_ascii) {
            black_box(counts.take(letter));
        }

        let mut sorted: Vec<u8> = rack.bytes().collect();
        sorted.sort_unstable();
        black_box(sorted);
    }
    let profile = PerformanceProfile::from_elapsed(start.elapsed());
    info!(
        "calibrated in {:?}: score {:.2}, {} machine, time x{}",
        profile.elapsed,
        profile.performance_score,
        profile.tier(),
        profile.time_multiplier
    );
    profile
}
