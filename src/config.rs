use crate::strategy::{Difficulty, Profile, Strategy};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Placement attempts between two reads of the clock
pub const DEFAULT_POLL_INTERVAL: u32 = 16;
/// Largest accepted time multiplier
pub const MAX_TIME_MULTIPLIER: f32 = 100.0;
/// No search runs longer than this, whatever the multiplier
pub const MAX_BUDGET: Duration = Duration::from_secs(24 * 60 * 60);

/// Settings for one [`Bot`](crate::Bot).
///
/// # Example
/// ```
/// use scrabble_solver::{Difficulty, SearchConfig};
/// use std::time::Duration;
///
/// let config = SearchConfig::new(Difficulty::Hard)
///     .with_time_budget_ms(500)
///     .with_seed(7)
///     .with_time_multiplier(2.0);
/// assert_eq!(config.effective_budget(), Duration::from_secs(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    pub difficulty: Difficulty,
    /// Nominal budget, the tier's own unless overridden
    pub time_budget: Duration,
    /// Seed for anchor and candidate shuffling; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Scales the budget on slow machines, see [`calibrate`](crate::calibrate::calibrate)
    pub time_multiplier: f32,
    pub poll_interval: u32,
}

impl SearchConfig {
    pub fn new(difficulty: Difficulty) -> SearchConfig {
        SearchConfig {
            difficulty,
            time_budget: Profile::new(difficulty).time_budget(),
            seed: None,
            time_multiplier: 1.0,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_time_budget_ms(mut self, ms: u32) -> SearchConfig {
        self.time_budget = Duration::from_millis(ms as u64);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> SearchConfig {
        self.seed = Some(seed);
        self
    }

    /// Scale the budget by `multiplier`, clamped to `0..=MAX_TIME_MULTIPLIER`.
    /// NaN leaves the budget unscaled.
    pub fn with_time_multiplier(mut self, multiplier: f32) -> SearchConfig {
        self.time_multiplier = clamp_multiplier(multiplier);
        self
    }

    pub fn with_poll_interval(mut self, interval: u32) -> SearchConfig {
        self.poll_interval = interval.max(1);
        self
    }

    /// Budget after applying the time multiplier, at most [`MAX_BUDGET`]
    pub fn effective_budget(&self) -> Duration {
        let secs = self.time_budget.as_secs_f64() * f64::from(clamp_multiplier(self.time_multiplier));
        Duration::from_secs_f64(secs.min(MAX_BUDGET.as_secs_f64()))
    }
}

fn clamp_multiplier(multiplier: f32) -> f32 {
    if multiplier.is_nan() {
        1.0
    } else {
        multiplier.max(0.0).min(MAX_TIME_MULTIPLIER)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::new(Difficulty::Expert)
    }
}
