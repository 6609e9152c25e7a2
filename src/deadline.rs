use std::time::{Duration, Instant};

/// Cooperative wall-clock budget for one search.
///
/// The clock is read on every [`poll`](Deadline::poll) only once per
/// `interval` calls, so the check is cheap enough for inner loops. Once the
/// budget is spent the deadline stays expired.
#[derive(Debug, Clone)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
    interval: u32,
    count: u32,
    expired: bool,
}

impl Deadline {
    pub fn new(budget: Duration, interval: u32) -> Deadline {
        Deadline {
            start: Instant::now(),
            budget,
            interval: interval.max(1),
            count: 0,
            expired: false,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Count one unit of work; returns true when the budget is spent.
    pub fn poll(&mut self) -> bool {
        if self.expired {
            return true;
        }
        self.count += 1;
        if self.count >= self.interval {
            self.count = 0;
            self.expired = self.start.elapsed() >= self.budget;
        }
        self.expired
    }

    /// Read the clock now; true when the whole budget is spent.
    pub fn expired(&mut self) -> bool {
        if !self.expired {
            self.expired = self.start.elapsed() >= self.budget;
        }
        self.expired
    }

    /// True once `fraction` of the budget has passed.
    pub fn past(&self, fraction: f32) -> bool {
        self.expired || self.start.elapsed() >= self.budget.mul_f32(fraction)
    }
}
