//! Deadline clock consulted by every recursive search frame.
//!
//! The clock never snapshots the remaining time: each `expired` call asks the
//! live source again, so a tournament clock that keeps running during the
//! search is honoured. The margin is the slack the call stack needs to unwind
//! back to the driver before the real deadline.

use std::time::{Duration, Instant};

/// Live "time left for this move" query supplied by the caller.
pub trait TimeLeft {
    fn time_left(&self) -> Duration;
}

impl<F> TimeLeft for F
where
    F: Fn() -> Duration,
{
    #[inline]
    fn time_left(&self) -> Duration {
        self()
    }
}

/// Monotonic per-move budget started at construction.
#[derive(Debug, Clone, Copy)]
pub struct MoveClock {
    started_at: Instant,
    budget: Duration,
}

impl MoveClock {
    pub fn start(budget: Duration) -> Self {
        Self {
            started_at: Instant::now(),
            budget,
        }
    }

    pub fn from_millis(budget_ms: u64) -> Self {
        Self::start(Duration::from_millis(budget_ms))
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl TimeLeft for MoveClock {
    #[inline]
    fn time_left(&self) -> Duration {
        self.budget.saturating_sub(self.started_at.elapsed())
    }
}

/// Fixed for the whole top-level search call.
pub struct Deadline<'a> {
    source: &'a dyn TimeLeft,
    margin: Duration,
}

impl<'a> Deadline<'a> {
    pub fn new(source: &'a dyn TimeLeft, margin: Duration) -> Self {
        Self { source, margin }
    }

    #[inline]
    pub fn remaining(&self) -> Duration {
        self.source.time_left()
    }

    #[inline]
    pub fn expired(&self) -> bool {
        self.remaining() < self.margin
    }
}
