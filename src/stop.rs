//! Wall-clock stop oracle over a monotonic clock.

use std::time::{Duration, Instant};

/// Deadline shared by every attempt of a descent run.
#[derive(Clone, Debug)]
pub struct StopCriterion {
    start: Instant,
    limit: Option<Duration>,
}

impl StopCriterion {
    /// Start the clock with a budget of `seconds`.
    pub fn new(seconds: f64) -> Self {
        Self {
            start: Instant::now(),
            limit: Some(Duration::from_secs_f64(seconds)),
        }
    }

    /// No deadline. Deterministic tests must use this together with an
    /// iteration cap; time-bounded runs are wall-clock sensitive.
    pub fn unlimited() -> Self {
        Self { start: Instant::now(), limit: None }
    }

    #[inline]
    pub fn is_time_up(&self) -> bool {
        match self.limit {
            Some(limit) => self.start.elapsed() >= limit,
            None => false,
        }
    }

    /// Seconds since the clock started.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}
