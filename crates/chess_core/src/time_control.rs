//! Search limits and time accounting.
//!
//! Searches run to a fixed depth. The host still hands over a time budget;
//! it is recorded here so the engine can report elapsed time and flag
//! overruns, but nothing in a search consults it.

use std::time::{Duration, Instant};

/// Limits handed to an engine for one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Search depth in plies (half-moves)
    pub depth: u8,
    /// Time the host allows for this move (None = unbounded)
    pub move_time: Option<Duration>,
}

impl SearchLimits {
    /// Create limits with only depth constraint (no time limit).
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
        }
    }

    /// Create limits with both a depth and a time budget.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(3)
    }
}

/// Wall clock for a single search.
#[derive(Debug, Clone, Default)]
pub struct TimeControl {
    /// Start time of the search
    start_time: Option<Instant>,
    /// Budget for this search (None = infinite)
    time_limit: Option<Duration>,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            start_time: None,
            time_limit,
        }
    }

    /// Start (or restart) the clock.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Elapsed time since `start`, zero if never started.
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Get remaining time (None if no limit).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }

    /// True once a started clock has run past its limit.
    pub fn is_over_budget(&self) -> bool {
        match (self.time_limit, self.start_time) {
            (Some(limit), Some(start)) => start.elapsed() > limit,
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
