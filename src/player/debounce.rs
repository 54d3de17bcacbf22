//! Trailing-edge debounce over host timers.
//!
//! Host timers cannot be cancelled, so each arm bumps a generation and tags
//! the scheduled timer with it. Only the timer carrying the latest generation
//! is honored when it fires.

use std::time::Duration;

use crate::host::{Scheduler, Timer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debounce {
    delay: Duration,
    generation: u64,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// (Re)start the quiet period, superseding any pending timer.
    pub fn arm<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S, timer: fn(u64) -> Timer) {
        self.generation += 1;
        scheduler.schedule(timer(self.generation), self.delay);
    }

    /// Whether a timer armed at `generation` is still the latest.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}
