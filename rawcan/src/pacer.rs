use std::{thread, time::Duration};
use crate::constants::MIN_INTERVAL_US;

/// Fixed delay applied between consecutive transmitted frames.
///
/// A zero request disables pacing entirely; any other value is raised to
/// the 100 µs floor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    interval: Option<Duration>,
}

impl Pacer {
    pub fn from_micros(micros: u64) -> Self {
        let interval = match micros {
            0 => None,
            n => Some(Duration::from_micros(n.max(MIN_INTERVAL_US))),
        };
        Self { interval }
    }

    /// The effective inter-frame interval, `None` when pacing is off.
    #[inline]
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Blocks the calling thread for the configured interval.
    pub fn pause(&self) {
        if let Some(interval) = self.interval {
            thread::sleep(interval);
        }
    }
}
