//! Velocity tracking for fling detection
//!
//! The controller obtains a fresh tracker at the start of every touch
//! sequence and hands it back by value when the sequence ends. Because
//! [`VelocityTracker::finish`] consumes the tracker, a released tracker cannot
//! be read or released again.

use std::collections::VecDeque;

/// Samples older than this (relative to the newest) do not affect velocity
const HISTORY_LIMIT_MS: u64 = 100;

/// Computes release velocity from the movements of one touch sequence.
pub trait VelocityTracker: Default {
    /// Record the pointer position at `time_ms`
    fn add_movement(&mut self, y: f32, time_ms: u64);

    /// Release the tracker, returning vertical velocity in units per second
    fn finish(self) -> f32;
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    y: f32,
    time_ms: u64,
}

/// Velocity over a short sliding window of recent samples.
#[derive(Debug, Default)]
pub struct WindowedVelocityTracker {
    history: VecDeque<Sample>,
}

impl WindowedVelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current vertical velocity in units per second
    pub fn velocity_y(&self) -> f32 {
        let (Some(first), Some(last)) = (self.history.front(), self.history.back()) else {
            return 0.0;
        };

        let elapsed_ms = last.time_ms - first.time_ms;
        if elapsed_ms == 0 {
            return 0.0;
        }

        (last.y - first.y) * 1000.0 / elapsed_ms as f32
    }

    fn trim_history(&mut self) {
        let Some(&Sample { time_ms, .. }) = self.history.back() else {
            return;
        };

        while let Some(first) = self.history.front() {
            if time_ms <= first.time_ms + HISTORY_LIMIT_MS {
                break;
            }
            let _ = self.history.pop_front();
        }
    }
}

impl VelocityTracker for WindowedVelocityTracker {
    fn add_movement(&mut self, y: f32, time_ms: u64) {
        if let Some(last) = self.history.back() {
            if time_ms < last.time_ms {
                tracing::trace!(
                    "ignoring sample at {time_ms}ms earlier than last {}ms",
                    last.time_ms
                );
                return;
            }
        }

        self.history.push_back(Sample { y, time_ms });
        self.trim_history();
    }

    fn finish(self) -> f32 {
        self.velocity_y()
    }
}
