//! Deferred callbacks on a virtual clock
//!
//! Stands in for a UI thread's delayed-message queue. Time only moves when
//! the owner advances it, so replays are deterministic.

use std::time::Duration;

use fastscroll_core::TimerToken;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct TimerId;
}

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    due_ms: u64,
    /// Insertion order, breaks ties between timers due at the same instant
    seq: u64,
    token: TimerToken,
}

/// Single-threaded queue of auto-hide callbacks keyed by token
#[derive(Debug)]
pub struct TimerQueue {
    timers: SlotMap<TimerId, PendingTimer>,
    now_ms: u64,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            now_ms: 0,
            next_seq: 0,
        }
    }

    /// Current virtual time
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Post `token` to fire `delay` from now
    pub fn schedule(&mut self, token: TimerToken, delay: Duration) -> TimerId {
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        let due_ms = self.now_ms.saturating_add(delay_ms);
        let seq = self.next_seq;
        self.next_seq += 1;
        tracing::trace!("timer {} due at {}ms", token.raw(), due_ms);
        self.timers.insert(PendingTimer { due_ms, seq, token })
    }

    /// Remove every pending callback for `token`. Returns whether any was pending.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.timers.len();
        self.timers.retain(|_, timer| timer.token != token);
        before != self.timers.len()
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Due time of the earliest pending callback
    pub fn next_due_ms(&self) -> Option<u64> {
        self.timers.values().map(|timer| timer.due_ms).min()
    }

    /// Pop the earliest callback due at or before `until_ms`, moving the
    /// clock to its due time.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<TimerToken> {
        let (id, timer) = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.due_ms <= until_ms)
            .min_by_key(|(_, timer)| (timer.due_ms, timer.seq))
            .map(|(id, timer)| (id, *timer))?;

        self.timers.remove(id);
        self.now_ms = self.now_ms.max(timer.due_ms);
        Some(timer.token)
    }

    /// Move the clock forward; never moves it backwards
    pub fn advance_to(&mut self, target_ms: u64) {
        self.now_ms = self.now_ms.max(target_ms);
    }
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self::new()
    }
}
