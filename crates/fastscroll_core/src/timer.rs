//! Auto-hide timer bookkeeping
//!
//! The controller never owns a clock. It hands the host a [`TimerToken`] in a
//! schedule command and later receives the same token back when the timer
//! fires. Only the most recently scheduled token is live; anything else is a
//! stale callback and gets ignored.

use std::time::Duration;

use crate::command::{Command, Commands};

/// Identity of one scheduled auto-hide callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// At most one outstanding auto-hide callback
#[derive(Debug, Default)]
pub struct AutoHideTimer {
    next: u64,
    outstanding: Option<TimerToken>,
}

impl AutoHideTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token of the callback currently scheduled, if any
    pub fn outstanding(&self) -> Option<TimerToken> {
        self.outstanding
    }

    pub fn is_scheduled(&self) -> bool {
        self.outstanding.is_some()
    }

    /// Cancel the outstanding callback, if any
    pub fn cancel(&mut self, commands: &mut Commands) {
        if let Some(token) = self.outstanding.take() {
            commands.push(Command::CancelAutoHide { token });
        }
    }

    /// Cancel the outstanding callback and schedule a fresh one
    pub fn reschedule(&mut self, delay: Duration, commands: &mut Commands) {
        self.cancel(commands);
        self.next += 1;
        let token = TimerToken(self.next);
        self.outstanding = Some(token);
        commands.push(Command::ScheduleAutoHide { token, delay });
    }

    /// Consume a fired token. Returns `false` for stale or cancelled tokens.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.outstanding == Some(token) {
            self.outstanding = None;
            true
        } else {
            false
        }
    }
}
