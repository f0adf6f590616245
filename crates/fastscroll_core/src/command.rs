//! Commands emitted by the controller for the host to apply

use std::time::Duration;

use fastscroll_animation::DecorTransition;
use smallvec::SmallVec;

use crate::geometry::Rect;
use crate::timer::TimerToken;

/// A side effect the host performs on behalf of the controller
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Scroll the host content to the given offset
    ScrollTo { x: f32, y: f32 },
    /// Enable or disable the host's own scroll indicator
    SetNativeScrollbarEnabled(bool),
    /// Add the thumb visual to the host's overlay layer
    AttachThumb,
    /// Remove the thumb visual from the overlay layer
    DetachThumb,
    /// Apply layout bounds to the thumb visual
    LayoutThumb { bounds: Rect },
    /// Move the thumb visual
    TranslateThumb { x: f32, y: f32 },
    /// Start a decor transition, cancelling any running one
    StartTransition(DecorTransition),
    /// Cancel the running decor transition where it is
    CancelTransition,
    /// Post the auto-hide callback after `delay`
    ScheduleAutoHide { token: TimerToken, delay: Duration },
    /// Drop a previously posted auto-hide callback
    CancelAutoHide { token: TimerToken },
}

/// Commands emitted by a single event
pub type Commands = SmallVec<[Command; 4]>;

/// Outcome of handing an event to the controller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    /// Whether the controller consumed the event; the host must not process it
    pub claimed: bool,
    pub commands: Commands,
}

impl Response {
    pub fn unclaimed() -> Self {
        Self::default()
    }

    pub fn new(claimed: bool, commands: Commands) -> Self {
        Self { claimed, commands }
    }

    /// Combine with a response to the same event from a later dispatch stage
    pub fn merge(mut self, other: Response) -> Self {
        self.claimed |= other.claimed;
        self.commands.extend(other.commands);
        self
    }

    /// Whether any command schedules an auto-hide
    pub fn schedules_auto_hide(&self) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, Command::ScheduleAutoHide { .. }))
    }

    /// Last scroll target issued, if any
    pub fn scroll_target(&self) -> Option<(f32, f32)> {
        self.commands.iter().rev().find_map(|c| match c {
            Command::ScrollTo { x, y } => Some((*x, *y)),
            _ => None,
        })
    }
}
