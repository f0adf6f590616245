//! Visibility state machine of the fast-scroll thumb
//!
//! Transitions are expressed as `(state, event) -> Option<next>` lookups, so
//! the controller can ask whether an event moves the machine before running
//! any side effects.

use serde::{Deserialize, Serialize};

/// FSM event IDs for the fast-scroll thumb
pub mod scroller_events {
    /// A fast fling (or the host) asks for the thumb
    pub const SHOW: u32 = 1;
    /// The auto-hide timer fired
    pub const AUTO_HIDE: u32 = 2;
    /// A pending drag escalated past tap timeout or slop
    pub const BEGIN_DRAG: u32 = 3;
    /// The dragging finger lifted or the gesture was cancelled
    pub const END_DRAG: u32 = 4;
    /// The host turned the fast scroller off
    pub const DISABLE: u32 = 5;
}

/// Visibility state of the thumb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollerState {
    /// Thumb invisible, host's native scroll indicator in charge
    #[default]
    Hidden,
    /// Thumb visible and tracking scroll position
    Visible,
    /// Thumb held by the user; moves are seeking the content
    Dragging,
}

impl ScrollerState {
    /// Handle an event and return the new state, or `None` if no transition
    pub fn on_event(&self, event: u32) -> Option<Self> {
        use scroller_events::*;
        match (self, event) {
            (ScrollerState::Hidden, SHOW) => Some(ScrollerState::Visible),
            (ScrollerState::Visible, AUTO_HIDE) => Some(ScrollerState::Hidden),
            (ScrollerState::Visible, BEGIN_DRAG) => Some(ScrollerState::Dragging),
            (ScrollerState::Dragging, END_DRAG) => Some(ScrollerState::Visible),
            (ScrollerState::Visible | ScrollerState::Dragging, DISABLE) => {
                Some(ScrollerState::Hidden)
            }
            _ => None,
        }
    }

    /// Whether the thumb is on screen
    pub fn is_showing(&self) -> bool {
        !matches!(self, ScrollerState::Hidden)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, ScrollerState::Dragging)
    }
}

#[cfg(test)]
mod tests {
    use super::scroller_events::*;
    use super::*;

    #[test]
    fn test_reveal_hide_cycle() {
        let state = ScrollerState::default();
        assert_eq!(state, ScrollerState::Hidden);

        let state = state.on_event(SHOW).unwrap();
        assert_eq!(state, ScrollerState::Visible);
        assert!(state.is_showing());

        let state = state.on_event(AUTO_HIDE).unwrap();
        assert_eq!(state, ScrollerState::Hidden);
        assert!(!state.is_showing());
    }

    #[test]
    fn test_drag_cycle() {
        let state = ScrollerState::Visible.on_event(BEGIN_DRAG).unwrap();
        assert!(state.is_dragging());
        assert!(state.is_showing());
        assert_eq!(state.on_event(END_DRAG), Some(ScrollerState::Visible));
    }

    #[test]
    fn test_auto_hide_ignored_while_dragging() {
        assert_eq!(ScrollerState::Dragging.on_event(AUTO_HIDE), None);
        assert_eq!(ScrollerState::Dragging.on_event(SHOW), None);
    }

    #[test]
    fn test_disable_hides_from_any_showing_state() {
        assert_eq!(ScrollerState::Visible.on_event(DISABLE), Some(ScrollerState::Hidden));
        assert_eq!(ScrollerState::Dragging.on_event(DISABLE), Some(ScrollerState::Hidden));
        assert_eq!(ScrollerState::Hidden.on_event(DISABLE), None);
    }

    #[test]
    fn test_drag_needs_visible_thumb() {
        assert_eq!(ScrollerState::Hidden.on_event(BEGIN_DRAG), None);
        assert_eq!(ScrollerState::Hidden.on_event(END_DRAG), None);
        assert_eq!(ScrollerState::Visible.on_event(SHOW), None);
    }
}
