//! Input events consumed by the controller

use serde::{Deserialize, Serialize};

use crate::timer::TimerToken;

/// Masked action of a touch event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchAction {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single-pointer touch event in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionEvent {
    pub action: TouchAction,
    pub x: f32,
    pub y: f32,
    /// Event time in milliseconds of uptime
    pub time_ms: u64,
}

impl MotionEvent {
    pub fn new(action: TouchAction, x: f32, y: f32, time_ms: u64) -> Self {
        Self {
            action,
            x,
            y,
            time_ms,
        }
    }

    pub fn down(x: f32, y: f32, time_ms: u64) -> Self {
        Self::new(TouchAction::Down, x, y, time_ms)
    }

    pub fn moved(x: f32, y: f32, time_ms: u64) -> Self {
        Self::new(TouchAction::Move, x, y, time_ms)
    }

    pub fn up(x: f32, y: f32, time_ms: u64) -> Self {
        Self::new(TouchAction::Up, x, y, time_ms)
    }

    pub fn cancel(time_ms: u64) -> Self {
        Self::new(TouchAction::Cancel, 0.0, 0.0, time_ms)
    }
}

/// Every input the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    TouchDown(MotionEvent),
    TouchMove(MotionEvent),
    TouchUp(MotionEvent),
    TouchCancel(MotionEvent),
    ScrollChanged {
        left: f32,
        top: f32,
        old_left: f32,
        old_top: f32,
    },
    SizeChanged {
        width: f32,
        height: f32,
        old_width: f32,
        old_height: f32,
    },
    /// The host's deferred auto-hide callback ran
    AutoHideFired(TimerToken),
    /// The host asks for the thumb regardless of fling velocity
    ShowRequested,
}

impl From<MotionEvent> for Event {
    fn from(event: MotionEvent) -> Self {
        match event.action {
            TouchAction::Down => Event::TouchDown(event),
            TouchAction::Move => Event::TouchMove(event),
            TouchAction::Up => Event::TouchUp(event),
            TouchAction::Cancel => Event::TouchCancel(event),
        }
    }
}
