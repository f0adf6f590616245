//! Fastscroll Core
//!
//! Gesture interpretation and positioning logic for a fast-scroll thumb
//! overlaid on a scrollable surface.
//!
//! # Features
//!
//! - **State machine**: `Hidden`, `Visible` and `Dragging` with explicit transitions
//! - **Fling reveal**: the thumb appears on fast flings over long content
//! - **Drag to seek**: dragging the thumb scrolls the content proportionally
//! - **Auto-hide**: tokenized timer commands, stale callbacks are ignored
//! - **Geometry**: scroll/thumb mapping, trailing-edge layout, expanded hit target
//!
//! The controller is pure: it reads host metrics through [`SurfaceMetrics`]
//! and answers every event with a [`Response`] listing the [`Command`]s the
//! host should apply.

pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod geometry;
pub mod state;
pub mod timer;
pub mod velocity;

pub use command::{Command, Commands, Response};
pub use config::FastScrollConfig;
pub use controller::{FastScroller, PendingDrag};
pub use error::{ConfigError, Result};
pub use events::{Event, MotionEvent, TouchAction};
pub use geometry::{
    drag_scroll_target, scroll_progress, thumb_translation_y, track_height, GeometryMapper,
    Insets, LayoutUpdate, Rect, Size, SurfaceMetrics, ThumbGeometry, Viewport,
};
pub use state::{scroller_events, ScrollerState};
pub use timer::{AutoHideTimer, TimerToken};
pub use velocity::{VelocityTracker, WindowedVelocityTracker};
