//! The scrollable surface the fast scroller decorates

use std::time::Duration;

use fastscroll_animation::DecorTransition;
use fastscroll_core::{Rect, SurfaceMetrics};

/// A scrollable surface: live metrics plus the sink for controller commands.
///
/// Every method runs on the surface's UI thread.
pub trait ScrollHost: SurfaceMetrics {
    /// Scroll the content; implementations clamp to their scrollable range
    fn scroll_to(&mut self, x: f32, y: f32);

    /// Show or hide the surface's own scroll indicator
    fn set_native_scrollbar_enabled(&mut self, enabled: bool);

    /// Add the thumb visual to the overlay layer
    fn add_thumb_overlay(&mut self);

    /// Remove the thumb visual from the overlay layer
    fn remove_thumb_overlay(&mut self);

    fn layout_thumb(&mut self, bounds: Rect);

    fn translate_thumb(&mut self, x: f32, y: f32);

    /// Start a decor transition on the thumb, replacing any running one
    fn start_transition(&mut self, transition: DecorTransition);

    /// Stop the running decor transition where it is
    fn cancel_transition(&mut self);

    /// Let time pass for running animations. Hosts with their own animation
    /// engine ignore this.
    fn advance_animations(&mut self, _dt: Duration) {}
}
