//! Gesture/state controller
//!
//! [`FastScroller`] turns touch, scroll, size and timer events into thumb
//! state changes and host commands. It never touches the host directly: every
//! call reads live metrics through [`SurfaceMetrics`] and returns a
//! [`Response`] whose commands the host applies.
//!
//! # Dispatch order
//!
//! Hosts deliver a touch the way platform view hierarchies do: first to
//! [`FastScroller::on_intercept_touch_event`], then to
//! [`FastScroller::on_touch_event`]. [`FastScroller::handle`] does both for a
//! single tagged [`Event`].
//!
//! # Example
//!
//! ```rust
//! use fastscroll_core::{FastScroller, MotionEvent, ScrollerState, Viewport};
//!
//! let viewport = Viewport::new(400.0, 1000.0, 5000.0);
//! let mut scroller: FastScroller = FastScroller::default();
//!
//! // A fast upward fling over long content reveals the thumb
//! scroller.on_touch_event(&MotionEvent::down(200.0, 900.0, 0), &viewport);
//! scroller.on_touch_event(&MotionEvent::moved(200.0, 600.0, 20), &viewport);
//! let response = scroller.on_touch_event(&MotionEvent::up(200.0, 400.0, 40), &viewport);
//!
//! assert_eq!(scroller.state(), ScrollerState::Visible);
//! assert!(response.schedules_auto_hide());
//! ```

use fastscroll_animation::DecorTransition;

use crate::command::{Command, Commands, Response};
use crate::config::FastScrollConfig;
use crate::events::{Event, MotionEvent, TouchAction};
use crate::geometry::{drag_scroll_target, GeometryMapper, SurfaceMetrics, ThumbGeometry};
use crate::state::{scroller_events, ScrollerState};
use crate::timer::{AutoHideTimer, TimerToken};
use crate::velocity::{VelocityTracker, WindowedVelocityTracker};

/// A touch-down on the thumb that has not yet become a drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingDrag {
    /// Uptime after which holding the touch escalates it into a drag
    pub deadline_ms: u64,
    /// Y of the touch-down, for slop measurement
    pub initial_y: f32,
}

impl PendingDrag {
    fn should_escalate(&self, event: &MotionEvent, touch_slop: f32) -> bool {
        event.time_ms >= self.deadline_ms || (event.y - self.initial_y).abs() >= touch_slop
    }
}

/// Fast-scroll thumb controller.
///
/// Exclusively owned by the host surface; all methods run on the host's UI
/// thread.
pub struct FastScroller<V: VelocityTracker = WindowedVelocityTracker> {
    config: FastScrollConfig,
    state: ScrollerState,
    enabled: bool,
    pending_drag: Option<PendingDrag>,
    geometry: GeometryMapper,
    auto_hide: AutoHideTimer,
    /// Tracker of the current touch sequence; released on up or cancel
    tracker: Option<V>,
}

impl<V: VelocityTracker> FastScroller<V> {
    pub fn new(config: FastScrollConfig) -> Self {
        Self {
            geometry: GeometryMapper::new(config.thumb_size, config.min_touch_target),
            config,
            state: ScrollerState::Hidden,
            enabled: true,
            pending_drag: None,
            auto_hide: AutoHideTimer::new(),
            tracker: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &FastScrollConfig {
        &self.config
    }

    pub fn state(&self) -> ScrollerState {
        self.state
    }

    pub fn is_showing(&self) -> bool {
        self.state.is_showing()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn pending_drag(&self) -> Option<PendingDrag> {
        self.pending_drag
    }

    pub fn thumb(&self) -> &ThumbGeometry {
        self.geometry.thumb()
    }

    pub fn geometry(&self) -> &GeometryMapper {
        &self.geometry
    }

    /// Token of the outstanding auto-hide callback, if one is scheduled
    pub fn auto_hide_token(&self) -> Option<TimerToken> {
        self.auto_hide.outstanding()
    }

    /// Whether a velocity tracker is held for an in-flight touch sequence
    pub fn is_tracking_velocity(&self) -> bool {
        self.tracker.is_some()
    }

    // =========================================================================
    // Host-facing operations
    // =========================================================================

    /// Enable or disable the fast scroller.
    ///
    /// While disabled every touch and layout entry point is a no-op that
    /// leaves the event unclaimed. Disabling drops any in-flight tracker and
    /// pending drag, cancels the auto-hide and hides a showing thumb, handing
    /// the host its native scroll indicator back.
    pub fn set_enabled(&mut self, enabled: bool) -> Commands {
        let mut commands = Commands::new();
        if self.enabled == enabled {
            return commands;
        }
        tracing::debug!("fast scroller enabled: {}", enabled);
        self.enabled = enabled;
        if !enabled {
            self.tracker = None;
            self.pending_drag = None;
            self.transition(scroller_events::DISABLE, &mut commands);
        }
        commands
    }

    /// Commands that add the thumb to the host's overlay
    pub fn attach(&mut self) -> Commands {
        let mut commands = Commands::new();
        commands.push(Command::AttachThumb);
        commands
    }

    /// Commands that remove the thumb from the host's overlay and drop its timer
    pub fn detach(&mut self) -> Commands {
        let mut commands = Commands::new();
        self.auto_hide.cancel(&mut commands);
        commands.push(Command::DetachThumb);
        commands
    }

    /// Single transition entry point for a tagged event
    pub fn handle(&mut self, event: Event, metrics: &impl SurfaceMetrics) -> Response {
        match event {
            Event::TouchDown(ev) => {
                let intercepted = self.on_intercept_touch_event(&ev, metrics);
                intercepted.merge(self.on_touch_event(&ev, metrics))
            }
            Event::TouchMove(ev) | Event::TouchUp(ev) | Event::TouchCancel(ev) => {
                self.on_touch_event(&ev, metrics)
            }
            Event::ScrollChanged {
                left,
                top,
                old_left,
                old_top,
            } => self.on_scroll_changed(left, top, old_left, old_top, metrics),
            Event::SizeChanged {
                width,
                height,
                old_width,
                old_height,
            } => self.on_size_changed(width, height, old_width, old_height, metrics),
            Event::AutoHideFired(token) => self.on_auto_hide(token),
            Event::ShowRequested => self.show(metrics),
        }
    }

    /// First dispatch stage: claims a touch-down on the visible thumb
    pub fn on_intercept_touch_event(
        &mut self,
        event: &MotionEvent,
        metrics: &impl SurfaceMetrics,
    ) -> Response {
        if !self.enabled || event.action != TouchAction::Down {
            return Response::unclaimed();
        }

        // A sequence that ended without up or cancel must not leak its drag
        self.pending_drag = None;
        if self.is_showing() && self.geometry.is_point_inside(event.x, event.y, metrics) {
            self.pending_drag = Some(PendingDrag {
                deadline_ms: event.time_ms.saturating_add(self.config.tap_timeout_ms),
                initial_y: event.y,
            });
            tracing::trace!("pending drag armed at y={:.1}", event.y);
            return Response::new(true, Commands::new());
        }

        Response::unclaimed()
    }

    /// Second dispatch stage: tracks velocity, escalates and performs drags
    pub fn on_touch_event(&mut self, event: &MotionEvent, metrics: &impl SurfaceMetrics) -> Response {
        if !self.enabled {
            return Response::unclaimed();
        }

        if event.action == TouchAction::Down {
            // A new sequence always starts with a fresh tracker
            self.tracker = Some(V::default());
        }
        self.tracker
            .get_or_insert_with(V::default)
            .add_movement(event.y, event.time_ms);

        let mut commands = Commands::new();
        let claimed = match event.action {
            TouchAction::Down => self.touch_down(&mut commands),
            TouchAction::Up => self.touch_up(metrics, &mut commands),
            TouchAction::Move => self.touch_move(event, metrics, &mut commands),
            TouchAction::Cancel => self.touch_cancel(&mut commands),
        };

        Response::new(claimed, commands)
    }

    /// Host scroll offset changed; re-place the thumb
    pub fn on_scroll_changed(
        &mut self,
        _left: f32,
        _top: f32,
        _old_left: f32,
        _old_top: f32,
        metrics: &impl SurfaceMetrics,
    ) -> Response {
        let mut commands = Commands::new();
        self.update_layout(metrics, &mut commands);
        Response::new(false, commands)
    }

    /// Host size changed; re-place the thumb
    pub fn on_size_changed(
        &mut self,
        _width: f32,
        _height: f32,
        _old_width: f32,
        _old_height: f32,
        metrics: &impl SurfaceMetrics,
    ) -> Response {
        let mut commands = Commands::new();
        self.update_layout(metrics, &mut commands);
        Response::new(false, commands)
    }

    /// The auto-hide callback with `token` ran
    pub fn on_auto_hide(&mut self, token: TimerToken) -> Response {
        let mut commands = Commands::new();
        if !self.auto_hide.fire(token) {
            tracing::trace!("ignoring stale auto-hide {:?}", token);
            return Response::new(false, commands);
        }
        self.transition(scroller_events::AUTO_HIDE, &mut commands);
        Response::new(false, commands)
    }

    /// Reveal the thumb and schedule its auto-hide
    pub fn show(&mut self, metrics: &impl SurfaceMetrics) -> Response {
        let mut commands = Commands::new();
        if self.enabled {
            self.reveal(metrics, &mut commands);
            self.post_auto_hide(&mut commands);
        }
        Response::new(false, commands)
    }

    // =========================================================================
    // Touch handling
    // =========================================================================

    fn touch_down(&mut self, commands: &mut Commands) -> bool {
        // Hold the thumb on screen while a finger is down
        if self.state == ScrollerState::Visible {
            self.auto_hide.cancel(commands);
        }
        self.pending_drag.is_some()
    }

    fn touch_up(&mut self, metrics: &impl SurfaceMetrics, commands: &mut Commands) -> bool {
        if let Some(tracker) = self.tracker.take() {
            let velocity = tracker.finish();
            if self.is_fling_reveal(velocity, metrics) {
                self.reveal(metrics, commands);
            }
        }

        self.pending_drag = None;
        match self.state {
            ScrollerState::Dragging => {
                self.transition(scroller_events::END_DRAG, commands);
                self.post_auto_hide(commands);
                true
            }
            ScrollerState::Visible => {
                self.post_auto_hide(commands);
                false
            }
            ScrollerState::Hidden => false,
        }
    }

    fn touch_move(
        &mut self,
        event: &MotionEvent,
        metrics: &impl SurfaceMetrics,
        commands: &mut Commands,
    ) -> bool {
        if !self.is_showing() {
            return false;
        }

        if let Some(pending) = self.pending_drag {
            if pending.should_escalate(event, self.config.touch_slop) {
                self.begin_drag(commands);
            }
        }

        if self.state == ScrollerState::Dragging {
            let target = drag_scroll_target(
                event.y,
                metrics.vertical_scroll_range(),
                metrics.height(),
                metrics.padding(),
            );
            commands.push(Command::ScrollTo {
                x: metrics.scroll_x(),
                y: target,
            });
            return true;
        }

        // Tentatively claimed until the pending drag resolves
        self.pending_drag.is_some()
    }

    fn touch_cancel(&mut self, commands: &mut Commands) -> bool {
        self.tracker = None;
        self.pending_drag = None;
        if self.state == ScrollerState::Dragging {
            self.transition(scroller_events::END_DRAG, commands);
            self.post_auto_hide(commands);
        }
        false
    }

    fn begin_drag(&mut self, commands: &mut Commands) {
        self.pending_drag = None;
        self.transition(scroller_events::BEGIN_DRAG, commands);
    }

    fn is_fling_reveal(&self, velocity: f32, metrics: &impl SurfaceMetrics) -> bool {
        let fast = velocity.abs() >= self.config.fling_velocity_threshold;
        let hidden = self.state == ScrollerState::Hidden;
        let long_content =
            metrics.vertical_scroll_range() > self.config.fling_content_factor * metrics.height();
        tracing::debug!(
            "fling velocity={:.0} fast={} hidden={} long_content={}",
            velocity,
            fast,
            hidden,
            long_content
        );
        fast && hidden && long_content
    }

    // =========================================================================
    // State transitions
    // =========================================================================

    fn reveal(&mut self, metrics: &impl SurfaceMetrics, commands: &mut Commands) {
        if self.is_showing() {
            return;
        }
        self.transition(scroller_events::SHOW, commands);
        self.update_layout(metrics, commands);
    }

    /// Cancel the outstanding auto-hide, then apply the transition for `event`
    /// and its entry side effects.
    fn transition(&mut self, event: u32, commands: &mut Commands) {
        self.auto_hide.cancel(commands);

        let Some(next) = self.state.on_event(event) else {
            return;
        };
        if next == self.state {
            return;
        }

        let translation_x = self.geometry.thumb().translation_x;
        let slide = self.slide_distance();
        match next {
            ScrollerState::Hidden => {
                commands.push(Command::SetNativeScrollbarEnabled(true));
                commands.push(Command::StartTransition(DecorTransition::dismiss(
                    translation_x,
                    slide,
                    self.config.fade_out_duration(),
                    self.config.fade_out_easing,
                )));
            }
            ScrollerState::Visible => {
                commands.push(Command::SetNativeScrollbarEnabled(false));
                commands.push(Command::StartTransition(DecorTransition::reveal(
                    translation_x,
                    slide,
                    self.config.fade_in_duration(),
                    self.config.fade_in_easing,
                )));
            }
            ScrollerState::Dragging => {
                commands.push(Command::CancelTransition);
            }
        }

        tracing::debug!("fast scroller {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Distance the thumb slides past the trailing edge when hiding.
    /// Falls back to the configured width before the first layout pass.
    fn slide_distance(&self) -> f32 {
        let laid_out = self.geometry.thumb().width();
        if laid_out > 0.0 {
            laid_out
        } else {
            self.config.thumb_size.width
        }
    }

    fn post_auto_hide(&mut self, commands: &mut Commands) {
        if self.state == ScrollerState::Visible {
            self.auto_hide
                .reschedule(self.config.auto_hide_delay(), commands);
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    fn update_layout(&mut self, metrics: &impl SurfaceMetrics, commands: &mut Commands) {
        if !self.is_showing() || !self.enabled {
            return;
        }
        let Some(update) = self.geometry.layout(metrics) else {
            return;
        };

        commands.push(Command::LayoutThumb {
            bounds: update.bounds,
        });
        commands.push(Command::TranslateThumb {
            x: update.translation_x,
            y: update.translation_y,
        });

        // Scrolling keeps the thumb alive
        self.post_auto_hide(commands);
    }
}

impl<V: VelocityTracker> Default for FastScroller<V> {
    fn default() -> Self {
        Self::new(FastScrollConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Size, Viewport};

    const THUMB_X: f32 = 390.0;

    fn long_viewport() -> Viewport {
        Viewport::new(400.0, 1000.0, 5000.0)
    }

    fn config() -> FastScrollConfig {
        FastScrollConfig {
            thumb_size: Size::new(24.0, 40.0),
            ..Default::default()
        }
    }

    /// Scroller that has already been revealed and laid out at scroll 0
    fn visible_scroller(viewport: &Viewport) -> FastScroller {
        let mut scroller = FastScroller::new(config());
        scroller.show(viewport);
        assert_eq!(scroller.state(), ScrollerState::Visible);
        scroller
    }

    /// Fast upward fling: 600px in 40ms
    fn fling(scroller: &mut FastScroller, viewport: &Viewport) -> Response {
        scroller.on_touch_event(&MotionEvent::down(100.0, 900.0, 0), viewport);
        scroller.on_touch_event(&MotionEvent::moved(100.0, 600.0, 20), viewport);
        scroller.on_touch_event(&MotionEvent::up(100.0, 300.0, 40), viewport)
    }

    #[test]
    fn test_fling_reveals_thumb() {
        let viewport = long_viewport();
        let mut scroller = FastScroller::new(config());

        let response = fling(&mut scroller, &viewport);

        assert_eq!(scroller.state(), ScrollerState::Visible);
        assert!(!response.claimed);
        assert!(response
            .commands
            .contains(&Command::SetNativeScrollbarEnabled(false)));
        assert!(response
            .commands
            .iter()
            .any(|c| matches!(c, Command::StartTransition(t) if t.kind == fastscroll_animation::TransitionKind::Reveal)));
        assert!(response.schedules_auto_hide());
        assert!(!scroller.is_tracking_velocity());
    }

    #[test]
    fn test_slow_release_does_not_reveal() {
        let viewport = long_viewport();
        let mut scroller: FastScroller = FastScroller::new(config());
        scroller.on_touch_event(&MotionEvent::down(100.0, 900.0, 0), &viewport);
        scroller.on_touch_event(&MotionEvent::moved(100.0, 850.0, 20), &viewport);
        scroller.on_touch_event(&MotionEvent::up(100.0, 800.0, 40), &viewport);
        assert_eq!(scroller.state(), ScrollerState::Hidden);
    }

    #[test]
    fn test_short_content_does_not_reveal() {
        // Exactly 3x viewport height is not enough
        let viewport = Viewport::new(400.0, 1000.0, 3000.0);
        let mut scroller = FastScroller::new(config());
        fling(&mut scroller, &viewport);
        assert_eq!(scroller.state(), ScrollerState::Hidden);
    }

    #[test]
    fn test_fling_while_visible_only_reschedules() {
        let viewport = long_viewport();
        let mut scroller = visible_scroller(&viewport);
        let response = fling(&mut scroller, &viewport);
        assert_eq!(scroller.state(), ScrollerState::Visible);
        assert!(!response
            .commands
            .iter()
            .any(|c| matches!(c, Command::StartTransition(_))));
        assert!(response.schedules_auto_hide());
    }

    #[test]
    fn test_touch_down_on_thumb_arms_pending_drag() {
        let viewport = long_viewport();
        let mut scroller = visible_scroller(&viewport);

        let down = MotionEvent::down(THUMB_X, 20.0, 1000);
        let response = scroller.on_intercept_touch_event(&down, &viewport);
        assert!(response.claimed);
        let pending = scroller.pending_drag().unwrap();
        assert_eq!(pending.initial_y, 20.0);
        assert_eq!(pending.deadline_ms, 1100);

        let response = scroller.on_touch_event(&down, &viewport);
        assert!(response.claimed);
        // Finger down cancels the auto-hide
        assert!(scroller.auto_hide_token().is_none());
    }

    #[test]
    fn test_touch_down_off_thumb_not_intercepted() {
        let viewport = long_viewport();
        let mut scroller = visible_scroller(&viewport);
        let response =
            scroller.on_intercept_touch_event(&MotionEvent::down(100.0, 20.0, 0), &viewport);
        assert!(!response.claimed);
        assert!(scroller.pending_drag().is_none());
    }

    #[test]
    fn test_touch_down_on_hidden_thumb_not_intercepted() {
        let viewport = long_viewport();
        let mut scroller: FastScroller = FastScroller::new(config());
        let response =
            scroller.handle(Event::TouchDown(MotionEvent::down(THUMB_X, 20.0, 0)), &viewport);
        assert!(!response.claimed);
        assert!(scroller.pending_drag().is_none());
    }

    #[test]
    fn test_slop_escalates_into_drag() {
        let viewport = long_viewport();
        let mut scroller = visible_scroller(&viewport);
        scroller.handle(Event::TouchDown(MotionEvent::down(THUMB_X, 20.0, 0)), &viewport);

        let response = scroller.handle(
            Event::TouchMove(MotionEvent::moved(THUMB_X, 25.0, 10)),
            &viewport,
        );
        assert_eq!(scroller.state(), ScrollerState::Visible);
        assert!(response.claimed, "pending drag keeps the gesture");
        assert!(response.scroll_target().is_none());

        let response = scroller.handle(
            Event::TouchMove(MotionEvent::moved(THUMB_X, 30.0, 20)),
            &viewport,
        );
        assert_eq!(scroller.state(), ScrollerState::Dragging);
        assert!(scroller.pending_drag().is_none());
        assert!(response.claimed);
        assert!(response.commands.contains(&Command::CancelTransition));
        let (_, y) = response.scroll_target().unwrap();
        // track 1000, range - track = 4000, 30/1000 of the way
        assert!((y - 120.0).abs() < 1e-3);
    }

    #[test]
    fn test_hold_past_tap_timeout_escalates_into_drag() {
        let viewport = long_viewport();
        let mut scroller = visible_scroller(&viewport);
        scroller.handle(Event::TouchDown(MotionEvent::down(THUMB_X, 20.0, 0)), &viewport);
        scroller.handle(
            Event::TouchMove(MotionEvent::moved(THUMB_X, 21.0, 150)),
            &viewport,
        );
        assert_eq!(scroller.state(), ScrollerState::Dragging);
    }

    #[test]
    fn test_drag_release_returns_to_visible_and_schedules_hide() {
        let viewport = long_viewport();
        let mut scroller = visible_scroller(&viewport);
        scroller.handle(Event::TouchDown(MotionEvent::down(THUMB_X, 20.0, 0)), &viewport);
        scroller.handle(Event::TouchMove(MotionEvent::moved(THUMB_X, 500.0, 10)), &viewport);
        assert!(scroller.auto_hide_token().is_none());

        let response =
            scroller.handle(Event::TouchUp(MotionEvent::up(THUMB_X, 500.0, 200)), &viewport);
        assert!(response.claimed);
        assert_eq!(scroller.state(), ScrollerState::Visible);
        assert!(response.schedules_auto_hide());
        assert!(scroller.auto_hide_token().is_some());
    }

    #[test]
    fn test_cancel_ends_drag() {
        let viewport = long_viewport();
        let mut scroller = visible_scroller(&viewport);
        scroller.handle(Event::TouchDown(MotionEvent::down(THUMB_X, 20.0, 0)), &viewport);
        scroller.handle(Event::TouchMove(MotionEvent::moved(THUMB_X, 500.0, 10)), &viewport);

        let response = scroller.handle(Event::TouchCancel(MotionEvent::cancel(20)), &viewport);
        assert!(!response.claimed);
        assert_eq!(scroller.state(), ScrollerState::Visible);
        assert!(scroller.pending_drag().is_none());
        assert!(!scroller.is_tracking_velocity());
        assert!(response.schedules_auto_hide());
    }

    #[test]
    fn test_move_while_hidden_is_unclaimed() {
        let viewport = long_viewport();
        let mut scroller: FastScroller = FastScroller::new(config());
        let response = scroller.on_touch_event(&MotionEvent::moved(THUMB_X, 500.0, 0), &viewport);
        assert!(!response.claimed);
        assert!(response.commands.is_empty());
    }

    #[test]
    fn test_auto_hide_hides_and_restores_native_scrollbar() {
        let viewport = long_viewport();
        let mut scroller = visible_scroller(&viewport);
        let token = scroller.auto_hide_token().unwrap();

        let response = scroller.handle(Event::AutoHideFired(token), &viewport);
        assert_eq!(scroller.state(), ScrollerState::Hidden);
        assert!(response
            .commands
            .contains(&Command::SetNativeScrollbarEnabled(true)));
        let dismiss = response
            .commands
            .iter()
            .find_map(|c| match c {
                Command::StartTransition(t) => Some(t.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(dismiss.duration, std::time::Duration::from_millis(224));
        assert_eq!(dismiss.easing, fastscroll_animation::Easing::DECOR_FADE_OUT);
    }

    #[test]
    fn test_stale_auto_hide_ignored() {
        let viewport = long_viewport();
        let mut scroller = visible_scroller(&viewport);
        let stale = scroller.auto_hide_token().unwrap();
        scroller.handle(
            Event::ScrollChanged {
                left: 0.0,
                top: 10.0,
                old_left: 0.0,
                old_top: 0.0,
            },
            &viewport.with_scroll_y(10.0),
        );
        assert_ne!(scroller.auto_hide_token(), Some(stale));

        let response = scroller.on_auto_hide(stale);
        assert!(response.commands.is_empty());
        assert_eq!(scroller.state(), ScrollerState::Visible);
    }

    #[test]
    fn test_scroll_change_lays_out_visible_thumb() {
        let viewport = long_viewport();
        let mut scroller = visible_scroller(&viewport);
        let scrolled = viewport.with_scroll_y(2000.0);
        let response = scroller.on_scroll_changed(0.0, 2000.0, 0.0, 0.0, &scrolled);
        assert!(!response.claimed);
        let translated = response.commands.iter().find_map(|c| match c {
            Command::TranslateThumb { y, .. } => Some(*y),
            _ => None,
        });
        // 2000 + 1000 * 0.5 - 40 * 0.5
        assert_eq!(translated, Some(2480.0));
        assert!(response.schedules_auto_hide());
    }

    #[test]
    fn test_scroll_change_ignored_while_hidden() {
        let viewport = long_viewport();
        let mut scroller: FastScroller = FastScroller::new(config());
        let response = scroller.on_scroll_changed(0.0, 10.0, 0.0, 0.0, &viewport);
        assert!(response.commands.is_empty());
    }

    #[test]
    fn test_disabled_is_inert() {
        let viewport = long_viewport();
        let mut scroller = visible_scroller(&viewport);
        let token = scroller.auto_hide_token().unwrap();
        let commands = scroller.set_enabled(false);
        assert_eq!(scroller.state(), ScrollerState::Hidden);
        assert!(commands.contains(&Command::CancelAutoHide { token }));
        assert!(commands.contains(&Command::SetNativeScrollbarEnabled(true)));
        assert!(scroller.set_enabled(false).is_empty());

        let down = MotionEvent::down(THUMB_X, 20.0, 0);
        assert_eq!(
            scroller.on_intercept_touch_event(&down, &viewport),
            Response::unclaimed()
        );
        assert_eq!(scroller.on_touch_event(&down, &viewport), Response::unclaimed());
        assert_eq!(
            scroller.on_size_changed(400.0, 900.0, 400.0, 1000.0, &viewport),
            Response::unclaimed()
        );
        assert!(!scroller.is_tracking_velocity());

        assert!(scroller.set_enabled(true).is_empty());
        assert_eq!(scroller.state(), ScrollerState::Hidden);
        scroller.show(&viewport);
        assert!(scroller.on_intercept_touch_event(&down, &viewport).claimed);
    }

    #[test]
    fn test_disable_mid_drag_hides_thumb() {
        let viewport = long_viewport();
        let mut scroller = visible_scroller(&viewport);
        scroller.handle(Event::TouchDown(MotionEvent::down(THUMB_X, 20.0, 0)), &viewport);
        scroller.handle(Event::TouchMove(MotionEvent::moved(THUMB_X, 500.0, 10)), &viewport);
        assert_eq!(scroller.state(), ScrollerState::Dragging);

        let commands = scroller.set_enabled(false);
        assert_eq!(scroller.state(), ScrollerState::Hidden);
        assert!(commands.contains(&Command::SetNativeScrollbarEnabled(true)));
        assert!(commands
            .iter()
            .any(|c| matches!(c, Command::StartTransition(t) if t.kind == fastscroll_animation::TransitionKind::Dismiss)));
        assert!(scroller.auto_hide_token().is_none());
        assert!(!scroller.is_tracking_velocity());
    }

    #[test]
    fn test_new_touch_down_clears_stale_pending_drag() {
        let viewport = long_viewport();
        let mut scroller = visible_scroller(&viewport);
        let response =
            scroller.handle(Event::TouchDown(MotionEvent::down(THUMB_X, 20.0, 16)), &viewport);
        assert!(response.claimed);

        // The previous sequence never delivered up or cancel
        let response =
            scroller.handle(Event::TouchDown(MotionEvent::down(100.0, 700.0, 300)), &viewport);
        assert!(!response.claimed);
        assert!(scroller.pending_drag().is_none());

        let response = scroller.handle(
            Event::TouchMove(MotionEvent::moved(100.0, 702.0, 316)),
            &viewport,
        );
        assert!(!response.claimed);
        assert!(response.scroll_target().is_none());
        assert_eq!(scroller.state(), ScrollerState::Visible);
    }

    #[test]
    fn test_detach_cancels_timer() {
        let viewport = long_viewport();
        let mut scroller = visible_scroller(&viewport);
        let token = scroller.auto_hide_token().unwrap();
        let commands = scroller.detach();
        assert_eq!(
            commands.as_slice(),
            &[Command::CancelAutoHide { token }, Command::DetachThumb]
        );
    }
}
