//! Fast-scroll surface
//!
//! Glues a [`FastScroller`] to a [`ScrollHost`]: dispatches input to the
//! controller, applies the commands it returns, and runs the auto-hide timer
//! on a virtual clock.
//!
//! A drag emits `ScrollTo`; applying it moves the host, and the host's
//! scroll-changed notification is fed straight back into the controller so
//! the thumb follows. That notification only re-lays out the thumb and never
//! reaches the touch path.

use std::collections::VecDeque;
use std::time::Duration;

use fastscroll_core::{
    Command, Commands, Event, FastScrollConfig, FastScroller, MotionEvent, ScrollerState,
    VelocityTracker, WindowedVelocityTracker,
};

use crate::host::ScrollHost;
use crate::timer_queue::TimerQueue;

/// A scroll host decorated with a fast-scroll thumb
pub struct FastScrollSurface<H: ScrollHost, V: VelocityTracker = WindowedVelocityTracker> {
    host: H,
    scroller: FastScroller<V>,
    timers: TimerQueue,
    attached: bool,
}

impl<H: ScrollHost, V: VelocityTracker> FastScrollSurface<H, V> {
    /// Attach a fast scroller to `host`
    pub fn new(host: H, config: FastScrollConfig) -> Self {
        let mut surface = Self {
            host,
            scroller: FastScroller::new(config),
            timers: TimerQueue::new(),
            attached: true,
        };
        let commands = surface.scroller.attach();
        surface.apply(commands);
        surface
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access for host-side changes; follow up with
    /// [`scroll_changed`](Self::scroll_changed) or
    /// [`size_changed`](Self::size_changed) so the thumb can react.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn scroller(&self) -> &FastScroller<V> {
        &self.scroller
    }

    pub fn state(&self) -> ScrollerState {
        self.scroller.state()
    }

    /// Current virtual time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Dispatch a touch event. Returns whether the fast scroller claimed it;
    /// unclaimed events belong to the host's own gesture handling.
    ///
    /// Events stamped later than the current clock advance it first, so
    /// timers due in between fire in order.
    pub fn dispatch_touch(&mut self, event: MotionEvent) -> bool {
        if !self.attached {
            return false;
        }
        if event.time_ms > self.now_ms() {
            self.advance_to(event.time_ms);
        }
        let response = self.scroller.handle(Event::from(event), &self.host);
        self.apply(response.commands);
        response.claimed
    }

    /// Scroll the host as the user or application would, then notify the thumb
    pub fn scroll_to(&mut self, x: f32, y: f32) {
        let (old_left, old_top) = (self.host.scroll_x(), self.host.scroll_y());
        self.host.scroll_to(x, y);
        self.scroll_changed(old_left, old_top);
    }

    /// The host's scroll offset changed from `(old_left, old_top)`
    pub fn scroll_changed(&mut self, old_left: f32, old_top: f32) {
        if !self.attached {
            return;
        }
        let event = Event::ScrollChanged {
            left: self.host.scroll_x(),
            top: self.host.scroll_y(),
            old_left,
            old_top,
        };
        self.notify(event);
    }

    /// The host's size changed from `old_width` x `old_height`
    pub fn size_changed(&mut self, old_width: f32, old_height: f32) {
        if !self.attached {
            return;
        }
        let event = Event::SizeChanged {
            width: self.host.width(),
            height: self.host.height(),
            old_width,
            old_height,
        };
        self.notify(event);
    }

    /// Reveal the thumb regardless of fling velocity
    pub fn show(&mut self) {
        if self.attached {
            self.notify(Event::ShowRequested);
        }
    }

    /// Turning the scroller off hides a showing thumb and restores the
    /// host's native scroll indicator
    pub fn set_enabled(&mut self, enabled: bool) {
        let commands = self.scroller.set_enabled(enabled);
        self.apply(commands);
    }

    /// Let `dt` of virtual time pass, firing due timers and advancing animations
    pub fn advance(&mut self, dt: Duration) {
        let dt_ms = u64::try_from(dt.as_millis()).unwrap_or(u64::MAX);
        let target = self.now_ms().saturating_add(dt_ms);
        self.advance_to(target);
    }

    /// Detach the thumb from the host and drop pending timers
    pub fn remove(mut self) -> H {
        if self.attached {
            let commands = self.scroller.detach();
            self.apply(commands);
            self.timers.clear();
            self.attached = false;
        }
        self.host
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn advance_to(&mut self, target_ms: u64) {
        let mut last = self.now_ms();
        while let Some(token) = self.timers.pop_due(target_ms) {
            let now = self.now_ms();
            self.host
                .advance_animations(Duration::from_millis(now.saturating_sub(last)));
            last = now;

            tracing::debug!("auto-hide timer {} fired at {}ms", token.raw(), now);
            let response = self.scroller.on_auto_hide(token);
            self.apply(response.commands);
        }
        self.timers.advance_to(target_ms);
        self.host
            .advance_animations(Duration::from_millis(target_ms.saturating_sub(last)));
    }

    fn notify(&mut self, event: Event) {
        let response = self.scroller.handle(event, &self.host);
        self.apply(response.commands);
    }

    /// Apply commands in order. Scroll feedback from a `ScrollTo` is queued
    /// behind the commands already pending.
    fn apply(&mut self, commands: Commands) {
        let mut queue: VecDeque<Command> = commands.into_iter().collect();

        while let Some(command) = queue.pop_front() {
            match command {
                Command::ScrollTo { x, y } => {
                    let (old_left, old_top) = (self.host.scroll_x(), self.host.scroll_y());
                    self.host.scroll_to(x, y);
                    let (left, top) = (self.host.scroll_x(), self.host.scroll_y());
                    if left != old_left || top != old_top {
                        let response = self.scroller.on_scroll_changed(
                            left, top, old_left, old_top, &self.host,
                        );
                        queue.extend(response.commands);
                    }
                }
                Command::SetNativeScrollbarEnabled(enabled) => {
                    self.host.set_native_scrollbar_enabled(enabled)
                }
                Command::AttachThumb => self.host.add_thumb_overlay(),
                Command::DetachThumb => self.host.remove_thumb_overlay(),
                Command::LayoutThumb { bounds } => self.host.layout_thumb(bounds),
                Command::TranslateThumb { x, y } => self.host.translate_thumb(x, y),
                Command::StartTransition(transition) => self.host.start_transition(transition),
                Command::CancelTransition => self.host.cancel_transition(),
                Command::ScheduleAutoHide { token, delay } => {
                    self.timers.schedule(token, delay);
                }
                Command::CancelAutoHide { token } => {
                    self.timers.cancel(token);
                }
            }
        }
    }
}
