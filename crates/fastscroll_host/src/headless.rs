//! In-memory scroll host
//!
//! Behaves like a scrollable surface without drawing anything: scroll offsets
//! are clamped to the content range, thumb placement and the native indicator
//! are plain fields, and decor transitions are sampled by a
//! [`TransitionPlayer`].

use std::time::Duration;

use fastscroll_animation::{DecorTransition, ThumbAppearance, TransitionPlayer};
use fastscroll_core::{Insets, Rect, SurfaceMetrics, Viewport};

use crate::host::ScrollHost;

/// Record of a command the host applied
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    ScrollTo { x: f32, y: f32 },
    NativeScrollbar(bool),
    AddOverlay,
    RemoveOverlay,
    LayoutThumb(Rect),
    TranslateThumb { x: f32, y: f32 },
    StartTransition(DecorTransition),
    CancelTransition,
}

/// Scroll host backed by a [`Viewport`]
pub struct HeadlessHost {
    viewport: Viewport,
    native_scrollbar_enabled: bool,
    thumb_attached: bool,
    thumb_bounds: Rect,
    thumb_translation: (f32, f32),
    player: TransitionPlayer,
    calls: Vec<HostCall>,
}

impl HeadlessHost {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            native_scrollbar_enabled: true,
            thumb_attached: false,
            thumb_bounds: Rect::default(),
            thumb_translation: (0.0, 0.0),
            player: TransitionPlayer::new(),
            calls: Vec::new(),
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Largest vertical scroll offset the content allows
    pub fn max_scroll_y(&self) -> f32 {
        (self.viewport.scroll_range - self.viewport.height).max(0.0)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.width = width;
        self.viewport.height = height;
        self.viewport.scroll_y = self.viewport.scroll_y.min(self.max_scroll_y());
    }

    pub fn set_padding(&mut self, padding: Insets) {
        self.viewport.padding = padding;
    }

    pub fn set_scroll_range(&mut self, scroll_range: f32) {
        self.viewport.scroll_range = scroll_range;
        self.viewport.scroll_y = self.viewport.scroll_y.min(self.max_scroll_y());
    }

    pub fn is_native_scrollbar_enabled(&self) -> bool {
        self.native_scrollbar_enabled
    }

    pub fn is_thumb_attached(&self) -> bool {
        self.thumb_attached
    }

    pub fn thumb_bounds(&self) -> Rect {
        self.thumb_bounds
    }

    pub fn thumb_translation(&self) -> (f32, f32) {
        self.thumb_translation
    }

    /// Animated alpha and slide offset of the thumb
    pub fn appearance(&self) -> ThumbAppearance {
        self.player.appearance()
    }

    pub fn is_animating(&self) -> bool {
        self.player.is_playing()
    }

    /// Every command applied so far, in order
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }
}

impl SurfaceMetrics for HeadlessHost {
    fn scroll_x(&self) -> f32 {
        self.viewport.scroll_x
    }

    fn scroll_y(&self) -> f32 {
        self.viewport.scroll_y
    }

    fn width(&self) -> f32 {
        self.viewport.width
    }

    fn height(&self) -> f32 {
        self.viewport.height
    }

    fn padding(&self) -> Insets {
        self.viewport.padding
    }

    fn vertical_scroll_range(&self) -> f32 {
        self.viewport.scroll_range
    }
}

impl ScrollHost for HeadlessHost {
    fn scroll_to(&mut self, x: f32, y: f32) {
        self.calls.push(HostCall::ScrollTo { x, y });
        self.viewport.scroll_x = x.max(0.0);
        self.viewport.scroll_y = y.clamp(0.0, self.max_scroll_y());
    }

    fn set_native_scrollbar_enabled(&mut self, enabled: bool) {
        self.calls.push(HostCall::NativeScrollbar(enabled));
        self.native_scrollbar_enabled = enabled;
    }

    fn add_thumb_overlay(&mut self) {
        self.calls.push(HostCall::AddOverlay);
        self.thumb_attached = true;
    }

    fn remove_thumb_overlay(&mut self) {
        self.calls.push(HostCall::RemoveOverlay);
        self.thumb_attached = false;
        self.player.cancel();
    }

    fn layout_thumb(&mut self, bounds: Rect) {
        self.calls.push(HostCall::LayoutThumb(bounds));
        self.thumb_bounds = bounds;
    }

    fn translate_thumb(&mut self, x: f32, y: f32) {
        self.calls.push(HostCall::TranslateThumb { x, y });
        self.thumb_translation = (x, y);
        self.player.set_translation_x(x);
    }

    fn start_transition(&mut self, transition: DecorTransition) {
        self.calls.push(HostCall::StartTransition(transition.clone()));
        self.player.start(transition);
    }

    fn cancel_transition(&mut self) {
        self.calls.push(HostCall::CancelTransition);
        self.player.cancel();
    }

    fn advance_animations(&mut self, dt: Duration) {
        self.player.advance(dt);
    }
}
