//! Geometry mapper
//!
//! Converts between the host's scroll offset (content space) and the thumb's
//! position (surface space), lays the thumb out against the trailing edge of
//! the padded container, and hit-tests the thumb's expanded touch target.
//!
//! All formulas degrade to `0.0` on degenerate input (no scrollable range,
//! empty track, non-finite metrics) instead of producing NaN or infinities.

use serde::{Deserialize, Serialize};

// ============================================================================
// Primitive Types
// ============================================================================

/// Width and height in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

/// Padding insets of the host surface
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Insets {
    pub const ZERO: Insets = Insets::uniform(0.0);

    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Sum of top and bottom insets
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Axis-aligned rectangle in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Shrink by the given insets
    pub fn inset(&self, insets: Insets) -> Self {
        Self::new(
            self.left + insets.left,
            self.top + insets.top,
            self.right - insets.right,
            self.bottom - insets.bottom,
        )
    }
}

// ============================================================================
// Host Metrics
// ============================================================================

/// Read-only view of the host surface.
///
/// The controller reads these on demand on every event, so implementations
/// must report live values rather than snapshots taken at an earlier scroll.
pub trait SurfaceMetrics {
    /// Current horizontal scroll offset
    fn scroll_x(&self) -> f32;
    /// Current vertical scroll offset
    fn scroll_y(&self) -> f32;
    /// Surface (viewport) width
    fn width(&self) -> f32;
    /// Surface (viewport) height
    fn height(&self) -> f32;
    fn padding(&self) -> Insets;
    /// Total vertical extent of the content
    fn vertical_scroll_range(&self) -> f32;
    /// Horizontal offset the thumb follows so it stays on the visible trailing edge
    fn horizontal_scroll_offset(&self) -> f32 {
        self.scroll_x()
    }
}

/// Plain snapshot of host metrics, handy for tests and headless hosts
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub scroll_x: f32,
    pub scroll_y: f32,
    pub width: f32,
    pub height: f32,
    pub padding: Insets,
    pub scroll_range: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, scroll_range: f32) -> Self {
        Self {
            width,
            height,
            scroll_range,
            ..Default::default()
        }
    }

    pub fn with_scroll_y(mut self, scroll_y: f32) -> Self {
        self.scroll_y = scroll_y;
        self
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }
}

impl SurfaceMetrics for Viewport {
    fn scroll_x(&self) -> f32 {
        self.scroll_x
    }

    fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn padding(&self) -> Insets {
        self.padding
    }

    fn vertical_scroll_range(&self) -> f32 {
        self.scroll_range
    }
}

// ============================================================================
// Scroll <-> Thumb Mapping
// ============================================================================

/// Height of the track the thumb travels along: viewport minus vertical padding
pub fn track_height(viewport_height: f32, padding: Insets) -> f32 {
    viewport_height - padding.vertical()
}

/// Scroll progress in `[0, 1]`.
///
/// `scroll_y / (scroll_range - viewport_height)`, or `0.0` when there is no
/// scrollable range.
pub fn scroll_progress(scroll_y: f32, scroll_range: f32, viewport_height: f32) -> f32 {
    let scrollable = scroll_range - viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 {
        return 0.0;
    }
    let progress = scroll_y / scrollable;
    if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Vertical translation of the thumb in content space.
///
/// Moves the thumb proportionally along the track while it follows the
/// scroll offset, and never places it above the top of the surface.
pub fn thumb_translation_y(
    scroll_y: f32,
    viewport_height: f32,
    padding: Insets,
    thumb_height: f32,
    progress: f32,
) -> f32 {
    let translation = scroll_y + track_height(viewport_height, padding) * progress
        - thumb_height * progress;
    if translation.is_finite() {
        translation.max(0.0)
    } else {
        0.0
    }
}

/// Scroll offset a drag at surface-space `touch_y` seeks to
pub fn drag_scroll_target(
    touch_y: f32,
    scroll_range: f32,
    viewport_height: f32,
    padding: Insets,
) -> f32 {
    let track = track_height(viewport_height, padding);
    if track.is_nan() || track <= 0.0 || touch_y.is_nan() {
        return 0.0;
    }
    let progress = touch_y.clamp(0.0, track) / track;
    let target = (scroll_range - track) * progress;
    if target.is_finite() {
        target.max(0.0)
    } else {
        0.0
    }
}

// ============================================================================
// Thumb Geometry & Layout
// ============================================================================

/// Current layout bounds and translation of the thumb
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbGeometry {
    /// Layout bounds relative to the surface, before translation
    pub bounds: Rect,
    pub translation_x: f32,
    /// Translation in content space (includes the scroll offset)
    pub translation_y: f32,
}

impl ThumbGeometry {
    pub fn width(&self) -> f32 {
        self.bounds.width()
    }

    pub fn height(&self) -> f32 {
        self.bounds.height()
    }
}

/// Result of one layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutUpdate {
    pub bounds: Rect,
    pub translation_x: f32,
    pub translation_y: f32,
    pub progress: f32,
}

/// Owns the container rect and thumb geometry and keeps them in sync with the host.
#[derive(Debug, Clone)]
pub struct GeometryMapper {
    container: Rect,
    thumb: ThumbGeometry,
    thumb_size: Size,
    min_touch_target: Size,
    in_layout: bool,
}

/// Marks a layout pass in progress; clears the flag when dropped
struct LayoutPass<'a> {
    in_layout: &'a mut bool,
}

impl Drop for LayoutPass<'_> {
    fn drop(&mut self) {
        *self.in_layout = false;
    }
}

impl GeometryMapper {
    pub fn new(thumb_size: Size, min_touch_target: Size) -> Self {
        Self {
            container: Rect::default(),
            thumb: ThumbGeometry::default(),
            thumb_size,
            min_touch_target,
            in_layout: false,
        }
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    pub fn thumb(&self) -> &ThumbGeometry {
        &self.thumb
    }

    pub fn is_in_layout(&self) -> bool {
        self.in_layout
    }

    /// Recompute container rect and thumb placement from live host metrics.
    ///
    /// Returns `None` when a pass is already in progress.
    pub fn layout(&mut self, metrics: &impl SurfaceMetrics) -> Option<LayoutUpdate> {
        if self.in_layout {
            tracing::trace!("layout pass skipped: already in progress");
            return None;
        }
        self.in_layout = true;
        let _pass = LayoutPass {
            in_layout: &mut self.in_layout,
        };

        let container = Rect::from_size(metrics.width(), metrics.height()).inset(metrics.padding());
        let bounds = measure_to_trailing_edge(container, self.thumb_size);

        let scroll_y = metrics.scroll_y();
        let height = metrics.height();
        let progress = scroll_progress(scroll_y, metrics.vertical_scroll_range(), height);
        let translation_y =
            thumb_translation_y(scroll_y, height, metrics.padding(), bounds.height(), progress);
        let translation_x = finite_or_zero(metrics.horizontal_scroll_offset());

        self.container = container;
        self.thumb = ThumbGeometry {
            bounds,
            translation_x,
            translation_y,
        };

        tracing::trace!(
            "layout: scroll_y={:.1} progress={:.3} thumb_y={:.1} bounds={:?}",
            scroll_y,
            progress,
            translation_y,
            bounds
        );

        Some(LayoutUpdate {
            bounds,
            translation_x,
            translation_y,
            progress,
        })
    }

    /// Hit-test a surface-space point against the thumb's expanded touch target
    pub fn is_point_inside(&self, x: f32, y: f32, metrics: &impl SurfaceMetrics) -> bool {
        let inside = self.is_point_inside_x(x, metrics.scroll_x())
            && self.is_point_inside_y(y, metrics.scroll_y());
        tracing::trace!("hit test ({:.1}, {:.1}) -> {}", x, y, inside);
        inside
    }

    /// The thumb is flush with the trailing edge, so extra width only extends leftward
    fn is_point_inside_x(&self, x: f32, scroll_x: f32) -> bool {
        let left = self.thumb.bounds.left + self.thumb.translation_x - scroll_x;
        let adjust = (self.min_touch_target.width - self.thumb.width()).max(0.0);
        x >= left - adjust
    }

    fn is_point_inside_y(&self, y: f32, scroll_y: f32) -> bool {
        let top = self.thumb.bounds.top + self.thumb.translation_y - scroll_y;
        let bottom = top + self.thumb.height();
        let adjust = (self.min_touch_target.height - self.thumb.height()).max(0.0) / 2.0;
        y >= top - adjust && y <= bottom + adjust
    }
}

/// Place a view of intrinsic `size` against the right edge of `container`,
/// constrained to the container's width.
fn measure_to_trailing_edge(container: Rect, size: Size) -> Rect {
    let available = container.width().max(0.0);
    let width = size.width.min(available);
    let right = container.right;
    Rect::new(right - width, 0.0, right, size.height)
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_progress_and_translation_reference_points() {
        let padding = Insets::ZERO;
        let cases = [(0.0, 0.0, 0.0), (2000.0, 0.5, 2450.0), (4000.0, 1.0, 4900.0)];
        for (scroll_y, expected_progress, expected_y) in cases {
            let progress = scroll_progress(scroll_y, 5000.0, 1000.0);
            assert!(approx(progress, expected_progress), "progress at {scroll_y}");
            let y = thumb_translation_y(scroll_y, 1000.0, padding, 100.0, progress);
            assert!(approx(y, expected_y), "translation at {scroll_y}: {y}");
        }
    }

    #[test]
    fn test_degenerate_progress_is_zero() {
        assert_eq!(scroll_progress(100.0, 1000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(100.0, 0.0, 1000.0), 0.0);
        assert!(approx(scroll_progress(100.0, 500.0, 0.0), 0.2));
        assert_eq!(scroll_progress(f32::NAN, 5000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(100.0, f32::INFINITY, 1000.0), 0.0);
    }

    #[test]
    fn test_translation_never_negative() {
        // Thumb taller than the track would push it above the top
        let y = thumb_translation_y(0.0, 100.0, Insets::ZERO, 400.0, 1.0);
        assert_eq!(y, 0.0);
    }

    #[test]
    fn test_drag_target_clamps_to_track() {
        let padding = Insets::ZERO;
        assert_eq!(drag_scroll_target(-50.0, 5000.0, 1000.0, padding), 0.0);
        assert!(approx(drag_scroll_target(500.0, 5000.0, 1000.0, padding), 2000.0));
        assert!(approx(drag_scroll_target(1000.0, 5000.0, 1000.0, padding), 4000.0));
        assert!(approx(drag_scroll_target(1800.0, 5000.0, 1000.0, padding), 4000.0));
    }

    #[test]
    fn test_drag_target_respects_padding() {
        let padding = Insets::new(0.0, 100.0, 0.0, 100.0);
        // track = 800, range - track = 4200
        assert!(approx(drag_scroll_target(400.0, 5000.0, 1000.0, padding), 2100.0));
    }

    #[test]
    fn test_drag_target_degenerate_track() {
        let padding = Insets::new(0.0, 600.0, 0.0, 600.0);
        assert_eq!(drag_scroll_target(300.0, 5000.0, 1000.0, padding), 0.0);
        // Content shorter than the track never scrolls negative
        assert_eq!(drag_scroll_target(900.0, 500.0, 1000.0, Insets::ZERO), 0.0);
    }

    #[test]
    fn test_layout_places_thumb_on_trailing_edge() {
        let mut mapper = GeometryMapper::new(Size::new(24.0, 100.0), Size::new(48.0, 48.0));
        let viewport = Viewport::new(400.0, 1000.0, 5000.0)
            .with_scroll_y(2000.0)
            .with_padding(Insets::new(0.0, 0.0, 16.0, 0.0));

        let update = mapper.layout(&viewport).unwrap();
        assert_eq!(mapper.container(), Rect::new(0.0, 0.0, 384.0, 1000.0));
        assert_eq!(update.bounds, Rect::new(360.0, 0.0, 384.0, 100.0));
        assert!(approx(update.progress, 0.5));
        assert!(approx(update.translation_y, 2450.0));
        assert!(!mapper.is_in_layout());
    }

    #[test]
    fn test_layout_constrains_thumb_to_container_width() {
        let mut mapper = GeometryMapper::new(Size::new(80.0, 40.0), Size::new(48.0, 48.0));
        let viewport = Viewport::new(60.0, 500.0, 2000.0);
        let update = mapper.layout(&viewport).unwrap();
        assert_eq!(update.bounds.width(), 60.0);
        assert_eq!(update.bounds.right, 60.0);
    }

    #[test]
    fn test_layout_skipped_while_in_progress() {
        let mut mapper = GeometryMapper::new(Size::new(24.0, 48.0), Size::new(48.0, 48.0));
        mapper.in_layout = true;
        assert!(mapper.layout(&Viewport::new(400.0, 1000.0, 5000.0)).is_none());
        mapper.in_layout = false;
        assert!(mapper.layout(&Viewport::new(400.0, 1000.0, 5000.0)).is_some());
    }

    #[test]
    fn test_hit_target_expands_short_thumb_symmetrically() {
        let mut mapper = GeometryMapper::new(Size::new(24.0, 40.0), Size::new(48.0, 48.0));
        let viewport = Viewport::new(400.0, 1000.0, 5000.0);
        mapper.layout(&viewport).unwrap();
        // Visual rect spans y in [0, 40] at scroll 0; thumb left at 376
        assert_eq!(mapper.thumb().bounds, Rect::new(376.0, 0.0, 400.0, 40.0));

        let x = 390.0;
        assert!(mapper.is_point_inside(x, 43.9, &viewport));
        assert!(mapper.is_point_inside(x, 44.0, &viewport));
        assert!(!mapper.is_point_inside(x, 44.5, &viewport));
        assert!(mapper.is_point_inside(x, -4.0, &viewport));
        assert!(!mapper.is_point_inside(x, -4.5, &viewport));
    }

    #[test]
    fn test_hit_target_tall_thumb_not_expanded() {
        let mut mapper = GeometryMapper::new(Size::new(24.0, 48.0), Size::new(48.0, 48.0));
        let viewport = Viewport::new(400.0, 1000.0, 5000.0);
        mapper.layout(&viewport).unwrap();

        assert!(mapper.is_point_inside(390.0, 48.0, &viewport));
        assert!(!mapper.is_point_inside(390.0, 48.5, &viewport));
        assert!(!mapper.is_point_inside(390.0, -0.5, &viewport));
    }

    #[test]
    fn test_hit_target_expands_leftward_only() {
        let mut mapper = GeometryMapper::new(Size::new(24.0, 48.0), Size::new(48.0, 48.0));
        let viewport = Viewport::new(400.0, 1000.0, 5000.0);
        mapper.layout(&viewport).unwrap();

        // 24px of extra width, all of it to the left of x=376
        assert!(mapper.is_point_inside(352.0, 10.0, &viewport));
        assert!(!mapper.is_point_inside(351.5, 10.0, &viewport));
    }

    #[test]
    fn test_hit_test_follows_scrolled_thumb() {
        let mut mapper = GeometryMapper::new(Size::new(24.0, 100.0), Size::new(48.0, 48.0));
        let viewport = Viewport::new(400.0, 1000.0, 5000.0).with_scroll_y(2000.0);
        mapper.layout(&viewport).unwrap();
        // Thumb top on screen: 2450 - 2000 = 450
        assert!(mapper.is_point_inside(390.0, 460.0, &viewport));
        assert!(!mapper.is_point_inside(390.0, 440.0, &viewport));
    }
}
