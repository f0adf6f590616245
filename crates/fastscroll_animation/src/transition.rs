//! Decor transition descriptors
//!
//! A [`DecorTransition`] is what the controller hands to the presentation
//! layer when the thumb appears or disappears: which properties move, to
//! which values, for how long, along which curve. Tracks play together.

use std::time::Duration;

use smallvec::SmallVec;

use crate::easing::Easing;

/// Thumb property animated by a decor transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatedProperty {
    /// Opacity, 0.0 (invisible) to 1.0
    Alpha,
    /// Horizontal translation of the thumb, in surface pixels
    TranslationX,
}

/// One property animated between two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyTrack {
    pub property: AnimatedProperty,
    /// Start value; `None` starts from whatever the property currently is
    pub from: Option<f32>,
    pub to: f32,
}

impl PropertyTrack {
    pub fn new(property: AnimatedProperty, from: Option<f32>, to: f32) -> Self {
        Self { property, from, to }
    }
}

/// Direction of a decor transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Fade in and slide in from the trailing edge
    Reveal,
    /// Fade out and slide out past the trailing edge
    Dismiss,
}

/// A set of property tracks played together with a shared duration and curve.
#[derive(Debug, Clone, PartialEq)]
pub struct DecorTransition {
    pub kind: TransitionKind,
    pub duration: Duration,
    pub easing: Easing,
    pub tracks: SmallVec<[PropertyTrack; 2]>,
}

impl DecorTransition {
    /// Fade in while sliding from `translation_x + width` back to `translation_x`.
    pub fn reveal(translation_x: f32, width: f32, duration: Duration, easing: Easing) -> Self {
        let mut tracks = SmallVec::new();
        tracks.push(PropertyTrack::new(AnimatedProperty::Alpha, None, 1.0));
        tracks.push(PropertyTrack::new(
            AnimatedProperty::TranslationX,
            Some(translation_x + width),
            translation_x,
        ));
        Self {
            kind: TransitionKind::Reveal,
            duration,
            easing,
            tracks,
        }
    }

    /// Fade out while sliding from `translation_x` to `translation_x + width`.
    pub fn dismiss(translation_x: f32, width: f32, duration: Duration, easing: Easing) -> Self {
        let mut tracks = SmallVec::new();
        tracks.push(PropertyTrack::new(AnimatedProperty::Alpha, None, 0.0));
        tracks.push(PropertyTrack::new(
            AnimatedProperty::TranslationX,
            Some(translation_x),
            translation_x + width,
        ));
        Self {
            kind: TransitionKind::Dismiss,
            duration,
            easing,
            tracks,
        }
    }

    /// Track for a property, if this transition animates it
    pub fn track(&self, property: AnimatedProperty) -> Option<&PropertyTrack> {
        self.tracks.iter().find(|t| t.property == property)
    }

    /// Final value of a property once the transition completes
    pub fn target(&self, property: AnimatedProperty) -> Option<f32> {
        self.track(property).map(|t| t.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_slides_in_from_trailing_edge() {
        let t = DecorTransition::reveal(10.0, 24.0, Duration::from_millis(6), Easing::Linear);
        assert_eq!(t.kind, TransitionKind::Reveal);
        assert_eq!(t.target(AnimatedProperty::Alpha), Some(1.0));
        let slide = t.track(AnimatedProperty::TranslationX).unwrap();
        assert_eq!(slide.from, Some(34.0));
        assert_eq!(slide.to, 10.0);
    }

    #[test]
    fn test_dismiss_slides_out_past_trailing_edge() {
        let t = DecorTransition::dismiss(
            0.0,
            24.0,
            Duration::from_millis(224),
            Easing::DECOR_FADE_OUT,
        );
        assert_eq!(t.kind, TransitionKind::Dismiss);
        assert_eq!(t.duration, Duration::from_millis(224));
        assert_eq!(t.target(AnimatedProperty::Alpha), Some(0.0));
        assert_eq!(t.target(AnimatedProperty::TranslationX), Some(24.0));
        assert_eq!(t.track(AnimatedProperty::Alpha).unwrap().from, None);
    }
}
