//! Headless playback of decor transitions
//!
//! Hosts without an animation engine (and tests) use this to turn a
//! [`DecorTransition`] into concrete alpha/translation values over time.

use std::time::Duration;

use crate::transition::{AnimatedProperty, DecorTransition};

/// Animated appearance of the thumb
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbAppearance {
    pub alpha: f32,
    pub translation_x: f32,
}

impl Default for ThumbAppearance {
    fn default() -> Self {
        Self {
            alpha: 0.0,
            translation_x: 0.0,
        }
    }
}

impl ThumbAppearance {
    fn get(&self, property: AnimatedProperty) -> f32 {
        match property {
            AnimatedProperty::Alpha => self.alpha,
            AnimatedProperty::TranslationX => self.translation_x,
        }
    }

    fn set(&mut self, property: AnimatedProperty, value: f32) {
        match property {
            AnimatedProperty::Alpha => self.alpha = value,
            AnimatedProperty::TranslationX => self.translation_x = value,
        }
    }
}

/// Transition currently being sampled, with resolved start values
struct ActiveTransition {
    transition: DecorTransition,
    start: ThumbAppearance,
    elapsed: Duration,
}

/// Plays at most one decor transition at a time.
///
/// Starting a transition while another is running cancels the running one
/// and picks up from the values it had reached.
pub struct TransitionPlayer {
    active: Option<ActiveTransition>,
    current: ThumbAppearance,
}

impl TransitionPlayer {
    pub fn new() -> Self {
        Self {
            active: None,
            current: ThumbAppearance::default(),
        }
    }

    /// Start a transition from the current appearance
    pub fn start(&mut self, transition: DecorTransition) {
        let mut start = self.current;
        for track in &transition.tracks {
            if let Some(from) = track.from {
                start.set(track.property, from);
            }
        }
        tracing::trace!(
            "decor transition {:?} over {:?}",
            transition.kind,
            transition.duration
        );
        self.current = start;
        self.active = Some(ActiveTransition {
            transition,
            start,
            elapsed: Duration::ZERO,
        });
        // Zero-length transitions land on their targets immediately
        self.advance(Duration::ZERO);
    }

    /// Cancel the running transition, freezing values where they are
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Jump straight to a given appearance (e.g. a layout pass moved the thumb)
    pub fn set_translation_x(&mut self, translation_x: f32) {
        if self.active.is_none() {
            self.current.translation_x = translation_x;
        }
    }

    pub fn is_playing(&self) -> bool {
        self.active.is_some()
    }

    pub fn appearance(&self) -> ThumbAppearance {
        self.current
    }

    /// Advance the running transition
    pub fn advance(&mut self, dt: Duration) {
        let Some(active) = self.active.as_mut() else {
            return;
        };

        active.elapsed += dt;
        let duration = active.transition.duration;
        let progress = if duration.is_zero() {
            1.0
        } else {
            (active.elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
        };
        let eased = active.transition.easing.apply(progress);

        for track in &active.transition.tracks {
            let from = active.start.get(track.property);
            let value = from + (track.to - from) * eased;
            self.current.set(track.property, value);
        }

        if progress >= 1.0 {
            for track in &active.transition.tracks {
                self.current.set(track.property, track.to);
            }
            self.active = None;
        }
    }
}

impl Default for TransitionPlayer {
    fn default() -> Self {
        Self::new()
    }
}
