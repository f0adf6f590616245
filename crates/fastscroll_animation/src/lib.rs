//! Fastscroll Animation
//!
//! Describes the decor transitions of the fast-scroll thumb without playing
//! them. The controller decides *when* a transition starts and what it targets;
//! an external animation engine (or [`TransitionPlayer`] in headless setups)
//! does the interpolation.
//!
//! # Features
//!
//! - **Easing curves**: CSS-compatible cubic-bezier solver plus a few presets
//! - **Decor transitions**: fade-in/slide-in and fade-out/slide-out descriptors
//! - **Player**: samples a transition over elapsed time

pub mod easing;
pub mod player;
pub mod transition;

pub use easing::Easing;
pub use player::{ThumbAppearance, TransitionPlayer};
pub use transition::{AnimatedProperty, DecorTransition, PropertyTrack, TransitionKind};
