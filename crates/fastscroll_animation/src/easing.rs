//! Easing curves for decor transitions

use serde::{Deserialize, Serialize};

/// Easing curve applied to transition progress.
///
/// Serializes in config files as `"linear"`, `"ease_in_out_sine"` or
/// `{ cubic_bezier = [x1, y1, x2, y2] }`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "EasingRepr", into = "EasingRepr")]
pub enum Easing {
    #[default]
    Linear,
    /// Cosine-shaped accelerate/decelerate, the platform default for property animators
    EaseInOutSine,
    CubicBezier(f32, f32, f32, f32),
}

/// Serialized form; control points travel as one array
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum EasingRepr {
    Linear,
    EaseInOutSine,
    CubicBezier([f32; 4]),
}

impl From<EasingRepr> for Easing {
    fn from(repr: EasingRepr) -> Self {
        match repr {
            EasingRepr::Linear => Easing::Linear,
            EasingRepr::EaseInOutSine => Easing::EaseInOutSine,
            EasingRepr::CubicBezier([x1, y1, x2, y2]) => Easing::CubicBezier(x1, y1, x2, y2),
        }
    }
}

impl From<Easing> for EasingRepr {
    fn from(easing: Easing) -> Self {
        match easing {
            Easing::Linear => EasingRepr::Linear,
            Easing::EaseInOutSine => EasingRepr::EaseInOutSine,
            Easing::CubicBezier(x1, y1, x2, y2) => EasingRepr::CubicBezier([x1, y1, x2, y2]),
        }
    }
}

impl Easing {
    /// Curve used when the thumb fades and slides out.
    pub const DECOR_FADE_OUT: Easing = Easing::CubicBezier(0.44, 0.0, 0.34, 1.0);

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::EaseInOutSine => -((std::f32::consts::PI * t).cos() - 1.0) / 2.0,
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier_ease(t, *x1, *y1, *x2, *y2),
        }
    }

    /// Whether the curve is well formed.
    ///
    /// Bezier x control points must lie in `[0, 1]` so the curve stays a
    /// function of time; all control points must be finite.
    pub fn is_valid(&self) -> bool {
        match *self {
            Easing::CubicBezier(x1, y1, x2, y2) => {
                [x1, y1, x2, y2].iter().all(|v| v.is_finite())
                    && (0.0..=1.0).contains(&x1)
                    && (0.0..=1.0).contains(&x2)
            }
            _ => true,
        }
    }
}

/// Evaluate a CSS-style `cubic-bezier()` at time fraction `t`.
///
/// The curve runs from (0, 0) to (1, 1). With both x control points inside
/// `[0, 1]` its x coordinate never decreases, so the curve parameter for `t`
/// is found by bisection and then fed to the y polynomial.
fn cubic_bezier_ease(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let target = f64::from(t);
    let (x1, x2) = (f64::from(x1), f64::from(x2));
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    for _ in 0..BISECTION_STEPS {
        let mid = 0.5 * (lo + hi);
        if bernstein(mid, x1, x2) < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    bernstein(0.5 * (lo + hi), f64::from(y1), f64::from(y2)) as f32
}

/// Halvings of the parameter interval; well below f32 resolution
const BISECTION_STEPS: u32 = 40;

/// One coordinate of a cubic bezier anchored at 0 and 1
fn bernstein(s: f64, c1: f64, c2: f64) -> f64 {
    let r = 1.0 - s;
    3.0 * r * r * s * c1 + 3.0 * r * s * s * c2 + s * s * s
}
