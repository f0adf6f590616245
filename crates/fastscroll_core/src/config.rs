//! Fast-scroller configuration
//!
//! Every tunable constant of the controller lives here so hosts can adjust
//! thresholds without touching the state machine. Config files are TOML:
//!
//! ```toml
//! touch_slop = 8.0
//! auto_hide_delay_ms = 1000
//! fling_velocity_threshold = 6000.0
//! fade_out_easing = { cubic_bezier = [0.44, 0.0, 0.34, 1.0] }
//!
//! [min_touch_target]
//! width = 48.0
//! height = 48.0
//! ```

use std::path::Path;
use std::time::Duration;

use fastscroll_animation::Easing;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::geometry::Size;

/// Configuration for the fast-scroll controller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FastScrollConfig {
    /// How long a touch on the thumb must be held before it becomes a drag
    pub tap_timeout_ms: u64,
    /// Vertical movement (pixels) that turns a pending drag into a drag
    pub touch_slop: f32,
    /// Inactivity before the thumb hides
    pub auto_hide_delay_ms: u64,
    /// Duration of the fade-out/slide-out transition
    pub fade_out_duration_ms: u64,
    /// Duration of the fade-in/slide-in transition
    pub fade_in_duration_ms: u64,
    pub fade_out_easing: Easing,
    pub fade_in_easing: Easing,
    /// Release velocity (units/second) at which a fling reveals the thumb
    pub fling_velocity_threshold: f32,
    /// Scroll range must exceed this many viewport heights for a fling reveal
    pub fling_content_factor: f32,
    /// Minimum size of the thumb's touch target
    pub min_touch_target: Size,
    /// Intrinsic size of the thumb visual
    pub thumb_size: Size,
}

impl Default for FastScrollConfig {
    fn default() -> Self {
        Self {
            tap_timeout_ms: 100,
            touch_slop: 8.0,
            auto_hide_delay_ms: 1000,
            fade_out_duration_ms: 224,
            fade_in_duration_ms: 6,
            fade_out_easing: Easing::DECOR_FADE_OUT,
            fade_in_easing: Easing::EaseInOutSine,
            fling_velocity_threshold: 6000.0,
            fling_content_factor: 3.0,
            min_touch_target: Size::new(48.0, 48.0),
            thumb_size: Size::new(24.0, 48.0),
        }
    }
}

impl FastScrollConfig {
    /// Config that only reveals on very fast flings over long content
    pub fn conservative() -> Self {
        Self {
            fling_velocity_threshold: 9000.0,
            fling_content_factor: 5.0,
            ..Default::default()
        }
    }

    /// Config with a larger touch target for coarse pointers
    pub fn large_touch_target() -> Self {
        Self {
            min_touch_target: Size::new(64.0, 64.0),
            ..Default::default()
        }
    }

    /// Parse and validate a TOML config
    pub fn from_toml(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values that would make the geometry or timing meaningless
    pub fn validate(&self) -> Result<()> {
        if !self.touch_slop.is_finite() || self.touch_slop < 0.0 {
            return Err(ConfigError::invalid(
                "touch_slop",
                format!("must be a finite non-negative distance, got {}", self.touch_slop),
            ));
        }
        for (field, duration_ms) in [
            ("tap_timeout_ms", self.tap_timeout_ms),
            ("auto_hide_delay_ms", self.auto_hide_delay_ms),
            ("fade_out_duration_ms", self.fade_out_duration_ms),
            ("fade_in_duration_ms", self.fade_in_duration_ms),
        ] {
            if duration_ms == 0 {
                return Err(ConfigError::invalid(field, "must be positive"));
            }
        }
        if !self.fling_velocity_threshold.is_finite() || self.fling_velocity_threshold <= 0.0 {
            return Err(ConfigError::invalid(
                "fling_velocity_threshold",
                format!("must be positive, got {}", self.fling_velocity_threshold),
            ));
        }
        if !self.fling_content_factor.is_finite() || self.fling_content_factor < 0.0 {
            return Err(ConfigError::invalid(
                "fling_content_factor",
                format!("must be non-negative, got {}", self.fling_content_factor),
            ));
        }
        for (field, easing) in [
            ("fade_out_easing", self.fade_out_easing),
            ("fade_in_easing", self.fade_in_easing),
        ] {
            if !easing.is_valid() {
                return Err(ConfigError::invalid(
                    field,
                    format!("bezier x control points must lie in [0, 1], got {easing:?}"),
                ));
            }
        }
        for (field, size) in [
            ("min_touch_target", self.min_touch_target),
            ("thumb_size", self.thumb_size),
        ] {
            if !size.is_valid() {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be finite and non-negative, got {size:?}"),
                ));
            }
        }
        Ok(())
    }

    pub fn tap_timeout(&self) -> Duration {
        Duration::from_millis(self.tap_timeout_ms)
    }

    pub fn auto_hide_delay(&self) -> Duration {
        Duration::from_millis(self.auto_hide_delay_ms)
    }

    pub fn fade_out_duration(&self) -> Duration {
        Duration::from_millis(self.fade_out_duration_ms)
    }

    pub fn fade_in_duration(&self) -> Duration {
        Duration::from_millis(self.fade_in_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FastScrollConfig::default();
        config.validate().unwrap();
        assert_eq!(config.auto_hide_delay(), Duration::from_millis(1000));
        assert_eq!(config.fade_out_duration(), Duration::from_millis(224));
        assert_eq!(config.fade_in_duration(), Duration::from_millis(6));
        assert_eq!(config.fling_velocity_threshold, 6000.0);
        assert_eq!(config.fling_content_factor, 3.0);
        assert_eq!(config.fade_out_easing, Easing::CubicBezier(0.44, 0.0, 0.34, 1.0));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = FastScrollConfig::from_toml(
            r#"
            touch_slop = 12.0
            fade_out_easing = { cubic_bezier = [0.4, 0.0, 0.2, 1.0] }

            [min_touch_target]
            width = 40.0
            height = 56.0
            "#,
        )
        .unwrap();
        assert_eq!(config.touch_slop, 12.0);
        assert_eq!(config.fade_out_easing, Easing::CubicBezier(0.4, 0.0, 0.2, 1.0));
        assert_eq!(config.min_touch_target, Size::new(40.0, 56.0));
        assert_eq!(config.auto_hide_delay_ms, 1000);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = FastScrollConfig::conservative();
        let text = config.to_toml().unwrap();
        assert_eq!(FastScrollConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = FastScrollConfig::from_toml("touch_slop = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "touch_slop", .. }));

        let err = FastScrollConfig::from_toml("auto_hide_delay_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "auto_hide_delay_ms", .. }));

        let err = FastScrollConfig::from_toml("tap_timeout_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "tap_timeout_ms", .. }));

        let err = FastScrollConfig::from_toml("fade_out_duration_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "fade_out_duration_ms", .. }));

        let err = FastScrollConfig::from_toml("fade_in_duration_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "fade_in_duration_ms", .. }));

        let err = FastScrollConfig::from_toml("fade_in_easing = { cubic_bezier = [2.0, 0.0, 0.5, 1.0] }")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "fade_in_easing", .. }));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = FastScrollConfig::from_toml("touch_slop = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
