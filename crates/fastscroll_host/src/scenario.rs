//! Replay scenario definition
//!
//! A scenario sets up a viewport and lists input steps plus expectations:
//!
//! ```json
//! {
//!   "viewport": { "width": 400, "height": 1000, "scroll_range": 5000 },
//!   "steps": [
//!     { "type": "fling", "from_y": 900, "to_y": 300, "duration_ms": 40 },
//!     { "type": "expect_state", "state": "visible" },
//!     { "type": "wait", "ms": 1000 },
//!     { "type": "expect_state", "state": "hidden" }
//!   ]
//! }
//! ```

use std::path::Path;

use fastscroll_core::{Insets, ScrollerState};
use serde::Deserialize;

use crate::error::{Result, ScenarioError};

/// Virtual time between touch samples unless a step says otherwise
pub const FRAME_MS: u64 = 16;

fn frame_ms() -> u64 {
    FRAME_MS
}

/// Initial geometry of the headless surface
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ViewportSetup {
    pub width: f32,
    pub height: f32,
    pub scroll_range: f32,
    #[serde(default)]
    pub scroll_y: f32,
    #[serde(default)]
    pub padding: Insets,
}

impl ViewportSetup {
    fn validate(&self) -> Result<()> {
        let dims = [self.width, self.height, self.scroll_range];
        if dims.iter().any(|d| !d.is_finite() || *d < 0.0) || self.width == 0.0 || self.height == 0.0 {
            return Err(ScenarioError::InvalidViewport(format!(
                "width and height must be positive and scroll_range non-negative, got {}x{} range {}",
                self.width, self.height, self.scroll_range
            )));
        }
        Ok(())
    }
}

/// Sequence of replay steps against one surface
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub viewport: ViewportSetup,
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Load a scenario from JSON text.
    pub fn from_json(input: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(input)?;
        scenario.viewport.validate()?;
        Ok(scenario)
    }

    /// Load a scenario from file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// One replay step.
///
/// Touch steps wait `delay_ms` (one frame by default) before the event is
/// delivered. Moves and ups reuse the x of the preceding down when `x` is
/// omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioStep {
    Down {
        x: f32,
        y: f32,
        #[serde(default = "frame_ms")]
        delay_ms: u64,
    },
    Move {
        #[serde(default)]
        x: Option<f32>,
        y: f32,
        #[serde(default = "frame_ms")]
        delay_ms: u64,
    },
    Up {
        #[serde(default)]
        x: Option<f32>,
        #[serde(default)]
        y: Option<f32>,
        #[serde(default = "frame_ms")]
        delay_ms: u64,
    },
    Cancel {
        #[serde(default = "frame_ms")]
        delay_ms: u64,
    },
    /// A complete down/move/up swipe away from the thumb
    Fling {
        #[serde(default = "default_fling_x")]
        x: f32,
        from_y: f32,
        to_y: f32,
        duration_ms: u64,
    },
    /// Host-initiated scroll
    Scroll {
        #[serde(default)]
        x: f32,
        y: f32,
    },
    Resize { width: f32, height: f32 },
    Show,
    Wait { ms: u64 },
    ExpectState { state: ScrollerState },
    ExpectScroll {
        y: f32,
        #[serde(default = "default_tolerance")]
        tolerance: f32,
    },
    ExpectNativeScrollbar { enabled: bool },
}

fn default_fling_x() -> f32 {
    100.0
}

fn default_tolerance() -> f32 {
    0.5
}

impl ScenarioStep {
    /// Step name as written in scenario JSON
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioStep::Down { .. } => "down",
            ScenarioStep::Move { .. } => "move",
            ScenarioStep::Up { .. } => "up",
            ScenarioStep::Cancel { .. } => "cancel",
            ScenarioStep::Fling { .. } => "fling",
            ScenarioStep::Scroll { .. } => "scroll",
            ScenarioStep::Resize { .. } => "resize",
            ScenarioStep::Show => "show",
            ScenarioStep::Wait { .. } => "wait",
            ScenarioStep::ExpectState { .. } => "expect_state",
            ScenarioStep::ExpectScroll { .. } => "expect_scroll",
            ScenarioStep::ExpectNativeScrollbar { .. } => "expect_native_scrollbar",
        }
    }

    pub fn is_expectation(&self) -> bool {
        matches!(
            self,
            ScenarioStep::ExpectState { .. }
                | ScenarioStep::ExpectScroll { .. }
                | ScenarioStep::ExpectNativeScrollbar { .. }
        )
    }
}
