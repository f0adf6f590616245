//! Scenario runner that replays input against a headless surface.

use std::time::Duration;

use fastscroll_core::{FastScrollConfig, MotionEvent, SurfaceMetrics, Viewport};

use crate::error::Result;
use crate::headless::HeadlessHost;
use crate::report::{ReplayReport, TraceEntry};
use crate::scenario::{Scenario, ScenarioStep, FRAME_MS};
use crate::surface::FastScrollSurface;

/// Samples per fling gesture between down and up
const FLING_SAMPLES: u64 = 4;

/// Final outcome of a scenario run.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Passed { report: ReplayReport },
    Failed { report: ReplayReport },
}

impl RunOutcome {
    pub fn report(&self) -> &ReplayReport {
        match self {
            RunOutcome::Passed { report } => report,
            RunOutcome::Failed { report } => report,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }
}

/// Execute scenario JSON with the default configuration.
pub fn run_scenario(input: &str) -> Result<RunOutcome> {
    let scenario = Scenario::from_json(input)?;
    Ok(run_loaded_scenario(&scenario, FastScrollConfig::default()))
}

/// Execute a pre-loaded scenario.
pub fn run_loaded_scenario(scenario: &Scenario, config: FastScrollConfig) -> RunOutcome {
    let setup = scenario.viewport;
    let viewport = Viewport::new(setup.width, setup.height, setup.scroll_range)
        .with_scroll_y(setup.scroll_y)
        .with_padding(setup.padding);
    let mut surface: FastScrollSurface<HeadlessHost> =
        FastScrollSurface::new(HeadlessHost::new(viewport), config);

    let mut replay = Replay {
        surface: &mut surface,
        last_x: 0.0,
        last_y: 0.0,
        trace: Vec::with_capacity(scenario.steps.len()),
    };

    for (step_index, step) in scenario.steps.iter().enumerate() {
        if let Err(message) = replay.run_step(step_index, step) {
            tracing::debug!("step {} ({}) failed: {}", step_index, step.name(), message);
            let report = ReplayReport::failed(
                step.name(),
                step_index,
                message,
                std::mem::take(&mut replay.trace),
                replay.surface.now_ms(),
                replay.surface.state(),
                replay.surface.host().scroll_y(),
            );
            return RunOutcome::Failed { report };
        }
    }

    RunOutcome::Passed {
        report: ReplayReport::passed(
            replay.trace,
            surface.now_ms(),
            surface.state(),
            surface.host().scroll_y(),
        ),
    }
}

struct Replay<'a> {
    surface: &'a mut FastScrollSurface<HeadlessHost>,
    last_x: f32,
    last_y: f32,
    trace: Vec<TraceEntry>,
}

impl Replay<'_> {
    /// Run one step; `Err` carries the failed expectation's message
    fn run_step(&mut self, step_index: usize, step: &ScenarioStep) -> std::result::Result<(), String> {
        let mut claimed = None;

        match *step {
            ScenarioStep::Down { x, y, delay_ms } => {
                self.last_x = x;
                self.last_y = y;
                claimed = Some(self.touch(delay_ms, |t| MotionEvent::down(x, y, t)));
            }
            ScenarioStep::Move { x, y, delay_ms } => {
                let x = x.unwrap_or(self.last_x);
                self.last_x = x;
                self.last_y = y;
                claimed = Some(self.touch(delay_ms, |t| MotionEvent::moved(x, y, t)));
            }
            ScenarioStep::Up { x, y, delay_ms } => {
                let x = x.unwrap_or(self.last_x);
                let y = y.unwrap_or(self.last_y);
                claimed = Some(self.touch(delay_ms, |t| MotionEvent::up(x, y, t)));
            }
            ScenarioStep::Cancel { delay_ms } => {
                claimed = Some(self.touch(delay_ms, MotionEvent::cancel));
            }
            ScenarioStep::Fling {
                x,
                from_y,
                to_y,
                duration_ms,
            } => {
                claimed = Some(self.fling(x, from_y, to_y, duration_ms));
            }
            ScenarioStep::Scroll { x, y } => self.surface.scroll_to(x, y),
            ScenarioStep::Resize { width, height } => {
                let host = self.surface.host();
                let (old_width, old_height) = (host.width(), host.height());
                self.surface.host_mut().resize(width, height);
                self.surface.size_changed(old_width, old_height);
            }
            ScenarioStep::Show => self.surface.show(),
            ScenarioStep::Wait { ms } => self.surface.advance(Duration::from_millis(ms)),
            ScenarioStep::ExpectState { state } => {
                let actual = self.surface.state();
                if actual != state {
                    return Err(format!("expected state {state:?}, got {actual:?}"));
                }
            }
            ScenarioStep::ExpectScroll { y, tolerance } => {
                let actual = self.surface.host().scroll_y();
                if (actual - y).abs() > tolerance {
                    return Err(format!("expected scroll_y {y} (+/- {tolerance}), got {actual}"));
                }
            }
            ScenarioStep::ExpectNativeScrollbar { enabled } => {
                let actual = self.surface.host().is_native_scrollbar_enabled();
                if actual != enabled {
                    return Err(format!("expected native scrollbar enabled={enabled}, got {actual}"));
                }
            }
        }

        if !step.is_expectation() {
            self.trace.push(TraceEntry {
                step_index,
                step: step.name().to_string(),
                time_ms: self.surface.now_ms(),
                state: self.surface.state(),
                scroll_y: self.surface.host().scroll_y(),
                claimed,
            });
        }
        Ok(())
    }

    fn touch(&mut self, delay_ms: u64, event: impl FnOnce(u64) -> MotionEvent) -> bool {
        let time = self.surface.now_ms().saturating_add(delay_ms);
        self.surface.dispatch_touch(event(time))
    }

    /// Evenly spaced samples from `from_y` to `to_y`
    fn fling(&mut self, x: f32, from_y: f32, to_y: f32, duration_ms: u64) -> bool {
        self.last_x = x;
        self.last_y = to_y;
        let start = self.surface.now_ms().saturating_add(FRAME_MS);
        let mut claimed = self.surface.dispatch_touch(MotionEvent::down(x, from_y, start));

        for i in 1..FLING_SAMPLES {
            let fraction = i as f32 / FLING_SAMPLES as f32;
            let y = from_y + (to_y - from_y) * fraction;
            let time = start + duration_ms * i / FLING_SAMPLES;
            claimed |= self.surface.dispatch_touch(MotionEvent::moved(x, y, time));
        }

        claimed |= self
            .surface
            .dispatch_touch(MotionEvent::up(x, to_y, start + duration_ms));
        claimed
    }
}
