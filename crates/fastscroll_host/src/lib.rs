//! Fastscroll Host
//!
//! Connects the fast-scroll controller to a scrollable surface.
//!
//! # Features
//!
//! - **Host trait**: [`ScrollHost`] exposes live metrics and receives thumb commands
//! - **Surface**: [`FastScrollSurface`] dispatches input and applies commands
//! - **Virtual clock**: deterministic auto-hide timers via [`TimerQueue`]
//! - **Headless replay**: JSON scenarios run against [`HeadlessHost`] with a JSON report

pub mod error;
pub mod headless;
pub mod host;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod surface;
pub mod timer_queue;

pub use error::{Result, ScenarioError};
pub use headless::{HeadlessHost, HostCall};
pub use host::ScrollHost;
pub use report::{ReplayReport, ReportStatus, TraceEntry};
pub use runner::{run_loaded_scenario, run_scenario, RunOutcome};
pub use scenario::{Scenario, ScenarioStep, ViewportSetup};
pub use surface::FastScrollSurface;
pub use timer_queue::{TimerId, TimerQueue};
