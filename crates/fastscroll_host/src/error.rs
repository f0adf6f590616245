//! Host-side error types

use std::path::PathBuf;

use fastscroll_core::ConfigError;
use thiserror::Error;

/// Errors raised while loading or running a replay scenario
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// Failed to read a scenario file or write a report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Scenario JSON does not match the step schema
    #[error("Failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),

    /// Controller configuration was rejected
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Viewport dimensions cannot host a scroll surface
    #[error("Invalid viewport: {0}")]
    InvalidViewport(String),

    /// Report path escapes the working directory
    #[error("Invalid report path {path:?}: {reason}")]
    ReportPath { path: PathBuf, reason: &'static str },
}

/// Result type for scenario operations
pub type Result<T> = std::result::Result<T, ScenarioError>;
