//! Report output model for scenario replays.

use std::io::Write;
use std::path::{Component, Path};

use fastscroll_core::ScrollerState;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScenarioError};

/// Report status for a replay run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Surface state after one step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub step_index: usize,
    pub step: String,
    pub time_ms: u64,
    pub state: ScrollerState,
    pub scroll_y: f32,
    /// Whether the fast scroller claimed the step's touch events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimed: Option<bool>,
}

/// Machine-readable result of a replay run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayReport {
    pub status: ReportStatus,
    pub failed_step_index: Option<usize>,
    pub expectation: Option<String>,
    pub message: Option<String>,
    pub elapsed_ms: u64,
    pub final_state: ScrollerState,
    pub final_scroll_y: f32,
    pub trace: Vec<TraceEntry>,
}

impl ReplayReport {
    pub fn passed(trace: Vec<TraceEntry>, elapsed_ms: u64, state: ScrollerState, scroll_y: f32) -> Self {
        Self {
            status: ReportStatus::Passed,
            failed_step_index: None,
            expectation: None,
            message: None,
            elapsed_ms,
            final_state: state,
            final_scroll_y: scroll_y,
            trace,
        }
    }

    pub fn failed(
        expectation: &str,
        failed_step_index: usize,
        message: String,
        trace: Vec<TraceEntry>,
        elapsed_ms: u64,
        state: ScrollerState,
        scroll_y: f32,
    ) -> Self {
        Self {
            status: ReportStatus::Failed,
            failed_step_index: Some(failed_step_index),
            expectation: Some(expectation.to_string()),
            message: Some(message),
            elapsed_ms,
            final_state: state,
            final_scroll_y: scroll_y,
            trace,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == ReportStatus::Failed
    }

    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if path.is_absolute() || path.has_root() {
            return Err(ScenarioError::ReportPath {
                path: path.to_path_buf(),
                reason: "must be relative and must not start with a separator",
            });
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return Err(ScenarioError::ReportPath {
                path: path.to_path_buf(),
                reason: "cannot contain '..' or drive prefixes",
            });
        }
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, payload)?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}
