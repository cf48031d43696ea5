//! Work item types for checklist tracking
//!
//! A Work is one entry in a project's ordered checklist. Works are created
//! during template or saved-state parsing and live inside their owning
//! Project; status is the only mutable field.

use serde::{Deserialize, Serialize};

use crate::error::WorkflowError;

/// Status of a work item.
///
/// State machine transitions:
/// - `NotStarted` -> `InProgress` (when a caller claims the work)
/// - `InProgress` -> `Done` (when the caller reports completion)
/// - `Done` is a terminal state
///
/// Transition legality is not enforced at this level; sequencing is the
/// owning Project's responsibility.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    /// Work has not been picked up yet.
    NotStarted,
    /// Work is actively being performed.
    InProgress,
    /// Work is finished; terminal state.
    Done,
}

impl std::fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkStatus::NotStarted => write!(f, "not_started"),
            WorkStatus::InProgress => write!(f, "in_progress"),
            WorkStatus::Done => write!(f, "done"),
        }
    }
}

impl std::str::FromStr for WorkStatus {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(WorkStatus::NotStarted),
            "in_progress" => Ok(WorkStatus::InProgress),
            "done" => Ok(WorkStatus::Done),
            _ => Err(WorkflowError::InvalidStatus(s.to_string())),
        }
    }
}

/// A single checklist item owned by a Project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Work {
    /// 1-based position in the owning project's sequence, assigned at
    /// parse time and immutable afterwards.
    pub index: usize,
    pub name: String,
    /// Path-like string describing the expected output; opaque to the core.
    pub output_file: String,
    /// Free-text note; opaque to the core.
    pub comment: String,
    pub status: WorkStatus,
}

impl Work {
    /// Creates a new work in `NotStarted` status.
    pub fn new(index: usize, name: String, output_file: String, comment: String) -> Self {
        Self {
            index,
            name,
            output_file,
            comment,
            status: WorkStatus::NotStarted,
        }
    }

    /// Applies a new status. The in-memory change is the only effect;
    /// persistence belongs to the owning Project.
    pub fn set_status(&mut self, status: WorkStatus) {
        self.status = status;
    }

    pub fn is_not_started(&self) -> bool {
        self.status == WorkStatus::NotStarted
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == WorkStatus::InProgress
    }

    pub fn is_done(&self) -> bool {
        self.status == WorkStatus::Done
    }
}

impl std::fmt::Display for Work {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {} ({})", self.index, self.name, self.status)
    }
}
