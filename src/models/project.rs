//! Project: an ordered checklist of works with durable YAML state
//!
//! A Project owns its works exclusively. It is built either from a template
//! document (fresh, everything `not_started`) or restored from the
//! `workflow.yml` inside its project directory. Every status update
//! re-saves the full state so progress survives restarts.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Result, WorkflowError};
use crate::models::{Work, WorkStatus};
use crate::schema::{self, ProjectDocument};
use crate::validation::validate_project_name;
use crate::PROJECT_FILE_NAME;

/// Outcome of the next-work scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextWork<'a> {
    /// The first not-started work, ready to begin.
    Ready(&'a Work),
    /// The first not-started work exists, but the work before it is still
    /// unfinished and must complete first.
    Blocked(&'a Work),
    /// No not-started work remains.
    Exhausted,
}

impl<'a> NextWork<'a> {
    /// The found work, if the scan found one at all.
    pub fn work(&self) -> Option<&'a Work> {
        match *self {
            NextWork::Ready(w) | NextWork::Blocked(w) => Some(w),
            NextWork::Exhausted => None,
        }
    }
}

/// An ordered collection of works plus a name and a persistence location.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    works: Vec<Work>,
    /// Directory holding this project's state file. Absent for a detached,
    /// in-memory project that cannot persist or stage files.
    pub project_path: Option<PathBuf>,
}

impl Project {
    /// Creates a fresh project from a template document.
    ///
    /// Validates the name, ensures the project directory exists, parses the
    /// template into `not_started` works, then immediately persists the new
    /// state. A failed save aborts construction.
    pub fn create(name: &str, base_dir: &Path, template_path: &Path) -> Result<Self> {
        validate_project_name(name)?;

        let project_path = base_dir.join(name);
        fs::create_dir_all(&project_path)?;

        let works = schema::parse_template(template_path)?;
        let project = Self {
            name: name.to_string(),
            works,
            project_path: Some(project_path.clone()),
        };
        project.save(&project_path.join(PROJECT_FILE_NAME))?;

        debug!(project = %name, works = project.works.len(), "created project from template");
        Ok(project)
    }

    /// Creates a detached project with no storage directory and no works.
    /// Useful for callers that manage persistence themselves.
    pub fn detached(name: &str) -> Result<Self> {
        validate_project_name(name)?;
        Ok(Self {
            name: name.to_string(),
            works: Vec::new(),
            project_path: None,
        })
    }

    /// Loads an existing project from its directory under `base_dir`.
    ///
    /// Returns `None` when the project directory does not exist, or when
    /// loading fails for a handled reason (missing or corrupt state file);
    /// those failures are logged and swallowed so that "does not exist yet"
    /// and "exists but unloadable" look the same to this call path.
    /// Configuration errors still propagate.
    pub fn load(name: &str, base_dir: &Path) -> Result<Option<Self>> {
        validate_project_name(name)?;

        let project_path = base_dir.join(name);
        if !project_path.exists() {
            return Ok(None);
        }

        match Self::restore(name, &project_path) {
            Ok(project) => Ok(Some(project)),
            Err(e @ (WorkflowError::Load(_) | WorkflowError::NotFound(_))) => {
                warn!(project = %name, error = %e, "failed to load project");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Restores a project from the state file inside `project_path`.
    fn restore(name: &str, project_path: &Path) -> Result<Self> {
        let project_file = project_path.join(PROJECT_FILE_NAME);
        if !project_file.exists() {
            return Err(WorkflowError::NotFound(project_file));
        }

        let (saved_name, works) = schema::parse_saved(&project_file)?;
        debug!(project = %saved_name, works = works.len(), "restored project");
        Ok(Self {
            name: saved_name,
            works,
            project_path: Some(project_path.to_path_buf()),
        })
    }

    /// The works in execution order.
    pub fn works(&self) -> &[Work] {
        &self.works
    }

    /// Finds the next actionable work.
    ///
    /// Scans in sequence order for the first `not_started` work. The work
    /// is `Ready` if it is first in the sequence or its predecessor is
    /// done, and `Blocked` if the predecessor is still unfinished. With
    /// more than one work `in_progress` at once (which well-formed callers
    /// never produce) the result is unspecified.
    pub fn next_not_started_work(&self) -> NextWork<'_> {
        let mut last_work_done: Option<bool> = None;
        for work in &self.works {
            if work.is_not_started() {
                return match last_work_done {
                    // First work in the sequence: nothing before it to wait on.
                    None => NextWork::Ready(work),
                    Some(true) => NextWork::Ready(work),
                    Some(false) => NextWork::Blocked(work),
                };
            }
            last_work_done = Some(work.is_done());
        }

        debug!(project = %self.name, "no not-started work found");
        NextWork::Exhausted
    }

    /// The first work currently `in_progress`, if any.
    pub fn current_work(&self) -> Option<&Work> {
        self.works.iter().find(|w| w.is_in_progress())
    }

    /// True iff every work is done. Vacuously true for an empty sequence.
    pub fn is_all_done(&self) -> bool {
        self.works.iter().all(Work::is_done)
    }

    /// Looks up a work by name.
    ///
    /// With `without_check` the lookup ignores sequencing and returns the
    /// first work with that name (duplicate names are a caller contract;
    /// the first match in document order wins). Without it, the name must
    /// match the work the next-work scan considers ready, so callers
    /// cannot claim a work out of sequence.
    pub fn work_by_name(&self, name: &str, without_check: bool) -> Option<&Work> {
        if without_check {
            return self.works.iter().find(|w| w.name == name);
        }
        match self.next_not_started_work() {
            NextWork::Ready(work) if work.name == name => Some(work),
            _ => None,
        }
    }

    /// Applies a status to the named work and re-saves the project.
    ///
    /// Silently no-ops when no work has that name, so a stale caller
    /// reference cannot corrupt state. The in-memory change is not rolled
    /// back if the save fails.
    pub fn update_work_status(&mut self, work_name: &str, status: WorkStatus) -> Result<()> {
        let Some(work) = self.works.iter_mut().find(|w| w.name == work_name) else {
            warn!(project = %self.name, work = %work_name, "status update for unknown work ignored");
            return Ok(());
        };
        work.set_status(status);
        debug!(project = %self.name, work = %work_name, status = %status, "work status updated");

        if let Some(project_path) = self.project_path.clone() {
            self.save(&project_path.join(PROJECT_FILE_NAME))?;
        }
        Ok(())
    }

    /// Serializes the full project state to `path`.
    ///
    /// The write is a plain `fs::write`, not an atomic replace; a crash
    /// mid-write can truncate the state file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let doc = ProjectDocument::from_works(&self.name, &self.works);
        let yaml = serde_yaml::to_string(&doc).map_err(|e| WorkflowError::Save {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        fs::write(path, yaml).map_err(|e| WorkflowError::Save {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Path of this project's state file, if the project is attached.
    pub fn project_file(&self) -> Option<PathBuf> {
        self.project_path
            .as_ref()
            .map(|p| p.join(PROJECT_FILE_NAME))
    }
}

impl std::fmt::Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Project: {}", self.name)?;
        for work in &self.works {
            writeln!(f, "  {work}")?;
        }
        Ok(())
    }
}
