//! Drover: drives a herd of projects through one shared checklist
//!
//! A Drover owns a base directory, a workflow template, and a registry of
//! loaded projects. Callers ask it for the next claimable work across all
//! registered projects, perform the external effects, then report the
//! status change back so it can be persisted.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;
use crate::models::{Project, Work, WorkStatus};
use crate::PROJECT_FILE_NAME;

/// Registry of projects under one base directory, all sharing a template.
#[derive(Debug)]
pub struct Drover {
    base_dir: PathBuf,
    template_path: PathBuf,
    // BTreeMap keeps get_a_job's cross-project scan deterministic.
    projects: BTreeMap<String, Project>,
}

impl Drover {
    pub fn new(base_dir: impl Into<PathBuf>, template_path: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            template_path: template_path.into(),
            projects: BTreeMap::new(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Creates a project from the template and registers it, or loads the
    /// existing one if its state file is already on disk.
    pub fn create_project(&mut self, name: &str) -> Result<&Project> {
        let state_file = self.base_dir.join(name).join(PROJECT_FILE_NAME);
        let project = if state_file.exists() {
            match Project::load(name, &self.base_dir)? {
                Some(project) => project,
                // State file exists but is unloadable: start over from the template.
                None => Project::create(name, &self.base_dir, &self.template_path)?,
            }
        } else {
            Project::create(name, &self.base_dir, &self.template_path)?
        };

        info!(project = %name, "project registered");
        Ok(self.projects.entry(name.to_string()).or_insert(project))
    }

    /// Loads an existing project from disk and registers it. Returns `None`
    /// when the project does not exist or cannot be loaded.
    pub fn load_project(&mut self, name: &str) -> Result<Option<&Project>> {
        match Project::load(name, &self.base_dir)? {
            Some(project) => {
                self.projects.insert(name.to_string(), project);
                Ok(self.projects.get(name))
            }
            None => Ok(None),
        }
    }

    /// A registered project by name.
    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.get(name)
    }

    /// Names of all registered projects.
    pub fn project_names(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }

    /// Finds a claimable work with the given name across all registered
    /// projects, returning the owning project's name together with the
    /// work. With `without_check` the sequencing gate is skipped and any
    /// work with that name matches.
    pub fn get_a_job(&self, work_name: &str, without_check: bool) -> Option<(&str, &Work)> {
        for (project_name, project) in &self.projects {
            if let Some(work) = project.work_by_name(work_name, without_check) {
                return Some((project_name.as_str(), work));
            }
        }
        None
    }

    /// Applies a status to a work inside a registered project and persists
    /// the project. No-ops when the project is not registered.
    pub fn update_work_status(
        &mut self,
        project_name: &str,
        work_name: &str,
        status: WorkStatus,
    ) -> Result<()> {
        if let Some(project) = self.projects.get_mut(project_name) {
            project.update_work_status(work_name, status)?;
        }
        Ok(())
    }
}
