//! Staging helpers for moving artifacts into a project directory
//!
//! Copies or moves a file or directory under the project's storage
//! directory, keeping the source's base name. These are plain synchronous
//! filesystem operations that block until complete.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{Result, WorkflowError};
use crate::models::Project;

impl Project {
    /// Copies a file or directory into the project directory.
    ///
    /// Fails with `NotFound` if the source is absent, and with `Detached`
    /// if the project has no storage directory. Directory copies are
    /// recursive and merge into an existing target.
    pub fn copy_into_project(&self, source: &Path) -> Result<()> {
        let project_path = self
            .project_path
            .as_ref()
            .ok_or(WorkflowError::Detached)?;
        if !source.exists() {
            return Err(WorkflowError::NotFound(source.to_path_buf()));
        }

        fs::create_dir_all(project_path)?;
        let target = project_path.join(file_name(source)?);

        if source.is_dir() {
            copy_dir_recursive(source, &target)?;
        } else {
            fs::copy(source, &target)?;
        }
        debug!(project = %self.name, source = %source.display(), "copied into project");
        Ok(())
    }

    /// Moves a file or directory into the project directory.
    ///
    /// Same failure modes as [`Project::copy_into_project`]. An existing
    /// directory target is replaced. Falls back to copy-then-remove when a
    /// plain rename is not possible (e.g. across filesystems).
    pub fn move_into_project(&self, source: &Path) -> Result<()> {
        let project_path = self
            .project_path
            .as_ref()
            .ok_or(WorkflowError::Detached)?;
        if !source.exists() {
            return Err(WorkflowError::NotFound(source.to_path_buf()));
        }

        fs::create_dir_all(project_path)?;
        let target = project_path.join(file_name(source)?);

        if source.is_dir() && target.exists() {
            fs::remove_dir_all(&target)?;
        }

        if fs::rename(source, &target).is_err() {
            if source.is_dir() {
                copy_dir_recursive(source, &target)?;
                fs::remove_dir_all(source)?;
            } else {
                fs::copy(source, &target)?;
                fs::remove_file(source)?;
            }
        }
        debug!(project = %self.name, source = %source.display(), "moved into project");
        Ok(())
    }
}

fn file_name(source: &Path) -> Result<&std::ffi::OsStr> {
    source
        .file_name()
        .ok_or_else(|| WorkflowError::NotFound(source.to_path_buf()))
}

fn copy_dir_recursive(source: &Path, target: &Path) -> Result<()> {
    fs::create_dir_all(target)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let dest = target.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &dest)?;
        } else {
            fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}
