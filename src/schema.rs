//! YAML document schemas for templates and persisted project files
//!
//! Two shapes share the same `workflow.works` body: a template document
//! (input only, no top-level `name`) and a persisted project document.
//! Parsing goes through raw structs with optional fields so that missing
//! keys surface as domain errors naming the field and the offending work,
//! instead of bare deserializer messages.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, WorkflowError};
use crate::models::{Work, WorkStatus};

/// Serialized shape of a persisted project file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub name: String,
    pub workflow: WorkflowSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowSection {
    pub works: Vec<WorkEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkEntry {
    pub name: String,
    pub status: WorkStatus,
    pub output_file: String,
    pub comment: String,
}

impl ProjectDocument {
    /// Builds the document for a project snapshot, works in sequence order.
    pub fn from_works(name: &str, works: &[Work]) -> Self {
        Self {
            name: name.to_string(),
            workflow: WorkflowSection {
                works: works
                    .iter()
                    .map(|w| WorkEntry {
                        name: w.name.clone(),
                        status: w.status,
                        output_file: w.output_file.clone(),
                        comment: w.comment.clone(),
                    })
                    .collect(),
            },
        }
    }
}

/// Raw parse target for both template and saved project documents.
/// Every field is optional so presence checks can produce domain errors.
#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    workflow: Option<RawWorkflow>,
}

#[derive(Debug, Deserialize)]
struct RawWorkflow {
    #[serde(default)]
    works: Option<Vec<RawWorkEntry>>,
}

#[derive(Debug, Deserialize)]
struct RawWorkEntry {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    output_file: Option<String>,
    #[serde(default)]
    comment: Option<String>,
}

impl RawWorkEntry {
    /// Checks the four required keys, naming the missing field and (when
    /// known) the work it belongs to.
    fn require_fields(&self) -> std::result::Result<(), String> {
        let Some(name) = &self.name else {
            return Err("Missing name field in work".to_string());
        };
        if self.status.is_none() {
            return Err(format!("Missing status field in work {name}"));
        }
        if self.output_file.is_none() {
            return Err(format!("Missing output_file field in work {name}"));
        }
        if self.comment.is_none() {
            return Err(format!("Missing comment field in work {name}"));
        }
        Ok(())
    }

    /// Builds a Work at the given 1-based position. Call after
    /// `require_fields`; missing keys here are a field-check bug.
    fn into_work(self, index: usize) -> Work {
        Work::new(
            index,
            self.name.unwrap_or_default(),
            self.output_file.unwrap_or_default(),
            self.comment.unwrap_or_default(),
        )
    }
}

fn parse_raw(path: &Path) -> std::result::Result<RawDocument, String> {
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_yaml::from_str(&content).map_err(|e| e.to_string())
}

/// Parses a template document into an ordered sequence of works.
///
/// All works start as `not_started`; the template's `status` key must be
/// present but its value is not applied. Missing sections or keys fail with
/// a description error; anything else is wrapped as a parse error.
pub fn parse_template(path: &Path) -> Result<Vec<Work>> {
    let raw = parse_raw(path).map_err(|e| WorkflowError::Parse {
        path: path.to_path_buf(),
        source: e.into(),
    })?;

    let workflow = raw.workflow.ok_or_else(|| {
        WorkflowError::Description(format!(
            "Template {} does not contain the workflow field",
            path.display()
        ))
    })?;
    let entries = workflow.works.ok_or_else(|| {
        WorkflowError::Description(format!(
            "Template {} does not contain the works field",
            path.display()
        ))
    })?;

    let mut works = Vec::with_capacity(entries.len());
    for (pos, entry) in entries.into_iter().enumerate() {
        entry
            .require_fields()
            .map_err(WorkflowError::Description)?;
        works.push(entry.into_work(pos + 1));
    }
    Ok(works)
}

/// Parses a persisted project document into the project name and its works,
/// applying the saved status of each entry.
///
/// Domain conditions (missing fields, unknown status values) surface as
/// load errors directly; any other failure is wrapped with its cause.
pub fn parse_saved(path: &Path) -> Result<(String, Vec<Work>)> {
    let raw = parse_raw(path).map_err(|e| {
        WorkflowError::Load(format!(
            "Failed to parse project file {}: {e}",
            path.display()
        ))
    })?;

    let name = raw.name.ok_or_else(|| {
        WorkflowError::Load(format!(
            "Project file {} does not contain the name field",
            path.display()
        ))
    })?;
    let workflow = raw.workflow.ok_or_else(|| {
        WorkflowError::Load(format!(
            "Project file {} does not contain the workflow field",
            path.display()
        ))
    })?;
    let entries = workflow.works.ok_or_else(|| {
        WorkflowError::Load(format!(
            "Project file {} does not contain the works field",
            path.display()
        ))
    })?;

    let mut works = Vec::with_capacity(entries.len());
    for (pos, entry) in entries.into_iter().enumerate() {
        entry.require_fields().map_err(WorkflowError::Load)?;
        let status = WorkStatus::from_str(entry.status.as_deref().unwrap_or_default())
            .map_err(|e| {
                WorkflowError::Load(format!(
                    "Failed to parse project file {}: {e}",
                    path.display()
                ))
            })?;
        let mut work = entry.into_work(pos + 1);
        work.set_status(status);
        works.push(work);
    }
    Ok((name, works))
}
