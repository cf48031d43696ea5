//! Shared test helpers for drover integration tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A three-step document production checklist, mirroring the kind of
/// pipeline drover is built for.
pub const THREE_STEP_TEMPLATE: &str = r#"workflow:
  works:
    - name: "outline"
      status: not_started
      output_file: "outline.md"
      comment: "Chapter outline"
    - name: "draft"
      status: not_started
      output_file: "draft.md"
      comment: "Full draft"
    - name: "proofread"
      status: not_started
      output_file: "final.md"
      comment: "Final pass"
"#;

/// Test helper: create a base directory containing a workflow template
pub fn base_with_template() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let template = dir.path().join("wf_template.yml");
    fs::write(&template, THREE_STEP_TEMPLATE).expect("Failed to write template");
    (dir, template)
}
