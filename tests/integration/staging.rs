//! Staging tests: copying and moving artifacts into project directories

use std::fs;

use drover::error::WorkflowError;
use drover::models::Project;

use crate::helpers::base_with_template;

#[test]
fn test_stage_output_next_to_state_file() {
    let (dir, template) = base_with_template();
    let project = Project::create("thesis", dir.path(), &template).unwrap();

    let artifact = dir.path().join("outline.md");
    fs::write(&artifact, "# Outline\n").unwrap();

    project.copy_into_project(&artifact).unwrap();
    let staged = dir.path().join("thesis").join("outline.md");
    assert_eq!(fs::read_to_string(staged).unwrap(), "# Outline\n");
}

#[test]
fn test_move_directory_of_artifacts() {
    let (dir, template) = base_with_template();
    let project = Project::create("thesis", dir.path(), &template).unwrap();

    let figures = dir.path().join("figures");
    fs::create_dir(&figures).unwrap();
    fs::write(figures.join("fig1.svg"), "<svg/>").unwrap();

    project.move_into_project(&figures).unwrap();
    assert!(!figures.exists());
    assert!(dir
        .path()
        .join("thesis")
        .join("figures")
        .join("fig1.svg")
        .is_file());
}

#[test]
fn test_stage_missing_source_fails() {
    let (dir, template) = base_with_template();
    let project = Project::create("thesis", dir.path(), &template).unwrap();

    let result = project.copy_into_project(&dir.path().join("nope.md"));
    assert!(matches!(result, Err(WorkflowError::NotFound(_))));
}
