//! Round-trip tests: template -> saved state -> reload

use std::fs;

use drover::drover::Drover;
use drover::models::{Project, WorkStatus};
use drover::PROJECT_FILE_NAME;

use crate::helpers::base_with_template;

#[test]
fn test_template_to_disk_and_back() {
    let (dir, template) = base_with_template();

    let mut project = Project::create("thesis", dir.path(), &template).unwrap();
    project
        .update_work_status("outline", WorkStatus::Done)
        .unwrap();
    project
        .update_work_status("draft", WorkStatus::InProgress)
        .unwrap();

    let reloaded = Project::load("thesis", dir.path()).unwrap().unwrap();
    assert_eq!(reloaded.name, "thesis");

    let names: Vec<_> = reloaded.works().iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, ["outline", "draft", "proofread"]);

    let statuses: Vec<_> = reloaded.works().iter().map(|w| w.status).collect();
    assert_eq!(
        statuses,
        [
            WorkStatus::Done,
            WorkStatus::InProgress,
            WorkStatus::NotStarted
        ]
    );

    // Comments and output files survive the trip untouched.
    assert_eq!(reloaded.works()[0].output_file, "outline.md");
    assert_eq!(reloaded.works()[2].comment, "Final pass");
}

#[test]
fn test_saved_file_shape() {
    let (dir, template) = base_with_template();
    Project::create("thesis", dir.path(), &template).unwrap();

    let content =
        fs::read_to_string(dir.path().join("thesis").join(PROJECT_FILE_NAME)).unwrap();
    assert!(content.contains("name: thesis"));
    assert!(content.contains("workflow:"));
    assert!(content.contains("works:"));
    assert!(content.contains("outline"));
    assert!(content.contains("proofread"));
}

#[test]
fn test_progress_survives_new_drover_instance() {
    let (dir, template) = base_with_template();

    let mut drover = Drover::new(dir.path(), &template);
    drover.create_project("thesis").unwrap();
    drover
        .update_work_status("thesis", "outline", WorkStatus::Done)
        .unwrap();

    // Fresh instance, same directory: progress must be picked up.
    let mut drover2 = Drover::new(dir.path(), &template);
    let project = drover2.load_project("thesis").unwrap().unwrap();
    assert!(project.works()[0].is_done());
    assert!(!project.is_all_done());
}

#[test]
fn test_corrupt_state_file_loads_as_none() {
    let (dir, template) = base_with_template();
    Project::create("thesis", dir.path(), &template).unwrap();

    fs::write(
        dir.path().join("thesis").join(PROJECT_FILE_NAME),
        "name: thesis\nworkflow: 42\n",
    )
    .unwrap();

    assert!(Project::load("thesis", dir.path()).unwrap().is_none());
}
