//! Sequencing tests: the next-work scan and the claim gate across the
//! orchestrator surface

use drover::drover::Drover;
use drover::models::{NextWork, WorkStatus};

use crate::helpers::base_with_template;

#[test]
fn test_works_claimed_strictly_in_order() {
    let (_dir, mut drover) = setup_drover();

    // Only the first work is claimable at the start.
    assert!(drover.get_a_job("outline", false).is_some());
    assert!(drover.get_a_job("draft", false).is_none());
    assert!(drover.get_a_job("proofread", false).is_none());

    drover
        .update_work_status("thesis", "outline", WorkStatus::InProgress)
        .unwrap();
    // While outline runs, draft is still gated.
    assert!(drover.get_a_job("draft", false).is_none());

    drover
        .update_work_status("thesis", "outline", WorkStatus::Done)
        .unwrap();
    assert!(drover.get_a_job("draft", false).is_some());
    assert!(drover.get_a_job("proofread", false).is_none());
}

#[test]
fn test_blocked_predecessor_reported_by_scan() {
    let (_dir, mut drover) = setup_drover();

    drover
        .update_work_status("thesis", "outline", WorkStatus::InProgress)
        .unwrap();

    let project = drover.project("thesis").unwrap();
    match project.next_not_started_work() {
        NextWork::Blocked(work) => assert_eq!(work.name, "draft"),
        other => panic!("expected Blocked(draft), got {other:?}"),
    }
}

#[test]
fn test_without_check_bypasses_gate() {
    let (_dir, drover) = setup_drover();

    let (project_name, work) = drover.get_a_job("proofread", true).unwrap();
    assert_eq!(project_name, "thesis");
    assert_eq!(work.index, 3);
}

#[test]
fn test_full_pipeline_to_completion() {
    let (_dir, mut drover) = setup_drover();

    for work_name in ["outline", "draft", "proofread"] {
        let (project_name, work) = drover
            .get_a_job(work_name, false)
            .unwrap_or_else(|| panic!("{work_name} should be claimable"));
        assert_eq!(work.name, work_name);
        let project_name = project_name.to_string();

        drover
            .update_work_status(&project_name, work_name, WorkStatus::InProgress)
            .unwrap();
        drover
            .update_work_status(&project_name, work_name, WorkStatus::Done)
            .unwrap();
    }

    let project = drover.project("thesis").unwrap();
    assert!(project.is_all_done());
    assert_eq!(project.next_not_started_work(), NextWork::Exhausted);
}

#[test]
fn test_scan_spans_multiple_projects() {
    let (_dir, mut drover) = setup_drover();
    drover.create_project("appendix").unwrap();

    // "appendix" sorts before "thesis", so it wins the scan.
    let (project_name, _) = drover.get_a_job("outline", false).unwrap();
    assert_eq!(project_name, "appendix");

    drover
        .update_work_status("appendix", "outline", WorkStatus::Done)
        .unwrap();
    drover
        .update_work_status("appendix", "draft", WorkStatus::Done)
        .unwrap();
    drover
        .update_work_status("appendix", "proofread", WorkStatus::Done)
        .unwrap();

    // With appendix finished, the scan falls through to thesis.
    let (project_name, _) = drover.get_a_job("outline", false).unwrap();
    assert_eq!(project_name, "thesis");
}

fn setup_drover() -> (tempfile::TempDir, Drover) {
    let (dir, template) = base_with_template();
    let mut drover = Drover::new(dir.path(), &template);
    drover.create_project("thesis").unwrap();
    (dir, drover)
}
