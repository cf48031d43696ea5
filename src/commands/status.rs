use anyhow::{bail, Result};
use colored::Colorize;
use std::path::Path;

use crate::models::{Project, Work, WorkStatus};

/// Show the checklist of a project with per-work statuses
pub fn execute(name: &str, base_dir: &Path) -> Result<()> {
    let Some(project) = Project::load(name, base_dir)? else {
        bail!("Project '{name}' not found in {}", base_dir.display());
    };

    println!("\n{}", project.name.bold());
    println!("{}", "─".repeat(40).dimmed());
    for work in project.works() {
        println!("  {} {}", status_marker(work), render_work(work));
    }

    if project.is_all_done() {
        println!("\n  {} All works done", "✓".green().bold());
    } else if let Some(current) = project.current_work() {
        println!("\n  In progress: {}", current.name.bold());
    }
    Ok(())
}

fn status_marker(work: &Work) -> String {
    match work.status {
        WorkStatus::NotStarted => "○".dimmed().to_string(),
        WorkStatus::InProgress => "◐".yellow().bold().to_string(),
        WorkStatus::Done => "✓".green().bold().to_string(),
    }
}

fn render_work(work: &Work) -> String {
    let label = format!("{}. {}", work.index, work.name);
    if work.comment.is_empty() {
        label
    } else {
        format!("{label} {}", format!("({})", work.comment).dimmed())
    }
}
