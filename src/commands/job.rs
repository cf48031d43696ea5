use anyhow::{bail, Result};
use colored::Colorize;
use std::path::Path;

use crate::models::{NextWork, Project, WorkStatus};

/// Claim the next actionable work: mark it in progress and persist
pub fn execute(name: &str, base_dir: &Path) -> Result<()> {
    let Some(mut project) = Project::load(name, base_dir)? else {
        bail!("Project '{name}' not found in {}", base_dir.display());
    };

    let work_name = match project.next_not_started_work() {
        NextWork::Ready(work) => work.name.clone(),
        NextWork::Blocked(work) => {
            bail!(
                "'{}' is next, but the work before it has not finished",
                work.name
            );
        }
        NextWork::Exhausted => bail!("No work left to start in '{name}'"),
    };

    project.update_work_status(&work_name, WorkStatus::InProgress)?;
    println!(
        "  {} Started {}",
        "◐".yellow().bold(),
        work_name.bold()
    );
    Ok(())
}
