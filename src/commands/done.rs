use anyhow::{bail, Result};
use colored::Colorize;
use std::path::Path;

use crate::models::{Project, WorkStatus};

/// Mark a named work as done and persist
pub fn execute(name: &str, work_name: &str, base_dir: &Path) -> Result<()> {
    let Some(mut project) = Project::load(name, base_dir)? else {
        bail!("Project '{name}' not found in {}", base_dir.display());
    };

    if project.work_by_name(work_name, true).is_none() {
        bail!("No work named '{work_name}' in project '{name}'");
    }

    project.update_work_status(work_name, WorkStatus::Done)?;
    println!("  {} Finished {}", "✓".green().bold(), work_name.bold());

    if project.is_all_done() {
        println!("  {} All works done", "✓".green().bold());
    }
    Ok(())
}
