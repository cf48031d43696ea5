use anyhow::{bail, Result};
use colored::Colorize;
use std::path::Path;

use crate::models::{NextWork, Project};

/// Show the next actionable work of a project without claiming it
pub fn execute(name: &str, base_dir: &Path) -> Result<()> {
    let Some(project) = Project::load(name, base_dir)? else {
        bail!("Project '{name}' not found in {}", base_dir.display());
    };

    match project.next_not_started_work() {
        NextWork::Ready(work) => {
            println!(
                "  {} Next: {} {}",
                "→".bold(),
                work.name.bold(),
                format!("(output: {})", work.output_file).dimmed()
            );
        }
        NextWork::Blocked(work) => {
            println!(
                "  {} Next is {} but its predecessor is still in progress",
                "⚠".yellow().bold(),
                work.name.bold()
            );
        }
        NextWork::Exhausted => {
            if project.is_all_done() {
                println!("  {} All works done", "✓".green().bold());
            } else {
                println!("  Nothing left to start");
            }
        }
    }
    Ok(())
}
