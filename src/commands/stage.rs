use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::models::Project;

/// Copy or move a file or directory into a project's directory
pub fn execute(name: &str, source: &Path, base_dir: &Path, move_source: bool) -> Result<()> {
    let Some(project) = Project::load(name, base_dir)? else {
        bail!("Project '{name}' not found in {}", base_dir.display());
    };

    if move_source {
        project
            .move_into_project(source)
            .with_context(|| format!("Failed to move {} into project", source.display()))?;
        println!(
            "  {} Moved {} into {}",
            "✓".green().bold(),
            source.display(),
            project.name.bold()
        );
    } else {
        project
            .copy_into_project(source)
            .with_context(|| format!("Failed to copy {} into project", source.display()))?;
        println!(
            "  {} Copied {} into {}",
            "✓".green().bold(),
            source.display(),
            project.name.bold()
        );
    }
    Ok(())
}
