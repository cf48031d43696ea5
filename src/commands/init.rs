use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::models::Project;

/// Create a new project from a workflow template
///
/// # Arguments
/// * `name` - Project name (becomes the directory name under `base_dir`)
/// * `base_dir` - Directory that holds all project directories
/// * `template` - Path to the workflow template file
pub fn execute(name: &str, base_dir: &Path, template: &Path) -> Result<()> {
    let project = Project::create(name, base_dir, template)
        .with_context(|| format!("Failed to create project '{name}'"))?;

    println!(
        "  {} Project {} created with {} works",
        "✓".green().bold(),
        project.name.bold(),
        project.works().len()
    );
    if let Some(path) = project.project_file() {
        println!("    {}", path.display().to_string().dimmed());
    }
    Ok(())
}
