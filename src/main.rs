use anyhow::Result;
use clap::{Parser, Subcommand};
use drover::commands::{done, init, job, next, stage, status};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "drover")]
#[command(about = "Sequential workflow checklist tracking CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory that holds all project directories
    #[arg(short, long, global = true, default_value = ".")]
    base_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a project from a workflow template
    Init {
        /// Project name (becomes the project directory name)
        name: String,

        /// Path to the workflow template file
        #[arg(short, long)]
        template: PathBuf,
    },

    /// Show a project's checklist and per-work statuses
    Status {
        /// Project name
        name: String,
    },

    /// Show the next actionable work without claiming it
    Next {
        /// Project name
        name: String,
    },

    /// Claim the next actionable work (marks it in progress)
    Job {
        /// Project name
        name: String,
    },

    /// Mark a work as done
    Done {
        /// Project name
        name: String,

        /// Work name
        work: String,
    },

    /// Copy or move a file or directory into a project's directory
    Stage {
        /// Project name
        name: String,

        /// Source file or directory
        source: PathBuf,

        /// Move instead of copy
        #[arg(long)]
        r#move: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { name, template } => init::execute(&name, &cli.base_dir, &template),
        Commands::Status { name } => status::execute(&name, &cli.base_dir),
        Commands::Next { name } => next::execute(&name, &cli.base_dir),
        Commands::Job { name } => job::execute(&name, &cli.base_dir),
        Commands::Done { name, work } => done::execute(&name, &work, &cli.base_dir),
        Commands::Stage { name, source, r#move } => {
            stage::execute(&name, &source, &cli.base_dir, r#move)
        }
    }
}
