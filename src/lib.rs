pub mod commands;
pub mod drover;
pub mod error;
pub mod models;
pub mod schema;
pub mod staging;
pub mod validation;

/// File name of the persisted project state inside each project directory.
pub const PROJECT_FILE_NAME: &str = "workflow.yml";
