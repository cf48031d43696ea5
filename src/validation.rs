//! Project name validation.
//!
//! Project names become directory names under the base directory, so they
//! are validated before any filesystem or parsing work happens.

use crate::error::{Result, WorkflowError};

/// Maximum allowed length for project names.
pub const MAX_NAME_LENGTH: usize = 255;

/// Characters that are not allowed anywhere in a project name.
const INVALID_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Validates that a project name is safe to use as a folder name.
///
/// A name is valid if:
/// - It is not empty or whitespace-only
/// - It contains none of `< > : " / \ | ? *`
/// - It does not start or end with a dot or a space
/// - It is no longer than MAX_NAME_LENGTH characters
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(WorkflowError::Configuration(name.to_string()));
    }

    if name.contains(INVALID_CHARS) {
        return Err(WorkflowError::Configuration(name.to_string()));
    }

    if name.starts_with('.') || name.ends_with('.') || name.starts_with(' ') || name.ends_with(' ')
    {
        return Err(WorkflowError::Configuration(name.to_string()));
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(WorkflowError::Configuration(name.to_string()));
    }

    Ok(())
}
