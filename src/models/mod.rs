pub mod project;
pub mod work;

pub use project::{NextWork, Project};
pub use work::{Work, WorkStatus};
