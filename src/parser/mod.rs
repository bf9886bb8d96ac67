//! Project file parser module.

mod project;

pub use project::{parse_project_file, ProjectFile};
