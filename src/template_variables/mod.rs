mod project_dir;
pub mod project_name;

pub use project_dir::{ProjectDir, DEFAULT_PROJECTS_DIR};
pub use project_name::check_project_name;
