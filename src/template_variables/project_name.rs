use std::path::{Component, Path};

use crate::error::CreatorError;

/// The project name is used verbatim, both as the folder name and inside the
/// generated files. It must name exactly one folder below the projects
/// directory, so separators and `.`/`..` are refused.
pub fn check_project_name(name: &str) -> Result<(), CreatorError> {
    let invalid = |reason| CreatorError::InvalidProjectName {
        name: name.to_string(),
        reason,
    };
    if name.trim().is_empty() {
        return Err(invalid("the name is empty"));
    }
    if name.contains('\0') {
        return Err(invalid("the name contains a NUL character"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("the name must not contain path separators"));
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid("the name must be a plain folder name")),
    }
}
