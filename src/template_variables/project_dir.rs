use std::{
    fmt::Display,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::CreatorError;

/// Location of all lab-kit projects, seen from `Tools/ProjectCreator`.
pub const DEFAULT_PROJECTS_DIR: &str = "../../Software/Projects";

/// Folder of the project about to be generated.
#[derive(Debug, PartialEq, Clone)]
pub struct ProjectDir(PathBuf);

impl AsRef<Path> for ProjectDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl Display for ProjectDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.display().fmt(f)
    }
}

impl ProjectDir {
    /// `<projects_dir>/<project_name>`, no normalization is applied.
    pub fn resolve(projects_dir: impl AsRef<Path>, project_name: &str) -> Self {
        Self(projects_dir.as_ref().join(project_name))
    }

    /// Create the folder together with any missing parents. An existing folder
    /// is never reused. Returns the absolute path of the new folder.
    pub fn create(&self) -> Result<PathBuf, CreatorError> {
        let path = self.0.as_path();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| CreatorError::io(parent, e))?;
        }
        // The last segment must be new; an existing entry is never reused.
        fs::create_dir(path).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => CreatorError::DirectoryExists(path.to_path_buf()),
            _ => CreatorError::io(path, e),
        })?;
        let absolute = path
            .canonicalize()
            .map_err(|e| CreatorError::io(path, e))?;
        debug!("Created project folder {}", absolute.display());
        Ok(absolute)
    }
}
