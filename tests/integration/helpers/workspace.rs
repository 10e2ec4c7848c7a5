use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A lab-kit checkout in a temporary directory:
/// `Tools/ProjectCreator/{templates,static}` and `Software/Projects`.
pub struct Workspace {
    pub(crate) root: TempDir,
}

impl Workspace {
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Where the tool is run from.
    pub fn tool_dir(&self) -> PathBuf {
        self.path().join("Tools").join("ProjectCreator")
    }

    pub fn projects_dir(&self) -> PathBuf {
        self.path().join("Software").join("Projects")
    }

    pub fn project(&self, name: &str) -> PathBuf {
        self.projects_dir().join(name)
    }

    pub fn read(&self, path: impl AsRef<Path>) -> String {
        let path = self.path().join(path);
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("cannot read file {path:?}"))
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.path().join(path).exists()
    }

    /// Sorted file names of a generated project.
    pub fn project_files(&self, name: &str) -> Vec<String> {
        let mut files: Vec<String> = fs::read_dir(self.project(name))
            .unwrap_or_else(|_| panic!("project {name} was not created"))
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        files.sort();
        files
    }

    /// Absolute path of a generated file, the way the tool prints it.
    pub fn printed_path(&self, name: &str, file: &str) -> String {
        self.project(name)
            .canonicalize()
            .unwrap()
            .join(file)
            .display()
            .to_string()
    }
}
