use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a project from being created.
#[derive(Error, Debug)]
pub enum CreatorError {
    #[error("Conflicting options: {0}")]
    ConflictingFlags(&'static str),

    #[error("Invalid project name `{name}`: {reason}")]
    InvalidProjectName { name: String, reason: &'static str },

    #[error("Project folder exists: {}", .0.display())]
    DirectoryExists(PathBuf),

    #[error("Template `{name}` not found at {}", .path.display())]
    TemplateNotFound { name: String, path: PathBuf },

    #[error("Error processing template `{name}`")]
    Template {
        name: String,
        #[source]
        source: liquid::Error,
    },

    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse configuration file {}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl CreatorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
