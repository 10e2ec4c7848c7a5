use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::args::AppArgs;
use crate::error::CreatorError;
use crate::template_variables::DEFAULT_PROJECTS_DIR;

pub const CONFIG_FILE_NAME: &str = "project-creator.toml";
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Deserialize, Debug, PartialEq, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub paths: Option<PathsConfig>,
}

#[derive(Deserialize, Debug, PartialEq, Eq, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    pub templates: Option<PathBuf>,
    #[serde(rename = "static")]
    pub static_files: Option<PathBuf>,
    pub projects: Option<PathBuf>,
}

impl Config {
    /// Read the configuration file. A missing file only counts as an error when
    /// it was named explicitly.
    pub fn from_path(path: &Path, required: bool) -> Result<Self, CreatorError> {
        match fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).map_err(|source| CreatorError::Config {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound && !required => Ok(Self::default()),
            Err(e) => Err(CreatorError::io(path, e)),
        }
    }
}

/// Where templates are read from and where the project is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    pub templates: PathBuf,
    pub static_files: PathBuf,
    pub projects: PathBuf,
}

impl Default for Locations {
    fn default() -> Self {
        Self {
            templates: DEFAULT_TEMPLATES_DIR.into(),
            static_files: DEFAULT_STATIC_DIR.into(),
            projects: DEFAULT_PROJECTS_DIR.into(),
        }
    }
}

impl Locations {
    /// Command line beats the configuration file, which beats the defaults.
    pub fn resolve(args: &AppArgs, config: &Config) -> Self {
        let defaults = Self::default();
        let paths = config.paths.clone().unwrap_or_default();
        Self {
            templates: args
                .templates
                .clone()
                .or(paths.templates)
                .unwrap_or(defaults.templates),
            static_files: args
                .static_dir
                .clone()
                .or(paths.static_files)
                .unwrap_or(defaults.static_files),
            projects: args
                .projects
                .clone()
                .or(paths.projects)
                .unwrap_or(defaults.projects),
        }
    }
}
