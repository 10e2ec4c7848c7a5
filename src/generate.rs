//! Turns a validated request into files on disk.

use anyhow::Result;
use console::style;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CreatorError;
use crate::features::Features;
use crate::template::{
    create_liquid_engine, create_liquid_object, render_and_write, TemplateDir, Variable,
};
use crate::template_variables::ProjectDir;
use crate::tool_config::Locations;

pub const CMAKE_LISTS: &str = "CMakeLists.txt";
pub const MAIN_SOURCE: &str = "main.c";
pub const FREERTOS_CONFIG: &str = "FreeRTOSConfig.h";
pub const TRACE_CONFIG: &str = "traceConfig.h";
pub const KERNEL_IMPORT: &str = "FreeRTOS_Kernel_import.cmake";
pub const SDK_IMPORT: &str = "pico_sdk_import.cmake";

/// Everything needed to create one project.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub name: String,
    pub project_dir: ProjectDir,
    pub features: Features,
}

/// One file of the new project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// Rendered from the template of the same name.
    Rendered {
        file: &'static str,
        variables: &'static [Variable],
    },
    /// Copied byte for byte from the static directory.
    Copied { file: &'static str },
}

impl Artifact {
    pub fn file(&self) -> &'static str {
        match *self {
            Artifact::Rendered { file, .. } | Artifact::Copied { file } => file,
        }
    }
}

/// The files of a project in the order they are written.
pub fn plan(features: &Features) -> Vec<Artifact> {
    const BUILD_VARIABLES: &[Variable] = &[Variable::NoRtos, Variable::Trace];

    let mut artifacts = vec![
        Artifact::Rendered {
            file: CMAKE_LISTS,
            variables: BUILD_VARIABLES,
        },
        Artifact::Rendered {
            file: MAIN_SOURCE,
            variables: BUILD_VARIABLES,
        },
    ];
    if features.rtos() {
        artifacts.push(Artifact::Rendered {
            file: FREERTOS_CONFIG,
            variables: &[Variable::Trace],
        });
        if features.trace_enabled() {
            artifacts.push(Artifact::Rendered {
                file: TRACE_CONFIG,
                variables: &[Variable::Psram],
            });
        }
        artifacts.push(Artifact::Copied {
            file: KERNEL_IMPORT,
        });
    }
    artifacts.push(Artifact::Copied { file: SDK_IMPORT });
    artifacts
}

/// Copy a static file verbatim.
pub fn copy_static_file(source: &Path, destination: &Path) -> Result<(), CreatorError> {
    fs::copy(source, destination).map_err(|e| {
        let path = if source.exists() { destination } else { source };
        CreatorError::io(path, e)
    })?;
    Ok(())
}

fn print_option(option: &str, enabled: bool) {
    let mark = if enabled { "x" } else { " " };
    println!("[{mark}] {option}");
}

fn print_summary(name: &str, features: &Features) {
    println!("{} {}", style("Creating Project:").bold(), name);
    print_option("FreeRTOS enabled", features.rtos());
    print_option("Tracing enabled", features.trace_enabled());
    print_option("Tracing buffer in PSRAM", features.trace_psram());
    println!("------------------------------------");
}

/// Create the project folder and write every planned file into it, printing
/// each absolute path as soon as the file is written.
///
/// Nothing is rolled back: when a step fails the files written before it stay.
pub fn generate(request: &GenerationRequest, locations: &Locations) -> Result<PathBuf> {
    let project_path = request.project_dir.create()?;
    print_summary(&request.name, &request.features);

    let parser = create_liquid_engine();
    let templates = TemplateDir::new(&locations.templates);
    debug!(
        "Templates from {}, static files from {}",
        locations.templates.display(),
        locations.static_files.display()
    );

    for artifact in plan(&request.features) {
        let output = project_path.join(artifact.file());
        match artifact {
            Artifact::Rendered { file, variables } => {
                let mut context = create_liquid_object(
                    &request.name,
                    request.project_dir.as_ref(),
                    &request.features,
                    variables,
                );
                render_and_write(&parser, &templates, file, &mut context, &output)?;
            }
            Artifact::Copied { file } => {
                copy_static_file(&locations.static_files.join(file), &output)?;
            }
        }
        println!("{}", output.display());
    }

    info!(
        "✨ {} {} {}",
        style("Done!").bold().green(),
        style("New project created").bold(),
        style(project_path.display()).underlined()
    );
    Ok(project_path)
}
