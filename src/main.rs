/// Main file
mod app_log;
mod args;
mod error;
mod features;
mod generate;
mod template;
mod template_filters;
mod template_variables;
mod tool_config;

use app_log::log_env_init;
use args::*;
use features::Features;
use generate::GenerationRequest;
use template_variables::{check_project_name, ProjectDir};
use tool_config::{Config, Locations, CONFIG_FILE_NAME};

use anyhow::Result;
use log::{debug, error};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = resolve_args();
    log_env_init(args.verbose);
    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Validate the request, then create the project. Nothing touches the file
/// system before validation passed.
fn run(args: &AppArgs) -> Result<PathBuf> {
    let features = Features::validate(args.no_rtos, args.trace, args.trace_psram)?;
    check_project_name(&args.project_name)?;

    let config = match &args.config {
        Some(path) => Config::from_path(path, true)?,
        None => Config::from_path(Path::new(CONFIG_FILE_NAME), false)?,
    };
    let locations = Locations::resolve(args, &config);
    debug!("{locations:?}");

    let request = GenerationRequest {
        name: args.project_name.clone(),
        project_dir: ProjectDir::resolve(&locations.projects, &args.project_name),
        features,
    };
    generate::generate(&request, &locations)
}
