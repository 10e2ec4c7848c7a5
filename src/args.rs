use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use std::env;

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };
}

mod heading {
    pub const FEATURES: &str = "Project Features";
    pub const LOCATIONS: &str = "Locations";
}

/// Switches the lab-kit tool has always spelled with a single dash.
const LEGACY_FLAGS: [&str; 3] = ["-noRTOS", "-trace", "-tracePSRAM"];

/// Tool to help setup new projects for the ES Lab-Kit.
#[derive(Parser, Clone, Debug)]
#[command(
    name = "project-creator",
    version,
    about,
    next_line_help(false),
    styles(style::STYLES)
)]
pub struct AppArgs {
    /// Name of the new project.
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Bare metal project, no FreeRTOS kernel files are generated.
    #[arg(long = "noRTOS", alias = "no-rtos", action, help_heading = heading::FEATURES)]
    pub no_rtos: bool,

    /// Include the tracing infrastructure and store the trace in local SRAM.
    #[arg(long = "trace", action, help_heading = heading::FEATURES)]
    pub trace: bool,

    /// Include the tracing infrastructure and store the trace in PSRAM.
    #[arg(long = "tracePSRAM", alias = "trace-psram", action, help_heading = heading::FEATURES)]
    pub trace_psram: bool,

    /// Directory holding the `*.liquid` templates [default: templates]
    #[arg(long, value_name = "DIR", help_heading = heading::LOCATIONS)]
    pub templates: Option<PathBuf>,

    /// Directory holding the files copied verbatim [default: static]
    #[arg(long = "static", value_name = "DIR", help_heading = heading::LOCATIONS)]
    pub static_dir: Option<PathBuf>,

    /// Directory the project folder is created in [default: ../../Software/Projects]
    #[arg(long, value_name = "DIR", help_heading = heading::LOCATIONS)]
    pub projects: Option<PathBuf>,

    /// Configuration file [default: project-creator.toml]
    #[arg(long, value_name = "FILE", help_heading = heading::LOCATIONS)]
    pub config: Option<PathBuf>,

    /// Enables more verbose output.
    #[arg(long, short, action)]
    pub verbose: bool,
}

/// Rewrite `-noRTOS` style switches to their `--noRTOS` form, clap only knows
/// single character short flags.
fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some(flag) if LEGACY_FLAGS.contains(&flag) => OsString::from(format!("-{flag}")),
            _ => arg,
        })
        .collect()
}

pub fn parse_args_from<I>(args: I) -> AppArgs
where
    I: IntoIterator<Item = OsString>,
{
    AppArgs::parse_from(normalize_legacy_flags(args))
}

/// To get the arguments list from terminal
/// Return : work arguments
pub fn resolve_args() -> AppArgs {
    parse_args_from(env::args_os())
}
