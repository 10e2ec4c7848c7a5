pub use assert_cmd::prelude::*;
pub use indoc::indoc;
pub use predicates::prelude::*;
pub use std::process::Command;

pub use crate::helpers::create_lab_kit;
pub use crate::helpers::workspace::Workspace;
pub use crate::helpers::workspace_builder::{empty_lab_kit, lab_kit};

/// The creator binary, to be run from `Workspace::tool_dir`.
pub fn binary() -> Command {
    Command::cargo_bin("project-creator").unwrap()
}
