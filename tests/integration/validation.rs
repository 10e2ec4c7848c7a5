use crate::helpers::prelude::*;

fn assert_rejected(args: &[&str], message: &str) {
    let workspace = create_lab_kit();

    binary()
        .args(args)
        .current_dir(workspace.tool_dir())
        .assert()
        .failure()
        .code(1)
        .stdout(predicates::str::contains(message));

    assert!(
        !workspace.exists("Software"),
        "nothing may be created for {args:?}"
    );
}

#[test]
fn it_rejects_tracing_without_freertos() {
    assert_rejected(&["Bare", "-noRTOS", "-trace"], "Trace can only be enabled");
    assert_rejected(&["Bare", "-noRTOS", "-tracePSRAM"], "Trace can only be enabled");
    assert_rejected(
        &["Bare", "-noRTOS", "-trace", "-tracePSRAM"],
        "Trace can only be enabled",
    );
}

#[test]
fn it_rejects_two_trace_destinations() {
    assert_rejected(&["Traced", "-trace", "-tracePSRAM"], "only one option");
}

#[test]
fn it_needs_a_project_name() {
    let workspace = create_lab_kit();

    binary()
        .arg("-trace")
        .current_dir(workspace.tool_dir())
        .assert()
        .failure();

    assert!(!workspace.exists("Software"));
}
