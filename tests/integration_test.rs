// tests/integration_test.rs
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tag-format"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_tag_format_help() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("tag-format"));
    assert!(stdout.contains("Render and validate git tag names"));
}

#[test]
fn test_render_first() {
    let output = run(&[
        "render",
        "prod/{YYYY}.{MM}.{DD}/v{major}.{minor}.{patch}",
        "--version",
        "2.0.1",
        "--date",
        "2025-07-14",
        "--first",
    ]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "prod/2025.07.14/v2.0.1\n");
}

#[test]
fn test_render_lists_every_candidate() {
    let output = run(&["render", "v{major}.{minor}.{patch}", "{nope}", "--version", "1.2.3"]);
    // one candidate rendered, so the command succeeds
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("v1.2.3"));
    assert!(stdout.contains("Unknown command: {nope}"));
}

#[test]
fn test_render_fails_when_nothing_renders() {
    let output = run(&["render", "{YYYY}", "--version", "1.2.3"]);
    assert!(!output.status.success());
}

#[test]
fn test_render_with_package_config() {
    let output = run(&[
        "--config",
        "tests/fixtures/config_with_packages.toml",
        "render",
        "--version",
        "1.0.0",
        "--date",
        "2024-03-09T12:00:00Z",
        "--package",
        "nightly",
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("nightly-2024-03-09"));
    assert!(stdout.contains("nightly/Mar-9"));
}

#[test]
fn test_validate_reports_violations() {
    let output = run(&["validate", "v1.2.3", "bad..tag name"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("contains '..'"));
    assert!(stderr.contains("forbidden character ' '"));
}

#[test]
fn test_check_formats() {
    let ok = run(&["check", "v{major}.{minor}"]);
    assert!(ok.status.success());

    let bad = run(&["check", "v{major"]);
    assert!(!bad.status.success());
}

#[test]
fn test_commands_listing() {
    let output = run(&["commands"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for name in ["{major}", "{YYYY}", "{Mo}", "{DAY}"] {
        assert!(stdout.contains(name), "listing should contain {}", name);
    }
}
