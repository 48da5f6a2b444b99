use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn collect_cpp_shows_help() {
    Command::new(env!("CARGO_BIN_EXE_collect_cpp"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("collect_cpp"))
        .stdout(predicate::str::contains("--exclude"));
}

#[test]
fn collect_project_shows_help() {
    Command::new(env!("CARGO_BIN_EXE_collect_project"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("collect_project"))
        .stdout(predicate::str::contains("--headers"));
}

#[test]
fn version_matches_package() {
    Command::new(env!("CARGO_BIN_EXE_collect_cpp"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_header_source_is_rejected() {
    Command::new(env!("CARGO_BIN_EXE_collect_project"))
        .args(["--headers", "everything"])
        .assert()
        .failure();
}

#[test]
fn debug_logging_reports_resolved_configuration() {
    let dir = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_collect_cpp"))
        .current_dir(dir.path())
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stderr(predicate::str::contains("resolved configuration"));
}
