use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{SAMPLE_CMAKE, TempWorkspace};

fn collect_project(ws: &TempWorkspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_collect_project"));
    cmd.current_dir(ws.path());
    cmd
}

fn sample_project(prefix: &str) -> TempWorkspace {
    let ws = TempWorkspace::new(prefix);
    ws.create_file("CMakeLists.txt", SAMPLE_CMAKE);
    ws.create_file("src/main.cpp", "int main() { return run(); }");
    ws.create_file("src/core/simulation.cpp", "void step();");
    ws.create_file("src/text.cpp", "// text");
    ws.create_file("include/main.h", "#pragma once");
    ws.create_file("include/core/simulation.hpp", "class Simulation;");
    ws
}

#[test]
fn sources_then_headers_in_discovery_order() {
    let ws = sample_project("project_order");

    collect_project(&ws)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: src/main.cpp"))
        .stdout(predicate::str::contains(
            "Wrote 5 files to project_code.txt (1 not found, 0 failed)",
        ))
        .stderr(predicate::str::contains(
            "Not found: src/visualization/renderer.cpp",
        ));

    let out = ws.read("project_code.txt");
    let starts: Vec<&str> = out
        .lines()
        .filter_map(|l| l.strip_prefix("// ===== Start of "))
        .collect();
    assert_eq!(starts.len(), 5);
    assert_eq!(starts[0], "src/main.cpp =====");
    assert_eq!(starts[1], "src/core/simulation.cpp =====");
    assert_eq!(starts[2], "src/text.cpp =====");
    assert!(starts[3].ends_with("include/core/simulation.hpp ====="));
    assert!(starts[4].ends_with("include/main.h ====="));

    let not_found = out
        .find("// File not found: src/visualization/renderer.cpp\n")
        .unwrap();
    let text = out.find("// ===== Start of src/text.cpp").unwrap();
    assert!(not_found < text);
}

#[test]
fn source_block_layout() {
    let ws = TempWorkspace::new("project_layout");
    ws.create_file("CMakeLists.txt", "add_executable(app src/main.cpp)\n");
    ws.create_file("src/main.cpp", "int main() {}");

    collect_project(&ws).assert().success();

    assert_eq!(
        ws.read("project_code.txt"),
        "// ===== Start of src/main.cpp =====\nint main() {}\n// ===== End of src/main.cpp =====\n\n"
    );
}

#[test]
fn config_in_subdirectory_resolves_relative_sources() {
    let ws = TempWorkspace::new("project_subdir");
    ws.create_file("app/CMakeLists.txt", "set(APP_SOURCES src/a.cpp)\n");
    ws.create_file("app/src/a.cpp", "a");
    ws.create_file("app/include/a.h", "h");

    collect_project(&ws)
        .arg("app/CMakeLists.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("(0 not found, 0 failed)"));

    let out = ws.read("project_code.txt");
    assert!(out.contains("app/src/a.cpp =====\na\n"));
    assert!(out.contains("app/include/a.h =====\nh\n"));
}

#[test]
fn declared_headers_replace_fixed_directory() {
    let ws = TempWorkspace::new("project_declared");
    ws.create_file(
        "CMakeLists.txt",
        "include_directories(${CMAKE_SOURCE_DIR}/vendor ${UNSET_DIR})\n",
    );
    ws.create_file("vendor/lib.h", "vendor");
    ws.create_file("include/own.h", "own");

    collect_project(&ws)
        .args(["--headers", "declared"])
        .assert()
        .success();

    let out = ws.read("project_code.txt");
    assert!(out.contains("vendor/lib.h ====="));
    assert!(!out.contains("own.h"));
}

#[test]
fn missing_config_file_fails() {
    let ws = TempWorkspace::new("project_no_config");

    collect_project(&ws)
        .assert()
        .failure()
        .stderr(predicate::str::contains("CMakeLists.txt"));
}

#[test]
fn repeated_runs_are_identical() {
    let ws = sample_project("project_idempotent");

    collect_project(&ws).arg("-q").assert().success().stdout(predicate::str::is_empty());
    let first = ws.read("project_code.txt");
    collect_project(&ws).arg("-q").assert().success();

    assert_eq!(first, ws.read("project_code.txt"));
}
