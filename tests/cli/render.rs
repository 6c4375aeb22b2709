//! Render subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_render_stdin_to_stdout() {
    cargo_bin_cmd!("quillmark")
        .arg("render")
        .write_stdin("# Hello\n\nWorld.")
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Hello</h1>"))
        .stdout(predicate::str::contains("<p>World.</p>"));
}

#[test]
fn test_render_file_input() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("draft.md");
    fs::write(&input_file, "- one\n- two\n").unwrap();

    cargo_bin_cmd!("quillmark")
        .args(["render", input_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("<ul>"))
        .stdout(predicate::str::contains("<li>one</li>"));
}

#[test]
fn test_render_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("draft.md");
    let output_file = temp_dir.path().join("post.html");
    fs::write(&input_file, "**bold**\n").unwrap();

    cargo_bin_cmd!("quillmark")
        .args([
            "render",
            input_file.to_str().unwrap(),
            "-o",
            output_file.to_str().unwrap(),
        ])
        .assert()
        .success();

    let html = fs::read_to_string(&output_file).unwrap();
    assert_eq!(html, "<p><strong>bold</strong></p>");
}

#[test]
fn test_render_strip_title() {
    cargo_bin_cmd!("quillmark")
        .arg("render")
        .arg("--strip-title")
        .write_stdin("# The Title\n\nJust the body.")
        .assert()
        .success()
        .stdout(predicate::str::contains("<p>Just the body.</p>"))
        .stdout(predicate::str::contains("<h1>").not());
}

#[test]
fn test_render_missing_file_fails() {
    cargo_bin_cmd!("quillmark")
        .args(["render", "/no/such/file.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read input"));
}
