use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn htmldown() -> Command {
    Command::cargo_bin("htmldown").unwrap()
}

#[test]
fn converts_single_file_to_explicit_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("page.html");
    let output = dir.path().join("page-converted.md");
    fs::write(&input, "<h1>Title</h1><p>Body text</p>").unwrap();

    htmldown()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let markdown = fs::read_to_string(&output).unwrap();
    assert!(markdown.contains("# Title"));
    assert!(markdown.contains("Body text"));
}

#[test]
fn writes_alongside_input_by_default() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("page.html");
    fs::write(&input, "<p>Hello</p>").unwrap();

    htmldown().arg(&input).assert().success();

    let markdown = fs::read_to_string(dir.path().join("page.md")).unwrap();
    assert!(markdown.contains("Hello"));
}

#[test]
fn batch_converts_into_directory() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");
    fs::write(dir.path().join("a.html"), "<p>first</p>").unwrap();
    fs::write(dir.path().join("b.html"), "<p>second</p>").unwrap();

    htmldown()
        .arg(dir.path().join("*.html"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    assert!(fs::read_to_string(out.join("a.md")).unwrap().contains("first"));
    assert!(fs::read_to_string(out.join("b.md")).unwrap().contains("second"));
}

#[test]
fn reads_stdin_and_prints_to_stdout() {
    htmldown()
        .arg("-")
        .write_stdin("<h1>Piped</h1><p>Body</p>")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Piped"))
        .stdout(predicate::str::contains("Body"));
}

#[test]
fn stdin_input_writes_to_output_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("piped.md");

    htmldown()
        .arg("-")
        .arg("-o")
        .arg(&output)
        .write_stdin("<p>Saved</p>")
        .assert()
        .success();

    assert!(fs::read_to_string(&output).unwrap().contains("Saved"));
}

#[test]
fn fails_when_pattern_matches_nothing() {
    let dir = tempdir().unwrap();

    htmldown()
        .arg(dir.path().join("missing-*.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no files found"));
}

#[test]
fn empty_input_file_fails_conversion() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.html");
    fs::write(&input, "").unwrap();

    htmldown()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no renderable content"));
}
