use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const WIKIPEDIA: &str = "This is the front page of the Simple English Wikipedia.\n\
                         Wikipedias are places where people work together to write encyclopedias in different languages.\n";

fn readability() -> Command {
    Command::new(env!("CARGO_BIN_EXE_readability"))
}

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn shows_help() {
    readability()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("readability"));
}

#[test]
fn scores_all_formulas_from_flag() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "wiki.txt", WIKIPEDIA);
    readability()
        .args(["--score", "all"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("The text is:"))
        .stdout(predicate::str::contains("Words: 23\nSentences: 2\nCharacters: 129\nSyllables: 42\nPolysyllables: 6\n"))
        .stdout(predicate::str::contains("Automated Readability Index: 10.74 (about 17 year olds)."))
        .stdout(predicate::str::contains("Flesch–Kincaid readability tests: 10.44 (about 16 year olds)."))
        .stdout(predicate::str::contains("Simple Measure of Gobbledygook: 13.02 (24+ year olds)."))
        .stdout(predicate::str::contains("Coleman–Liau index: 14.61 (24+ year olds)."))
        .stdout(predicate::str::contains("This text should be understood in average by 39.00 year olds."));
}

#[test]
fn exclude_policy_skips_sentinels() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "wiki.txt", WIKIPEDIA);
    readability()
        .args(["--score", "all", "--average", "exclude", "--no-echo"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("The text is:").not())
        .stdout(predicate::str::contains("understood in average by 19.00 year olds."));
}

#[test]
fn prompts_for_selection_on_stdin() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "wiki.txt", WIKIPEDIA);
    readability()
        .arg(&path)
        .write_stdin("fk\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the score you want to calculate (ARI, FK, SMOG, CL, all): "))
        .stdout(predicate::str::contains("Flesch–Kincaid readability tests: 10.44"))
        .stdout(predicate::str::contains("Automated Readability Index").not());
}

#[test]
fn empty_selection_reports_nothing_selected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "wiki.txt", WIKIPEDIA);
    readability()
        .arg(&path)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("No score selected."));
}

#[test]
fn json_output_is_parseable() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "wiki.txt", WIKIPEDIA);
    let output = readability()
        .args(["--score", "ari,smog", "--format", "json", "--no-echo"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert!(value.get("text").is_none());
    assert_eq!(value["counts"]["sentences"], 2);
    assert_eq!(value["scores"].as_array().unwrap().len(), 2);
    assert_eq!(value["scores"][1]["age"]["kind"], "years");
    assert_eq!(value["scores"][1]["age"]["years"], 24);
}

#[test]
fn missing_file_fails() {
    let dir = TempDir::new().unwrap();
    readability()
        .args(["--score", "all"])
        .arg(dir.path().join("absent.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn wrong_extension_fails() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "notes.md", "Hello world.");
    readability()
        .args(["--score", "all"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wrong file type"));
}

#[test]
fn extension_is_checked_before_existence() {
    let dir = TempDir::new().unwrap();
    readability()
        .args(["--score", "all"])
        .arg(dir.path().join("notes.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wrong file type"))
        .stderr(predicate::str::contains("File not found").not());
}

#[test]
fn keep_line_join_ignores_trailing_newline() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "hello.txt", "Hello world.\n");
    readability()
        .args(["--no-echo", "--score", "fk", "--line-join", "keep"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sentences: 1\n"));
}

#[test]
fn empty_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "empty.txt", "\n\n");
    readability()
        .args(["--score", "all"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Text is empty"));
}

#[test]
fn zero_words_is_reported_not_infinite() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "dots.txt", "...");
    readability()
        .args(["--score", "ari"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("ARI cannot be computed: words count is zero"))
        .stdout(predicate::str::contains("inf").not());
}

#[test]
fn computable_scores_are_reported_next_to_failures() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "dots.txt", "...");
    readability()
        .args(["--no-echo", "--score", "all"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Simple Measure of Gobbledygook: 3.13 (about 9 year olds)."))
        .stdout(predicate::str::contains("Automated Readability Index: not computable"))
        .stderr(predicate::str::contains("ARI cannot be computed: words count is zero"));
}
