#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn rensub_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("rensub"));
    cmd.current_dir(dir.path())
        .env_remove("RENSUB_PREFIX_MARKER")
        .env_remove("RENSUB_QUIT")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn touch(dir: &TempDir, names: &[&str]) {
    for name in names {
        fs::write(dir.path().join(name), name).unwrap();
    }
}

#[test]
fn test_substitution_renames_all_files() {
    let temp = TempDir::new().unwrap();
    touch(&temp, &["report.txt", "report_old.txt"]);

    rensub_cmd(&temp)
        .args(["report.txt", "report_old.txt"])
        .write_stdin("report\nsummary\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("$ is prefix\n"))
        .stdout(predicate::str::contains("Replace from: "))
        .stdout(predicate::str::contains("          to: "))
        .stdout(predicate::str::contains("Done.\n\n\n"));

    assert!(temp.path().join("summary.txt").exists());
    assert!(temp.path().join("summary_old.txt").exists());
    assert!(!temp.path().join("report.txt").exists());
    assert!(!temp.path().join("report_old.txt").exists());
    // content follows the file
    assert_eq!(
        fs::read_to_string(temp.path().join("summary_old.txt")).unwrap(),
        "report_old.txt"
    );
}

#[test]
fn test_prefix_then_substitution_uses_current_names() {
    let temp = TempDir::new().unwrap();
    touch(&temp, &["a.txt", "b.txt"]);

    rensub_cmd(&temp)
        .args(["a.txt", "b.txt"])
        .write_stdin("$\npre_\npre\npost\n")
        .assert()
        .success();

    assert!(temp.path().join("post_a.txt").exists());
    assert!(temp.path().join("post_b.txt").exists());
    assert!(!temp.path().join("pre_a.txt").exists());
}

#[test]
fn test_files_in_subdirectory_stay_there() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("docs")).unwrap();
    fs::write(temp.path().join("docs/draft.md"), "").unwrap();

    rensub_cmd(&temp)
        .arg("docs/draft.md")
        .write_stdin("draft\nfinal\n")
        .assert()
        .success();

    assert!(temp.path().join("docs/final.md").exists());
    assert!(!temp.path().join("final.md").exists());
}

#[test]
fn test_quit_command_stops_before_renaming() {
    let temp = TempDir::new().unwrap();
    touch(&temp, &["a.txt"]);

    rensub_cmd(&temp)
        .arg("a.txt")
        .write_stdin(":q\na\nb\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Done.").not());

    assert!(temp.path().join("a.txt").exists());
}

#[test]
fn test_disabled_quit_command_is_a_substitution() {
    let temp = TempDir::new().unwrap();
    touch(&temp, &["x:q.txt"]);

    rensub_cmd(&temp)
        .args(["--quit", "", "x:q.txt"])
        .write_stdin(":q\n\n")
        .assert()
        .success();

    assert!(temp.path().join("x.txt").exists());
}

#[test]
fn test_custom_prefix_marker() {
    let temp = TempDir::new().unwrap();
    touch(&temp, &["a.txt"]);

    rensub_cmd(&temp)
        .args(["--prefix-marker", "^", "a.txt"])
        .write_stdin("^\n2024_\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("^ is prefix"));

    assert!(temp.path().join("2024_a.txt").exists());
}

#[test]
fn test_verbose_lists_renames() {
    let temp = TempDir::new().unwrap();
    touch(&temp, &["one.txt", "two.txt"]);

    rensub_cmd(&temp)
        .args(["-v", "one.txt", "two.txt"])
        .write_stdin("$\nx_\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("one.txt -> x_one.txt"))
        .stdout(predicate::str::contains("two.txt -> x_two.txt"));
}

#[test]
fn test_existing_destination_is_fatal() {
    let temp = TempDir::new().unwrap();
    touch(&temp, &["a.txt", "b.txt"]);

    rensub_cmd(&temp)
        .arg("a.txt")
        .write_stdin("a\nb\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("b.txt"));

    assert_eq!(
        fs::read_to_string(temp.path().join("b.txt")).unwrap(),
        "b.txt"
    );
    assert!(temp.path().join("a.txt").exists());
}

#[test]
fn test_missing_file_is_fatal_after_earlier_renames() {
    let temp = TempDir::new().unwrap();
    touch(&temp, &["a1.txt"]);

    rensub_cmd(&temp)
        .args(["a1.txt", "a2.txt"])
        .write_stdin("a\nb\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("a2.txt"));

    assert!(temp.path().join("b1.txt").exists());
}

#[test]
fn test_separator_in_new_name_is_refused() {
    let temp = TempDir::new().unwrap();
    touch(&temp, &["a.txt"]);
    fs::create_dir(temp.path().join("sub")).unwrap();

    rensub_cmd(&temp)
        .arg("a.txt")
        .write_stdin("$\nsub/\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid new name"));

    assert!(temp.path().join("a.txt").exists());
    assert!(!temp.path().join("sub/a.txt").exists());
}

#[test]
fn test_no_files_waits_once_and_exits() {
    let temp = TempDir::new().unwrap();
    touch(&temp, &["a.txt"]);

    rensub_cmd(&temp)
        .write_stdin("a\nb\n")
        .assert()
        .success()
        .stdout("D&D");

    let names: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec!["a.txt"]);
}

#[test]
fn test_no_files_with_closed_stdin_exits() {
    let temp = TempDir::new().unwrap();

    rensub_cmd(&temp).write_stdin("").assert().success();
}

#[test]
fn test_default_output_matches_prompt_protocol_exactly() {
    let temp = TempDir::new().unwrap();
    touch(&temp, &["a.txt", "b.txt"]);

    let round = "$ is prefix\nReplace from:           to: Done.\n\n\n";
    rensub_cmd(&temp)
        .args(["a.txt", "b.txt"])
        .write_stdin("zzz\ny\na\nc\n")
        .assert()
        .success()
        .stdout(format!("{round}{round}$ is prefix\nReplace from: "));

    assert!(temp.path().join("c.txt").exists());
    assert!(temp.path().join("b.txt").exists());
}

#[test]
fn test_verbose_reports_unmatched_and_unchanged_files() {
    let temp = TempDir::new().unwrap();
    touch(&temp, &["a.txt", "b.txt"]);

    rensub_cmd(&temp)
        .args(["-v", "a.txt", "b.txt"])
        .write_stdin("zzz\ny\na\nc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No file name matched"))
        .stdout(predicate::str::contains("1 of 2 file(s) unchanged"));
}
