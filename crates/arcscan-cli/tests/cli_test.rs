//! End-to-end tests for the arcscan binary

use arcscan_testing::assertions::{assert_extracted, collect_files};
use arcscan_testing::fixtures::{
    create_corrupt, create_download_tree, create_zip, SAMPLE_ENTRIES,
};
use arcscan_testing::TestDir;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

/// Command with its own config directory so the user's file is never read
fn arcscan(config_home: &TestDir) -> Command {
    let mut cmd = Command::cargo_bin("arcscan").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn test_check_help_lists_flags() {
    let config_home = TestDir::new().unwrap();
    arcscan(&config_home)
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--save"))
        .stdout(predicate::str::contains("--extract"))
        .stdout(predicate::str::contains("--no-input"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_check_reports_pending_archives() {
    let config_home = TestDir::new().unwrap();
    let tree = TestDir::new().unwrap();
    create_download_tree(&tree).unwrap();

    arcscan(&config_home)
        .arg("check")
        .arg(tree.path())
        .arg("--no-input")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unextracted archives"))
        .stdout(predicate::str::contains("Name: movies"))
        .stdout(predicate::str::contains("Name: backup"))
        .stdout(predicate::str::contains("Name: notes"));

    // nothing was saved or extracted
    assert!(!tree.join("movies").exists());
}

#[test]
fn test_check_missing_directory() {
    let config_home = TestDir::new().unwrap();
    let tree = TestDir::new().unwrap();

    arcscan(&config_home)
        .arg("check")
        .arg(tree.join("does-not-exist"))
        .arg("--no-input")
        .assert()
        .code(2);
}

#[test]
fn test_quiet_still_reports_fatal_error() {
    let config_home = TestDir::new().unwrap();
    let tree = TestDir::new().unwrap();

    arcscan(&config_home)
        .arg("-q")
        .arg("check")
        .arg(tree.join("does-not-exist"))
        .arg("--no-input")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Directory not found"));
}

#[test]
fn test_quiet_hides_progress_logging() {
    let config_home = TestDir::new().unwrap();
    let tree = TestDir::new().unwrap();
    tree.create_file("notes.txt", b"x").unwrap();

    arcscan(&config_home)
        .arg("-q")
        .arg("check")
        .arg(tree.path())
        .arg("--no-input")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_check_reads_answers_from_piped_stdin() {
    let config_home = TestDir::new().unwrap();
    let tree = TestDir::new().unwrap();
    let workdir = TestDir::new().unwrap();
    create_zip(&tree, "foo.zip", SAMPLE_ENTRIES).unwrap();

    // no to saving, yes to extracting
    arcscan(&config_home)
        .arg("check")
        .arg(tree.path())
        .current_dir(workdir.path())
        .write_stdin("n\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Extraction summary"))
        .stderr(predicate::str::contains("(y/n)"));

    assert_extracted(&tree.join("foo"), SAMPLE_ENTRIES).unwrap();
    assert!(collect_files(workdir.path()).unwrap().is_empty());
}

#[test]
fn test_check_closed_stdin_declines_everything() {
    let config_home = TestDir::new().unwrap();
    let tree = TestDir::new().unwrap();
    let workdir = TestDir::new().unwrap();
    create_zip(&tree, "foo.zip", SAMPLE_ENTRIES).unwrap();

    arcscan(&config_home)
        .arg("check")
        .arg(tree.path())
        .current_dir(workdir.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: foo"));

    assert!(!tree.join("foo").exists());
    assert!(collect_files(workdir.path()).unwrap().is_empty());
}

#[test]
fn test_check_without_root() {
    let config_home = TestDir::new().unwrap();

    arcscan(&config_home)
        .args(["check", "--no-input"])
        .assert()
        .code(3);
}

#[test]
fn test_check_json_output() {
    let config_home = TestDir::new().unwrap();
    let tree = TestDir::new().unwrap();
    create_zip(&tree, "foo.zip", SAMPLE_ENTRIES).unwrap();
    tree.create_file("bar.txt", b"bar").unwrap();

    let reports = TestDir::new().unwrap();
    let report_file = reports.join("results.json");

    let output = arcscan(&config_home)
        .arg("check")
        .arg(tree.path())
        .arg("--json")
        .arg("--save")
        .arg(&report_file)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(report_file.is_file());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"未解压的压缩包\""));
    assert!(stdout.contains("\"没有对应压缩包的文件\""));
    assert!(stdout.contains("\"foo\""));
    assert!(stdout.contains("\"bar\""));
    assert!(!stdout.contains("Unextracted archives"));
    assert!(!stdout.contains("Results saved to"));
    assert_eq!(stdout.trim(), fs::read_to_string(&report_file).unwrap().trim());
}

#[test]
fn test_check_save_and_extract() {
    let config_home = TestDir::new().unwrap();
    let tree = TestDir::new().unwrap();
    let reports = TestDir::new().unwrap();
    create_download_tree(&tree).unwrap();
    let report_file = reports.join("results.json");

    arcscan(&config_home)
        .arg("check")
        .arg(tree.path())
        .arg("--no-input")
        .arg("--extract")
        .arg("--save")
        .arg(&report_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Results saved to"))
        .stdout(predicate::str::contains("Extraction summary"));

    let saved = fs::read_to_string(&report_file).unwrap();
    assert!(saved.contains("movies"));
    assert_extracted(&tree.join("movies"), SAMPLE_ENTRIES).unwrap();
    assert_extracted(&tree.join("backup.tar"), SAMPLE_ENTRIES).unwrap();
}

#[test]
fn test_check_partial_failure_exit_code() {
    let config_home = TestDir::new().unwrap();
    let tree = TestDir::new().unwrap();
    create_zip(&tree, "good.zip", SAMPLE_ENTRIES).unwrap();
    create_corrupt(&tree, "bad.zip").unwrap();

    arcscan(&config_home)
        .arg("check")
        .arg(tree.path())
        .arg("--yes")
        .current_dir(tree.path())
        .assert()
        .code(4)
        .stdout(predicate::str::contains("failed:      1"));

    assert!(tree.join("good/readme.txt").is_file());
}

#[test]
fn test_extract_single_zip() {
    let config_home = TestDir::new().unwrap();
    let tree = TestDir::new().unwrap();
    let archive = create_zip(&tree, "bundle.zip", SAMPLE_ENTRIES).unwrap();
    let output_dir = tree.join("out");

    arcscan(&config_home)
        .arg("extract")
        .arg(&archive)
        .arg("--output")
        .arg(&output_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted zip archive"));

    assert_extracted(&output_dir, SAMPLE_ENTRIES).unwrap();
}

#[test]
fn test_extract_unsupported_file() {
    let config_home = TestDir::new().unwrap();
    let tree = TestDir::new().unwrap();
    let file = tree.create_file("notes.txt", b"plain").unwrap();

    arcscan(&config_home)
        .arg("extract")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped unsupported archive"));

    assert!(!tree.join("notes").exists());
}

#[test]
fn test_extract_corrupt_archive() {
    let config_home = TestDir::new().unwrap();
    let tree = TestDir::new().unwrap();
    let archive = create_corrupt(&tree, "broken.zip").unwrap();

    arcscan(&config_home)
        .arg("extract")
        .arg(&archive)
        .assert()
        .code(4);
}

#[test]
fn test_config_path() {
    let config_home = TestDir::new().unwrap();

    arcscan(&config_home)
        .args(["config", "--path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_defaults() {
    let config_home = TestDir::new().unwrap();

    arcscan(&config_home)
        .args(["config", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[scan]"))
        .stdout(predicate::str::contains("assume_yes = false"));

    assert!(config_home.join("arcscan/config.toml").is_file());
}
