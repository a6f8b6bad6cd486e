use std::fs;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_blcat"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn should_print_banners_and_file_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.bl");
    fs::write(&path, b"hello").unwrap();

    let output = run(&[path.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "File name found\nContent of this file is\nhello");
}

#[test]
fn should_print_the_last_matching_argument_content() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.bl");
    let second = dir.path().join("second.bl");
    fs::write(&first, b"one").unwrap();
    fs::write(&second, b"two").unwrap();

    let output = run(&[first.to_str().unwrap(), second.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("two"));
}

#[test]
fn should_print_nothing_after_the_banner_for_an_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.bl");
    fs::write(&path, b"").unwrap();

    let output = run(&[path.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "File name found\nContent of this file is\n");
}

#[test]
fn should_fail_on_a_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.bl");

    let output = run(&[path.to_str().unwrap()]);
    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, "File name found\n");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("File cannot be opened"));
}

#[test]
fn should_fail_when_no_argument_carries_the_extension() {
    let output = run(&["--verbose", "notes.txt"]);
    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No input file"));
}
