//! End-to-end tests for the treedigest binary
//!
//! These run the built executable and check exit codes, stdout records
//! and that diagnostics stay on stderr.

#![allow(clippy::expect_used)]

use data_encoding::BASE64;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn treedigest(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_treedigest"))
        .args(args)
        .output()
        .expect("Failed to run treedigest")
}

fn records(output: &Output) -> Vec<Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("Line is not JSON"))
        .collect()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("Temp path is not UTF-8")
}

#[test]
fn test_no_arguments_prints_usage_and_exits_1() {
    let output = treedigest(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_three_positionals_prints_usage_and_exits_1() {
    let output = treedigest(&["/tmp", "10MB", "extra"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_unparseable_size_exits_1() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = treedigest(&[path_arg(temp_dir.path()), "notasize"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("notasize"));
}

#[test]
fn test_bit_unit_size_exits_1() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = treedigest(&[path_arg(temp_dir.path()), "10Mb"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_long_unit_size_is_accepted() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("f"), "f").expect("Failed to write file");

    let output = treedigest(&[path_arg(temp_dir.path()), "10 megabytes"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(records(&output).len(), 2);
}

#[test]
fn test_help_exits_0() {
    let output = treedigest(&["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("MAX_FILE_SIZE"));
}

#[test]
fn test_scan_emits_records_and_exits_0() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    fs::create_dir(root.join("sub")).expect("Failed to create dir");
    fs::write(root.join("sub").join("hello.txt"), "hello world").expect("Failed to write file");

    let output = treedigest(&[path_arg(root), "10MB"]);
    let records = records(&output);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["path"], path_arg(root));
    assert!(records[0]["digest"].is_null());

    let file = &records[2];
    assert_eq!(file["path"], path_arg(&root.join("sub").join("hello.txt")));
    let digest: Vec<u8> = file["digest"]
        .as_array()
        .expect("digest is not an array")
        .iter()
        .filter_map(Value::as_u64)
        .filter_map(|b| u8::try_from(b).ok())
        .collect();
    assert_eq!(digest, Sha256::digest(b"hello world").to_vec());
    let encoded = file["encoded"].as_str().expect("encoded is not a string");
    assert_eq!(
        BASE64.decode(encoded.as_bytes()).ok(),
        Some(b"hello world".to_vec())
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("start digesting"));
    assert!(stderr.contains("finished digesting"));
}

#[test]
fn test_scan_output_is_stable_across_runs() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();
    fs::write(root.join("b"), "b").expect("Failed to write file");
    fs::write(root.join("a"), "a").expect("Failed to write file");

    let first = treedigest(&[path_arg(root)]);
    let second = treedigest(&[path_arg(root)]);

    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_strict_fails_when_an_entry_is_degraded() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    // The root directory itself cannot be read as a file
    let output = treedigest(&["--strict", path_arg(temp_dir.path())]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(records(&output).len(), 1);
}

#[test]
fn test_strict_images_only_succeeds_on_readable_images() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("pic.png"), [0x89, b'P', b'N', b'G']).expect("Failed to write file");
    fs::write(temp_dir.path().join("notes.txt"), "skip me").expect("Failed to write file");

    let output = treedigest(&["--strict", "--images-only", path_arg(temp_dir.path())]);
    let records = records(&output);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["path"], path_arg(&temp_dir.path().join("pic.png")));
}
