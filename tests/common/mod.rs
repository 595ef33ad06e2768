// Test utility module for lighthouse-summary integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data/fixtures")
        .join(name)
}

// Writes `content` as lighthouse-report.json inside a fresh temp dir
pub fn create_report(content: &str) -> (tempfile::TempDir, PathBuf) {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("lighthouse-report.json");
    std::fs::write(&path, content).expect("Failed to write report");
    (temp_dir, path)
}

pub fn copy_fixture_into(dir: &Path, fixture: &str) -> PathBuf {
    let dest = dir.join("lighthouse-report.json");
    std::fs::copy(fixture_path(fixture), &dest).expect("Failed to copy fixture");
    dest
}
