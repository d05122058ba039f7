//! Test helpers for integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use tempfile::{NamedTempFile, TempDir};

/// Tolerance for floating-point comparisons.
pub const EPSILON: f64 = 1e-9;

/// Sample chat log used across tests.
pub const SAMPLE_LOG: &str = "\
alice: Hello World
alice: HI
bob: quiet now
this line has no delimiter
";

/// Check that two floats are equal within [`EPSILON`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Write `content` to a temporary file and return the handle.
///
/// The file is deleted when the handle is dropped.
pub fn write_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Create a temporary directory holding `name` with `content`.
pub fn temp_dir_with_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (dir, path)
}
