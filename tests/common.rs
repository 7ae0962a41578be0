//! Shared test helpers.

use tempfile::TempDir;

/// Create a temp directory for use as a hostblock home / scratch area.
pub fn temp_home() -> TempDir {
    tempfile::Builder::new()
        .prefix("hostblock_test_")
        .tempdir()
        .expect("temp dir")
}
