//! Test helper functions for common testing patterns.

use tempfile::NamedTempFile;

/// Create a temporary inventory file with the given content.
pub fn write_temp_inventory(content: &str) -> NamedTempFile {
    let file = NamedTempFile::new().expect("failed to create temp file");
    std::fs::write(file.path(), content).expect("failed to write temp file");
    file
}
