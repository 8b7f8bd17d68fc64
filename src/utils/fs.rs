// File system utilities

use crate::error::{Result, ValueBidError};
use std::path::Path;

/// Ensures a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| {
            ValueBidError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create directory {}: {}", path.display(), e),
            ))
        })?;
    }
    Ok(())
}

/// Writes content to a file atomically by writing to a temp file first
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    // Write to temporary file first
    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, content).map_err(|e| {
        ValueBidError::Io(std::io::Error::new(
            e.kind(),
            format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ),
        ))
    })?;

    // Rename temp file to target (atomic operation)
    std::fs::rename(&temp_path, path).map_err(|e| {
        ValueBidError::Io(std::io::Error::new(
            e.kind(),
            format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            ),
        ))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_write_creates_parents_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.json");

        atomic_write(&path, "{}").unwrap();
        atomic_write(&path, "{\"port\":1}").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"port\":1}");
        assert!(!path.with_extension("tmp").exists());
    }
}
