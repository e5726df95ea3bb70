//! Unified path management for kanri data files.
//!
//! The whole store lives in one directory under the platform data dir.
//! This ensures consistency across all platforms (Linux, macOS, Windows).

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform data directory could not be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::DataDirNotFound => write!(f, "Cannot find platform data directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for kanri.
///
/// # Directory Structure
///
/// ```text
/// ~/.local/share/kanri/        # Store directory (platform data dir)
/// ├── tasks.json               # The whole task collection, one JSON array
/// └── seeded                   # One-time seed marker
/// ```
pub struct KanriPaths;

impl KanriPaths {
    /// Returns the kanri store directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to the store directory (e.g., `~/.local/share/kanri/`)
    /// - `Err(PathError::DataDirNotFound)`: Could not determine directory
    pub fn store_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("kanri"))
            .ok_or(PathError::DataDirNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_dir() {
        let store_dir = KanriPaths::store_dir().unwrap();
        // Platform data directory with "kanri" appended
        assert!(store_dir.ends_with("kanri"));
    }
}
