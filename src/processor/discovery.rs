//! File discovery module for LAS batches
//!
//! Walks an input directory (or accepts a single file) and collects the
//! files whose names match the configured pattern.

use crate::error::{LasError, Result};
use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use tokio::task;
use tracing::debug;
use walkdir::WalkDir;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// File discovery component for LAS batches
#[derive(Debug, Clone)]
pub struct FileDiscovery {
    input_path: PathBuf,
    pattern: Pattern,
}

impl FileDiscovery {
    /// Create a new file discovery instance
    pub fn new(input_path: PathBuf, file_pattern: &str) -> Result<Self> {
        let pattern = Pattern::new(file_pattern).map_err(|e| {
            LasError::configuration(format!("invalid file pattern '{}': {}", file_pattern, e))
        })?;
        Ok(Self {
            input_path,
            pattern,
        })
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// Whether a file name matches the pattern (case-insensitive)
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.pattern.matches_with(name, MATCH_OPTIONS))
    }

    /// Discover all matching files, sorted by path
    ///
    /// A single file given as input is returned as-is, whatever its name.
    pub async fn discover_las_files(&self) -> Result<Vec<PathBuf>> {
        if !self.input_path.exists() {
            return Err(LasError::FileNotFound {
                path: self.input_path.clone(),
            });
        }
        if self.input_path.is_file() {
            return Ok(vec![self.input_path.clone()]);
        }

        debug!("Searching for LAS files in: {}", self.input_path.display());

        let discovery = self.clone();
        let files = task::spawn_blocking(move || discovery.walk())
            .await
            .map_err(|e| LasError::ProcessingFailed {
                path: self.input_path.clone(),
                reason: format!("File discovery task failed: {}", e),
            })??;

        debug!("Found {} LAS files", files.len());
        Ok(files)
    }

    fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.input_path).follow_links(true) {
            let entry = entry.map_err(|e| LasError::ProcessingFailed {
                path: self.input_path.clone(),
                reason: format!("Failed to read directory entry: {}", e),
            })?;
            if entry.file_type().is_file() && self.matches(entry.path()) {
                files.push(entry.into_path());
            }
        }
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_tree(temp_dir: &TempDir) -> PathBuf {
        let root = temp_dir.path().join("wells");
        fs::create_dir_all(root.join("north").join("2023")).unwrap();
        fs::create_dir_all(root.join("south")).unwrap();

        fs::write(root.join("a.las"), "~A\n1\n").unwrap();
        fs::write(root.join("north").join("b.LAS"), "~A\n1\n").unwrap();
        fs::write(root.join("north").join("2023").join("c.las"), "~A\n1\n").unwrap();
        fs::write(root.join("south").join("notes.txt"), "not a log").unwrap();

        root
    }

    #[tokio::test]
    async fn test_discover_nested_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = create_test_tree(&temp_dir);

        let discovery = FileDiscovery::new(root, "*.las").unwrap();
        let files = discovery.discover_las_files().await.unwrap();

        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(files.len(), 3);
        assert!(names.contains(&"b.LAS".to_string()));
        assert!(!names.contains(&"notes.txt".to_string()));
    }

    #[tokio::test]
    async fn test_discovery_is_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let root = create_test_tree(&temp_dir);

        let files = FileDiscovery::new(root, "*.las")
            .unwrap()
            .discover_las_files()
            .await
            .unwrap();

        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }

    #[tokio::test]
    async fn test_single_file_input() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("log.txt");
        fs::write(&file, "~A\n1\n").unwrap();

        let files = FileDiscovery::new(file.clone(), "*.las")
            .unwrap()
            .discover_las_files()
            .await
            .unwrap();

        assert_eq!(files, vec![file]);
    }

    #[tokio::test]
    async fn test_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let result = FileDiscovery::new(missing.clone(), "*.las")
            .unwrap()
            .discover_las_files()
            .await;

        match result {
            Err(LasError::FileNotFound { path }) => assert_eq!(path, missing),
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_pattern() {
        let discovery = FileDiscovery::new(PathBuf::from("."), "well_*.las").unwrap();

        assert!(discovery.matches(Path::new("/data/well_01.las")));
        assert!(discovery.matches(Path::new("WELL_02.LAS")));
        assert!(!discovery.matches(Path::new("core_01.las")));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = FileDiscovery::new(PathBuf::from("."), "[");
        assert!(matches!(result, Err(LasError::Configuration { .. })));
    }
}
