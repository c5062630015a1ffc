//! File filtering and discovery with glob pattern support.
//!
//! This module discovers C-family source files under a directory, with
//! include/exclude glob patterns layered on top of a fixed extension set.

use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::SiglocError;
use crate::Result;

/// File extensions recognized as C-family source.
const SOURCE_EXTENSIONS: [&str; 9] = ["cs", "java", "c", "h", "cpp", "cc", "cxx", "hpp", "hh"];

/// Configuration for file filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Glob patterns to include (if empty, include all source files)
    pub include: Vec<Pattern>,
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
}

impl FilterConfig {
    /// Create a new empty filter config (includes all source files).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include pattern.
    pub fn include(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| SiglocError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.include.push(pat);
        Ok(self)
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| SiglocError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.exclude.push(pat);
        Ok(self)
    }

    /// Add multiple include patterns.
    pub fn include_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.include(pattern)?;
        }
        Ok(self)
    }

    /// Add multiple exclude patterns.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern)?;
        }
        Ok(self)
    }

    /// Check if a path matches the filter criteria.
    ///
    /// A path matches if:
    /// 1. It has a recognized source extension
    /// 2. It matches at least one include pattern (or include is empty)
    /// 3. It doesn't match any exclude pattern
    pub fn matches(&self, path: &Path) -> bool {
        let is_source = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext));
        if !is_source {
            return false;
        }

        let path_str = path.to_string_lossy();

        // Check excludes first
        for pattern in &self.exclude {
            if pattern.matches(&path_str) {
                return false;
            }
        }

        // If no include patterns, include all
        if self.include.is_empty() {
            return true;
        }

        // Must match at least one include pattern
        for pattern in &self.include {
            if pattern.matches(&path_str) {
                return true;
            }
        }

        false
    }
}

/// Check if a directory should be skipped during traversal.
fn should_skip_dir(name: &str) -> bool {
    // Skip hidden directories and common build-output directories
    name.starts_with('.') || matches!(name, "bin" | "obj" | "build" | "target")
}

/// Discover source files in a directory.
///
/// Walks the directory tree and returns all source files that match the
/// filter. A file root is allowed and returns at most that one file.
pub fn discover_files(root: impl AsRef<Path>, filter: &FilterConfig) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(SiglocError::PathNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();

    if root.is_file() {
        if filter.matches(root) {
            files.push(root.to_path_buf());
        }
        return Ok(files);
    }

    let walker = WalkDir::new(root).follow_links(true).into_iter();

    for entry in walker.filter_entry(|e| {
        // Always include the root directory
        if e.depth() == 0 {
            return true;
        }
        // For non-root entries, skip hidden and build-output dirs
        if e.file_type().is_dir() {
            let name = e.file_name().to_str().unwrap_or("");
            return !should_skip_dir(name);
        }
        // Include files
        true
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let path = entry.path();

        if path.is_file() && filter.matches(path) {
            files.push(path.to_path_buf());
        }
    }

    // Sort for deterministic output
    files.sort();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn create_test_files(dir: &Path) {
        fs::create_dir_all(dir.join("src")).unwrap();
        fs::create_dir_all(dir.join("src/util")).unwrap();
        fs::create_dir_all(dir.join("bin/Debug")).unwrap();
        fs::create_dir_all(dir.join("obj")).unwrap();
        fs::create_dir_all(dir.join(".git")).unwrap();

        fs::write(dir.join("src/Program.cs"), "int x = 1;").unwrap();
        fs::write(dir.join("src/Main.java"), "int y = 2;").unwrap();
        fs::write(dir.join("src/util/helper.c"), "int z = 3;").unwrap();
        fs::write(dir.join("src/util/helper.h"), "int z;").unwrap();
        fs::write(dir.join("bin/Debug/Program.cs"), "// generated").unwrap();
        fs::write(dir.join("obj/temp.cs"), "// generated").unwrap();
        fs::write(dir.join(".git/hook.cs"), "// hidden").unwrap();
        fs::write(dir.join("README.md"), "# Readme").unwrap();
    }

    #[test]
    fn test_filter_matches_source_extensions() {
        let filter = FilterConfig::new();

        assert!(filter.matches(Path::new("src/Program.cs")));
        assert!(filter.matches(Path::new("Main.java")));
        assert!(filter.matches(Path::new("lib/foo.cpp")));
        assert!(filter.matches(Path::new("lib/foo.hpp")));
        assert!(!filter.matches(Path::new("README.md")));
        assert!(!filter.matches(Path::new("main.rs")));
        assert!(!filter.matches(Path::new("Makefile")));
    }

    #[test]
    fn test_filter_with_include_pattern() {
        let filter = FilterConfig::new().include("**/util/*.c").unwrap();

        assert!(filter.matches(Path::new("src/util/helper.c")));
        assert!(!filter.matches(Path::new("src/main.c")));
    }

    #[test]
    fn test_filter_with_exclude_pattern() {
        let filter = FilterConfig::new().exclude("**/generated/**").unwrap();

        assert!(filter.matches(Path::new("src/Program.cs")));
        assert!(!filter.matches(Path::new("src/generated/Model.cs")));
    }

    #[test]
    fn test_filter_with_multiple_patterns() {
        let filter = FilterConfig::new()
            .include_many(&["**/src/**", "**/test/**"])
            .unwrap()
            .exclude("**/util/**")
            .unwrap();

        assert!(filter.matches(Path::new("proj/src/Main.java")));
        assert!(filter.matches(Path::new("proj/test/MainTest.java")));
        assert!(!filter.matches(Path::new("proj/src/util/Helper.java")));
        assert!(!filter.matches(Path::new("proj/docs/Sample.java")));
    }

    #[test]
    fn test_discover_files() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let filter = FilterConfig::new();
        let files = discover_files(temp.path(), &filter).unwrap();

        assert!(files.iter().any(|p| p.ends_with("src/Program.cs")));
        assert!(files.iter().any(|p| p.ends_with("src/Main.java")));
        assert!(files.iter().any(|p| p.ends_with("src/util/helper.c")));
        assert!(files.iter().any(|p| p.ends_with("src/util/helper.h")));

        // Build-output and hidden directories are skipped
        for skipped in ["bin", "obj", ".git"] {
            assert!(!files
                .iter()
                .any(|p| p.components().any(|c| c.as_os_str() == skipped)));
        }
    }

    #[test]
    fn test_discover_files_with_filter() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let filter = FilterConfig::new().exclude("**/util/**").unwrap();
        let files = discover_files(temp.path(), &filter).unwrap();

        assert!(files.iter().any(|p| p.ends_with("src/Program.cs")));
        assert!(!files.iter().any(|p| p.ends_with("src/util/helper.c")));
    }

    #[test]
    fn test_discover_single_file() {
        let temp = tempdir().unwrap();
        let file_path = temp.path().join("test.cs");
        fs::write(&file_path, "int x = 1;").unwrap();

        let filter = FilterConfig::new();
        let files = discover_files(&file_path, &filter).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0], file_path);
    }

    #[test]
    fn test_discover_files_nonexistent() {
        let filter = FilterConfig::new();
        let result = discover_files("/nonexistent/path", &filter);

        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_glob_pattern() {
        let result = FilterConfig::new().include("[invalid");

        assert!(result.is_err());
        if let Err(SiglocError::InvalidGlob { pattern, .. }) = result {
            assert_eq!(pattern, "[invalid");
        } else {
            panic!("Expected InvalidGlob error");
        }
    }
}
