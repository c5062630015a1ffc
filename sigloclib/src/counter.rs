//! Scan operations: counting total and significant lines.
//!
//! This module provides the main entry points for counting lines in single
//! files and directories. The classification itself lives in
//! [`crate::classifier`]; everything here is reading lines and aggregating
//! tallies.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::classifier::classify;
use crate::error::SiglocError;
use crate::filter::{discover_files, FilterConfig};
use crate::stats::{CountResult, FileStats, LineTally};
use crate::Result;

/// A line counter bound to one source file.
///
/// The file's existence is validated at construction and re-validated at the
/// start of every count operation, so a file deleted between calls surfaces
/// as [`SiglocError::FileNotFound`] rather than a mid-read I/O fault. Each
/// count operation is an independent full re-scan; no state is cached
/// between calls.
///
/// # Example
///
/// ```rust,ignore
/// use sigloclib::LineCounter;
///
/// let counter = LineCounter::new("src/Foo.cs")?;
/// println!("total: {}", counter.count_lines()?);
/// println!("significant: {}", counter.count_significant_lines()?);
/// ```
#[derive(Debug, Clone)]
pub struct LineCounter {
    path: PathBuf,
    debug: bool,
}

impl LineCounter {
    /// Create a counter for the file at `path`.
    ///
    /// Returns [`SiglocError::FileNotFound`] when the path does not resolve
    /// to a file.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let counter = Self {
            path: path.as_ref().to_path_buf(),
            debug: false,
        };
        counter.check_file_exists()?;
        Ok(counter)
    }

    /// Emit one stderr line per classified source line.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Path this counter is bound to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Total number of lines in the file.
    ///
    /// Every line read counts, blank lines and comments included.
    pub fn count_lines(&self) -> Result<u64> {
        Ok(self.scan()?.total)
    }

    /// Number of lines classified as significant code.
    pub fn count_significant_lines(&self) -> Result<u64> {
        Ok(self.scan()?.significant)
    }

    /// Full per-class breakdown in a single pass.
    pub fn tally(&self) -> Result<LineTally> {
        self.scan()
    }

    fn scan(&self) -> Result<LineTally> {
        // The file may have been deleted since construction.
        self.check_file_exists()?;

        let file = File::open(&self.path).map_err(|e| SiglocError::FileRead {
            path: self.path.clone(),
            source: e,
        })?;
        let reader = BufReader::new(file);

        let mut tally = LineTally::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| SiglocError::FileRead {
                path: self.path.clone(),
                source: e,
            })?;
            let class = classify(&line);
            if self.debug {
                eprintln!("{}: {}: {}", line_no + 1, class.label(), line);
            }
            tally.record(class);
        }

        Ok(tally)
    }

    fn check_file_exists(&self) -> Result<()> {
        if !self.path.is_file() {
            return Err(SiglocError::FileNotFound(self.path.clone()));
        }
        Ok(())
    }
}

/// Count lines in a single file.
///
/// # Example
///
/// ```rust,ignore
/// use sigloclib::count_file;
///
/// let tally = count_file("src/Foo.cs")?;
/// println!("{} of {} lines significant", tally.significant, tally.total);
/// ```
pub fn count_file(path: impl AsRef<Path>) -> Result<LineTally> {
    LineCounter::new(path)?.tally()
}

/// Count lines in every matching source file under a directory.
///
/// Files are discovered with [`discover_files`] and aggregated into a
/// [`CountResult`] with per-file tallies.
///
/// # Example
///
/// ```rust,ignore
/// use sigloclib::{count_directory, FilterConfig};
///
/// let filter = FilterConfig::new().exclude("**/generated/**")?;
/// let result = count_directory("src/", &filter)?;
/// ```
pub fn count_directory(path: impl AsRef<Path>, filter: &FilterConfig) -> Result<CountResult> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SiglocError::PathNotFound(path.to_path_buf()));
    }

    let files = discover_files(path, filter)?;

    let mut result = CountResult::new();
    for file_path in files {
        let tally = LineCounter::new(&file_path)?.tally()?;
        result.add_file(FileStats::new(file_path, tally));
    }

    Ok(result)
}
