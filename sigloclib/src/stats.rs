//! Tally and result data structures

use crate::classifier::LineClass;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

/// Line counts for one scan.
///
/// `total` counts every line read; the four class fields partition it, so
/// `significant + comments + non_code + blank == total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTally {
    /// Every line read, regardless of content
    pub total: u64,
    /// Lines that survived all disqualifying tests
    pub significant: u64,
    /// Lines starting with a comment marker
    pub comments: u64,
    /// Declaration/import/structural lines
    pub non_code: u64,
    /// Whitespace- or brace-only lines
    pub blank: u64,
}

impl LineTally {
    /// Create a new tally with all zeros
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one classified line.
    pub fn record(&mut self, class: LineClass) {
        self.total += 1;
        match class {
            LineClass::Significant => self.significant += 1,
            LineClass::Comment => self.comments += 1,
            LineClass::NonCode => self.non_code += 1,
            LineClass::Empty => self.blank += 1,
        }
    }

    /// Lines that do not count toward significant code
    pub fn insignificant(&self) -> u64 {
        self.comments + self.non_code + self.blank
    }
}

impl Add for LineTally {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            total: self.total + other.total,
            significant: self.significant + other.significant,
            comments: self.comments + other.comments,
            non_code: self.non_code + other.non_code,
            blank: self.blank + other.blank,
        }
    }
}

impl AddAssign for LineTally {
    fn add_assign(&mut self, other: Self) {
        self.total += other.total;
        self.significant += other.significant;
        self.comments += other.comments;
        self.non_code += other.non_code;
        self.blank += other.blank;
    }
}

/// Tally for a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    /// Path to the file
    pub path: PathBuf,
    /// Line tally for this file
    pub tally: LineTally,
}

impl FileStats {
    /// Create new file stats
    pub fn new(path: PathBuf, tally: LineTally) -> Self {
        Self { path, tally }
    }
}

/// Result of counting lines across a set of files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResult {
    /// Aggregated tally across all files
    pub total: LineTally,
    /// Per-file tallies
    pub files: Vec<FileStats>,
}

impl CountResult {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file's tally to this result
    pub fn add_file(&mut self, file_stats: FileStats) {
        self.total += file_stats.tally;
        self.files.push(file_stats);
    }

    /// Number of files counted
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_default() {
        let tally = LineTally::new();
        assert_eq!(tally.total, 0);
        assert_eq!(tally.significant, 0);
        assert_eq!(tally.insignificant(), 0);
    }

    #[test]
    fn test_tally_record_partitions_total() {
        let mut tally = LineTally::new();
        tally.record(LineClass::Significant);
        tally.record(LineClass::Comment);
        tally.record(LineClass::Comment);
        tally.record(LineClass::NonCode);
        tally.record(LineClass::Empty);

        assert_eq!(tally.total, 5);
        assert_eq!(tally.significant, 1);
        assert_eq!(tally.comments, 2);
        assert_eq!(tally.non_code, 1);
        assert_eq!(tally.blank, 1);
        assert_eq!(tally.significant + tally.insignificant(), tally.total);
    }

    #[test]
    fn test_tally_add() {
        let a = LineTally {
            total: 10,
            significant: 4,
            comments: 3,
            non_code: 2,
            blank: 1,
        };
        let b = LineTally {
            total: 5,
            significant: 2,
            comments: 1,
            non_code: 1,
            blank: 1,
        };
        let sum = a + b;
        assert_eq!(sum.total, 15);
        assert_eq!(sum.significant, 6);
        assert_eq!(sum.comments, 4);
        assert_eq!(sum.non_code, 3);
        assert_eq!(sum.blank, 2);
    }

    #[test]
    fn test_count_result_aggregates() {
        let mut result = CountResult::new();
        result.add_file(FileStats::new(
            PathBuf::from("a.cs"),
            LineTally {
                total: 3,
                significant: 1,
                comments: 1,
                non_code: 0,
                blank: 1,
            },
        ));
        result.add_file(FileStats::new(
            PathBuf::from("b.cs"),
            LineTally {
                total: 2,
                significant: 2,
                comments: 0,
                non_code: 0,
                blank: 0,
            },
        ));

        assert_eq!(result.file_count(), 2);
        assert_eq!(result.total.total, 5);
        assert_eq!(result.total.significant, 3);
    }
}
