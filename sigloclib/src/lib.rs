//! # sigloclib
//!
//! A heuristic line counter for C-family source files (C#, Java, C/C++-style)
//! that separates significant code lines from comments, declarations, and
//! blanks.
//!
//! ## Overview
//!
//! Unlike parser-backed LOC tools, this library classifies each line with
//! lightweight lexical rules: a trimmed line is stripped of access/inheritance
//! modifiers, then matched against fixed prefix tables for comments and
//! non-code boilerplate (imports, namespaces, preprocessor directives, type
//! declarations), and finally tested for emptiness (braces count as nothing).
//! Whatever survives is a **significant** line.
//!
//! Classification is per-line and stateless: no multi-line statements, no
//! string-literal awareness, no nested block comments. It is a casual
//! code-size estimator, not a parser.
//!
//! ## Example
//!
//! ```rust
//! use sigloclib::{count_file, LineCounter};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let path = dir.path().join("Foo.cs");
//! fs::write(&path, "using System;\n\nint x = 1;\n").unwrap();
//!
//! // Count a single file with a path-bound counter
//! let counter = LineCounter::new(&path).unwrap();
//! assert_eq!(counter.count_lines().unwrap(), 3);
//! assert_eq!(counter.count_significant_lines().unwrap(), 1);
//!
//! // Or get the full breakdown in one pass
//! let tally = count_file(&path).unwrap();
//! assert_eq!(tally.non_code, 1);
//! assert_eq!(tally.blank, 1);
//! ```

pub mod classifier;
pub mod counter;
pub mod error;
pub mod filter;
pub mod lexicon;
pub mod stats;

pub use classifier::{classify, is_significant, remove_modifiers, LineClass};
pub use counter::{count_directory, count_file, LineCounter};
pub use error::SiglocError;
pub use filter::{discover_files, FilterConfig};
pub use stats::{CountResult, FileStats, LineTally};

/// Result type for sigloclib operations
pub type Result<T> = std::result::Result<T, SiglocError>;
