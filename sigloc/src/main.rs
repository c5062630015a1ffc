//! # sigloc
//!
//! A CLI tool for counting significant lines of code in C-family source
//! files (C#, Java, C/C++-style).
//!
//! ## Overview
//!
//! sigloc is built on top of sigloclib and reports, per file or per
//! directory, how many lines a source file has and how many of those are
//! significant: neither blank, a comment, nor declaration/import
//! boilerplate. The classification is heuristic and per-line; see the
//! library documentation for the exact rules.
//!
//! ## Usage
//!
//! ```bash
//! # Count a single file
//! sigloc src/Program.cs
//!
//! # Count every source file under a directory
//! sigloc src/
//!
//! # Per-file breakdown
//! sigloc src/ --by-file
//!
//! # Output as JSON
//! sigloc src/ --output json
//!
//! # Filter files with glob patterns
//! sigloc . --include "src/**/*.cs" --exclude "**/generated/**"
//!
//! # Trace per-line classification on stderr
//! sigloc src/Program.cs --debug
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use sigloclib::{discover_files, CountResult, FileStats, FilterConfig, LineCounter, LineTally};

const NAME_WIDTH: usize = 40;
const CELL_WIDTH: usize = 12;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("sigloc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Heuristic significant-line counter for C-family source files")
        .arg(
            Arg::new("path")
                .help("File or directory to analyze (defaults to current directory)")
                .default_value("."),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .action(ArgAction::Append)
                .help("Include files matching glob pattern"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude files matching glob pattern"),
        )
        .arg(
            Arg::new("by-file")
                .short('f')
                .long("by-file")
                .action(ArgAction::SetTrue)
                .help("Show breakdown by file"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Trace per-line classification on stderr"),
        )
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> Result<FilterConfig, anyhow::Error> {
    let mut filter = FilterConfig::new();

    if let Some(includes) = matches.get_many::<String>("include") {
        for pattern in includes {
            filter = filter.include(pattern)?;
        }
    }

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }

    Ok(filter)
}

/// Scan a file or directory into a CountResult.
fn scan(root: &Path, filter: &FilterConfig, debug: bool) -> sigloclib::Result<CountResult> {
    let mut result = CountResult::new();

    if root.is_file() {
        let tally = LineCounter::new(root)?.with_debug(debug).tally()?;
        result.add_file(FileStats::new(root.to_path_buf(), tally));
        return Ok(result);
    }

    for file_path in discover_files(root, filter)? {
        let tally = LineCounter::new(&file_path)?.with_debug(debug).tally()?;
        result.add_file(FileStats::new(file_path, tally));
    }

    Ok(result)
}

/// Truncate a name to fit within max_len, adding ".." prefix if needed
fn truncate_name(name: &str, max_len: usize) -> String {
    if name.len() > max_len {
        format!("..{}", &name[name.len() - max_len + 2..])
    } else {
        name.to_string()
    }
}

/// Convert a path to a relative path from the base directory
fn make_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| path.to_string_lossy().to_string())
}

fn format_row(name: &str, tally: &LineTally) -> String {
    let truncated = truncate_name(name, NAME_WIDTH - 2);
    format!(
        "{:<NAME_WIDTH$}{:>CELL_WIDTH$}{:>CELL_WIDTH$}{:>CELL_WIDTH$}{:>CELL_WIDTH$}{:>CELL_WIDTH$}",
        truncated, tally.total, tally.significant, tally.comments, tally.non_code, tally.blank
    )
}

fn print_table(result: &CountResult, by_file: bool, base: &Path) {
    let bold = Style::new().bold();

    let name_header = if by_file { "File" } else { "" };
    let mut header = format!("{:<NAME_WIDTH$}", name_header);
    for column in ["Total", "Significant", "Comments", "Non-code", "Blank"] {
        header.push_str(&format!("{:>CELL_WIDTH$}", column));
    }
    println!("{}", bold.apply_to(&header));
    println!("{}", "-".repeat(header.len()));

    if by_file {
        for file in &result.files {
            let name = make_relative(&file.path, base);
            println!("{}", format_row(&name, &file.tally));
        }
        println!("{}", "-".repeat(header.len()));
    }

    let total_label = format!("Total ({} files)", result.file_count());
    println!("{}", bold.apply_to(format_row(&total_label, &result.total)));
}

fn run(matches: &ArgMatches) -> Result<(), anyhow::Error> {
    let path = matches
        .get_one::<String>("path")
        .map(|s| s.as_str())
        .unwrap_or(".");
    let debug = matches.get_flag("debug");
    let by_file = matches.get_flag("by-file");
    let json = matches
        .get_one::<String>("output")
        .is_some_and(|s| s == "json");

    let filter = build_filter(matches)?;
    let root = Path::new(path);

    let result = scan(root, &filter, debug)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let base = std::fs::canonicalize(root).unwrap_or_else(|_| PathBuf::from(path));
    print_table(&result, by_file, &base);
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
