//! Line classification heuristics.
//!
//! This module is the core of the library: it decides, for one line of source
//! text at a time, whether that line is a comment, non-code boilerplate,
//! empty, or significant code. Classification is a pure function over the
//! line; no state is carried from one line to the next.
//!
//! The evaluation order inside [`classify`] is fixed: modifiers are stripped
//! first (which rewrites the line every later test sees), the non-code test
//! runs before the comment test (`#include` is a declaration, not a comment),
//! and emptiness is checked last.

use crate::lexicon::{COMMENT_STARTERS, MODIFIERS, NON_CODE_STARTERS, SPECIAL_CHARACTERS};

/// The category assigned to a single line.
///
/// Variants are mutually exclusive; [`classify`] picks the first that applies
/// in the order listed here.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Starts with a comment marker after modifier stripping
    Comment,
    /// Declaration/import/structural boilerplate
    NonCode,
    /// Nothing but whitespace and braces
    Empty,
    /// Code that counts
    Significant,
}

impl LineClass {
    /// Short uppercase tag used in the per-line debug trace.
    pub fn label(&self) -> &'static str {
        match self {
            LineClass::Comment => "COMM",
            LineClass::NonCode => "DECL",
            LineClass::Empty => "BLANK",
            LineClass::Significant => "CODE",
        }
    }
}

/// Classify one raw line.
///
/// The line is trimmed, stripped of modifier keywords, then tested in order:
/// non-code prefix, comment prefix, emptiness. Whatever survives all three is
/// significant.
pub fn classify(raw: &str) -> LineClass {
    let line = remove_modifiers(raw.trim());

    if starts_with_non_code(&line) {
        LineClass::NonCode
    } else if starts_with_comment(&line) {
        LineClass::Comment
    } else if is_empty(&line) {
        LineClass::Empty
    } else {
        LineClass::Significant
    }
}

/// True when the line counts toward significant code.
pub fn is_significant(raw: &str) -> bool {
    classify(raw) == LineClass::Significant
}

/// Strip recognized modifier keywords from the front of a line.
///
/// For each modifier in table order, if it occurs anywhere in the line, the
/// line is rewritten to start one character before the end of its first
/// occurrence. The modifier's last character is retained as the new leading
/// character: `"public class Foo"` becomes `"c class Foo"`, not
/// `"class Foo"`. Each modifier is applied once, over the successively
/// rewritten line.
pub fn remove_modifiers(line: &str) -> String {
    let mut line = line.to_string();
    for modifier in MODIFIERS {
        if let Some(index) = line.find(modifier) {
            // Modifiers are ASCII, so this slice lands on a char boundary.
            line = line[index + modifier.len() - 1..].to_string();
        }
    }
    line
}

/// Emptiness test: braces carry no information, so a line of whitespace
/// and/or braces is empty.
pub fn is_empty(line: &str) -> bool {
    let mut line = line.to_string();
    for special in SPECIAL_CHARACTERS {
        line = line.replace(special, " ");
    }
    line.trim().is_empty()
}

fn starts_with_comment(line: &str) -> bool {
    COMMENT_STARTERS
        .iter()
        .any(|starter| line.starts_with(starter))
}

fn starts_with_non_code(line: &str) -> bool {
    NON_CODE_STARTERS
        .iter()
        .any(|starter| line.starts_with(starter))
}
