//! Fixed classification vocabularies.
//!
//! These tables are initialized at compile time and never mutated, so any
//! number of concurrent scans can share them without locking. Table order is
//! load-bearing for [`MODIFIERS`](crate::lexicon::MODIFIERS), which is applied
//! as a sequence of rewrites.

/// Literal prefixes that mark a whole-line comment.
///
/// The bare `*` entry catches continuation lines of block comments and
/// eclipse-style doc comments, at the cost of swallowing any line that
/// happens to start with an asterisk.
pub const COMMENT_STARTERS: [&str; 4] = ["//", "/*", "*/", "*"];

/// Literal prefixes for declaration/import/structural lines: real code, but
/// never counted as significant. Matches are case-sensitive.
pub const NON_CODE_STARTERS: [&str; 8] = [
    "import",
    "using",
    "namespace",
    "package",
    "#",
    "class",
    "struct",
    "enum",
];

/// Access/inheritance keywords stripped from a line before classification.
pub const MODIFIERS: [&str; 4] = ["public", "private", "abstract", "virtual"];

/// Characters that carry no information for the emptiness test.
pub const SPECIAL_CHARACTERS: [char; 2] = ['{', '}'];
