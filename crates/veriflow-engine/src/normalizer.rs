//! Text normalization for template comparison.
//!
//! Canonicalizes certificate text before similarity scoring:
//! - Lowercase conversion
//! - Punctuation removal (everything that is neither a word character
//!   nor whitespace)
//! - Whitespace collapse
//!
//! The function is total and idempotent; empty input yields empty output.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Characters that carry no comparison signal
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").unwrap();

    /// Runs of whitespace, including newlines
    static ref MULTI_SPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalize text for word-level comparison.
///
/// Punctuation is stripped before whitespace is collapsed, so removing a
/// punctuation-only token cannot leave a doubled space behind.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    let collapsed = MULTI_SPACE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}
