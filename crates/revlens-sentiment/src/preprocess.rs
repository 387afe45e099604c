//! Light text cleanup applied before polarity scoring.

use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// Cleans review text for scoring: strips tag-like `<...>` substrings that
/// slipped through extraction and collapses whitespace runs to single
/// spaces, trimming the ends. Case and punctuation are preserved — the
/// scorer is defined to be robust to both.
#[must_use]
pub fn preprocess(text: &str) -> String {
    let stripped = TAG_RE.replace_all(text, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
