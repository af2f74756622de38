//! Prose word counting for essay bodies.
//!
//! Not a typographic count: markup punctuation and bare URLs are stripped,
//! then whitespace-delimited tokens are counted. Same input, same number.

use regex::Regex;
use std::sync::LazyLock;

/// Markdown structural punctuation, each replaced by a single space.
static RE_MARKUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[#*_`\[\]()>|]").unwrap());

/// Whole URL tokens, removed outright.
static RE_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

/// Whitespace runs, collapsed to one space.
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Count words in a document body.
pub fn count_words(body: &str) -> usize {
    let clean = RE_MARKUP.replace_all(body, " ");
    let clean = RE_URL.replace_all(&clean, "");
    let clean = RE_WHITESPACE.replace_all(&clean, " ");
    let clean = clean.trim();

    if clean.is_empty() {
        0
    } else {
        clean.split(' ').count()
    }
}
