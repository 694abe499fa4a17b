use std::sync::LazyLock;

use regex::Regex;

const CANONICAL_APOSTROPHE: char = '\'';
const CANONICAL_QUOTE: char = '"';

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("non-word pattern is valid"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Canonical form used for every title comparison.
///
/// Lowercases, folds curly apostrophes and quotation marks into their straight
/// forms, keeps only `a-z`, `0-9` and whitespace, then collapses whitespace runs
/// into single spaces and trims the ends. Total: the empty string maps to itself.
pub fn normalize(text: &str) -> String {
    let folded: String = text.to_lowercase().chars().map(fold_quote).collect();
    let stripped = NON_WORD.replace_all(&folded, "");
    WHITESPACE_RUN
        .replace_all(stripped.trim(), " ")
        .into_owned()
}

fn fold_quote(c: char) -> char {
    match c {
        '\u{2018}' | '\u{2019}' => CANONICAL_APOSTROPHE,
        '\u{201C}' | '\u{201D}' => CANONICAL_QUOTE,
        other => other,
    }
}
