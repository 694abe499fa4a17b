use std::sync::LazyLock;

use regex::Regex;

use super::types::{Scene, SeasonRange};

/// Bracketed annotations may make up at most this share of a quote.
const MAX_BRACKETED_RATIO: f64 = 0.5;

// Non-nested: a span runs from a `[` to the next `]`
static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").expect("bracket pattern is valid"));

/// Acceptance rules for a freshly fetched scene.
#[derive(Debug, Clone, Copy)]
pub struct SceneValidator {
    season_range: SeasonRange,
    min_words: usize,
}

impl SceneValidator {
    pub fn new(season_range: SeasonRange, min_words: usize) -> Self {
        Self {
            season_range,
            min_words,
        }
    }

    pub fn accepts(&self, scene: &Scene) -> bool {
        is_acceptable(scene, self.season_range, self.min_words)
    }
}

pub fn is_acceptable(scene: &Scene, season_range: SeasonRange, min_words: usize) -> bool {
    if !season_range.contains(scene.season) {
        return false;
    }

    let quote = scene.quote_text.trim();
    if quote.is_empty() {
        return false;
    }

    if quote.split_whitespace().count() < min_words {
        return false;
    }

    // Pure stage directions such as "[GRUNTING]"
    if quote.starts_with('[') {
        return false;
    }

    bracketed_ratio(&scene.quote_text) <= MAX_BRACKETED_RATIO
}

/// Share of `text` (in chars) covered by `[...]` spans. An unclosed `[` covers nothing.
fn bracketed_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }

    let bracketed: usize = BRACKETED
        .find_iter(text)
        .map(|span| span.as_str().chars().count())
        .sum();

    bracketed as f64 / total as f64
}
