use super::normalize::normalize;

/// Similarity in `[0, 1]` between two free-text titles.
///
/// Both inputs are normalized first. Identical normalized forms score exactly 1,
/// which also covers two empty strings. Otherwise the score is
/// `1 - distance / longest`, where `distance` is the Levenshtein distance.
pub fn similarity(a: &str, b: &str) -> f64 {
    let norm_a = normalize(a);
    let norm_b = normalize(b);

    if norm_a == norm_b {
        return 1.0;
    }

    let a_chars: Vec<char> = norm_a.chars().collect();
    let b_chars: Vec<char> = norm_b.chars().collect();
    let longest = a_chars.len().max(b_chars.len());
    let distance = edit_distance(&a_chars, &b_chars);

    1.0 - distance as f64 / longest as f64
}

/// Levenshtein distance between two strings, counted in chars.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    edit_distance(&a_chars, &b_chars)
}

// Rows follow `b`, columns follow `a`. Only the previous row is kept.
fn edit_distance(a: &[char], b: &[char]) -> usize {
    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr = vec![0; a.len() + 1];

    for (i, b_char) in b.iter().enumerate() {
        curr[0] = i + 1;
        for (j, a_char) in a.iter().enumerate() {
            curr[j + 1] = if a_char == b_char {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}

/// Ranks `titles` by similarity to `input`, best first, keeping at most `limit`.
///
/// Titles whose normalized form starts with the normalized input rank ahead of
/// merely similar ones, the way an autocomplete list reads.
pub fn suggest_titles<'a>(input: &str, titles: &'a [String], limit: usize) -> Vec<&'a str> {
    let needle = normalize(input);
    if needle.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<(bool, f64, &str)> = titles
        .iter()
        .map(|title| {
            let is_prefix = normalize(title).starts_with(&needle);
            (is_prefix, similarity(&needle, title), title.as_str())
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| b.1.total_cmp(&a.1))
            .then_with(|| a.2.cmp(b.2))
    });
    ranked.into_iter().take(limit).map(|(_, _, title)| title).collect()
}
