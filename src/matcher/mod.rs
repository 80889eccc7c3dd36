//! Similarity scoring and top-K ranking powered by `strsim`.
//!
//! The scorer is a token-sort ratio: both strings are normalized (lowercase,
//! punctuation to spaces, whitespace tokens sorted lexicographically and
//! rejoined) before a normalized Levenshtein similarity is taken. Sorting the
//! tokens is what makes word order irrelevant: "John Smith" and "Smith John"
//! normalize to the same string and score 100.
//!
//! Everything here is a pure function over its arguments. There is no cached
//! state, so concurrent callers need no synchronization.

/// Normalize a string for token-order-insensitive comparison: lowercase,
/// replace non-alphanumeric characters with spaces, sort the remaining
/// whitespace-delimited tokens and rejoin them with single spaces.
fn sort_tokens(s: &str) -> String {
    let lowered = s.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Scale a normalized Levenshtein similarity to an integer in [0, 100].
///
/// Two empty strings are identical and score 100.
fn scaled_ratio(a: &str, b: &str) -> u8 {
    let similarity = strsim::normalized_levenshtein(a, b);
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Compute the token-sort similarity of two strings as a score in [0, 100]
/// (higher is more similar).
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    scaled_ratio(&sort_tokens(a), &sort_tokens(b))
}

/// Rank candidates by token-sort similarity to `query`, best first.
///
/// Returns exactly `min(limit, candidate count)` entries. The sort is stable,
/// so candidates with equal scores keep their input order.
pub fn extract<'a, I>(query: &str, candidates: I, limit: usize) -> Vec<(&'a str, u8)>
where
    I: IntoIterator<Item = &'a str>,
{
    let sorted_query = sort_tokens(query);
    let mut scored: Vec<(&'a str, u8)> = candidates
        .into_iter()
        .map(|cand| (cand, scaled_ratio(&sorted_query, &sort_tokens(cand))))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(limit);
    scored
}

/// Find the single best candidate, or `None` for an empty candidate set.
/// The first candidate wins score ties.
pub fn best_match<'a, I>(query: &str, candidates: I) -> Option<(&'a str, u8)>
where
    I: IntoIterator<Item = &'a str>,
{
    let sorted_query = sort_tokens(query);
    let mut best: Option<(&'a str, u8)> = None;
    for cand in candidates {
        let s = scaled_ratio(&sorted_query, &sort_tokens(cand));
        match best {
            None => best = Some((cand, s)),
            Some((_, bs)) if s > bs => best = Some((cand, s)),
            _ => {}
        }
    }
    best
}
