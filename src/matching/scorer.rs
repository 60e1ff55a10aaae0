//! Similarity scoring strategies for team-pair strings.
//!
//! Bookmakers format the same fixture differently: "FC Porto vs SL Benfica"
//! on one site, "Benfica - Porto" on another. Scoring normalizes both sides
//! (lowercase, punctuation stripped, tokens sorted so team order is
//! irrelevant) and then compares the shorter string against every
//! equal-length window of the longer one, keeping the best normalized
//! Levenshtein similarity. Scores are integers in 0..=100.

use strsim::normalized_levenshtein;

/// Scoring strategy for fuzzy team-pair matching.
///
/// Implementations must be pure: the same inputs always yield the same
/// score. The aligner treats scores as a 0..=100 percentage.
pub trait SimilarityScorer: Send + Sync {
    /// Similarity of two team-pair strings, 0 (unrelated) to 100 (same).
    fn score(&self, a: &str, b: &str) -> u8;
}

/// Partial-ratio scorer: token-normalized, sliding-window Levenshtein.
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialRatioScorer;

impl SimilarityScorer for PartialRatioScorer {
    fn score(&self, a: &str, b: &str) -> u8 {
        let a = normalize(a);
        let b = normalize(b);

        if a.is_empty() || b.is_empty() {
            return 0;
        }
        if a == b {
            return 100;
        }

        let (shorter, longer) = if a.chars().count() <= b.chars().count() {
            (&a, &b)
        } else {
            (&b, &a)
        };

        (partial_ratio(shorter, longer) * 100.0).round() as u8
    }
}

/// Lowercase, strip punctuation, and sort tokens so that "Porto Benfica"
/// and "Benfica Porto" normalize identically.
fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut tokens: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Best normalized Levenshtein similarity between `shorter` and any
/// equal-length character window of `longer`.
fn partial_ratio(shorter: &str, longer: &str) -> f64 {
    let window_len = shorter.chars().count();
    let longer_chars: Vec<char> = longer.chars().collect();

    if window_len == 0 || window_len > longer_chars.len() {
        return 0.0;
    }

    let mut best = 0.0f64;
    for window in longer_chars.windows(window_len) {
        let candidate: String = window.iter().collect();
        best = best.max(normalized_levenshtein(shorter, &candidate));
        if best >= 1.0 {
            break;
        }
    }

    best
}
