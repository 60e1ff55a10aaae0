//! Alignment of equivalent fixtures across two bookmaker feeds.

use tracing::{debug, trace};

use crate::matching::SimilarityScorer;
use crate::metrics;
use crate::odds::Fixture;

/// A fixture from bookmaker A paired with the fixture from bookmaker B
/// believed to represent the same real match.
#[derive(Debug, Clone)]
pub struct MatchedPair {
    /// Fixture from the first bookmaker.
    pub a: Fixture,
    /// Fixture from the second bookmaker.
    pub b: Fixture,
    /// Similarity score of the team-pair strings, 0..=100.
    pub score: u8,
}

/// Pick the highest-scoring candidate for `target`.
///
/// Returns the candidate index and its score, or `None` when `candidates`
/// is empty. Ties resolve to the earliest candidate.
pub fn best_match(
    target: &str,
    candidates: &[String],
    scorer: &dyn SimilarityScorer,
) -> Option<(usize, u8)> {
    candidates
        .iter()
        .enumerate()
        .map(|(idx, candidate)| (idx, scorer.score(target, candidate)))
        .max_by(|(idx_a, score_a), (idx_b, score_b)| {
            score_a.cmp(score_b).then(idx_b.cmp(idx_a))
        })
}

/// Pair each fixture from `fixtures_a` with its best match in `fixtures_b`.
///
/// A pairing is accepted only when its similarity score is strictly greater
/// than `threshold`; fixtures with no candidate above the threshold are
/// dropped, not paired. Either side being empty produces no pairs.
pub fn align_fixtures(
    fixtures_a: &[Fixture],
    fixtures_b: &[Fixture],
    scorer: &dyn SimilarityScorer,
    threshold: u8,
) -> Vec<MatchedPair> {
    let candidate_keys: Vec<String> = fixtures_b
        .iter()
        .map(|fixture| fixture.teams.match_key())
        .collect();

    let mut pairs = Vec::new();
    for fixture in fixtures_a {
        let target = fixture.teams.match_key();
        let Some((idx, score)) = best_match(&target, &candidate_keys, scorer) else {
            continue;
        };

        if score > threshold {
            debug!(
                a = %fixture.teams,
                b = %fixtures_b[idx].teams,
                score,
                "aligned fixtures"
            );
            metrics::inc_pairs_matched();
            pairs.push(MatchedPair {
                a: fixture.clone(),
                b: fixtures_b[idx].clone(),
                score,
            });
        } else {
            trace!(a = %fixture.teams, best_score = score, threshold, "no candidate above threshold");
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::PartialRatioScorer;
    use crate::odds::{Bookmaker, OddsTriple, TeamPair};

    fn fixture(bookmaker: &str, home: &str, away: &str) -> Fixture {
        Fixture::new(
            Bookmaker::new(bookmaker),
            TeamPair::new(home, away),
            OddsTriple::new(2.0, 3.0, 4.0).unwrap(),
        )
    }

    fn keys(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn best_match_picks_highest_scoring_candidate() {
        let candidates = keys(&["Benfica Porto", "Sporting Braga"]);
        let (idx, score) = best_match("Porto Benfica", &candidates, &PartialRatioScorer).unwrap();

        assert_eq!(idx, 0);
        assert!(score > 70);
    }

    #[test]
    fn best_match_returns_none_for_empty_candidates() {
        assert!(best_match("Porto Benfica", &[], &PartialRatioScorer).is_none());
    }

    #[test]
    fn align_accepts_reordered_team_names() {
        let a = vec![fixture("bwin", "Porto", "Benfica")];
        let b = vec![
            fixture("betclic", "Benfica", "Porto"),
            fixture("betclic", "Sporting", "Braga"),
        ];

        let pairs = align_fixtures(&a, &b, &PartialRatioScorer, 70);

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].b.teams, TeamPair::new("Benfica", "Porto"));
        assert!(pairs[0].score > 70);
    }

    #[test]
    fn align_drops_fixtures_below_threshold() {
        let a = vec![fixture("bwin", "Porto", "Benfica")];
        let b = vec![fixture("betclic", "Ajax", "PSV")];

        let pairs = align_fixtures(&a, &b, &PartialRatioScorer, 70);

        assert!(pairs.is_empty());
    }

    #[test]
    fn align_threshold_is_strictly_greater() {
        struct FixedScorer(u8);
        impl SimilarityScorer for FixedScorer {
            fn score(&self, _: &str, _: &str) -> u8 {
                self.0
            }
        }

        let a = vec![fixture("bwin", "Porto", "Benfica")];
        let b = vec![fixture("betclic", "Porto", "Benfica")];

        assert!(align_fixtures(&a, &b, &FixedScorer(70), 70).is_empty());
        assert_eq!(align_fixtures(&a, &b, &FixedScorer(71), 70).len(), 1);
    }

    #[test]
    fn align_with_empty_side_produces_no_pairs() {
        let a = vec![fixture("bwin", "Porto", "Benfica")];

        assert!(align_fixtures(&a, &[], &PartialRatioScorer, 70).is_empty());
        assert!(align_fixtures(&[], &a, &PartialRatioScorer, 70).is_empty());
    }
}
