//! Fuzzy team-name alignment across bookmaker feeds.

pub mod aligner;
pub mod scorer;

pub use aligner::{align_fixtures, best_match, MatchedPair};
pub use scorer::{PartialRatioScorer, SimilarityScorer};
