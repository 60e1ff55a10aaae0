//! Odds triples, fixtures, and raw-odds normalization.

pub mod normalize;
pub mod types;

pub use normalize::normalize_odds;
pub use types::{Bookmaker, Fixture, Leg, OddsTriple, TeamPair};
