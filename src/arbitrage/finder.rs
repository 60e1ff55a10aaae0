//! Cross-bookmaker surebet detection over two fixture feeds.

use std::fmt;

use tracing::info;

use crate::arbitrage::evaluator::{cross_book_combinations, Combination, Side};
use crate::matching::{align_fixtures, MatchedPair, SimilarityScorer};
use crate::metrics;
use crate::odds::{Bookmaker, Fixture, Leg};

/// One outcome bet of a detected opportunity: which leg, at which
/// bookmaker, at what quoted price.
#[derive(Debug, Clone, PartialEq)]
pub struct BetLeg {
    /// The outcome being backed.
    pub leg: Leg,
    /// Bookmaker quoting the price.
    pub bookmaker: Bookmaker,
    /// Quoted decimal odds.
    pub price: f64,
}

/// A detected cross-bookmaker arbitrage opportunity.
#[derive(Debug, Clone)]
pub struct Surebet {
    /// The aligned fixture pair the opportunity was found on.
    pub pair: MatchedPair,
    /// The winning leg assignment and its implied sum.
    pub combination: Combination,
}

impl Surebet {
    /// The three bet legs with their source bookmaker and quoted price.
    pub fn legs(&self) -> [BetLeg; 3] {
        Leg::ALL.map(|leg| {
            let fixture = match self.combination.source(leg) {
                Side::A => &self.pair.a,
                Side::B => &self.pair.b,
            };
            BetLeg {
                leg,
                bookmaker: fixture.bookmaker.clone(),
                price: fixture.odds.price(leg),
            }
        })
    }

    /// Human-readable message suitable for the notifier.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Surebet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) / {} ({}):",
            self.pair.a.teams, self.pair.a.bookmaker, self.pair.b.teams, self.pair.b.bookmaker
        )?;
        for bet in self.legs() {
            write!(f, " {} {:.2} @ {};", bet.leg, bet.price, bet.bookmaker)?;
        }
        write!(f, " implied sum {:.4}", self.combination.implied_sum)
    }
}

/// Find every cross-bookmaker arbitrage between two fixture feeds.
///
/// Aligns fixtures by fuzzy team-name similarity, evaluates all 8
/// leg-to-bookmaker assignments per matched pair, and keeps only those with
/// an implied sum strictly below 1.0. Pure given its inputs: identical
/// feeds always produce identical results.
pub fn find_surebets(
    fixtures_a: &[Fixture],
    fixtures_b: &[Fixture],
    scorer: &dyn SimilarityScorer,
    threshold: u8,
) -> Vec<Surebet> {
    let _timer = metrics::timer_detection();
    let pairs = align_fixtures(fixtures_a, fixtures_b, scorer, threshold);

    let mut surebets = Vec::new();
    for pair in pairs {
        for combination in cross_book_combinations(&pair.a.odds, &pair.b.odds) {
            if combination.is_opportunity() {
                metrics::inc_opportunities_detected();
                info!(
                    fixture = %pair.a.teams,
                    implied_sum = combination.implied_sum,
                    score = pair.score,
                    "surebet detected"
                );
                surebets.push(Surebet {
                    pair: pair.clone(),
                    combination,
                });
            }
        }
    }

    surebets
}
