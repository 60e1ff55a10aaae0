//! Implied-probability sums over single- and cross-bookmaker odds.
//!
//! All arithmetic is plain IEEE double precision with no rounding; the
//! opportunity threshold is strict `< 1.0` everywhere.

use strum::Display;

use crate::odds::{Leg, OddsTriple};

/// Which of the two compared bookmakers a leg's price was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Side {
    /// First bookmaker of the comparison.
    A,
    /// Second bookmaker of the comparison.
    B,
}

/// One of the 8 leg-to-bookmaker assignments and its implied-probability sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Combination {
    /// Source side for each leg, in [`Leg::ALL`] order (home, draw, away).
    pub sources: [Side; 3],
    /// Sum of 1/odds over the three legs.
    pub implied_sum: f64,
}

impl Combination {
    /// An opportunity exists iff the implied sum is strictly below 1.0.
    pub fn is_opportunity(&self) -> bool {
        self.implied_sum < 1.0
    }

    /// Source side for the given leg.
    pub fn source(&self, leg: Leg) -> Side {
        self.sources[leg.index()]
    }
}

/// Sum of implied probabilities (1/odds) over the three outcomes.
pub fn implied_sum(odds: &OddsTriple) -> f64 {
    odds.home.recip() + odds.draw.recip() + odds.away.recip()
}

/// Whether a single bookmaker's own quotes already form an arbitrage.
pub fn is_arbitrage(odds: &OddsTriple) -> bool {
    implied_sum(odds) < 1.0
}

/// Evaluate every assignment of the three legs to either bookmaker.
///
/// Enumerates all 2³ = 8 assignments as a bitmask (bit i set ⇒ leg i priced
/// by side B), so index 0 is the pure side-A combination and index 7 the
/// pure side-B one. Always returns exactly 8 results.
pub fn cross_book_combinations(odds_a: &OddsTriple, odds_b: &OddsTriple) -> [Combination; 8] {
    std::array::from_fn(|mask| {
        let sources: [Side; 3] = std::array::from_fn(|leg_idx| {
            if mask & (1 << leg_idx) == 0 {
                Side::A
            } else {
                Side::B
            }
        });

        let implied_sum = Leg::ALL
            .iter()
            .enumerate()
            .map(|(leg_idx, leg)| {
                let price = match sources[leg_idx] {
                    Side::A => odds_a.price(*leg),
                    Side::B => odds_b.price(*leg),
                };
                price.recip()
            })
            .sum();

        Combination {
            sources,
            implied_sum,
        }
    })
}
