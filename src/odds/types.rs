//! Core types for bookmaker fixtures and three-way moneyline odds.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::OddsError;

/// One of the three outcome bets composing a football moneyline market.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Leg {
    /// Home win.
    Home,
    /// Draw.
    Draw,
    /// Away win.
    Away,
}

impl Leg {
    /// All legs in market order.
    pub const ALL: [Leg; 3] = [Leg::Home, Leg::Draw, Leg::Away];

    /// Position of this leg within [`Leg::ALL`].
    pub fn index(self) -> usize {
        match self {
            Leg::Home => 0,
            Leg::Draw => 1,
            Leg::Away => 2,
        }
    }
}

/// Identifier for a source bookmaker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bookmaker(String);

impl Bookmaker {
    /// Create a bookmaker identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The bookmaker's display name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Bookmaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Bookmaker {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// The two team names of a fixture as reported by one bookmaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPair {
    /// Home team name.
    pub home: String,
    /// Away team name.
    pub away: String,
}

impl TeamPair {
    /// Create a team pair.
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
        }
    }

    /// Concatenated form used for fuzzy matching across bookmakers.
    pub fn match_key(&self) -> String {
        format!("{} {}", self.home, self.away)
    }
}

impl fmt::Display for TeamPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}

/// Decimal payout multipliers for the three outcomes of one fixture.
///
/// Invariant: every value is finite and strictly positive. Construct via
/// [`OddsTriple::new`] or [`normalize_odds`](crate::odds::normalize_odds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OddsTriple {
    /// Home win odds.
    pub home: f64,
    /// Draw odds.
    pub draw: f64,
    /// Away win odds.
    pub away: f64,
}

impl OddsTriple {
    /// Create an odds triple, rejecting zero, negative, or non-finite values.
    pub fn new(home: f64, draw: f64, away: f64) -> Result<Self, OddsError> {
        for value in [home, draw, away] {
            if !value.is_finite() || value <= 0.0 {
                return Err(OddsError::NonPositive { value });
            }
        }

        Ok(Self { home, draw, away })
    }

    /// Quoted price for the given leg.
    pub fn price(&self, leg: Leg) -> f64 {
        match leg {
            Leg::Home => self.home,
            Leg::Draw => self.draw,
            Leg::Away => self.away,
        }
    }
}

/// A single real-world match as reported by one bookmaker.
///
/// Fixtures are created once per scrape cycle and discarded at the end of
/// the cycle; nothing persists across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    /// Bookmaker that quoted the odds.
    pub bookmaker: Bookmaker,
    /// Teams of the match.
    pub teams: TeamPair,
    /// Quoted home/draw/away odds.
    pub odds: OddsTriple,
}

impl Fixture {
    /// Create a fixture.
    pub fn new(bookmaker: Bookmaker, teams: TeamPair, odds: OddsTriple) -> Self {
        Self {
            bookmaker,
            teams,
            odds,
        }
    }
}
