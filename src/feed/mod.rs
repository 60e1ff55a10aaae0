//! Feed-provider collaborators.
//!
//! A feed provider is whatever supplies `(team pair, three raw odds
//! strings)` records for a match day — in production a per-bookmaker
//! scraper, here a JSON file or a mock. The scanner does not care how the
//! list was obtained: a failed feed degrades to zero fixtures, and
//! individual records with blank team names or malformed odds are skipped.

pub mod file;
pub mod mock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::TargetDay;
use crate::error::FeedError;
use crate::metrics;
use crate::odds::{normalize_odds, Bookmaker, Fixture, TeamPair};

pub use file::FileFeedProvider;
pub use mock::{MockFeedConfig, MockFeedProvider};

/// One raw record from a bookmaker feed, prior to normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFixture {
    /// Home team name as scraped.
    pub home: String,
    /// Away team name as scraped.
    pub away: String,
    /// The three moneyline odds as raw locale-formatted strings.
    pub odds: Vec<String>,
}

/// A source of raw fixtures for one bookmaker.
#[async_trait]
pub trait FeedProvider: Send + Sync {
    /// The bookmaker this provider reports for.
    fn bookmaker(&self) -> Bookmaker;

    /// Fetch the raw fixture list for the given match day.
    async fn fetch(&self, day: TargetDay) -> Result<Vec<RawFixture>, FeedError>;
}

/// Fetch and normalize one provider's feed into fixtures.
///
/// A provider error yields an empty list (logged and counted), never a
/// failure: pairings involving this bookmaker will simply produce no
/// results this cycle. Records with blank team names or odds that fail
/// normalization are dropped individually.
pub async fn collect_fixtures(provider: &dyn FeedProvider, day: TargetDay) -> Vec<Fixture> {
    let bookmaker = provider.bookmaker();

    let raw = match provider.fetch(day).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(%bookmaker, %day, error = %e, "feed unavailable, continuing with zero fixtures");
            metrics::inc_feeds_failed();
            return Vec::new();
        }
    };

    let mut fixtures = Vec::with_capacity(raw.len());
    for record in raw {
        if record.home.trim().is_empty() || record.away.trim().is_empty() {
            debug!(%bookmaker, "skipping record with blank team name");
            continue;
        }

        match normalize_odds(&record.odds) {
            Ok(odds) => fixtures.push(Fixture::new(
                bookmaker.clone(),
                TeamPair::new(record.home, record.away),
                odds,
            )),
            Err(e) => {
                debug!(%bookmaker, error = %e, "skipping record with malformed odds");
            }
        }
    }

    metrics::inc_fixtures_collected(fixtures.len() as u64);
    debug!(%bookmaker, %day, fixtures = fixtures.len(), "collected feed");
    fixtures
}
