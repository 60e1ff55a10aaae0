//! File-backed feed provider.
//!
//! Reads fixtures from a JSON file keyed by match day:
//!
//! ```json
//! {
//!   "today": [
//!     { "home": "Benfica", "away": "Porto", "odds": ["2,10", "3,40", "4,00"] }
//!   ],
//!   "tomorrow": []
//! }
//! ```
//!
//! The file is re-read on every fetch, so an external scraper can rewrite
//! it between scan cycles.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::TargetDay;
use crate::error::FeedError;
use crate::feed::{FeedProvider, RawFixture};
use crate::odds::Bookmaker;

/// On-disk feed format: raw fixtures per match day.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedFile {
    /// Fixtures scheduled for today.
    #[serde(default)]
    pub today: Vec<RawFixture>,
    /// Fixtures scheduled for tomorrow.
    #[serde(default)]
    pub tomorrow: Vec<RawFixture>,
}

/// Feed provider backed by a JSON fixture file.
#[derive(Debug, Clone)]
pub struct FileFeedProvider {
    bookmaker: Bookmaker,
    path: PathBuf,
}

impl FileFeedProvider {
    /// Create a provider reading fixtures for `bookmaker` from `path`.
    pub fn new(bookmaker: Bookmaker, path: impl Into<PathBuf>) -> Self {
        Self {
            bookmaker,
            path: path.into(),
        }
    }
}

#[async_trait]
impl FeedProvider for FileFeedProvider {
    fn bookmaker(&self) -> Bookmaker {
        self.bookmaker.clone()
    }

    async fn fetch(&self, day: TargetDay) -> Result<Vec<RawFixture>, FeedError> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        let feed: FeedFile = serde_json::from_str(&contents)?;

        Ok(match day {
            TargetDay::Today => feed.today,
            TargetDay::Tomorrow => feed.tomorrow,
        })
    }
}
